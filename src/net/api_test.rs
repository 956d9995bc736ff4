use super::*;

#[test]
fn normalize_symbol_trims_and_uppercases() {
    assert_eq!(normalize_symbol("  aapl "), Some("AAPL".to_owned()));
    assert_eq!(normalize_symbol("brk.b"), Some("BRK.B".to_owned()));
    assert_eq!(normalize_symbol("   "), None);
}

#[test]
fn require_token_rejects_empty() {
    assert_eq!(require_token(""), Err(ApiError::MissingToken));
    assert_eq!(require_token("abc123"), Ok("abc123"));
}

#[test]
fn require_symbol_reports_backend_message() {
    assert_eq!(
        require_symbol(""),
        Err(ApiError::Rejected { status: 400, message: "Stock symbol is required".to_owned() })
    );
}

#[test]
fn remove_stock_path_formats_expected_path() {
    assert_eq!(remove_stock_path("s-42"), "stock/s-42");
}

#[test]
fn http_api_builds_from_default_config() {
    let api = HttpApi::new(&ClientConfig::default()).unwrap();
    assert_eq!(api.config().endpoint("login"), "http://localhost:8080/login");
}

#[tokio::test]
async fn stock_calls_without_token_fail_before_sending() {
    let api = HttpApi::new(&ClientConfig::default()).unwrap();
    assert_eq!(api.user_stocks("").await, Err(ApiError::MissingToken));
    assert_eq!(api.me("").await, Err(ApiError::MissingToken));
    assert_eq!(api.remove_stock("", "s-1").await, Err(ApiError::MissingToken));
}

#[tokio::test]
async fn details_with_blank_symbol_fail_before_sending() {
    let api = HttpApi::new(&ClientConfig::default()).unwrap();
    let err = api.stock_details("abc123", "  ").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
}
