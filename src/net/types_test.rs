use super::*;

// =============================================================
// Error bodies
// =============================================================

#[test]
fn error_message_reads_bare_json_string() {
    assert_eq!(error_message("\"invalid credentials\""), Some("invalid credentials".to_owned()));
}

#[test]
fn error_message_reads_error_field() {
    assert_eq!(
        error_message(r#"{"error":"Stock symbol is required"}"#),
        Some("Stock symbol is required".to_owned())
    );
}

#[test]
fn error_message_falls_back_to_plain_text() {
    assert_eq!(error_message("Bad Gateway\n"), Some("Bad Gateway".to_owned()));
    assert_eq!(error_message("   "), None);
    assert_eq!(error_message("42"), None);
}

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, "\"Invalid token\"");
    assert_eq!(err, ApiError::Unauthorized("Invalid token".to_owned()));
    assert!(err.is_unauthorized());
    assert!(!err.retryable());
}

#[test]
fn from_status_keeps_status_for_other_failures() {
    let err = ApiError::from_status(503, "");
    assert_eq!(err, ApiError::Rejected { status: 503, message: "HTTP 503".to_owned() });
    assert!(err.retryable());

    let err = ApiError::from_status(400, r#"{"error":"Invalid request format"}"#);
    assert!(!err.retryable());
    assert!(!err.is_unauthorized());
}

#[test]
fn with_retry_hint_only_for_retryable_errors() {
    let busy = ApiError::Rejected { status: 429, message: "slow down".to_owned() };
    assert_eq!(with_retry_hint("slow down".to_owned(), &busy), "slow down. Try again.");
    assert_eq!(with_retry_hint("Server busy.".to_owned(), &busy), "Server busy. Try again.");

    let bad = ApiError::Rejected { status: 400, message: "bad".to_owned() };
    assert_eq!(with_retry_hint("bad".to_owned(), &bad), "bad");
}

#[test]
fn missing_token_counts_as_unauthorized() {
    assert!(ApiError::MissingToken.is_unauthorized());
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn credentials_serialize_as_email_password() {
    let body = serde_json::to_value(Credentials::new("a@b.com", "pw")).unwrap();
    assert_eq!(body, serde_json::json!({"email": "a@b.com", "password": "pw"}));
}

#[test]
fn signup_outcome_accepts_bare_string() {
    let outcome = SignupOutcome::from_body("\"User created\"").unwrap();
    assert_eq!(outcome.message, "User created");
}

#[test]
fn signup_outcome_accepts_result_field() {
    let outcome = SignupOutcome::from_body(r#"{"result":"ok"}"#).unwrap();
    assert_eq!(outcome.message, "ok");
}

#[test]
fn signup_outcome_rejects_unexpected_shape() {
    assert!(matches!(SignupOutcome::from_body("[]"), Err(ApiError::Decode(_))));
    assert!(matches!(SignupOutcome::from_body("not json"), Err(ApiError::Decode(_))));
}

#[test]
fn me_accepts_user_alias() {
    let me: Me = serde_json::from_value(serde_json::json!({"user": "a@b.com"})).unwrap();
    assert_eq!(me.email, "a@b.com");
}

// =============================================================
// Stock payloads
// =============================================================

#[test]
fn stock_details_decode_numeric_fields() {
    let details: StockDetails = serde_json::from_value(serde_json::json!({
        "symbol": "AAPL",
        "name": "Apple Inc",
        "exchange": "NASDAQ",
        "currency": "USD",
        "price": 189.5,
        "change": -1.25,
        "change_percent": -0.66,
        "high": 191.0,
        "low": 188.2,
        "volume": 51234000,
        "last_updated": "2024-03-01T20:00:00Z"
    }))
    .unwrap();
    assert_eq!(details.symbol, "AAPL");
    assert!((details.price - 189.5).abs() < f64::EPSILON);
    assert!(!details.is_up());
    assert_eq!(details.last_updated.as_deref(), Some("2024-03-01T20:00:00Z"));
}

#[test]
fn search_result_maps_type_field() {
    let hits: Vec<StockSearchResult> = serde_json::from_value(serde_json::json!([
        {"symbol": "MSFT", "name": "Microsoft Corp", "exchange": "NASDAQ", "currency": "USD", "type": "Common Stock"}
    ]))
    .unwrap();
    assert_eq!(hits[0].kind, "Common Stock");
    assert!(hits[0].description.is_none());
}

#[test]
fn portfolio_stock_decodes_pascal_case_rows() {
    let rows: Vec<PortfolioStock> = serde_json::from_value(serde_json::json!([{
        "StockID": "s-1",
        "UserID": "a@b.com",
        "Symbol": "AAPL",
        "Name": "Apple Inc",
        "Exchange": "NASDAQ",
        "Currency": "USD",
        "Price": 110.0,
        "LastPrice": 100.0,
        "AddedAt": "2024-03-01T20:00:00Z",
        "LastUpdated": "2024-03-02T20:00:00Z",
        "Triggers": null
    }]))
    .unwrap();
    let row = &rows[0];
    assert_eq!(row.stock_id, "s-1");
    assert_eq!(row.symbol, "AAPL");
    let change = row.change_percent().unwrap();
    assert!((change - 10.0).abs() < 1e-9);
}

#[test]
fn portfolio_change_percent_needs_baseline() {
    let row = PortfolioStock {
        stock_id: "s-2".to_owned(),
        symbol: "TSLA".to_owned(),
        name: String::new(),
        exchange: String::new(),
        currency: String::new(),
        price: 200.0,
        last_price: 0.0,
        added_at: None,
        last_updated: None,
    };
    assert!(row.change_percent().is_none());
}
