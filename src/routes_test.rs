use super::*;

#[test]
fn resolve_static_paths() {
    assert_eq!(resolve("/").route.page, Page::Home);
    assert_eq!(resolve("/login").route.page, Page::Login);
    assert_eq!(resolve("/signup").route.page, Page::Signup);
    assert_eq!(resolve("/dashboard").route.page, Page::Dashboard);
    assert_eq!(resolve("/stocks").route.page, Page::Stocks);
}

#[test]
fn resolve_captures_symbol() {
    let m = resolve("/stocks/AAPL");
    assert_eq!(m.route.page, Page::StockDetail);
    assert_eq!(m.params.get("symbol"), Some("AAPL"));
    assert_eq!(m.params.get("other"), None);
}

#[test]
fn resolve_ignores_trailing_slash_and_query() {
    assert_eq!(resolve("/stocks/").route.page, Page::Stocks);
    assert_eq!(resolve("/dashboard?tab=1").route.page, Page::Dashboard);
    let m = resolve("/stocks/MSFT#chart");
    assert_eq!(m.params.get("symbol"), Some("MSFT"));
}

#[test]
fn resolve_unknown_falls_back_to_not_found() {
    let m = resolve("/stocks/AAPL/history");
    assert_eq!(m.route, &FALLBACK);
    assert_eq!(m.route.page, Page::NotFound);
    assert!(m.params.is_empty());
    assert_eq!(resolve("/nope").route.page, Page::NotFound);
}

#[test]
fn guarded_flags_match_table() {
    let guarded: Vec<Page> = ROUTES.iter().filter(|r| r.guarded).map(|r| r.page).collect();
    assert_eq!(guarded, vec![Page::Dashboard, Page::Stocks, Page::StockDetail]);
    assert!(!FALLBACK.guarded);
}

#[test]
fn login_route_is_never_guarded() {
    let login = resolve(LOGIN_PATH);
    assert_eq!(login.route.page, Page::Login);
    assert!(!login.route.guarded);
}

#[test]
fn stock_detail_path_round_trips_through_resolve() {
    let path = stock_detail_path("TSLA");
    assert_eq!(path, "/stocks/TSLA");
    assert_eq!(resolve(&path).params.get("symbol"), Some("TSLA"));
}
