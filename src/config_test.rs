use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.token_key, "token");
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_lookup_parses_overrides_and_trims_slash() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("STOCKMARKET_API_URL", "https://stocks.example.test/api/"),
        ("STOCKMARKET_TOKEN_KEY", "session_token"),
        ("STOCKMARKET_REQUEST_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://stocks.example.test/api");
    assert_eq!(cfg.token_key, "session_token");
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn from_lookup_bad_timeout_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("STOCKMARKET_REQUEST_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    let cfg = ClientConfig::from_lookup(lookup_from(&[("STOCKMARKET_REQUEST_TIMEOUT_SECS", "0")])).unwrap();
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_lookup_rejects_blank_base_url() {
    let err = ClientConfig::from_lookup(lookup_from(&[("STOCKMARKET_API_URL", "  / ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "STOCKMARKET_API_URL", .. }));
}

#[test]
fn from_lookup_rejects_url_without_scheme() {
    let err = ClientConfig::from_lookup(lookup_from(&[("STOCKMARKET_API_URL", "localhost:8080")])).unwrap_err();
    assert!(err.to_string().contains("expected an http(s) URL"));
}

#[test]
fn from_lookup_rejects_blank_token_key() {
    let err = ClientConfig::from_lookup(lookup_from(&[("STOCKMARKET_TOKEN_KEY", "   ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "STOCKMARKET_TOKEN_KEY", .. }));
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/login"), "http://localhost:8080/login");
    assert_eq!(cfg.endpoint("stock/list"), "http://localhost:8080/stock/list");
}
