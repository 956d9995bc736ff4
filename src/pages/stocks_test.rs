use super::*;

#[test]
fn normalize_query_trims() {
    assert_eq!(normalize_query("  apple "), Some("apple".to_owned()));
}

#[test]
fn normalize_query_rejects_blank() {
    assert_eq!(normalize_query(""), None);
    assert_eq!(normalize_query("   "), None);
}
