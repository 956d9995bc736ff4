use leptos::prelude::Owner;

use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  a@b.com ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_credentials_requires_at_sign() {
    assert_eq!(validate_credentials("alice", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    assert_eq!(validate_credentials("a@b.com", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn liveness_ends_once() {
    let liveness = ViewLiveness::detached();
    let clone = liveness.clone();
    assert!(liveness.is_alive());
    clone.end();
    assert!(!liveness.is_alive());
}

#[test]
fn liveness_ends_when_owner_is_cleaned_up() {
    let owner = Owner::new();
    let liveness = owner.with(ViewLiveness::install);
    assert!(liveness.is_alive());

    owner.cleanup();

    assert!(!liveness.is_alive());
}

#[test]
fn stock_error_message_for_expired_session() {
    assert_eq!(
        stock_error_message(&ApiError::Unauthorized("Invalid token".to_owned())),
        "Your session has expired. Please log in again."
    );
    assert_eq!(
        stock_error_message(&ApiError::Rejected { status: 400, message: "Search query is required".to_owned() }),
        "Search query is required"
    );
}

#[test]
fn stock_error_message_suggests_retry_only_when_transient() {
    assert_eq!(
        stock_error_message(&ApiError::Network("offline".to_owned())),
        "Could not reach the server. Try again."
    );
    assert_eq!(
        stock_error_message(&ApiError::Rejected { status: 500, message: "Failed to fetch stock".to_owned() }),
        "Failed to fetch stock. Try again."
    );
    assert_eq!(stock_error_message(&ApiError::Decode("eof".to_owned())), "response decode failed: eof");
}
