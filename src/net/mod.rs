//! Networking modules for the backend JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema and
//! the error taxonomy every caller matches on.

pub mod api;
pub mod types;
