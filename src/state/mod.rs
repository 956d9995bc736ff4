//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only state shared across pages; page-local form and
//! list state lives in the pages themselves.

pub mod session;
