//! Shared helpers with no UI of their own.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` gates guarded routes on the session. `storage` persists the
//! session token across reloads.

pub mod format;
pub mod guard;
pub mod storage;
