//! Core client logic for depot.
//!
//! Configuration, the local key/value store, the auth session, and the
//! authenticated API client. Everything UI-agnostic lives here; the TUI and
//! CLI crates are consumers.

pub mod api;
pub mod auth;
pub mod config;
pub mod format;
pub mod logging;
pub mod storage;
pub mod validate;
