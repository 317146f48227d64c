//! # State Module
//!
//! Manages application state for the desktop app.
//!
//! Stockroom needs exactly one piece of long-lived state: the database
//! handle. It is registered once at startup and injected into every
//! command. The table widgets themselves live in the frontend and are
//! rebuilt from a fresh query after every mutating action, so nothing
//! else is cached on the Rust side.

mod db;

pub use db::DbState;
