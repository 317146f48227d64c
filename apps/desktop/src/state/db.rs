//! # Database State
//!
//! Wraps the `Database` connection for use in desktop commands.
//!
//! ## Thread Safety
//! The `Database` struct from `stockroom-db` contains a `SqlitePool`
//! which is inherently thread-safe; no explicit locking is needed even
//! though the UI only ever issues one command at a time.

use stockroom_db::Database;

/// Wrapper around `Database` for state management.
///
/// ## Why a Wrapper?
/// The state container requires types to implement `Send + Sync`.
/// This wrapper makes the intent explicit and provides a clean API
/// for accessing the database in commands.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
