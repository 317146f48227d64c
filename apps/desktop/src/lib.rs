//! # Stockroom Desktop Library
//!
//! Core library for the Stockroom desktop application.
//!
//! ## Module Organization
//! ```text
//! stockroom_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup helpers)
//! ├── app.rs          ◄─── Tauri setup & run (behind the `tauri` feature)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── db.rs       ◄─── Database state wrapper
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product table / form commands
//! │   └── sale.rs     ◄─── Sell dialog and sales table commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## UI Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Stockroom Window                                                   │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Products table (id | name | price | quantity)                │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │  [Add product] [Delete product] [Sell product] [View sales]         │
//! │                                                                     │
//! │  Every button maps to exactly one command below; after a mutating   │
//! │  command the frontend re-invokes list_products (full refresh, no    │
//! │  incremental diffing). Every command error surfaces as one          │
//! │  blocking dialog.                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The command layer is plain async Rust so it compiles and tests
//! without the Tauri runtime; `app.rs` adds the `#[tauri::command]`
//! wrappers and the window when the `tauri` feature is on.

pub mod commands;
pub mod error;
pub mod state;

#[cfg(feature = "tauri")]
mod app;
#[cfg(feature = "tauri")]
pub use app::run;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.stockroom.app/stockroom.db`
/// - **Windows**: `%APPDATA%\stockroom\app\stockroom.db`
/// - **Linux**: `~/.local/share/stockroom/stockroom.db`
///
/// ## Development Override
/// Set `STOCKROOM_DB_PATH` environment variable to use a custom path.
pub fn default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("STOCKROOM_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "stockroom", "app")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("stockroom.db"))
}
