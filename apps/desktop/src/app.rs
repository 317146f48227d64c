//! # Tauri Application Setup
//!
//! Wires the command layer to the Tauri runtime: window, state
//! registration, and the `#[tauri::command]` wrappers around the plain
//! functions in [`commands`](crate::commands).
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                           │
//! │                                                                     │
//! │  1. Initialize Logging ───────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                            │
//! │                                                                     │
//! │  2. Determine Database Path ──────────────────────────────────────► │
//! │     • platform app-data directory, STOCKROOM_DB_PATH override       │
//! │                                                                     │
//! │  3. Connect to Database ──────────────────────────────────────────► │
//! │     • SQLite with WAL mode                                          │
//! │     • Run pending migrations                                        │
//! │                                                                     │
//! │  4. Register State & Commands ────────────────────────────────────► │
//! │                                                                     │
//! │  5. Launch Window ────────────────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::{Manager, State};
use tracing::info;

use crate::commands;
use crate::error::ApiError;
use crate::state::DbState;
use stockroom_db::{Database, DbConfig};

// =============================================================================
// Command Wrappers
// =============================================================================
// Thin IPC shims: extract the managed Database, delegate to the plain
// async functions in commands/.

#[tauri::command]
async fn list_products(
    db: State<'_, DbState>,
) -> Result<Vec<commands::product::ProductRow>, ApiError> {
    commands::product::list_products(db.inner().inner()).await
}

#[tauri::command]
async fn add_product(
    db: State<'_, DbState>,
    name: String,
    price: String,
    quantity: String,
) -> Result<commands::product::ProductRow, ApiError> {
    commands::product::add_product(db.inner().inner(), name, price, quantity).await
}

#[tauri::command]
async fn update_product(
    db: State<'_, DbState>,
    id: i64,
    name: String,
    price: String,
    quantity: String,
) -> Result<(), ApiError> {
    commands::product::update_product(db.inner().inner(), id, name, price, quantity).await
}

#[tauri::command]
async fn delete_product(db: State<'_, DbState>, id: i64) -> Result<(), ApiError> {
    commands::product::delete_product(db.inner().inner(), id).await
}

#[tauri::command]
async fn sell_product(
    db: State<'_, DbState>,
    product_id: i64,
    quantity: String,
) -> Result<commands::sale::SellReceipt, ApiError> {
    commands::sale::sell_product(db.inner().inner(), product_id, quantity).await
}

#[tauri::command]
async fn list_sales(db: State<'_, DbState>) -> Result<Vec<commands::sale::SaleRow>, ApiError> {
    commands::sale::list_sales(db.inner().inner()).await
}

// =============================================================================
// Application Entry
// =============================================================================

/// Runs the Tauri application.
pub fn run() {
    crate::init_tracing();

    info!("Starting Stockroom Desktop Application");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let db_path = crate::default_database_path()?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                let config = DbConfig::new(db_path);
                Database::new(config).await
            })?;

            info!("Database connected and migrations applied");

            app.manage(DbState::new(db));

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Product commands
            list_products,
            add_product,
            update_product,
            delete_product,
            // Sale commands
            sell_product,
            list_sales,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
