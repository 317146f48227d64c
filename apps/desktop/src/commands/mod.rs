//! # Commands Module
//!
//! All commands exposed to the frontend, one per button in the UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Products table, add/update/delete forms
//! └── sale.rs     ◄─── Sell dialog, sales table
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Command Flow                                  │
//! │                                                                     │
//! │  Frontend                                                           │
//! │  ────────                                                           │
//! │  const row = await invoke('add_product', {                          │
//! │    name: 'Widget', price: '9.99', quantity: '10'                    │
//! │  });                                                                │
//! │         │                                                           │
//! │         │ (IPC via WebView)                                         │
//! │         ▼                                                           │
//! │  Rust Backend                                                       │
//! │  ────────────                                                       │
//! │  async fn add_product(db, name, price, quantity)                    │
//! │      -> Result<ProductRow, ApiError>                                │
//! │         │                                                           │
//! │         │ (JSON serialization)                                      │
//! │         ▼                                                           │
//! │  Frontend receives: ProductRow, then re-invokes list_products       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Price and quantity cross the IPC boundary as the form's free-text
//! strings; parsing them into typed values (and rejecting garbage with
//! a dialog-ready error) happens here, on the Rust side.
//!
//! The functions in these modules are plain async Rust; the
//! `#[tauri::command]` wrappers live in `app.rs` behind the `tauri`
//! feature so this layer builds and tests headless.

pub mod product;
pub mod sale;
