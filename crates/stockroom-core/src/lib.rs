//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains all business
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   Frontend (WebView)                        │   │
//! │  │   Products table ──► Add/Delete/Sell forms ──► Sales table  │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ Tauri IPC                           │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                    Desktop Commands                         │   │
//! │  │   list_products, add_product, sell_product, list_sales      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────────────────┐ │   │
//! │  │   │   types   │  │   money   │  │      validation        │ │   │
//! │  │   │  Product  │  │   Money   │  │  name / price / qty    │ │   │
//! │  │   │   Sale    │  │  parsing  │  │        rules           │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────────────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                  stockroom-db (Database Layer)              │   │
//! │  │            SQLite queries, migrations, repositories         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, SaleRecord)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Form input parsing and business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Money` instead of
// `use stockroom_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name
///
/// ## Business Reason
/// Keeps the product table readable and bounds what the form accepts.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum quantity accepted by the sell dialog in one go
///
/// ## Business Reason
/// Prevents accidental over-selling (e.g., typing 1000 instead of 10).
/// Stock on hand is checked separately against the stored quantity.
pub const MAX_SALE_QUANTITY: i64 = 999;
