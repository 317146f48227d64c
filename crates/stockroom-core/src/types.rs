//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │      Sale       │   │   SaleRecord    │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (rowid)     │   │  id (rowid)     │   │  Sale fields    │    │
//! │  │  name           │   │  product_id     │   │  + product_name │    │
//! │  │  price_cents    │   │  sold_quantity  │   │  (listing join) │    │
//! │  │  quantity       │   │  sale_date      │   │                 │    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are system-assigned by the database (SQLite rowids) and
//! immutable for the lifetime of the row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A stocked item: name, unit price, and remaining quantity on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier, assigned by the database on insert.
    pub id: i64,

    /// Display name shown in the products table.
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Quantity on hand. Never negative; the sell operation checks
    /// sufficiency before decrementing.
    pub quantity: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The quantity-sufficiency check: can this product cover a sale of
    /// `requested` units from the stock on hand?
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Product;
    ///
    /// let widget = Product { id: 1, name: "Widget".into(), price_cents: 999, quantity: 10 };
    /// assert!(widget.can_cover(10));
    /// assert!(!widget.can_cover(11));
    /// ```
    #[inline]
    pub fn can_cover(&self, requested: i64) -> bool {
        self.quantity >= requested
    }
}

// =============================================================================
// Sale
// =============================================================================

/// One entry in the sales log: a quantity removed from a product's
/// stock at a point in time.
///
/// Sales are created only by the sell operation and are immutable
/// afterwards; they are removed only transitively when their product
/// is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Sale {
    /// Unique identifier, assigned by the database on insert.
    pub id: i64,

    /// The product sold. Must reference an existing product at creation
    /// time.
    pub product_id: i64,

    /// Quantity sold. Always positive.
    pub sold_quantity: i64,

    /// When the sale was recorded. Stamped at insert time.
    #[ts(as = "String")]
    pub sale_date: DateTime<Utc>,
}

// =============================================================================
// Sale Record
// =============================================================================

/// A sale joined with its product's name, the shape the sales listing
/// returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct SaleRecord {
    pub id: i64,
    pub product_id: i64,
    /// Name of the product at listing time (live join, not a snapshot).
    pub product_name: String,
    pub sold_quantity: i64,
    #[ts(as = "String")]
    pub sale_date: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: i64) -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            price_cents: 999,
            quantity,
        }
    }

    #[test]
    fn test_can_cover_boundary() {
        let p = widget(10);
        assert!(p.can_cover(0));
        assert!(p.can_cover(9));
        assert!(p.can_cover(10));
        assert!(!p.can_cover(11));
    }

    #[test]
    fn test_can_cover_empty_stock() {
        let p = widget(0);
        assert!(p.can_cover(0));
        assert!(!p.can_cover(1));
    }

    #[test]
    fn test_price_helper() {
        let p = widget(10);
        assert_eq!(p.price(), Money::from_cents(999));
        assert_eq!(p.price().to_string(), "$9.99");
    }
}
