//! # Validation Module
//!
//! Form input parsing and business rule validation for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: The form (WebView)                                        │
//! │  ├── Basic format checks (empty fields)                             │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Desktop command (Rust)                                    │
//! │  └── THIS MODULE: parse free-text fields, apply business rules      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── CHECK constraints (price_cents >= 0, quantity >= 0)            │
//! │                                                                     │
//! │  Defense in depth: Multiple layers catch different errors           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The add/update forms submit price and quantity as free text, so the
//! parse helpers here are the single place where "not a number" becomes
//! a typed error instead of a panic or a silent zero.

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_SALE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Input Parsers
// =============================================================================

/// Parses a free-text price field into Money, rejecting negatives.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_price;
///
/// assert_eq!(parse_price("9.99").unwrap().cents(), 999);
/// assert!(parse_price("nine").is_err());
/// assert!(parse_price("-1.00").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let price: Money = input
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' is not a number", input.trim()),
        })?;

    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Parses a free-text whole-number field (quantities, ids).
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_integer;
///
/// assert_eq!(parse_integer("quantity", "42").unwrap(), 42);
/// assert!(parse_integer("quantity", "4.5").is_err());
/// assert!(parse_integer("quantity", "many").is_err());
/// ```
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{}' is not a whole number", input.trim()),
        })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Widget").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity-on-hand value (add/update forms).
///
/// ## Rules
/// - Must be non-negative (zero stock is a valid state)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity entered in the sell dialog.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_SALE_QUANTITY`]
///
/// Whether the stock on hand covers it is checked separately, against
/// the stored quantity, at the moment of the sale.
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("9.99").unwrap().cents(), 999);
        assert_eq!(parse_price(" 0 ").unwrap().cents(), 0);

        assert!(parse_price("").is_err());
        assert!(parse_price("nine ninety-nine").is_err());
        assert!(parse_price("9,99").is_err());
        assert!(parse_price("-0.01").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("quantity", "10").unwrap(), 10);
        assert_eq!(parse_integer("quantity", " -3 ").unwrap(), -3);

        assert!(parse_integer("quantity", "").is_err());
        assert!(parse_integer("quantity", "3.5").is_err());
        assert!(parse_integer("quantity", "ten").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(100).is_ok());
        assert!(validate_stock_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_sale_quantity() {
        assert!(validate_sale_quantity(1).is_ok());
        assert!(validate_sale_quantity(999).is_ok());

        assert!(validate_sale_quantity(0).is_err());
        assert!(validate_sale_quantity(-1).is_err());
        assert!(validate_sale_quantity(1000).is_err());
    }
}
