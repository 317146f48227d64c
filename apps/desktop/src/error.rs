//! # API Error Type
//!
//! Unified error type for desktop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                          │
//! │                                                                     │
//! │  Frontend                    Rust Backend                           │
//! │  ────────                    ────────────                           │
//! │                                                                     │
//! │  invoke('sell_product')                                             │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                             │  │
//! │  │  Result<T, ApiError>                                          │  │
//! │  │         │                                                     │  │
//! │  │  Parse Error?      ─── ValidationError ──────────┐            │  │
//! │  │  Stock Error?      ─── CoreError::Insufficient ── ApiError ──►│  │
//! │  │  Database Error?   ─── DbError::QueryFailed ─────┘            │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  ◄───────────────────────────────────────────────────────────────   │
//! │                                                                     │
//! │  catch (e) → one blocking dialog with e.message                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failed command maps to exactly one dialog; nothing is retried.

use serde::Serialize;
use stockroom_core::{CoreError, ValidationError};
use stockroom_db::DbError;

/// API error returned from desktop commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for Widget: available 3, requested 5"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for the dialog
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (stale selection, deleted row)
    NotFound,

    /// Input validation failed (malformed numeric input, empty name)
    ValidationError,

    /// Insufficient stock on a sale
    InsufficientStock,

    /// Database operation failed
    DatabaseError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
///
/// Database-level failures keep their underlying message text: this is
/// a single-user tool, and the raw constraint or connection message in
/// the dialog is what makes a broken setup debuggable.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            // Domain rules raised inside a transaction
            DbError::Domain(core) => ApiError::from(core),

            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::UniqueViolation { field } => ApiError::new(
                ErrorCode::ValidationError,
                format!("Duplicate {}: value already exists", field),
            ),
            err => {
                tracing::error!("Database operation failed: {}", err);
                ApiError::new(ErrorCode::DatabaseError, err.to_string())
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (form parsing in commands).
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_mapping() {
        let err = ApiError::from(CoreError::InsufficientStock {
            name: "Widget".to_string(),
            available: 3,
            requested: 5,
        });

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(
            err.message,
            "Insufficient stock for Widget: available 3, requested 5"
        );
    }

    #[test]
    fn test_domain_error_unwraps_through_db_error() {
        let err = ApiError::from(DbError::Domain(CoreError::ProductNotFound(7)));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 7");
    }

    #[test]
    fn test_database_error_keeps_raw_message() {
        let err = ApiError::from(DbError::QueryFailed("CHECK constraint failed".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("CHECK constraint failed"));
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ApiError::validation("price must not be negative");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "price must not be negative");
    }
}
