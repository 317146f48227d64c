//! # Product Commands
//!
//! Commands behind the products table and its forms.
//!
//! ## Add Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Add Product form                                                   │
//! │  ┌─────────────────────────────┐                                    │
//! │  │ Name:     [Widget        ]  │                                    │
//! │  │ Price:    [9.99          ]  │  ← free text                       │
//! │  │ Quantity: [10            ]  │  ← free text                       │
//! │  │          [Save]             │                                    │
//! │  └─────────────────────────────┘                                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  invoke('add_product', { name, price, quantity })                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  THIS MODULE: parse price/quantity, validate, INSERT                │
//! │           │                                                         │
//! │           ├── bad input → ApiError (blocking dialog), no write      │
//! │           ▼                                                         │
//! │  Frontend closes the form and re-invokes list_products              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use stockroom_core::{validation, Product};
use stockroom_db::Database;

/// Product DTO (Data Transfer Object) for the frontend table.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    /// Price in cents; the frontend formats dollars for display.
    pub price_cents: i64,
    pub quantity: i64,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        ProductRow {
            id: p.id,
            name: p.name,
            price_cents: p.price_cents,
            quantity: p.quantity,
        }
    }
}

/// Lists all products for the table.
///
/// Invoked on startup and re-invoked after every mutating command
/// (full refresh, no incremental diffing).
pub async fn list_products(db: &Database) -> Result<Vec<ProductRow>, ApiError> {
    debug!("list_products command");

    let products = db.products().list().await?;
    Ok(products.into_iter().map(ProductRow::from).collect())
}

/// Adds a product from the three form fields.
///
/// ## Arguments
/// * `name` - Display name
/// * `price` - Free-text price, e.g. "9.99"
/// * `quantity` - Free-text initial stock, e.g. "10"
///
/// ## Errors
/// Malformed numbers, blank names, and negative values all come back
/// as `VALIDATION_ERROR` before anything touches the database.
pub async fn add_product(
    db: &Database,
    name: String,
    price: String,
    quantity: String,
) -> Result<ProductRow, ApiError> {
    debug!(name = %name, "add_product command");

    let name = name.trim();
    validation::validate_product_name(name)?;

    let price = validation::parse_price(&price)?;

    let quantity = validation::parse_integer("quantity", &quantity)?;
    validation::validate_stock_quantity(quantity)?;

    let product = db.products().insert(name, price, quantity).await?;

    info!(id = %product.id, name = %product.name, "Product added");
    Ok(ProductRow::from(product))
}

/// Overwrites a product's name, price, and quantity.
///
/// Same parsing rules as [`add_product`]. Updating an id that no
/// longer exists has no observable effect; the subsequent table
/// refresh is what tells the user the row is gone.
pub async fn update_product(
    db: &Database,
    id: i64,
    name: String,
    price: String,
    quantity: String,
) -> Result<(), ApiError> {
    debug!(id = %id, "update_product command");

    let name = name.trim();
    validation::validate_product_name(name)?;

    let price = validation::parse_price(&price)?;

    let quantity = validation::parse_integer("quantity", &quantity)?;
    validation::validate_stock_quantity(quantity)?;

    let product = Product {
        id,
        name: name.to_string(),
        price_cents: price.cents(),
        quantity,
    };
    db.products().update(&product).await?;

    info!(id = %id, "Product updated");
    Ok(())
}

/// Deletes the selected product and all sales referencing it.
pub async fn delete_product(db: &Database, id: i64) -> Result<(), ApiError> {
    debug!(id = %id, "delete_product command");

    db.products().delete(id).await?;

    info!(id = %id, "Product deleted");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let db = test_db().await;

        let added = add_product(&db, "Widget".into(), "9.99".into(), "10".into())
            .await
            .unwrap();
        assert_eq!(added.price_cents, 999);

        let rows = list_products(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Widget");
        assert_eq!(rows[0].quantity, 10);
    }

    #[tokio::test]
    async fn test_add_rejects_malformed_price() {
        let db = test_db().await;

        let err = add_product(&db, "Widget".into(), "nine".into(), "10".into())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Nothing was written
        assert!(list_products(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_fractional_quantity() {
        let db = test_db().await;

        let err = add_product(&db, "Widget".into(), "9.99".into(), "1.5".into())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name_and_negatives() {
        let db = test_db().await;

        for (name, price, quantity) in [
            ("   ", "9.99", "10"),
            ("Widget", "-1.00", "10"),
            ("Widget", "9.99", "-1"),
        ] {
            let err = add_product(&db, name.into(), price.into(), quantity.into())
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
        }
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let db = test_db().await;
        let added = add_product(&db, "Widget".into(), "9.99".into(), "10".into())
            .await
            .unwrap();

        update_product(&db, added.id, "Deluxe Widget".into(), "14.99".into(), "4".into())
            .await
            .unwrap();

        let rows = list_products(&db).await.unwrap();
        assert_eq!(rows[0].name, "Deluxe Widget");
        assert_eq!(rows[0].price_cents, 1499);
        assert_eq!(rows[0].quantity, 4);
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_nothing() {
        let db = test_db().await;

        update_product(&db, 41, "Ghost".into(), "1.00".into(), "1".into())
            .await
            .unwrap();

        assert!(list_products(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = test_db().await;
        let added = add_product(&db, "Widget".into(), "9.99".into(), "10".into())
            .await
            .unwrap();

        delete_product(&db, added.id).await.unwrap();

        assert!(list_products(&db).await.unwrap().is_empty());
    }
}
