//! # Sale Commands

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use stockroom_core::{validation, SaleRecord};
use stockroom_db::Database;

/// One row of the sales table: a sale joined with its product's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRow {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub sold_quantity: i64,
    /// RFC 3339 timestamp, formatted for the table by the frontend.
    pub sale_date: String,
}

impl From<SaleRecord> for SaleRow {
    fn from(r: SaleRecord) -> Self {
        SaleRow {
            id: r.id,
            product_id: r.product_id,
            product_name: r.product_name,
            sold_quantity: r.sold_quantity,
            sale_date: r.sale_date.to_rfc3339(),
        }
    }
}

/// Response of a successful sell: what just got logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellReceipt {
    pub sale_id: i64,
    pub product_id: i64,
    pub sold_quantity: i64,
    pub sale_date: String,
}

/// Sells a quantity of the selected product.
///
/// ## Arguments
/// * `product_id` - The selected table row
/// * `quantity` - Free text from the quantity prompt dialog
///
/// ## Errors
/// * `VALIDATION_ERROR` - quantity is not a positive whole number
/// * `INSUFFICIENT_STOCK` - requested more than on hand; nothing changed
/// * `NOT_FOUND` - the selected product was deleted meanwhile
pub async fn sell_product(
    db: &Database,
    product_id: i64,
    quantity: String,
) -> Result<SellReceipt, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "sell_product command");

    let quantity = validation::parse_integer("quantity", &quantity)?;
    validation::validate_sale_quantity(quantity)?;

    let sale = db.sales().sell(product_id, quantity).await?;

    info!(sale_id = %sale.id, product_id = %product_id, quantity = %quantity, "Sale recorded");

    Ok(SellReceipt {
        sale_id: sale.id,
        product_id: sale.product_id,
        sold_quantity: sale.sold_quantity,
        sale_date: sale.sale_date.to_rfc3339(),
    })
}

/// Lists all sales for the sales table.
pub async fn list_sales(db: &Database) -> Result<Vec<SaleRow>, ApiError> {
    debug!("list_sales command");

    let sales = db.sales().list().await?;
    Ok(sales.into_iter().map(SaleRow::from).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::{add_product, list_products};
    use crate::error::ErrorCode;
    use stockroom_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_sell_then_listings_refresh() {
        let db = test_db().await;
        let widget = add_product(&db, "Widget".into(), "9.99".into(), "10".into())
            .await
            .unwrap();

        let receipt = sell_product(&db, widget.id, "3".into()).await.unwrap();
        assert_eq!(receipt.sold_quantity, 3);

        let products = list_products(&db).await.unwrap();
        assert_eq!(products[0].quantity, 7);

        let sales = list_sales(&db).await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].product_name, "Widget");
        assert_eq!(sales[0].sold_quantity, 3);
    }

    #[tokio::test]
    async fn test_sell_insufficient_stock_dialog() {
        let db = test_db().await;
        let widget = add_product(&db, "Widget".into(), "9.99".into(), "2".into())
            .await
            .unwrap();

        let err = sell_product(&db, widget.id, "5".into()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(
            err.message,
            "Insufficient stock for Widget: available 2, requested 5"
        );

        // Nothing changed
        assert_eq!(list_products(&db).await.unwrap()[0].quantity, 2);
        assert!(list_sales(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sell_rejects_bad_quantity_input() {
        let db = test_db().await;
        let widget = add_product(&db, "Widget".into(), "9.99".into(), "10".into())
            .await
            .unwrap();

        for bad in ["", "three", "0", "-2", "2.5"] {
            let err = sell_product(&db, widget.id, bad.into()).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "input {:?}", bad);
        }

        assert_eq!(list_products(&db).await.unwrap()[0].quantity, 10);
    }

    #[tokio::test]
    async fn test_sell_deleted_product_is_not_found() {
        let db = test_db().await;

        let err = sell_product(&db, 99, "1".into()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
