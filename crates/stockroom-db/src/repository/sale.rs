//! # Sale Repository
//!
//! Database operations for the sales log.
//!
//! ## Sell Operation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Sell Operation                                │
//! │                                                                     │
//! │  sell(product_id, quantity)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BEGIN TRANSACTION                                                  │
//! │       │                                                             │
//! │       ├── SELECT the product row                                    │
//! │       │      │                                                      │
//! │       │      ├── missing?            → ProductNotFound, ROLLBACK    │
//! │       │      ├── quantity too small? → InsufficientStock, ROLLBACK  │
//! │       │      │                                                      │
//! │       ├── UPDATE products SET quantity = quantity - ?               │
//! │       ├── INSERT INTO sales (product_id, sold_quantity, sale_date)  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  COMMIT  ← decrement and sale row land together, or not at all      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed check aborts with nothing mutated, which is what keeps the
//! "quantity never goes negative" invariant.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{CoreError, Product, Sale, SaleRecord};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Sells `quantity` units of a product: checks the stock on hand,
    /// decrements it, and appends one row to the sales log, all within
    /// one commit.
    ///
    /// ## Arguments
    /// * `product_id` - The product being sold
    /// * `quantity` - Units to sell (positive; validated at the form boundary)
    ///
    /// ## Returns
    /// The recorded sale, stamped with the insertion moment.
    ///
    /// ## Errors
    /// * `CoreError::ProductNotFound` - no such product
    /// * `CoreError::InsufficientStock` - requested more than on hand;
    ///   nothing is mutated
    pub async fn sell(&self, product_id: i64, quantity: i64) -> DbResult<Sale> {
        debug!(product_id = %product_id, quantity = %quantity, "Selling product");

        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, quantity
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::ProductNotFound(product_id))?;

        if !product.can_cover(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name,
                available: product.quantity,
                requested: quantity,
            }
            .into());
        }

        // Delta update rather than writing the absolute value we just
        // read; the CHECK constraint backstops the sufficiency check.
        sqlx::query("UPDATE products SET quantity = quantity - ?2 WHERE id = ?1")
            .bind(product_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;

        let sold_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO sales (product_id, sold_quantity, sale_date)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(product_id)
        .bind(quantity)
        .bind(sold_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let sale = Sale {
            id: result.last_insert_rowid(),
            product_id,
            sold_quantity: quantity,
            sale_date: sold_at,
        };

        debug!(sale_id = %sale.id, "Sale recorded");
        Ok(sale)
    }

    /// Lists all sales joined with their product's name.
    ///
    /// Rows come back in id order for stable display; ordering is not
    /// part of the contract.
    pub async fn list(&self) -> DbResult<Vec<SaleRecord>> {
        let sales = sqlx::query_as::<_, SaleRecord>(
            r#"
            SELECT
                s.id,
                s.product_id,
                p.name AS product_name,
                s.sold_quantity,
                s.sale_date
            FROM sales s
            INNER JOIN products p ON p.id = s.product_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }

    /// Counts sales rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::Money;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_sell_decrements_stock_and_appends_sale() {
        let db = test_db().await;
        let widget = db
            .products()
            .insert("Widget", Money::from_cents(999), 10)
            .await
            .unwrap();

        let sale = db.sales().sell(widget.id, 3).await.unwrap();

        assert_eq!(sale.product_id, widget.id);
        assert_eq!(sale.sold_quantity, 3);

        let after = db.products().get_by_id(widget.id).await.unwrap().unwrap();
        assert_eq!(after.quantity, 7);
        assert_eq!(db.sales().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sell_exact_stock_empties_shelf() {
        let db = test_db().await;
        let widget = db
            .products()
            .insert("Widget", Money::from_cents(999), 5)
            .await
            .unwrap();

        db.sales().sell(widget.id, 5).await.unwrap();

        let after = db.products().get_by_id(widget.id).await.unwrap().unwrap();
        assert_eq!(after.quantity, 0);
    }

    #[tokio::test]
    async fn test_sell_more_than_on_hand_mutates_nothing() {
        let db = test_db().await;
        let widget = db
            .products()
            .insert("Widget", Money::from_cents(999), 3)
            .await
            .unwrap();

        let err = db.sales().sell(widget.id, 5).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            })
        ));

        // Stock and sales log are untouched
        let after = db.products().get_by_id(widget.id).await.unwrap().unwrap();
        assert_eq!(after.quantity, 3);
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sell_unknown_product() {
        let db = test_db().await;

        let err = db.sales().sell(42, 1).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::ProductNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_list_joins_product_name() {
        let db = test_db().await;
        let widget = db
            .products()
            .insert("Widget", Money::from_cents(999), 10)
            .await
            .unwrap();
        let sale = db.sales().sell(widget.id, 2).await.unwrap();

        let records = db.sales().list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, sale.id);
        assert_eq!(records[0].product_name, "Widget");
        assert_eq!(records[0].sold_quantity, 2);
        assert_eq!(records[0].sale_date, sale.sale_date);
    }

    #[tokio::test]
    async fn test_deleting_product_clears_its_sales_from_listing() {
        let db = test_db().await;
        let widget = db
            .products()
            .insert("Widget", Money::from_cents(999), 10)
            .await
            .unwrap();
        let gadget = db
            .products()
            .insert("Gadget", Money::from_cents(2500), 10)
            .await
            .unwrap();

        db.sales().sell(widget.id, 1).await.unwrap();
        db.sales().sell(gadget.id, 2).await.unwrap();

        db.products().delete(widget.id).await.unwrap();

        let records = db.sales().list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_id, gadget.id);
        assert_eq!(db.sales().count().await.unwrap(), 1);
    }
}
