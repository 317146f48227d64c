//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - Listing for the products table
//! - Insert / update / delete driven by the desktop forms
//!
//! ## Deletion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    How Product Deletion Works                       │
//! │                                                                     │
//! │  delete(product_id)                                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BEGIN TRANSACTION                                                  │
//! │       │                                                             │
//! │       ├── DELETE FROM sales    WHERE product_id = ?                 │
//! │       ├── DELETE FROM products WHERE id = ?                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  COMMIT  ← both deletes land, or neither does                       │
//! │                                                                     │
//! │  The sales rows go first so the foreign key on sales.product_id     │
//! │  never dangles, and the single transaction means a failure between  │
//! │  the two statements cannot strand a product's sales.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{Money, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // List everything for the products table
/// let products = repo.list().await?;
///
/// // Insert a new product
/// let widget = repo.insert("Widget", Money::from_cents(999), 10).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products.
    ///
    /// The listing carries no ordering contract; rows come back in id
    /// order so the table renders stably between refreshes.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, quantity
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, quantity
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with its assigned id.
    ///
    /// ## Arguments
    /// * `name` - Display name (already validated at the form boundary)
    /// * `price` - Unit price
    /// * `quantity` - Initial stock on hand
    ///
    /// Store-level rejections (CHECK constraints) surface as
    /// `DbError::QueryFailed`.
    pub async fn insert(&self, name: &str, price: Money, quantity: i64) -> DbResult<Product> {
        debug!(name = %name, price = %price, quantity = %quantity, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price_cents, quantity)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(name)
        .bind(price.cents())
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            price_cents: price.cents(),
            quantity,
        })
    }

    /// Overwrites a product's name, price, and quantity.
    ///
    /// Updating an id that does not exist is a silent no-op: the form
    /// edits rows it just listed, so a vanished id means the row was
    /// deleted meanwhile and there is nothing to overwrite.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price_cents = ?3,
                quantity = ?4
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.quantity)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a product and all sales referencing it.
    ///
    /// Both deletes run inside one transaction; see the module docs.
    /// Deleting an id that does not exist is a no-op.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting product and its sales");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM sales WHERE product_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
