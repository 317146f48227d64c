//! Black-box test of the full inventory flow against a fresh database:
//! the exact sequence a user walks through the desktop forms.

use stockroom_core::{CoreError, Money};
use stockroom_db::{Database, DbConfig, DbError};

async fn fresh_db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

#[tokio::test]
async fn widget_scenario() {
    // Start empty
    let db = fresh_db().await;
    assert!(db.products().list().await.unwrap().is_empty());
    assert!(db.sales().list().await.unwrap().is_empty());

    // Add ("Widget", 9.99, 10)
    let price: Money = "9.99".parse().unwrap();
    let widget = db.products().insert("Widget", price, 10).await.unwrap();
    assert_eq!(widget.price_cents, 999);

    // Sell 3
    db.sales().sell(widget.id, 3).await.unwrap();

    // Listing shows quantity 7
    let products = db.products().list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].quantity, 7);

    // ... and one sale of quantity 3 joined to the name "Widget"
    let sales = db.sales().list().await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].sold_quantity, 3);
    assert_eq!(sales[0].product_name, "Widget");
}

#[tokio::test]
async fn overselling_changes_nothing() {
    let db = fresh_db().await;
    let widget = db
        .products()
        .insert("Widget", Money::from_cents(999), 2)
        .await
        .unwrap();

    let err = db.sales().sell(widget.id, 3).await.unwrap_err();
    assert!(matches!(
        err,
        DbError::Domain(CoreError::InsufficientStock { .. })
    ));

    let products = db.products().list().await.unwrap();
    assert_eq!(products[0].quantity, 2);
    assert!(db.sales().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_product_and_its_sales() {
    let db = fresh_db().await;
    let widget = db
        .products()
        .insert("Widget", Money::from_cents(999), 10)
        .await
        .unwrap();
    db.sales().sell(widget.id, 1).await.unwrap();
    db.sales().sell(widget.id, 2).await.unwrap();

    db.products().delete(widget.id).await.unwrap();

    assert!(db.products().list().await.unwrap().is_empty());
    assert!(db.sales().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_is_reflected_in_next_listing() {
    let db = fresh_db().await;
    let mut widget = db
        .products()
        .insert("Widget", Money::from_cents(999), 10)
        .await
        .unwrap();

    widget.name = "Deluxe Widget".to_string();
    widget.price_cents = 1499;
    widget.quantity = 4;
    db.products().update(&widget).await.unwrap();

    let products = db.products().list().await.unwrap();
    assert_eq!(products, vec![widget]);
}

#[tokio::test]
async fn sales_survive_product_updates() {
    // The sales listing joins on the live product name, so a rename
    // shows up in previously recorded sales.
    let db = fresh_db().await;
    let mut widget = db
        .products()
        .insert("Widget", Money::from_cents(999), 10)
        .await
        .unwrap();
    db.sales().sell(widget.id, 3).await.unwrap();

    widget.name = "Widget Mk2".to_string();
    db.products().update(&widget).await.unwrap();

    let sales = db.sales().list().await.unwrap();
    assert_eq!(sales[0].product_name, "Widget Mk2");
}
