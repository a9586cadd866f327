//! Integration tests for SKU uniqueness across create and update.
//!
//! These tests require:
//! - A running `PostgreSQL` database, named by `DATABASE_URL`
//!
//! Run with: cargo test -p stockroom-integration-tests -- --ignored

use rust_decimal::Decimal;

use stockroom_core::Sku;
use stockroom_integration_tests::{connect_pool, unique_suffix};
use stockroom_server::db::products::NewProduct;
use stockroom_server::db::{ProductRepository, RepositoryError};
use stockroom_server::models::{Product, ProductPatch};

/// Test helper: create a product with the given SKU.
async fn create_product(repo: &ProductRepository<'_>, sku: &Sku) -> Product {
    repo.create(NewProduct {
        name: "Integration Widget",
        sku,
        category: "Widgets",
        quantity: 10,
        unit_price: Decimal::new(999, 2),
        reorder_level: 5,
        description: None,
    })
    .await
    .expect("Failed to create product")
}

// ============================================================================
// Create Conflict Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_create_with_existing_sku_is_rejected() {
    let pool = connect_pool().await;
    let repo = ProductRepository::new(&pool);
    let sku = Sku::parse(&format!("DUP-{}", unique_suffix())).expect("valid SKU");

    create_product(&repo, &sku).await;

    let err = repo
        .create(NewProduct {
            name: "Second Widget",
            sku: &sku,
            category: "Widgets",
            quantity: 1,
            unit_price: Decimal::new(100, 2),
            reorder_level: 1,
            description: None,
        })
        .await
        .expect_err("Second product with the same SKU must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)), "got {err:?}");
}

// ============================================================================
// Update Conflict Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_update_to_colliding_sku_is_rejected() {
    let pool = connect_pool().await;
    let repo = ProductRepository::new(&pool);
    let suffix = unique_suffix();
    let sku_a = Sku::parse(&format!("COLL-A-{suffix}")).expect("valid SKU");
    let sku_b = Sku::parse(&format!("COLL-B-{suffix}")).expect("valid SKU");

    create_product(&repo, &sku_a).await;
    let b = create_product(&repo, &sku_b).await;

    // Moving b onto a's SKU trips the unique index.
    let err = repo
        .update(b.id, &ProductPatch::default(), Some(&sku_a))
        .await
        .expect_err("Update onto another product's SKU must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_update_to_own_sku_succeeds() {
    let pool = connect_pool().await;
    let repo = ProductRepository::new(&pool);
    let sku = Sku::parse(&format!("SELF-{}", unique_suffix())).expect("valid SKU");

    let product = create_product(&repo, &sku).await;

    // Re-submitting the product's own SKU is a no-op, not a conflict.
    let updated = repo
        .update(product.id, &ProductPatch::default(), Some(&sku))
        .await
        .expect("Update to the product's own SKU must succeed")
        .expect("Product must still exist");
    assert_eq!(updated.sku, sku);
    assert_eq!(updated.id, product.id);
}
