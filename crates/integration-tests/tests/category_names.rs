//! Integration tests for category name uniqueness.
//!
//! These tests require:
//! - A running `PostgreSQL` database, named by `DATABASE_URL`
//!
//! Run with: cargo test -p stockroom-integration-tests -- --ignored

use stockroom_integration_tests::{connect_pool, unique_suffix};
use stockroom_server::db::{CategoryRepository, RepositoryError};

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_duplicate_category_name_is_rejected() {
    let pool = connect_pool().await;
    let repo = CategoryRepository::new(&pool);
    let name = format!("Gadgets {}", unique_suffix());

    let created = repo
        .create(&name, Some("First description"))
        .await
        .expect("Failed to create category");
    assert_eq!(created.name, name);

    let err = repo
        .create(&name, Some("Second description"))
        .await
        .expect_err("Second category with the same name must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)), "got {err:?}");
}
