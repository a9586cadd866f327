//! Integration tests for Stockroom.
//!
//! The tests in `tests/` run against a real `PostgreSQL` database and cover
//! the behavior that unit tests cannot: the unique indexes on user emails,
//! category names, and product SKUs, and the idempotency of demo-data
//! seeding.
//!
//! # Running Tests
//!
//! ```bash
//! # Point at a disposable database
//! export DATABASE_URL=postgres://localhost/stockroom_test
//!
//! # Run the ignored database tests
//! cargo test -p stockroom-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use sqlx::PgPool;

use stockroom_server::db;

/// Connect to the test database named by `DATABASE_URL` and apply migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset, the database is unreachable, or a
/// migration fails; the test cannot proceed in any of those cases.
pub async fn connect_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set to run integration tests");

    let pool = db::create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to the test database");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations on the test database");

    pool
}

/// A short random suffix for emails, names, and SKUs, so tests can be rerun
/// against the same database without cleanup.
#[must_use]
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
