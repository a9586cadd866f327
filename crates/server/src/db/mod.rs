//! Database operations for the Stockroom `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `app_user` - Registered users and their password hashes
//! - `category` - Product categories
//! - `product` - Inventory items
//!
//! Each table is wrapped by a typed repository. All operations are
//! single-row reads and writes; uniqueness of emails, category names, and
//! SKUs is enforced by unique indexes (see `migrations/`), and unique
//! violations surface as [`RepositoryError::Conflict`].

pub mod categories;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use categories::CategoryRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Upper bound on rows fetched by list and aggregation queries.
///
/// Callers that need more than this must be redesigned; behavior above this
/// scale is a known limit, not a guarantee.
pub const FETCH_CAP: i64 = 1000;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email or SKU).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a sqlx error to [`Self::Conflict`] when it is a unique violation,
    /// otherwise pass it through as [`Self::Database`].
    pub(crate) fn from_unique_violation(e: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict.to_owned());
        }
        Self::Database(e)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Embedded schema migrations, run once at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
