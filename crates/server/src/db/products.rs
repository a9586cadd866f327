//! Product repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use stockroom_core::{ProductId, Sku};

use super::{FETCH_CAP, RepositoryError};
use crate::models::{Product, ProductPatch};

const SKU_CONFLICT: &str = "SKU already exists";

/// Raw `product` row.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    sku: String,
    category: String,
    quantity: i64,
    unit_price: Decimal,
    reorder_level: i64,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Result<Product, RepositoryError> {
        let sku = Sku::parse(&self.sku).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid SKU in database: {e}"))
        })?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            sku,
            category: self.category,
            quantity: self.quantity,
            unit_price: self.unit_price,
            reorder_level: self.reorder_level,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const PRODUCT_COLUMNS: &str = "id, name, sku, category, quantity, unit_price, \
                               reorder_level, description, created_at, updated_at";

/// Values for a new product, already validated by the handler.
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub sku: &'a Sku,
    pub category: &'a str,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub reorder_level: i64,
    pub description: Option<&'a str>,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, optionally filtered to an exact category name, up to
    /// [`FETCH_CAP`] rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored SKU is invalid.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            r"
            SELECT {PRODUCT_COLUMNS}
            FROM product
            WHERE $1::text IS NULL OR category = $1
            ORDER BY created_at ASC
            LIMIT $2
            "
        ))
        .bind(category)
        .bind(FETCH_CAP)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    /// Create a new product.
    ///
    /// The unique index on `sku` rejects duplicates atomically; no pre-check
    /// is performed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the SKU already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new: NewProduct<'_>) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(&format!(
            r"
            INSERT INTO product
                (id, name, sku, category, quantity, unit_price, reorder_level, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PRODUCT_COLUMNS}
            "
        ))
        .bind(ProductId::generate().as_uuid())
        .bind(new.name)
        .bind(new.sku.as_str())
        .bind(new.category)
        .bind(new.quantity)
        .bind(new.unit_price)
        .bind(new.reorder_level)
        .bind(new.description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique_violation(e, SKU_CONFLICT))?;

        row.into_product()
    }

    /// Apply a partial update to a product, refreshing `updated_at`.
    ///
    /// Fields absent from the patch keep their current value. An explicit
    /// `description: null` clears the description. Returns `None` if no
    /// product has this ID.
    ///
    /// A SKU change that collides with another product trips the unique
    /// index, so the check-then-act race of a lookup-based guard cannot
    /// occur; updating a product to its own current SKU is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new SKU already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
        sku: Option<&Sku>,
    ) -> Result<Option<Product>, RepositoryError> {
        let (set_description, description) = match &patch.description {
            Some(value) => (true, value.as_deref()),
            None => (false, None),
        };

        let row: Option<ProductRow> = sqlx::query_as(&format!(
            r"
            UPDATE product
            SET name          = COALESCE($2, name),
                sku           = COALESCE($3, sku),
                category      = COALESCE($4, category),
                quantity      = COALESCE($5, quantity),
                unit_price    = COALESCE($6, unit_price),
                reorder_level = COALESCE($7, reorder_level),
                description   = CASE WHEN $8 THEN $9 ELSE description END,
                updated_at    = now()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "
        ))
        .bind(id.as_uuid())
        .bind(patch.name.as_deref())
        .bind(sku.map(Sku::as_str))
        .bind(patch.category.as_deref())
        .bind(patch.quantity)
        .bind(patch.unit_price)
        .bind(patch.reorder_level)
        .bind(set_description)
        .bind(description)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique_violation(e, SKU_CONFLICT))?;

        row.map(ProductRow::into_product).transpose()
    }

    /// Delete a product by its ID.
    ///
    /// Returns `true` if a product was deleted, `false` if the ID was absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
