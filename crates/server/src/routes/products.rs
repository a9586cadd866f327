//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use stockroom_core::ProductId;

use crate::db::products::NewProduct;
use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{CreateProduct, Message, Product, ProductPatch};
use crate::state::AppState;

/// Query parameters for the product list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    /// Exact-match category name filter.
    pub category: Option<String>,
    /// When true, keep only products at or below their reorder level.
    pub low_stock: Option<bool>,
}

/// List products, optionally filtered by category and low-stock status.
///
/// The category filter is pushed to the store; the low-stock filter is
/// applied in-process after the capped fetch, mirroring how the dashboard
/// computes its counts.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let mut products = ProductRepository::new(state.pool())
        .list(query.category.as_deref())
        .await?;

    if query.low_stock.unwrap_or(false) {
        products.retain(Product::is_low_stock);
    }

    Ok(Json(products))
}

/// Create a product with a unique SKU.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(body): Json<CreateProduct>,
) -> Result<Json<Product>> {
    let sku = body.validate()?;

    let product = ProductRepository::new(state.pool())
        .create(NewProduct {
            name: body.name.trim(),
            sku: &sku,
            category: body.category.trim(),
            quantity: body.quantity,
            unit_price: body.unit_price,
            reorder_level: body.reorder_level,
            description: body.description.as_deref(),
        })
        .await
        .map_err(duplicate_sku)?;

    tracing::info!(product_id = %product.id, sku = %product.sku, "Product created");

    Ok(Json(product))
}

/// Partially update a product.
///
/// Only fields present in the body are applied; `updated_at` is always
/// refreshed. A SKU collision with another product is rejected, while
/// re-submitting the product's own SKU is accepted.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let sku = patch.validate()?;

    let product = ProductRepository::new(state.pool())
        .update(id, &patch, sku.as_ref())
        .await
        .map_err(duplicate_sku)?
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(product))
}

/// Delete a product by ID.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<ProductId>,
) -> Result<Json<Message>> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(AppError::ProductNotFound);
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(Message::new("Product deleted successfully")))
}

/// Map a repository conflict to the SKU duplicate error.
fn duplicate_sku(e: RepositoryError) -> AppError {
    match e {
        RepositoryError::Conflict(_) => AppError::DuplicateSku,
        other => AppError::Database(other),
    }
}
