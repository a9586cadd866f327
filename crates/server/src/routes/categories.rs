//! Category route handlers.

use axum::{Json, extract::State};

use crate::db::{CategoryRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Category, CreateCategory};
use crate::state::AppState;

/// List all categories (capped fetch, insertion order).
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Create a category with a unique name.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(body): Json<CreateCategory>,
) -> Result<Json<Category>> {
    let category = CategoryRepository::new(state.pool())
        .create(&body.name, body.description.as_deref())
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AppError::DuplicateCategory,
            other => AppError::Database(other),
        })?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok(Json(category))
}
