//! Dashboard route handlers.

use axum::{Json, extract::State};

use crate::db::{CategoryRepository, ProductRepository};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::{DashboardStats, StockDistribution};
use crate::services::dashboard;
use crate::state::AppState;

/// Inventory-wide statistics.
pub async fn stats(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<DashboardStats>> {
    let products = ProductRepository::new(state.pool()).list(None).await?;
    let total_categories = CategoryRepository::new(state.pool()).count().await?;

    Ok(Json(dashboard::compute_stats(&products, total_categories)))
}

/// Stock value grouped by category.
pub async fn stock_distribution(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<StockDistribution>>> {
    let products = ProductRepository::new(state.pool()).list(None).await?;

    Ok(Json(dashboard::compute_distribution(&products)))
}
