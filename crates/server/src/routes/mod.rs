//! HTTP route handlers for the inventory API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (verifies database)
//!
//! # Auth (public)
//! POST /api/auth/register             - Register and receive a token
//! POST /api/auth/login                - Login and receive a token
//! GET  /api/auth/me                   - Current user (requires auth)
//!
//! # Categories (requires auth)
//! GET  /api/categories                - List categories
//! POST /api/categories                - Create a category
//!
//! # Products (requires auth)
//! GET  /api/products                  - List products (?category=&low_stock=)
//! POST /api/products                  - Create a product
//! PUT  /api/products/{id}             - Partially update a product
//! DELETE /api/products/{id}           - Delete a product
//!
//! # Dashboard (requires auth)
//! GET  /api/dashboard/stats           - Inventory-wide statistics
//! GET  /api/dashboard/stock-distribution - Stock value grouped by category
//!
//! # Seeding (public)
//! POST /api/seed-data                 - Insert demo catalog once
//! ```

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod products;
pub mod seed;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new().route("/", get(categories::list).post(categories::create))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/{id}", put(products::update).delete(products::delete))
}

/// Create the dashboard routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/stock-distribution", get(dashboard::stock_distribution))
}

/// Create the complete API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/categories", category_routes())
        .nest("/api/products", product_routes())
        .nest("/api/dashboard", dashboard_routes())
        .route("/api/seed-data", post(seed::seed_data))
}
