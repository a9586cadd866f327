//! Domain models and API payload types.

pub mod category;
pub mod dashboard;
pub mod product;
pub mod user;

use serde::Serialize;

pub use category::{Category, CreateCategory};
pub use dashboard::{DashboardStats, StockDistribution};
pub use product::{CreateProduct, Product, ProductPatch};
pub use user::User;

/// Generic success message body.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
