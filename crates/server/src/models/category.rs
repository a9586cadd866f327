//! Category domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::CategoryId;

/// A product category (domain type).
///
/// Products reference categories by name as free text; there is no foreign
/// key, and categories are never updated or deleted once created.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Category name (unique).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
