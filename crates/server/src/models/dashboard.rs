//! Dashboard aggregation result types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Inventory-wide statistics.
///
/// Computed in-process over a capped fetch of the product collection, not by
/// store-side aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Number of products (within the fetch cap).
    pub total_products: i64,
    /// Number of categories.
    pub total_categories: i64,
    /// Products at or below their reorder level.
    pub low_stock_count: i64,
    /// Sum of quantity x unit price across products.
    pub total_stock_value: Decimal,
    /// Sum of quantities across products.
    pub total_quantity: i64,
}

/// Per-category slice of the stock value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockDistribution {
    /// Category name as referenced by the products.
    pub category: String,
    /// Number of products in the category.
    pub count: i64,
    /// Total stock value of those products.
    pub total_value: Decimal,
}
