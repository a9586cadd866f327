//! Dashboard aggregation over the product collection.
//!
//! All statistics are computed in-process from a capped fetch of the product
//! collection (see [`crate::db::FETCH_CAP`]), matching the behavior of the
//! list endpoints rather than pushing aggregation into the store.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{DashboardStats, Product, StockDistribution};

/// Compute inventory-wide statistics from a fetched product set.
#[must_use]
#[allow(clippy::cast_possible_wrap)] // Set sizes are bounded by FETCH_CAP
pub fn compute_stats(products: &[Product], total_categories: i64) -> DashboardStats {
    let low_stock_count = products.iter().filter(|p| p.is_low_stock()).count() as i64;
    let total_stock_value = products.iter().map(Product::stock_value).sum();
    let total_quantity = products.iter().map(|p| p.quantity).sum();

    DashboardStats {
        total_products: products.len() as i64,
        total_categories,
        low_stock_count,
        total_stock_value,
        total_quantity,
    }
}

/// Group a fetched product set by category name.
///
/// Categories appear in first-seen order; categories with no products in the
/// set are omitted.
#[must_use]
pub fn compute_distribution(products: &[Product]) -> Vec<StockDistribution> {
    let mut by_category: Vec<StockDistribution> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let slot = match index.get(product.category.as_str()) {
            Some(&i) => i,
            None => {
                index.insert(product.category.as_str(), by_category.len());
                by_category.push(StockDistribution {
                    category: product.category.clone(),
                    count: 0,
                    total_value: Decimal::ZERO,
                });
                by_category.len() - 1
            }
        };

        if let Some(entry) = by_category.get_mut(slot) {
            entry.count += 1;
            entry.total_value += product.stock_value();
        }
    }

    by_category
}
