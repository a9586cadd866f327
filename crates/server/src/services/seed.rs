//! Sample data seeding.
//!
//! Seeds a fixed demo catalog of 5 categories and 10 products. Seeding is a
//! no-op whenever at least one category already exists, so repeated calls
//! never duplicate data.

use rust_decimal::Decimal;
use sqlx::PgPool;

use stockroom_core::Sku;

use crate::db::products::NewProduct;
use crate::db::{CategoryRepository, ProductRepository, RepositoryError};

struct SeedCategory {
    name: &'static str,
    description: &'static str,
}

struct SeedProduct {
    name: &'static str,
    sku: &'static str,
    category: &'static str,
    quantity: i64,
    unit_price_cents: i64,
    reorder_level: i64,
    description: &'static str,
}

const SEED_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Electronics",
        description: "Electronic devices and accessories",
    },
    SeedCategory {
        name: "Furniture",
        description: "Office and home furniture",
    },
    SeedCategory {
        name: "Stationery",
        description: "Office supplies and stationery",
    },
    SeedCategory {
        name: "Clothing",
        description: "Apparel and accessories",
    },
    SeedCategory {
        name: "Food & Beverages",
        description: "Food items and drinks",
    },
];

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Laptop Dell XPS 15",
        sku: "ELEC-001",
        category: "Electronics",
        quantity: 25,
        unit_price_cents: 129_999,
        reorder_level: 10,
        description: "High-performance laptop",
    },
    SeedProduct {
        name: "Wireless Mouse",
        sku: "ELEC-002",
        category: "Electronics",
        quantity: 150,
        unit_price_cents: 2_999,
        reorder_level: 50,
        description: "Ergonomic wireless mouse",
    },
    SeedProduct {
        name: "Office Chair Premium",
        sku: "FURN-001",
        category: "Furniture",
        quantity: 8,
        unit_price_cents: 29_999,
        reorder_level: 15,
        description: "Ergonomic office chair",
    },
    SeedProduct {
        name: "Standing Desk",
        sku: "FURN-002",
        category: "Furniture",
        quantity: 12,
        unit_price_cents: 49_999,
        reorder_level: 10,
        description: "Adjustable standing desk",
    },
    SeedProduct {
        name: "Notebook A4",
        sku: "STAT-001",
        category: "Stationery",
        quantity: 500,
        unit_price_cents: 399,
        reorder_level: 100,
        description: "Ruled notebook",
    },
    SeedProduct {
        name: "Ballpoint Pens (Pack of 10)",
        sku: "STAT-002",
        category: "Stationery",
        quantity: 5,
        unit_price_cents: 599,
        reorder_level: 50,
        description: "Blue ink pens",
    },
    SeedProduct {
        name: "Business Shirt",
        sku: "CLTH-001",
        category: "Clothing",
        quantity: 45,
        unit_price_cents: 4_999,
        reorder_level: 20,
        description: "Formal business shirt",
    },
    SeedProduct {
        name: "Coffee Beans (1kg)",
        sku: "FOOD-001",
        category: "Food & Beverages",
        quantity: 3,
        unit_price_cents: 2_499,
        reorder_level: 20,
        description: "Premium arabica beans",
    },
    SeedProduct {
        name: "Bottled Water (24 pack)",
        sku: "FOOD-002",
        category: "Food & Beverages",
        quantity: 80,
        unit_price_cents: 899,
        reorder_level: 30,
        description: "Natural spring water",
    },
    SeedProduct {
        name: "USB-C Cable",
        sku: "ELEC-003",
        category: "Electronics",
        quantity: 200,
        unit_price_cents: 1_299,
        reorder_level: 80,
        description: "2m USB-C charging cable",
    },
];

/// Insert the demo catalog unless any category already exists.
///
/// Returns `true` if data was seeded, `false` if the store already held at
/// least one category and nothing was written.
///
/// # Errors
///
/// Returns `RepositoryError` if any insert fails.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, RepositoryError> {
    let categories = CategoryRepository::new(pool);

    if categories.count().await? > 0 {
        return Ok(false);
    }

    for entry in SEED_CATEGORIES {
        categories.create(entry.name, Some(entry.description)).await?;
    }

    let products = ProductRepository::new(pool);
    for entry in SEED_PRODUCTS {
        let sku = Sku::parse(entry.sku).map_err(|e| {
            RepositoryError::DataCorruption(format!("seed catalog SKU {}: {e}", entry.sku))
        })?;

        products
            .create(NewProduct {
                name: entry.name,
                sku: &sku,
                category: entry.category,
                quantity: entry.quantity,
                unit_price: Decimal::new(entry.unit_price_cents, 2),
                reorder_level: entry.reorder_level,
                description: Some(entry.description),
            })
            .await?;
    }

    tracing::info!(
        categories = SEED_CATEGORIES.len(),
        products = SEED_PRODUCTS.len(),
        "Seeded sample data"
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(SEED_CATEGORIES.len(), 5);
        assert_eq!(SEED_PRODUCTS.len(), 10);
    }

    #[test]
    fn test_catalog_skus_are_unique_and_valid() {
        let mut seen = HashSet::new();
        for product in SEED_PRODUCTS {
            assert!(Sku::parse(product.sku).is_ok(), "bad SKU {}", product.sku);
            assert!(seen.insert(product.sku), "duplicate SKU {}", product.sku);
        }
    }

    #[test]
    fn test_catalog_categories_exist() {
        let names: HashSet<_> = SEED_CATEGORIES.iter().map(|c| c.name).collect();
        for product in SEED_PRODUCTS {
            assert!(
                names.contains(product.category),
                "product {} references unknown category {}",
                product.sku,
                product.category
            );
        }
    }

    #[test]
    fn test_catalog_values_non_negative() {
        for product in SEED_PRODUCTS {
            assert!(product.quantity >= 0);
            assert!(product.unit_price_cents >= 0);
            assert!(product.reorder_level >= 0);
        }
    }
}
