//! Product domain and payload types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use stockroom_core::{ProductId, Sku, SkuError};

/// Default reorder level for new products.
pub const DEFAULT_REORDER_LEVEL: i64 = 10;

/// An inventory item (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Stock Keeping Unit (unique).
    pub sku: Sku,
    /// Category name (free-text reference, not a foreign key).
    pub category: String,
    /// Units currently in stock.
    pub quantity: i64,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Threshold at or below which the product is considered low-stock.
    pub reorder_level: i64,
    /// Optional description.
    pub description: Option<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product is at or below its reorder level.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Total value of the units in stock.
    #[must_use]
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Errors produced when validating product payloads.
#[derive(Debug, Error)]
pub enum ProductValidationError {
    #[error("{0}")]
    Sku(#[from] SkuError),
    #[error("name cannot be empty")]
    EmptyName,
    #[error("category cannot be empty")]
    EmptyCategory,
    #[error("quantity cannot be negative")]
    NegativeQuantity,
    #[error("unit_price cannot be negative")]
    NegativePrice,
    #[error("reorder_level cannot be negative")]
    NegativeReorderLevel,
}

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(default = "default_reorder_level")]
    pub reorder_level: i64,
    #[serde(default)]
    pub description: Option<String>,
}

const fn default_reorder_level() -> i64 {
    DEFAULT_REORDER_LEVEL
}

impl CreateProduct {
    /// Validate the payload, returning the parsed SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ProductValidationError`] for an invalid SKU, empty name or
    /// category, or any negative quantity, price, or reorder level.
    pub fn validate(&self) -> Result<Sku, ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        if self.category.trim().is_empty() {
            return Err(ProductValidationError::EmptyCategory);
        }
        if self.quantity < 0 {
            return Err(ProductValidationError::NegativeQuantity);
        }
        if self.unit_price.is_sign_negative() {
            return Err(ProductValidationError::NegativePrice);
        }
        if self.reorder_level < 0 {
            return Err(ProductValidationError::NegativeReorderLevel);
        }
        Ok(Sku::parse(&self.sku)?)
    }
}

/// Partial update for a product.
///
/// Fields absent from the request body are left untouched. `description` is
/// modeled with a nested `Option` so that an explicit `"description": null`
/// (clear it) is distinguishable from the field being omitted (keep it).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<Decimal>,
    pub reorder_level: Option<i64>,
    #[serde(deserialize_with = "deserialize_explicit_null")]
    pub description: Option<Option<String>>,
}

/// Deserialize a field so that presence (even as `null`) is recorded.
fn deserialize_explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    /// Validate the patch, returning the parsed SKU if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ProductValidationError`] for an invalid SKU, empty name or
    /// category, or any negative quantity, price, or reorder level.
    pub fn validate(&self) -> Result<Option<Sku>, ProductValidationError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ProductValidationError::EmptyName);
        }
        if let Some(category) = &self.category
            && category.trim().is_empty()
        {
            return Err(ProductValidationError::EmptyCategory);
        }
        if matches!(self.quantity, Some(q) if q < 0) {
            return Err(ProductValidationError::NegativeQuantity);
        }
        if matches!(self.unit_price, Some(p) if p.is_sign_negative()) {
            return Err(ProductValidationError::NegativePrice);
        }
        if matches!(self.reorder_level, Some(r) if r < 0) {
            return Err(ProductValidationError::NegativeReorderLevel);
        }
        self.sku.as_deref().map(Sku::parse).transpose().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(quantity: i64, reorder_level: i64, unit_price: Decimal) -> Product {
        Product {
            id: ProductId::generate(),
            name: "Widget".to_string(),
            sku: Sku::parse("WID-001").unwrap(),
            category: "Widgets".to_string(),
            quantity,
            unit_price,
            reorder_level,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(product(10, 10, dec!(1.00)).is_low_stock());
        assert!(product(3, 10, dec!(1.00)).is_low_stock());
        assert!(!product(11, 10, dec!(1.00)).is_low_stock());
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(product(25, 10, dec!(1299.99)).stock_value(), dec!(32499.75));
        assert_eq!(product(0, 10, dec!(9.99)).stock_value(), dec!(0.00));
    }

    #[test]
    fn test_create_product_default_reorder_level() {
        let body: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "sku": "WID-001",
            "category": "Widgets",
            "quantity": 5,
            "unit_price": 9.99
        }))
        .unwrap();
        assert_eq!(body.reorder_level, DEFAULT_REORDER_LEVEL);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_negatives() {
        let body: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "sku": "WID-001",
            "category": "Widgets",
            "quantity": -1,
            "unit_price": 9.99
        }))
        .unwrap();
        assert!(matches!(
            body.validate(),
            Err(ProductValidationError::NegativeQuantity)
        ));
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let absent: ProductPatch = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.description, None);

        let null: ProductPatch =
            serde_json::from_value(serde_json::json!({ "description": null })).unwrap();
        assert_eq!(null.description, Some(None));

        let set: ProductPatch =
            serde_json::from_value(serde_json::json!({ "description": "hi" })).unwrap();
        assert_eq!(set.description, Some(Some("hi".to_string())));
    }

    #[test]
    fn test_patch_partial_fields() {
        let patch: ProductPatch = serde_json::from_value(serde_json::json!({
            "quantity": 7,
            "sku": "WID-002"
        }))
        .unwrap();
        assert_eq!(patch.quantity, Some(7));
        assert_eq!(patch.name, None);
        let sku = patch.validate().unwrap();
        assert_eq!(sku.unwrap().as_str(), "WID-002");
    }

    #[test]
    fn test_patch_rejects_bad_sku() {
        let patch: ProductPatch =
            serde_json::from_value(serde_json::json!({ "sku": "has space" })).unwrap();
        assert!(matches!(
            patch.validate(),
            Err(ProductValidationError::Sku(_))
        ));
    }
}
