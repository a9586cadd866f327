//! Stock Keeping Unit (SKU) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on SKU length.
const MAX_SKU_LENGTH: usize = 64;

/// Errors that can occur when parsing a [`Sku`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SkuError {
    /// The input string is empty.
    #[error("SKU cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("SKU must be at most {MAX_SKU_LENGTH} characters")]
    TooLong,
    /// The input contains whitespace.
    #[error("SKU cannot contain whitespace")]
    ContainsWhitespace,
}

/// A product's Stock Keeping Unit.
///
/// SKUs are free-form codes (e.g. `ELEC-001`) that uniquely identify a
/// product within the catalog. Uniqueness is enforced by the store, not by
/// this type.
///
/// ## Examples
///
/// ```
/// use stockroom_core::Sku;
///
/// assert!(Sku::parse("ELEC-001").is_ok());
/// assert!(Sku::parse("").is_err());
/// assert!(Sku::parse("has space").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Parse and validate a SKU.
    ///
    /// # Errors
    ///
    /// Returns [`SkuError`] if the input is empty, too long, or contains
    /// whitespace.
    pub fn parse(input: &str) -> Result<Self, SkuError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(SkuError::Empty);
        }
        if input.len() > MAX_SKU_LENGTH {
            return Err(SkuError::TooLong);
        }
        if input.chars().any(char::is_whitespace) {
            return Err(SkuError::ContainsWhitespace);
        }

        Ok(Self(input.to_owned()))
    }

    /// Get the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let sku = Sku::parse("ELEC-001").unwrap();
        assert_eq!(sku.as_str(), "ELEC-001");
    }

    #[test]
    fn test_parse_trims_outer_whitespace() {
        let sku = Sku::parse(" FURN-002 ").unwrap();
        assert_eq!(sku.as_str(), "FURN-002");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Sku::parse(""), Err(SkuError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let input = "X".repeat(MAX_SKU_LENGTH + 1);
        assert!(matches!(Sku::parse(&input), Err(SkuError::TooLong)));
    }

    #[test]
    fn test_parse_inner_whitespace() {
        assert!(matches!(
            Sku::parse("ELEC 001"),
            Err(SkuError::ContainsWhitespace)
        ));
    }
}
