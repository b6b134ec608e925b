//! Strongly-typed product identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a product, stable for the process lifetime.
///
/// Curated and generated ids are decimal integers rendered as strings
/// ("1", "2", …); the type itself accepts any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric view of a decimal id.
    ///
    /// The filler generator uses this to continue its id counter past the
    /// curated list's maximum. Non-decimal ids yield `None`.
    pub fn index(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CatalogError::invalid_id("product id cannot be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let id = ProductId::new("42");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("42"));
    }

    #[test]
    fn index_parses_decimal_ids() {
        assert_eq!(ProductId::new("16").index(), Some(16));
        assert_eq!(ProductId::new("sku-16").index(), None);
    }

    #[test]
    fn from_str_rejects_empty() {
        let err = "".parse::<ProductId>().unwrap_err();
        match err {
            CatalogError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn from_u32_renders_decimal() {
        assert_eq!(ProductId::from(17).as_str(), "17");
        assert_eq!(ProductId::from(17).to_string(), "17");
    }
}
