//! Inventory Item model
//!
//! Represents one stocked ingredient on the bar shelf.

use serde::{Deserialize, Serialize};

/// A stocked ingredient
///
/// Only `name` takes part in availability matching. Volumes and unit are
/// carried through as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub volume_remaining: f64,
    #[serde(default)]
    pub volume_total: f64,
    #[serde(default)]
    pub unit: String,
}

impl InventoryItem {
    /// Create a named item with the given volumes
    pub fn new(name: impl Into<String>, volume_remaining: f64, volume_total: f64, unit: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            volume_remaining,
            volume_total,
            unit: unit.into(),
        }
    }

    /// Create a named item with no volume information
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"name":"Gin","volumeRemaining":350.0,"volumeTotal":700.0,"unit":"ml"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, InventoryItem::new("Gin", 350.0, 700.0, "ml"));
    }

    #[test]
    fn test_deserialize_missing_name() {
        let item: InventoryItem = serde_json::from_str(r#"{"unit":"bottle"}"#).unwrap();
        assert_eq!(item.name, None);
        assert_eq!(item.volume_remaining, 0.0);
        assert_eq!(item.unit, "bottle");
    }

    #[test]
    fn test_deserialize_null_name() {
        let item: InventoryItem = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(item.name, None);
    }
}
