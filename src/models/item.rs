//! Inventory item model and request bodies

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Inventory item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Conventionally distinguishing, not unique
    pub barcode: Option<String>,
    pub quantity: i32,
    pub photo_url: Option<String>,
    /// Item could not be found in the warehouse
    pub missing: bool,
    /// Item is present but damaged
    pub damaged: bool,
    pub notes: String,
}

/// Values applied to optional fields omitted from a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDefaults {
    pub missing: bool,
    pub damaged: bool,
    pub notes: String,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            missing: false,
            damaged: false,
            notes: String::new(),
        }
    }
}

/// Create item request
///
/// Nothing is validated here: absent required columns are sent to the
/// store as NULL and rejected there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub quantity: Option<i32>,
    pub photo_url: Option<String>,
    pub missing: Option<bool>,
    pub damaged: Option<bool>,
    pub notes: Option<String>,
}

impl CreateItem {
    /// Resolve the optional status fields against `defaults`
    pub fn with_defaults(self, defaults: &ItemDefaults) -> NewItem {
        NewItem {
            name: self.name,
            description: self.description,
            barcode: self.barcode,
            quantity: self.quantity,
            photo_url: self.photo_url,
            missing: self.missing.unwrap_or(defaults.missing),
            damaged: self.damaged.unwrap_or(defaults.damaged),
            notes: self.notes.unwrap_or_else(|| defaults.notes.clone()),
        }
    }
}

/// Insert values for a new item, defaults already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub quantity: Option<i32>,
    pub photo_url: Option<String>,
    pub missing: bool,
    pub damaged: bool,
    pub notes: String,
}

/// Replace item request: every mutable field is rewritten
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub quantity: Option<i32>,
    pub photo_url: Option<String>,
    pub missing: Option<bool>,
    pub damaged: Option<bool>,
    pub notes: Option<String>,
}

impl From<&Item> for UpdateItem {
    fn from(item: &Item) -> Self {
        Self {
            name: Some(item.name.clone()),
            description: item.description.clone(),
            barcode: item.barcode.clone(),
            quantity: Some(item.quantity),
            photo_url: item.photo_url.clone(),
            missing: Some(item.missing),
            damaged: Some(item.damaged),
            notes: Some(item.notes.clone()),
        }
    }
}

/// Quantity adjustment request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct QuantityAdjustment {
    /// Signed delta added to the current quantity
    pub quantity: i32,
}

/// Quantity adjustment response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuantityAdjusted {
    pub success: bool,
    pub item: Item,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_applied() {
        let request: CreateItem = serde_json::from_value(serde_json::json!({
            "name": "Pallet jack",
            "description": "Manual",
            "barcode": "PJ-1",
            "quantity": 2,
            "photo_url": ""
        }))
        .unwrap();

        let new_item = request.with_defaults(&ItemDefaults::default());
        assert_eq!(new_item.name.as_deref(), Some("Pallet jack"));
        assert_eq!(new_item.quantity, Some(2));
        assert!(!new_item.missing);
        assert!(!new_item.damaged);
        assert_eq!(new_item.notes, "");
    }

    #[test]
    fn test_create_explicit_values_win() {
        let request = CreateItem {
            missing: Some(true),
            notes: Some("shelf B".to_string()),
            ..Default::default()
        };
        let defaults = ItemDefaults {
            notes: "unchecked".to_string(),
            ..Default::default()
        };

        let new_item = request.with_defaults(&defaults);
        assert!(new_item.missing);
        assert!(!new_item.damaged);
        assert_eq!(new_item.notes, "shelf B");
    }

    #[test]
    fn test_update_from_item_copies_all_fields() {
        let item = Item {
            id: 7,
            name: "Crate".to_string(),
            description: None,
            barcode: Some("C-7".to_string()),
            quantity: 3,
            photo_url: None,
            missing: false,
            damaged: true,
            notes: "cracked lid".to_string(),
        };

        let update = UpdateItem::from(&item);
        assert_eq!(update.name.as_deref(), Some("Crate"));
        assert_eq!(update.barcode.as_deref(), Some("C-7"));
        assert_eq!(update.quantity, Some(3));
        assert_eq!(update.damaged, Some(true));
        assert_eq!(update.notes.as_deref(), Some("cracked lid"));
    }
}
