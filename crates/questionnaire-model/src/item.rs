//! Item Entity
//!
//! One row of a questionnaire: a question, its kind, weight and labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable synthetic identifier, assigned when an item is created and
/// independent of the user-facing `sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item kind determines how the review form renders the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ItemType {
    #[default]
    Criterion,
    Scale,
    Cake,
    Dropdown,
    Checkbox,
    TextArea,
    TextField,
    UploadFile,
    SectionHeader,
    TableHeader,
    ColumnHeader,
}

impl ItemType {
    /// Every kind, in selector order
    pub const ALL: [ItemType; 11] = [
        ItemType::Criterion,
        ItemType::Scale,
        ItemType::Cake,
        ItemType::Dropdown,
        ItemType::Checkbox,
        ItemType::TextArea,
        ItemType::TextField,
        ItemType::UploadFile,
        ItemType::SectionHeader,
        ItemType::TableHeader,
        ItemType::ColumnHeader,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Criterion => "Criterion",
            ItemType::Scale => "Scale",
            ItemType::Cake => "Cake",
            ItemType::Dropdown => "Dropdown",
            ItemType::Checkbox => "Checkbox",
            ItemType::TextArea => "TextArea",
            ItemType::TextField => "TextField",
            ItemType::UploadFile => "UploadFile",
            ItemType::SectionHeader => "SectionHeader",
            ItemType::TableHeader => "TableHeader",
            ItemType::ColumnHeader => "ColumnHeader",
        }
    }

    /// Exact, case-sensitive lookup by name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) const PLACEHOLDER_TEXT: &str = "Type your question";
pub(crate) const PLACEHOLDER_MAX_LABEL: &str = "max value";
pub(crate) const PLACEHOLDER_MIN_LABEL: &str = "min value";
pub(crate) const DEFAULT_TEXT_AREA_SIZE: &str = "50, 30";

/// A questionnaire row
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// Ordering key; may be fractional
    pub sequence: f64,
    pub text: String,
    pub item_type: ItemType,
    pub weight: f64,
    /// Free-form "rows, cols"
    pub text_area_size: String,
    pub max_label: String,
    pub min_label: String,
}

impl Item {
    /// Create a new item with placeholder text and labels
    pub fn placeholder(id: ItemId, sequence: f64, item_type: ItemType) -> Self {
        Self {
            id,
            sequence,
            text: PLACEHOLDER_TEXT.to_string(),
            item_type,
            weight: 1.0,
            text_area_size: DEFAULT_TEXT_AREA_SIZE.to_string(),
            max_label: PLACEHOLDER_MAX_LABEL.to_string(),
            min_label: PLACEHOLDER_MIN_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_names_round_trip() {
        for t in ItemType::ALL {
            assert_eq!(ItemType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ItemType::parse("criterion"), None);
        assert_eq!(ItemType::parse(""), None);
    }

    #[test]
    fn test_item_type_serializes_as_name() {
        let json = serde_json::to_string(&ItemType::UploadFile).unwrap();
        assert_eq!(json, "\"UploadFile\"");
    }

    #[test]
    fn test_placeholder_defaults() {
        let item = Item::placeholder(ItemId(3), 3.0, ItemType::Scale);
        assert_eq!(item.text, "Type your question");
        assert_eq!(item.weight, 1.0);
        assert_eq!(item.text_area_size, "50, 30");
        assert_eq!(item.max_label, "max value");
        assert_eq!(item.min_label, "min value");
    }
}
