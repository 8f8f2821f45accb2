//! JSON Interchange
//!
//! Wire format for export and import. Export always writes the canonical
//! keys (`items`, `text`); import also accepts the legacy `data` and
//! `question` keys.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::item::{Item, ItemId, ItemType};
use crate::questionnaire::Questionnaire;

pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireDocument {
    #[serde(default)]
    pub title: String,
    #[serde(alias = "data")]
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Optional on import; fresh ids are assigned where missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub sequence: f64,
    #[serde(default, alias = "question")]
    pub text: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub text_area_size: String,
    #[serde(default)]
    pub max_label: String,
    #[serde(default)]
    pub min_label: String,
}

fn default_weight() -> f64 {
    1.0
}

impl ItemRecord {
    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            sequence: self.sequence,
            text: self.text,
            item_type: self.item_type,
            weight: self.weight,
            text_area_size: self.text_area_size,
            max_label: self.max_label,
            min_label: self.min_label,
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            sequence: item.sequence,
            text: item.text.clone(),
            item_type: item.item_type,
            weight: item.weight,
            text_area_size: item.text_area_size.clone(),
            max_label: item.max_label.clone(),
            min_label: item.min_label.clone(),
        }
    }
}

impl From<&Questionnaire> for QuestionnaireDocument {
    fn from(q: &Questionnaire) -> Self {
        Self {
            title: q.title.clone(),
            items: q.items.iter().map(ItemRecord::from).collect(),
        }
    }
}

/// Serialize the full questionnaire for download
pub fn to_json(questionnaire: &Questionnaire, pretty: bool) -> Result<String, serde_json::Error> {
    let doc = QuestionnaireDocument::from(questionnaire);
    if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
}

/// Parse an uploaded questionnaire file
pub fn parse(text: &str) -> Result<QuestionnaireDocument, ParseError> {
    let doc: QuestionnaireDocument = serde_json::from_str(text)?;
    log::debug!("[DOCUMENT] Parsed '{}' with {} items", doc.title, doc.items.len());
    Ok(doc)
}
