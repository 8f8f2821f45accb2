//! Editor Configuration
//!
//! Defaults for the editor. The host page may override any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::item::ItemType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Name offered for the exported download
    pub export_file_name: String,
    /// Upper bound on items appended by one "Add Question" click
    pub max_batch: usize,
    /// Type preselected in the add-items form
    pub default_item_type: ItemType,
    /// Quantity preselected in the add-items form
    pub default_quantity: String,
    pub pretty_export: bool,
    /// How long a notice stays on screen
    pub notice_timeout_ms: u32,
    /// One of "error", "warn", "info", "debug", "trace"
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_file_name: "questionnaire.json".to_string(),
            max_batch: 100,
            default_item_type: ItemType::Criterion,
            default_quantity: "1".to_string(),
            pretty_export: true,
            notice_timeout_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parsed `log_level`, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"max_batch": 5, "default_item_type": "Scale"}"#).unwrap();
        assert_eq!(config.max_batch, 5);
        assert_eq!(config.default_item_type, ItemType::Scale);
        assert_eq!(config.export_file_name, "questionnaire.json");
        assert!(config.pretty_export);
    }

    #[test]
    fn test_level_filter() {
        let mut config = EditorConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
