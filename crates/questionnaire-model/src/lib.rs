//! Questionnaire Model
//!
//! Framework-free editing model for review questionnaires:
//! - item / questionnaire: core entities and the seeded questionnaire
//! - editor: editor state with pure update functions
//! - document: JSON interchange (export / import)
//! - validation: inline checks shown next to the form
//! - config: editor defaults, overridable by the host page

mod config;
mod document;
mod editor;
mod error;
mod input;
mod item;
mod questionnaire;
mod validation;

#[cfg(test)]
mod tests;

pub use config::EditorConfig;
pub use document::{parse, to_json, ItemRecord, QuestionnaireDocument, EXPORT_MIME_TYPE};
pub use editor::{EditorParams, EditorState, ItemEdit, MAX_IMPORTED_ID};
pub use error::{EditorError, ParseError, ValidationError};
pub use input::parse_int;
pub use item::{Item, ItemId, ItemType};
pub use questionnaire::Questionnaire;
pub use validation::validate;
