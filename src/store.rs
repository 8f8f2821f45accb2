//! Editor Store
//!
//! Questionnaire editor page state: the editor model, the add-items form
//! inputs and the open dialog. Components update it through the
//! `store_*` helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use questionnaire_model::{EditorConfig, EditorError, EditorState, ItemType, QuestionnaireDocument};

/// Which dialog is showing, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    Import,
    Export,
}

/// Editor page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Questionnaire plus review parameters
    pub editor: EditorState,
    /// Quantity typed into the add-items form
    pub add_quantity: String,
    /// Type chosen in the add-items form
    pub add_type: ItemType,
    pub dialog: Dialog,
}

impl AppState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            editor: EditorState::default(),
            add_quantity: config.default_quantity.clone(),
            add_type: config.default_item_type,
            dialog: Dialog::Closed,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the editor state with the result of an update function
pub fn store_apply(store: &AppStore, update: impl FnOnce(&EditorState) -> EditorState) {
    let next = update(&store.editor().read_untracked());
    *store.editor().write() = next;
}

/// Like [`store_apply`] for updates that can reject their input. On error
/// the editor state is left as it was.
pub fn store_try_apply(
    store: &AppStore,
    update: impl FnOnce(&EditorState) -> Result<EditorState, EditorError>,
) -> Result<(), EditorError> {
    let next = update(&store.editor().read_untracked())?;
    *store.editor().write() = next;
    Ok(())
}

pub fn store_open_dialog(store: &AppStore, dialog: Dialog) {
    *store.dialog().write() = dialog;
}

pub fn store_close_dialog(store: &AppStore) {
    *store.dialog().write() = Dialog::Closed;
}

/// Apply an imported document only while the import dialog is still open,
/// then close it. Returns false when the dialog was closed in the meantime.
pub fn store_import_if_open(store: &AppStore, doc: QuestionnaireDocument) -> bool {
    if store.dialog().get_untracked() != Dialog::Import {
        return false;
    }
    store_apply(store, move |state| state.import(doc));
    store_close_dialog(store);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_model::parse;

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.set();
        test(Store::new(AppState::new(&EditorConfig::default())));
    }

    fn one_item_doc() -> QuestionnaireDocument {
        parse(r#"{"title": "Imported", "items": [{"sequence": 1, "type": "Scale"}]}"#).unwrap()
    }

    #[test]
    fn test_import_applies_while_dialog_open() {
        with_store(|store| {
            store_open_dialog(&store, Dialog::Import);
            assert!(store_import_if_open(&store, one_item_doc()));
            assert_eq!(store.dialog().get_untracked(), Dialog::Closed);
            let editor = store.editor().get_untracked();
            assert_eq!(editor.questionnaire().title, "Imported");
            assert_eq!(editor.items().len(), 1);
        });
    }

    #[test]
    fn test_import_ignored_after_dialog_closed() {
        with_store(|store| {
            store_open_dialog(&store, Dialog::Import);
            store_close_dialog(&store);
            assert!(!store_import_if_open(&store, one_item_doc()));
            let editor = store.editor().get_untracked();
            assert_eq!(editor.questionnaire().title, "Edit Teammate Review");
            assert_eq!(editor.items().len(), 10);
        });
    }

    #[test]
    fn test_import_ignored_when_other_dialog_open() {
        with_store(|store| {
            store_open_dialog(&store, Dialog::Export);
            assert!(!store_import_if_open(&store, one_item_doc()));
            assert_eq!(store.dialog().get_untracked(), Dialog::Export);
            assert_eq!(store.editor().get_untracked().items().len(), 10);
        });
    }

    #[test]
    fn test_rejected_edit_keeps_committed_value() {
        with_store(|store| {
            let id = store.editor().get_untracked().items()[0].id;
            let err = store_try_apply(&store, |state| {
                state.edit_item(id, questionnaire_model::ItemEdit::Weight("heavy".to_string()))
            });
            assert!(err.is_err());
            assert_eq!(store.editor().get_untracked().items()[0].weight, 1.0);

            let err = store_try_apply(&store, |state| state.set_min_score("low"));
            assert!(err.is_err());
            assert_eq!(store.editor().get_untracked().params().min_score, 0);
        });
    }
}
