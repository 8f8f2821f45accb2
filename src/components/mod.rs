//! UI Components
//!
//! Reusable Leptos components.

mod add_items_form;
mod export_modal;
mod import_modal;
mod item_row;
mod item_table;
mod modal;
mod notice_banner;
mod parameters_bar;
mod questionnaire_editor;
mod title_bar;
mod type_selector;
mod validation_list;

pub use add_items_form::AddItemsForm;
pub use export_modal::ExportModal;
pub use import_modal::ImportModal;
pub use item_row::ItemRow;
pub use item_table::ItemTable;
pub use modal::Modal;
pub use notice_banner::NoticeBanner;
pub use parameters_bar::ParametersBar;
pub use questionnaire_editor::QuestionnaireEditor;
pub use title_bar::TitleBar;
pub use type_selector::TypeSelector;
pub use validation_list::ValidationList;
