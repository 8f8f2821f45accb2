//! Export Modal Component
//!
//! Downloads the questionnaire as a JSON document.

use leptos::prelude::*;
use questionnaire_model::{to_json, validate, EXPORT_MIME_TYPE};

use crate::commands;
use crate::components::Modal;
use crate::context::use_editor_context;
use crate::store::{store_close_dialog, use_app_store, AppStateStoreFields};

#[component]
pub fn ExportModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_editor_context();
    let file_name = ctx.config.with_value(|c| c.export_file_name.clone());

    let summary = move || {
        let editor = store.editor().read();
        format!("\"{}\" with {} items", editor.questionnaire().title, editor.items().len())
    };
    let has_issues = move || !validate(&store.editor().read()).is_empty();

    let on_download = {
        let file_name = file_name.clone();
        move |_| {
            let pretty = ctx.config.with_value(|c| c.pretty_export);
            let result = to_json(store.editor().read_untracked().questionnaire(), pretty)
                .map_err(|e| e.to_string())
                .and_then(|json| commands::download_text(&file_name, &json, EXPORT_MIME_TYPE));
            match result {
                Ok(()) => {
                    log::info!("[EXPORT] Downloaded {}", file_name);
                    store_close_dialog(&store);
                }
                Err(e) => ctx.notify(format!("Export failed: {}", e)),
            }
        }
    };

    view! {
        <Modal title="Export Questionnaire">
            <p>"Export " {summary} " as " <code>{file_name}</code> "."</p>
            <Show when=has_issues>
                <p class="export-warning">"The questionnaire has validation issues and will be exported as it is."</p>
            </Show>
            <button type="button" class="btn btn-primary" on:click=on_download>
                "Download"
            </button>
        </Modal>
    }
}
