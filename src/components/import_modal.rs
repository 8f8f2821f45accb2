//! Import Modal Component
//!
//! File picker that replaces the questionnaire with an uploaded document.

use leptos::prelude::*;
use leptos::task::spawn_local;
use questionnaire_model::parse;

use crate::commands;
use crate::components::Modal;
use crate::context::use_editor_context;
use crate::store::{store_import_if_open, use_app_store};

/// Import dialog. Closes after a successful import; a file that cannot be
/// read keeps the dialog open with the reason shown. A file that finishes
/// reading after the dialog was closed is discarded.
#[component]
pub fn ImportModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_editor_context();
    let (error, set_error) = signal::<Option<String>>(None);

    let on_file = move |ev: web_sys::Event| {
        let Some(file) = commands::selected_file(&ev) else { return; };
        set_error.set(None);

        spawn_local(async move {
            let name = file.name();
            let result = commands::read_file_text(&file)
                .await
                .and_then(|text| parse(&text).map_err(|e| e.to_string()));
            match result {
                Ok(doc) => {
                    if store_import_if_open(&store, doc) {
                        ctx.notify(format!("Imported {}", name));
                    } else {
                        log::info!("[IMPORT] Dialog closed before {} was read, ignoring it", name);
                    }
                }
                Err(e) => {
                    log::warn!("[IMPORT] {} rejected: {}", name, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <Modal title="Import Questionnaire">
            <p>"Choose a questionnaire JSON file. It replaces the questionnaire being edited."</p>
            <input
                type="file"
                class="form-control"
                aria-label="Questionnaire file"
                accept=".json,application/json"
                on:change=on_file
            />
            <Show when=move || error.get().is_some()>
                <p class="import-error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </Modal>
    }
}
