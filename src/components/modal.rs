//! Modal Component
//!
//! Dialog frame shared by the import and export dialogs. Close returns the
//! editor to the no-dialog state.

use leptos::prelude::*;

use crate::store::{store_close_dialog, use_app_store};

#[component]
pub fn Modal(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let store = use_app_store();
    let label = title.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true" aria-label=label>
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button
                        type="button"
                        class="btn btn-light close-btn"
                        on:click=move |_| store_close_dialog(&store)
                    >
                        "Close"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
