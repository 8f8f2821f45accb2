//! Parameters Bar Component
//!
//! Review-wide settings: score bounds and the privacy flag.

use leptos::prelude::*;
use questionnaire_model::{EditorError, EditorState};

use crate::context::use_editor_context;
use crate::store::{store_apply, store_try_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn ParametersBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_editor_context();

    let min_score = move || store.editor().read().params().min_score.to_string();
    let max_score = move || store.editor().read().params().max_score.to_string();
    let is_private = move || store.editor().read().params().is_private;

    // On rejection, show the notice and put the committed value back
    let report = move |ev: &web_sys::Event, result: Result<(), EditorError>, committed: String| {
        if let Err(err) = result {
            ctx.notify(err.to_string());
            event_target::<web_sys::HtmlInputElement>(ev).set_value(&committed);
        }
    };

    view! {
        <div class="parameters-bar">
            <label class="parameter">
                "Min item score:"
                <input
                    type="number"
                    class="form-control"
                    min="0"
                    prop:value=min_score
                    on:change=move |ev| {
                        let input = event_target_value(&ev);
                        report(&ev, store_try_apply(&store, |state| state.set_min_score(&input)), min_score());
                    }
                />
            </label>
            <label class="parameter">
                "Max item score:"
                <input
                    type="number"
                    class="form-control"
                    min="0"
                    prop:value=max_score
                    on:change=move |ev| {
                        let input = event_target_value(&ev);
                        report(&ev, store_try_apply(&store, |state| state.set_max_score(&input)), max_score());
                    }
                />
            </label>
            <label class="parameter">
                "Is this Teammate review private: "
                <input
                    type="checkbox"
                    prop:checked=is_private
                    on:change=move |_| store_apply(&store, EditorState::toggle_private)
                />
            </label>
        </div>
    }
}
