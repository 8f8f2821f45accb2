//! Validation List Component
//!
//! Inline list of problems in the current questionnaire.

use leptos::prelude::*;
use questionnaire_model::validate;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ValidationList() -> impl IntoView {
    let store = use_app_store();
    let issues = Memo::new(move |_| {
        validate(&store.editor().read())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    });

    view! {
        <Show when=move || !issues.get().is_empty()>
            <ul class="validation-list" role="alert">
                {move || issues.get().into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
            </ul>
        </Show>
    }
}
