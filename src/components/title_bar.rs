//! Title Bar Component
//!
//! Questionnaire heading with an editable title field.

use leptos::prelude::*;

use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn TitleBar() -> impl IntoView {
    let store = use_app_store();
    let title = move || store.editor().read().questionnaire().title.clone();

    view! {
        <div class="title-bar">
            <h1 class="questionnaire-title">{title}</h1>
            <input
                type="text"
                class="form-control title-input"
                aria-label="Title"
                prop:value=title
                on:input=move |ev| {
                    let title = event_target_value(&ev);
                    store_apply(&store, |state| state.set_title(&title));
                }
            />
        </div>
    }
}
