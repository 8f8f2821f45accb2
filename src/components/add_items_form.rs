//! Add Items Form Component
//!
//! "Add [n] more [type] question(s)" row under the item list.

use leptos::prelude::*;

use crate::components::TypeSelector;
use crate::context::use_editor_context;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// Form appending placeholder items of the chosen type
#[component]
pub fn AddItemsForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_editor_context();

    let add_items = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let quantity = store.add_quantity().get_untracked();
        let item_type = store.add_type().get_untracked();
        let max_batch = ctx.config.with_value(|c| c.max_batch);
        store_apply(&store, |state| state.add_items(&quantity, item_type, max_batch));
    };

    view! {
        <form class="add-items-form" on:submit=add_items>
            <input
                type="text"
                class="form-control add-quantity"
                aria-label="Quantity"
                prop:value=move || store.add_quantity().get()
                on:input=move |ev| *store.add_quantity().write() = event_target_value(&ev)
            />
            <span class="add-items-text">"more"</span>
            <TypeSelector
                current_type=Signal::derive(move || store.add_type().get())
                on_change=move |item_type| *store.add_type().write() = item_type
                label="New item type"
            />
            <span class="add-items-text">"question(s)"</span>
            <button type="submit" class="btn btn-primary">"Add Question"</button>
            <button
                type="button"
                class="btn btn-light"
                on:click=move |_| store_apply(&store, |state| state.renumber())
            >
                "Renumber sequences"
            </button>
        </form>
    }
}
