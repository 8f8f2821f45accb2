//! Item Table Component
//!
//! Column headings plus one row per item, in display order.

use leptos::prelude::*;
use questionnaire_model::ItemId;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

const HEADINGS: &[&str] = &[
    "Sequence",
    "Question",
    "Type",
    "Weight",
    "Text Area Size",
    "Max Label",
    "Min Label",
    "Action",
];

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_app_store();

    let item_ids = move || {
        store
            .editor()
            .read()
            .items()
            .iter()
            .map(|item| item.id)
            .collect::<Vec<ItemId>>()
    };
    let is_empty = move || store.editor().read().items().is_empty();

    view! {
        <div class="item-table">
            <div class="item-table-header">
                {HEADINGS.iter().map(|heading| view! { <h6>{*heading}</h6> }).collect_view()}
            </div>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-state">"No questions available"</p> }
            >
                <For
                    each=item_ids
                    key=|id| *id
                    children=move |id| view! { <ItemRow id=id /> }
                />
            </Show>
        </div>
    }
}
