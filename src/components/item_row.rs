//! Item Row Component
//!
//! One editable questionnaire item. Every field commits to the store as it
//! changes, so an export always reflects what is on screen.

use leptos::prelude::*;
use questionnaire_model::{Item, ItemEdit, ItemId};

use crate::components::TypeSelector;
use crate::context::use_editor_context;
use crate::store::{store_apply, store_try_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemRow(id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_editor_context();

    // Current value of one field of this item
    let field = move |read: fn(&Item) -> String| {
        move || {
            store
                .editor()
                .read()
                .questionnaire()
                .get(id)
                .map(read)
                .unwrap_or_default()
        }
    };

    // false when the edit was rejected
    let commit = move |edit: ItemEdit| match store_try_apply(&store, |state| state.edit_item(id, edit)) {
        Ok(()) => true,
        Err(err) => {
            ctx.notify(err.to_string());
            false
        }
    };
    let weight = field(|item| item.weight.to_string());

    let current_type = Signal::derive(move || {
        store
            .editor()
            .read()
            .questionnaire()
            .get(id)
            .map(|item| item.item_type)
            .unwrap_or_default()
    });

    view! {
        <div class="item-row">
            <div class="item-cell item-sequence">
                <input
                    type="text"
                    class="form-control"
                    aria-label="Sequence"
                    disabled=true
                    prop:value=field(|item| item.sequence.to_string())
                />
            </div>
            <div class="item-cell item-question">
                <textarea
                    rows="2"
                    aria-label="Question"
                    prop:value=field(|item| item.text.clone())
                    on:input=move |ev| { commit(ItemEdit::Text(event_target_value(&ev))); }
                ></textarea>
            </div>
            <div class="item-cell item-type">
                <TypeSelector
                    current_type=current_type
                    on_change=move |item_type| { commit(ItemEdit::Type(item_type)); }
                    label="Item type"
                />
            </div>
            <div class="item-cell item-weight">
                <input
                    type="number"
                    class="form-control"
                    aria-label="Weight"
                    min="0"
                    prop:value=weight
                    on:change=move |ev| {
                        if !commit(ItemEdit::Weight(event_target_value(&ev))) {
                            // Show the committed weight again
                            event_target::<web_sys::HtmlInputElement>(&ev).set_value(&weight());
                        }
                    }
                />
            </div>
            <div class="item-cell item-text-area-size">
                <input
                    type="text"
                    class="form-control"
                    aria-label="Text area size"
                    prop:value=field(|item| item.text_area_size.clone())
                    on:input=move |ev| { commit(ItemEdit::TextAreaSize(event_target_value(&ev))); }
                />
            </div>
            <div class="item-cell item-max-label">
                <input
                    type="text"
                    class="form-control"
                    aria-label="Max label"
                    prop:value=field(|item| item.max_label.clone())
                    on:input=move |ev| { commit(ItemEdit::MaxLabel(event_target_value(&ev))); }
                />
            </div>
            <div class="item-cell item-min-label">
                <input
                    type="text"
                    class="form-control"
                    aria-label="Min label"
                    prop:value=field(|item| item.min_label.clone())
                    on:input=move |ev| { commit(ItemEdit::MinLabel(event_target_value(&ev))); }
                />
            </div>
            <div class="item-cell item-action">
                <button
                    type="button"
                    class="btn btn-light remove-btn"
                    aria-label="Remove"
                    on:click=move |_| store_apply(&store, |state| state.remove_item(id))
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
