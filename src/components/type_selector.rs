//! Type Selector Component
//!
//! Reusable item type dropdown.

use leptos::prelude::*;
use questionnaire_model::ItemType;

/// Dropdown over every item type
#[component]
pub fn TypeSelector(
    current_type: Signal<ItemType>,
    on_change: impl Fn(ItemType) + Copy + 'static,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <select
            class="form-select type-selector"
            aria-label=label
            on:change=move |ev| {
                if let Some(item_type) = ItemType::parse(&event_target_value(&ev)) {
                    on_change(item_type);
                }
            }
        >
            {ItemType::ALL.iter().map(|&item_type| {
                let is_selected = move || current_type.get() == item_type;
                view! {
                    <option value=item_type.as_str() prop:selected=is_selected>
                        {item_type.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
