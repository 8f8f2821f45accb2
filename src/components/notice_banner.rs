//! Notice Banner Component
//!
//! Transient message for rejected input and failed browser actions.

use leptos::prelude::*;

use crate::context::use_editor_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_editor_context();

    view! {
        <Show when=move || ctx.notice.get().is_some()>
            <div class="notice-banner" role="status">
                <span class="notice-text">{move || ctx.notice.get().unwrap_or_default()}</span>
                <button type="button" class="close-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        </Show>
    }
}
