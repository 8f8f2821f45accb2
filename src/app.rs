//! Questionnaire Editor App
//!
//! Root component: provides the store and context, then renders the editor.

use leptos::prelude::*;
use reactive_stores::Store;
use questionnaire_model::EditorConfig;

use crate::components::QuestionnaireEditor;
use crate::context::EditorContext;
use crate::store::AppState;

#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(&config));

    // Provide context to all children
    provide_context(store);
    provide_context(EditorContext::new(config));

    view! { <QuestionnaireEditor /> }
}
