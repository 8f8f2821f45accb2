//! Questionnaire Editor Page
//!
//! Title, parameters, item table, add form, and the import/export dialogs.

use leptos::prelude::*;

use crate::components::{
    AddItemsForm, ExportModal, ImportModal, ItemTable, NoticeBanner, ParametersBar, TitleBar,
    ValidationList,
};
use crate::store::{store_open_dialog, use_app_store, AppStateStoreFields, Dialog};

#[component]
pub fn QuestionnaireEditor() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="questionnaire-editor">
            <NoticeBanner />
            <TitleBar />
            <ParametersBar />
            <ValidationList />
            <hr />

            <ItemTable />
            <AddItemsForm />
            <hr />

            <div class="import-export-row">
                <button
                    type="button"
                    class="import-export-btn"
                    on:click=move |_| store_open_dialog(&store, Dialog::Import)
                >
                    "Import Questionnaire"
                </button>
                <button
                    type="button"
                    class="import-export-btn"
                    on:click=move |_| store_open_dialog(&store, Dialog::Export)
                >
                    "Export Questionnaire"
                </button>
            </div>

            {move || match store.dialog().get() {
                Dialog::Import => view! { <ImportModal /> }.into_any(),
                Dialog::Export => view! { <ExportModal /> }.into_any(),
                Dialog::Closed => ().into_any(),
            }}
        </div>
    }
}
