//! Todo List Component
//!
//! Renders the cached todos, one row each.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, visible_rows, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || visible_rows(&store.status().read(), &store.cache().read());

    view! {
        <ul class="todo-list">
            <For
                each=rows
                // Key on every mutable field so a merged toggle re-renders the row
                key=|todo| (todo.id.clone(), todo.text.clone(), todo.done)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
