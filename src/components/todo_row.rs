//! Todo Row Component
//!
//! A single todo in the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// A single todo row. Double-click toggles completion.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let Todo { id, text, done } = todo;
    let toggle_id = id.clone();
    let label = text.clone();

    let on_toggle = move |_| {
        let client = ctx.client();
        let id = toggle_id.clone();
        // Read the cached copy; an evicted row must not be toggled
        let current = store.cache().read_untracked().get(&id).cloned();
        spawn_local(async move {
            match actions::toggle_cached(&client, current).await {
                Ok(Some(update)) => {
                    store_apply(&store, update);
                }
                Ok(None) => log::debug!("toggle skipped, {} no longer cached", id),
                Err(e) => log::error!("toggleTodo {} failed: {}", id, e),
            }
        });
    };

    let on_delete = move |_| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            let evict = |update| {
                store_apply(&store, update);
            };
            if let Err(e) = actions::confirm_delete(&client, &id, evict).await {
                log::error!("deleteTodo {} failed: {}", id, e);
            }
        });
    };

    view! {
        <li
            class=if done { "todo-row completed" } else { "todo-row" }
            title="Double-click to toggle"
            on:dblclick=on_toggle
        >
            <span class="todo-check">{if done { "☑" } else { "☐" }}</span>
            <span class="todo-text">{text}</span>
            <DeleteConfirmButton label=label on_confirm=on_delete />
        </li>
    }
}
