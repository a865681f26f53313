//! New Todo Form Component
//!
//! Text input for creating todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{store_apply, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let client = ctx.client();

        spawn_local(async move {
            let result = actions::create_todo(&client, &text).await;
            let outcome = actions::settle_create(result, |update| store_apply(&store, update));
            if outcome.clear_input {
                set_new_text.set(String::new());
            }
            if outcome.refetch {
                ctx.refetch();
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
