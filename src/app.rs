//! Todo App
//!
//! Main application component: loading or error screen, otherwise the
//! new-todo form above the todo list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NewTodoForm, TodoFooter, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::graphql::GraphQlClient;
use crate::store::{screen, store_fetch_failed, store_fetched, AppState, AppStateStoreFields, Screen};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    log::info!("using GraphQL endpoint {}", config.endpoint);

    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(signal(0u32), GraphQlClient::new(config));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount and whenever a refetch is requested
    Effect::new(move |_| {
        let trigger = ctx.refetch_trigger.get();
        log::debug!("loading todos, trigger={}", trigger);
        let client = ctx.client();
        spawn_local(async move {
            match actions::fetch_todos(&client).await {
                Ok(todos) => store_fetched(&store, todos),
                Err(e) => store_fetch_failed(&store, e.to_string()),
            }
        });
    });

    // Loading and error screens replace the whole body, form included.
    // Only changes of state kind swap it; refetches keep the list mounted
    let current = Memo::new(move |_| screen(&store.status().read()));

    view! {
        <main class="todo-app">
            {move || match current.get() {
                Screen::Loading => view! {
                    <p class="status full-screen loading">"Loading..."</p>
                }.into_any(),
                Screen::Error(message) => view! {
                    <p class="status full-screen error" title=message>"Error: could not load todos."</p>
                }.into_any(),
                Screen::Todos => view! {
                    <h1>"Todos"</h1>
                    <NewTodoForm />
                    <TodoList />
                    <TodoFooter />
                }.into_any(),
            }}
        </main>
    }
}
