//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::graphql::GraphQlClient;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch todos from backend - read (tracked by the load effect)
    pub refetch_trigger: ReadSignal<u32>,
    /// Trigger to refetch todos from backend - write
    set_refetch_trigger: WriteSignal<u32>,
    /// Shared GraphQL client
    client: StoredValue<GraphQlClient>,
}

impl AppContext {
    pub fn new(refetch_trigger: (ReadSignal<u32>, WriteSignal<u32>), client: GraphQlClient) -> Self {
        Self {
            refetch_trigger: refetch_trigger.0,
            set_refetch_trigger: refetch_trigger.1,
            client: StoredValue::new(client),
        }
    }

    /// Trigger a refetch of the todo list
    pub fn refetch(&self) {
        self.set_refetch_trigger.update(|v| *v += 1);
    }

    /// Clone of the client, for moving into a spawned task
    pub fn client(&self) -> GraphQlClient {
        self.client.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
