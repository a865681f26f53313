//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache::{CacheUpdate, TodoCache};
use crate::models::Todo;

/// Progress of the `getTodos` query
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryStatus {
    #[default]
    Loading,
    Failed(String),
    Loaded,
}

/// Which body the app renders
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    /// Full-screen loading notice
    Loading,
    /// Full-screen static error; no form, no rows
    Error(String),
    /// New-todo form, rows and footer
    Todos,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Normalized copy of backend todos
    pub cache: TodoCache,
    /// Status of the list query
    pub status: QueryStatus,
}

/// Record a failed fetch. Only the initial load switches to the error
/// state; a failed refetch keeps the rows already on screen.
pub fn record_fetch_failure(status: &mut QueryStatus, message: String) -> bool {
    if *status == QueryStatus::Loaded {
        return false;
    }
    *status = QueryStatus::Failed(message);
    true
}

pub fn screen(status: &QueryStatus) -> Screen {
    match status {
        QueryStatus::Loading => Screen::Loading,
        QueryStatus::Failed(message) => Screen::Error(message.clone()),
        QueryStatus::Loaded => Screen::Todos,
    }
}

/// Rows to render: the cached list once loaded, nothing otherwise
pub fn visible_rows(status: &QueryStatus, cache: &TodoCache) -> Vec<Todo> {
    match status {
        QueryStatus::Loaded => cache.read_todos(),
        QueryStatus::Loading | QueryStatus::Failed(_) => Vec::new(),
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Write a fetch result into the store
pub fn store_fetched(store: &AppStore, todos: Vec<Todo>) {
    store.cache().write().write_todos(todos);
    *store.status().write() = QueryStatus::Loaded;
}

/// Record a fetch failure in the store
pub fn store_fetch_failed(store: &AppStore, message: String) {
    if !record_fetch_failure(&mut store.status().write(), message.clone()) {
        log::error!("refetch failed, keeping cached todos: {}", message);
    }
}

/// Apply a cache update. Returns `true` when a refetch is still needed.
pub fn store_apply(store: &AppStore, update: CacheUpdate) -> bool {
    store.cache().write().apply(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;
    use pretty_assertions::assert_eq;

    fn make_todo(id: &str, done: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            text: format!("Todo {}", id),
            done,
        }
    }

    fn loaded(todos: Vec<Todo>) -> AppState {
        let mut cache = TodoCache::default();
        cache.write_todos(todos);
        AppState {
            cache,
            status: QueryStatus::Loaded,
        }
    }

    #[test]
    fn test_starts_loading_without_rows() {
        let state = AppState::default();
        assert_eq!(state.status, QueryStatus::Loading);
        assert!(visible_rows(&state.status, &state.cache).is_empty());
    }

    #[test]
    fn test_zero_todos_is_loaded_not_error() {
        let state = loaded(vec![]);
        assert_eq!(state.status, QueryStatus::Loaded);
        assert!(visible_rows(&state.status, &state.cache).is_empty());
    }

    #[test]
    fn test_initial_failure_shows_error_without_rows() {
        let mut state = AppState::default();
        state.cache.write_todos(vec![make_todo("stale", false)]);

        assert!(record_fetch_failure(&mut state.status, "network down".to_string()));
        assert_eq!(state.status, QueryStatus::Failed("network down".to_string()));
        assert!(visible_rows(&state.status, &state.cache).is_empty());
    }

    #[test]
    fn test_failed_refetch_keeps_rows() {
        let mut state = loaded(vec![make_todo("a", false)]);

        assert!(!record_fetch_failure(&mut state.status, "timeout".to_string()));
        assert_eq!(state.status, QueryStatus::Loaded);
        assert_eq!(visible_rows(&state.status, &state.cache), vec![make_todo("a", false)]);
    }

    #[test]
    fn test_rows_follow_cache_updates() {
        let mut state = loaded(vec![make_todo("a", false), make_todo("b", false)]);
        state.cache.apply(CacheUpdate::Evict(TodoId::new("a")));
        assert_eq!(visible_rows(&state.status, &state.cache), vec![make_todo("b", false)]);
    }

    #[test]
    fn test_form_only_on_todos_screen() {
        let mut state = AppState::default();
        assert_eq!(screen(&state.status), Screen::Loading);

        record_fetch_failure(&mut state.status, "offline".to_string());
        assert_eq!(screen(&state.status), Screen::Error("offline".to_string()));

        let state = loaded(vec![]);
        assert_eq!(screen(&state.status), Screen::Todos);
    }
}
