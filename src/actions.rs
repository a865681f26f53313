//! Todo Actions
//!
//! The create / toggle / delete flows behind the list view. Each flow
//! talks to the backend through `TodoApi` and hands back the cache
//! update the view should apply.

use crate::cache::CacheUpdate;
use crate::error::ClientResult;
use crate::graphql::{TodoApi, ToggleTodoVariables};
use crate::models::{normalize_todo_text, Todo, TodoId};

/// Load the full list for the `todos` root query
pub async fn fetch_todos<A: TodoApi + ?Sized>(api: &A) -> ClientResult<Vec<Todo>> {
    let todos = api.get_todos().await?;
    log::debug!("fetched {} todos", todos.len());
    Ok(todos)
}

/// Submit a new todo. Blank input issues no request and yields `None`.
///
/// The backend assigns the id and defaults, so the caller refetches
/// instead of writing the row into the cache.
pub async fn create_todo<A: TodoApi + ?Sized>(api: &A, raw: &str) -> ClientResult<Option<CacheUpdate>> {
    let Some(text) = normalize_todo_text(raw) else {
        return Ok(None);
    };
    let inserted = api.add_todo(&text).await?;
    log::info!("created {} todo(s)", inserted.len());
    Ok(Some(CacheUpdate::Refetch))
}

/// What the new-todo form does once a create attempt settles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOutcome {
    pub clear_input: bool,
    pub refetch: bool,
}

/// Resolve a finished create. Only a successful insert clears the input;
/// blank input and failures leave it untouched.
pub fn settle_create<F>(result: ClientResult<Option<CacheUpdate>>, apply: F) -> CreateOutcome
where
    F: FnOnce(CacheUpdate) -> bool,
{
    match result {
        Ok(Some(update)) => CreateOutcome {
            clear_input: true,
            refetch: apply(update),
        },
        Ok(None) => CreateOutcome::default(),
        Err(e) => {
            log::error!("addTodo failed: {}", e);
            CreateOutcome::default()
        }
    }
}

/// Flip `done` for one todo; the returned rows reconcile the cache.
pub async fn toggle_todo<A: TodoApi + ?Sized>(api: &A, todo: &Todo) -> ClientResult<CacheUpdate> {
    let variables = ToggleTodoVariables::flip(todo);
    let rows = api.toggle_todo(&variables).await?;
    log::debug!("toggled {} -> done={}", variables.id, variables.done);
    Ok(CacheUpdate::Merge(rows))
}

/// Toggle the cached copy of a todo. A row already evicted sends nothing.
pub async fn toggle_cached<A: TodoApi + ?Sized>(
    api: &A,
    current: Option<Todo>,
) -> ClientResult<Option<CacheUpdate>> {
    match current {
        Some(todo) => toggle_todo(api, &todo).await.map(Some),
        None => Ok(None),
    }
}

/// Cache update to apply as soon as a delete is confirmed
pub fn evict_on_delete(id: &TodoId) -> CacheUpdate {
    CacheUpdate::Evict(id.clone())
}

/// Evict the row, then ask the backend to delete it. The eviction is
/// applied before the request starts and is never rolled back.
pub async fn confirm_delete<A, F>(api: &A, id: &TodoId, apply: F) -> ClientResult<()>
where
    A: TodoApi + ?Sized,
    F: FnOnce(CacheUpdate),
{
    apply(evict_on_delete(id));
    delete_todo(api, id).await
}

pub async fn delete_todo<A: TodoApi + ?Sized>(api: &A, id: &TodoId) -> ClientResult<()> {
    let affected = api.delete_todo(id).await?;
    if affected == 0 {
        log::warn!("delete of {} matched no rows", id);
    }
    Ok(())
}
