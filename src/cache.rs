//! Normalized Todo Cache
//!
//! Client-side copy of backend query results. Entities are stored once,
//! keyed by id; the `todos` root query keeps only an ordered id list.

use std::collections::HashMap;

use crate::models::{Todo, TodoId};

/// How a finished (or starting) operation updates the cache
#[derive(Debug, Clone, PartialEq)]
pub enum CacheUpdate {
    /// Re-run `getTodos` and replace the root list with the result.
    Refetch,
    /// Write returned rows over the cached entities with the same id.
    Merge(Vec<Todo>),
    /// Drop one entity without asking the backend.
    Evict(TodoId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoCache {
    entities: HashMap<TodoId, Todo>,
    root: Vec<TodoId>,
}

impl TodoCache {
    /// Replace the `todos` root query with a fresh backend result
    pub fn write_todos(&mut self, todos: Vec<Todo>) {
        self.root = todos.iter().map(|t| t.id.clone()).collect();
        self.entities = todos.into_iter().map(|t| (t.id.clone(), t)).collect();
    }

    /// Resolve the root query against the entity map, in backend order
    pub fn read_todos(&self) -> Vec<Todo> {
        self.root
            .iter()
            .filter_map(|id| self.entities.get(id))
            .cloned()
            .collect()
    }

    /// Overwrite cached entities by id. Unknown ids are not added to the
    /// root list; the next refetch brings them in.
    pub fn merge(&mut self, rows: Vec<Todo>) {
        for row in rows {
            if let Some(entity) = self.entities.get_mut(&row.id) {
                *entity = row;
            }
        }
    }

    pub fn evict(&mut self, id: &TodoId) {
        self.entities.remove(id);
        self.root.retain(|rid| rid != id);
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.entities.get(id)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Count of cached todos not yet done
    pub fn remaining(&self) -> usize {
        self.read_todos().iter().filter(|t| !t.done).count()
    }

    /// Apply a local update. Returns `true` when the caller still has to
    /// refetch from the backend.
    pub fn apply(&mut self, update: CacheUpdate) -> bool {
        match update {
            CacheUpdate::Refetch => true,
            CacheUpdate::Merge(rows) => {
                self.merge(rows);
                false
            }
            CacheUpdate::Evict(id) => {
                self.evict(&id);
                false
            }
        }
    }
}
