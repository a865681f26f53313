//! Todo Operations
//!
//! Documents, variables and response shapes for the `todos` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GraphQlClient, NoVariables, Operation, TodoApi};
use crate::error::ClientResult;
use crate::models::{Todo, TodoId};

// ========================
// Variables
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddTodoVariables {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleTodoVariables {
    pub id: TodoId,
    pub done: bool,
}

impl ToggleTodoVariables {
    /// Request the opposite of the todo's current completion state
    pub fn flip(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            done: !todo.done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteTodoVariables {
    pub id: TodoId,
}

// ========================
// Response Data
// ========================

#[derive(Debug, Deserialize)]
pub struct GetTodosData {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub struct ReturningRows {
    pub returning: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub struct AffectedRows {
    pub affected_rows: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddTodoData {
    pub insert_todos: ReturningRows,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTodoData {
    pub update_todos: ReturningRows,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoData {
    pub delete_todos: AffectedRows,
}

// ========================
// Operations
// ========================

pub struct GetTodos;

impl Operation for GetTodos {
    const NAME: &'static str = "getTodos";
    const DOCUMENT: &'static str = r#"query getTodos {
  todos {
    id
    text
    done
  }
}"#;
    type Variables = NoVariables;
    type Data = GetTodosData;
}

pub struct AddTodo;

impl Operation for AddTodo {
    const NAME: &'static str = "addTodo";
    const DOCUMENT: &'static str = r#"mutation addTodo($text: String!) {
  insert_todos(objects: {text: $text}) {
    returning {
      id
      text
      done
    }
  }
}"#;
    type Variables = AddTodoVariables;
    type Data = AddTodoData;
}

pub struct ToggleTodo;

impl Operation for ToggleTodo {
    const NAME: &'static str = "toggleTodo";
    const DOCUMENT: &'static str = r#"mutation toggleTodo($id: uuid!, $done: Boolean!) {
  update_todos(where: {id: {_eq: $id}}, _set: {done: $done}) {
    returning {
      id
      text
      done
    }
  }
}"#;
    type Variables = ToggleTodoVariables;
    type Data = ToggleTodoData;
}

pub struct DeleteTodo;

impl Operation for DeleteTodo {
    const NAME: &'static str = "deleteTodo";
    const DOCUMENT: &'static str = r#"mutation deleteTodo($id: uuid!) {
  delete_todos(where: {id: {_eq: $id}}) {
    affected_rows
  }
}"#;
    type Variables = DeleteTodoVariables;
    type Data = DeleteTodoData;
}

#[async_trait(?Send)]
impl TodoApi for GraphQlClient {
    async fn get_todos(&self) -> ClientResult<Vec<Todo>> {
        let data = self.execute::<GetTodos>(&NoVariables {}).await?;
        Ok(data.todos)
    }

    async fn add_todo(&self, text: &str) -> ClientResult<Vec<Todo>> {
        let variables = AddTodoVariables { text: text.to_string() };
        let data = self.execute::<AddTodo>(&variables).await?;
        Ok(data.insert_todos.returning)
    }

    async fn toggle_todo(&self, variables: &ToggleTodoVariables) -> ClientResult<Vec<Todo>> {
        let data = self.execute::<ToggleTodo>(variables).await?;
        Ok(data.update_todos.returning)
    }

    async fn delete_todo(&self, id: &TodoId) -> ClientResult<u64> {
        let variables = DeleteTodoVariables { id: id.clone() };
        let data = self.execute::<DeleteTodo>(&variables).await?;
        Ok(data.delete_todos.affected_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, done: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            text: format!("Todo {}", id),
            done,
        }
    }

    #[test]
    fn test_flip_requests_opposite_state_for_same_id() {
        let vars = ToggleTodoVariables::flip(&todo("x", false));
        assert_eq!(vars, ToggleTodoVariables { id: TodoId::new("x"), done: true });

        let vars = ToggleTodoVariables::flip(&todo("y", true));
        assert_eq!(vars, ToggleTodoVariables { id: TodoId::new("y"), done: false });
    }

    #[test]
    fn test_documents_declare_expected_arguments() {
        assert!(AddTodo::DOCUMENT.contains("$text: String!"));
        assert!(ToggleTodo::DOCUMENT.contains("$id: uuid!, $done: Boolean!"));
        assert!(DeleteTodo::DOCUMENT.contains("$id: uuid!"));
        assert!(GetTodos::DOCUMENT.starts_with("query getTodos"));
    }

    #[test]
    fn test_mutation_payloads_decode() {
        let add: AddTodoData = serde_json::from_str(
            r#"{"insert_todos":{"returning":[{"id":"n1","text":"new","done":false}]}}"#,
        )
        .unwrap();
        assert_eq!(add.insert_todos.returning.len(), 1);
        assert_eq!(add.insert_todos.returning[0].text, "new");

        let del: DeleteTodoData =
            serde_json::from_str(r#"{"delete_todos":{"affected_rows":1}}"#).unwrap();
        assert_eq!(del.delete_todos.affected_rows, 1);
    }
}
