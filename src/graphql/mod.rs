//! GraphQL Client
//!
//! Thin GraphQL-over-HTTP client for the hosted todo backend, organized
//! by operation.

mod todo;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Todo, TodoId};

pub use todo::*;

/// A named GraphQL document with typed variables and response data
pub trait Operation {
    const NAME: &'static str;
    const DOCUMENT: &'static str;
    type Variables: Serialize;
    type Data: DeserializeOwned;
}

/// Empty `variables` object for operations without arguments
#[derive(Debug, Default, Serialize)]
pub struct NoVariables {}

// ========================
// Wire Envelopes
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
    operation_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlErrorItem>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorItem {
    message: String,
}

/// Decode a response body. A non-empty `errors` array wins over partial data.
fn decode_response<D: DeserializeOwned>(operation: &'static str, body: &str) -> ClientResult<D> {
    let response: GraphQlResponse<D> = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(ClientError::GraphQl(messages.join("; ")));
    }
    response.data.ok_or(ClientError::MissingData { operation })
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GraphQlClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn execute<O: Operation>(&self, variables: &O::Variables) -> ClientResult<O::Data> {
        let body = GraphQlRequest {
            query: O::DOCUMENT,
            variables,
            operation_name: O::NAME,
        };

        let mut request = self.http.post(&self.config.endpoint).json(&body);
        for (name, value) in self.config.headers() {
            request = request.header(name, value);
        }

        log::debug!("{} -> {}", O::NAME, self.config.endpoint);
        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        decode_response(O::NAME, &text)
    }
}

/// The four todo operations the view depends on
#[async_trait(?Send)]
pub trait TodoApi {
    async fn get_todos(&self) -> ClientResult<Vec<Todo>>;

    /// Returns the inserted rows
    async fn add_todo(&self, text: &str) -> ClientResult<Vec<Todo>>;

    /// Returns the updated rows
    async fn toggle_todo(&self, variables: &ToggleTodoVariables) -> ClientResult<Vec<Todo>>;

    /// Returns the number of deleted rows
    async fn delete_todo(&self, id: &TodoId) -> ClientResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_envelope_shape() {
        let vars = ToggleTodoVariables {
            id: TodoId::new("a1"),
            done: true,
        };
        let body = GraphQlRequest {
            query: ToggleTodo::DOCUMENT,
            variables: &vars,
            operation_name: ToggleTodo::NAME,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["operationName"], "toggleTodo");
        assert_eq!(json["variables"], serde_json::json!({ "id": "a1", "done": true }));
        assert!(json["query"].as_str().unwrap().starts_with("mutation toggleTodo"));
    }

    #[test]
    fn test_no_variables_serializes_as_empty_object() {
        let json = serde_json::to_value(NoVariables::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_decode_data() {
        let body = r#"{"data":{"todos":[{"id":"a1","text":"one","done":true}]}}"#;
        let data: GetTodosData = decode_response(GetTodos::NAME, body).unwrap();
        assert_eq!(data.todos.len(), 1);
        assert_eq!(data.todos[0].id, TodoId::new("a1"));
    }

    #[test]
    fn test_decode_errors_are_joined() {
        let body = r#"{"data":null,"errors":[{"message":"field not found"},{"message":"denied"}]}"#;
        let err = decode_response::<GetTodosData>(GetTodos::NAME, body).unwrap_err();
        assert_eq!(err, ClientError::GraphQl("field not found; denied".to_string()));
    }

    #[test]
    fn test_decode_missing_data() {
        let err = decode_response::<GetTodosData>(GetTodos::NAME, "{}").unwrap_err();
        assert_eq!(err, ClientError::MissingData { operation: "getTodos" });
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_response::<GetTodosData>(GetTodos::NAME, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
