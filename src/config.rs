//! Client Configuration
//!
//! Endpoint and auth settings baked in at build time (`trunk build`
//! picks them up from the environment).

use log::LevelFilter;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/v1/graphql";

const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub admin_secret: Option<String>,
    pub bearer_token: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            admin_secret: None,
            bearer_token: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Read `TODO_GRAPHQL_ENDPOINT`, `TODO_GRAPHQL_ADMIN_SECRET`,
    /// `TODO_GRAPHQL_TOKEN` and `TODO_LOG_LEVEL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODO_GRAPHQL_ENDPOINT"),
            option_env!("TODO_GRAPHQL_ADMIN_SECRET"),
            option_env!("TODO_GRAPHQL_TOKEN"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    pub fn from_values(
        endpoint: Option<&str>,
        admin_secret: Option<&str>,
        bearer_token: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let defaults = Self::default();

        Self {
            endpoint: non_empty(endpoint).unwrap_or(defaults.endpoint),
            admin_secret: non_empty(admin_secret),
            bearer_token: non_empty(bearer_token),
            log_level: log_level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Extra request headers for every GraphQL call
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(secret) = &self.admin_secret {
            headers.push((ADMIN_SECRET_HEADER, secret.clone()));
        }
        if let Some(token) = &self.bearer_token {
            headers.push(("authorization", format!("Bearer {}", token)));
        }
        headers
    }
}
