//! GraphQL request envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named variables accompanying a query document.
///
/// Keys must match the variable names declared by the document.
pub type Variables = Map<String, Value>;

/// A GraphQL request.
///
/// Serializes to the standard POST body. `variables` is always present on
/// the wire (an empty object when nothing was set); `operationName` is
/// omitted when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLRequest {
    /// The GraphQL document.
    pub query: String,

    /// Variables referenced by the document.
    #[serde(default)]
    pub variables: Variables,

    /// Optional operation name (for documents with multiple operations).
    #[serde(skip_serializing_if = "Option::is_none", rename = "operationName")]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    /// Create a request with no variables.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = GraphQLRequest::new("{ viewer { login } }");
    /// ```
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Variables::new(),
            operation_name: None,
        }
    }

    /// Create a request carrying a full variables map.
    pub fn with_variables(query: impl Into<String>, variables: Variables) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: None,
        }
    }

    /// Set a single variable.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = GraphQLRequest::new("query ($login: String!) { user(login: $login) { id } }")
    ///     .variable("login", "octocat");
    /// ```
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.variables.insert(name.into(), value);
        }
        self
    }

    /// Set the operation name.
    ///
    /// Required when the query document contains multiple operations.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}
