//! Error types for the GraphQL client toolkit.

use thiserror::Error;

use crate::response::GraphQLError;

/// Errors produced by transports, clients, and query execution.
#[derive(Error, Debug)]
pub enum ClientError {
    /// `connect` was called on a transport that already holds a live session.
    #[error("transport is already connected")]
    AlreadyConnected,

    /// `execute` was called before `connect`, or after `close`.
    #[error("transport is not connected")]
    NotConnected,

    /// The token environment variable is not set.
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    /// The endpoint URL could not be parsed.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The bearer token is not a valid HTTP header value.
    #[error("invalid bearer token: {0}")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection error: {0}")]
    Connection(String),

    /// The request failed at the HTTP level.
    #[error("HTTP request error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {}", .body.as_deref().unwrap_or("no response body"))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, when one could be read.
        body: Option<String>,
    },

    /// The response body was not a valid GraphQL envelope.
    #[error("invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The server reported errors in the response `errors` array.
    #[error("GraphQL errors: {}", summarize(.0))]
    Graphql(Vec<GraphQLError>),

    /// Batch inputs disagree in length.
    #[error("batch mismatch: {queries} queries with {variables} variable maps")]
    BatchMismatch {
        /// Number of query documents supplied.
        queries: usize,
        /// Number of variable maps supplied.
        variables: usize,
    },

    /// The query document failed to parse.
    #[error("invalid GraphQL document: {0}")]
    Document(String),

    /// The runtime driving a non-blocking transport could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

fn summarize(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A specialized Result type for GraphQL client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
