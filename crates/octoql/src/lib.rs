//! GraphQL API client toolkit.
//!
//! This crate provides a small client stack for GraphQL-over-HTTP APIs,
//! built around the GitHub GraphQL API:
//!
//! - **Pluggable transports**: blocking HTTP, non-blocking HTTP, and a
//!   parse-checked decorator over either
//! - **Unified client facade**: one synchronous surface over both transport
//!   flavors, with batch fan-out
//! - **Query builders**: parameterized GitHub documents with their variable
//!   maps
//! - **Timing runner**: wall-clock instrumentation around any client
//!
//! # Executing a query
//!
//! ```ignore
//! use octoql::queries::{IssueState, repository_issues};
//! use octoql::{Client, Credentials, HttpTransport};
//!
//! let credentials = Credentials::from_env()?;
//! let mut client = Client::blocking(HttpTransport::new(credentials));
//!
//! let (query, variables) = repository_issues("pydantic", "FastUI", 2, &[IssueState::Closed]);
//! let data = client.execute(query, variables)?;
//! ```
//!
//! # Async execution
//!
//! Callers already inside a runtime use [`AsyncClient`] directly:
//!
//! ```ignore
//! use octoql::{AsyncClient, AsyncHttpTransport};
//!
//! let mut client = AsyncClient::new(AsyncHttpTransport::new(credentials));
//! let data = client.execute(query, variables).await?;
//! ```
//!
//! # Batch execution
//!
//! ```ignore
//! // One result per query, in input order; the first failure fails the batch
//! let results = client.execute_batch(queries, variables_list)?;
//! ```
//!
//! # Connection lifecycle
//!
//! Transports hold at most one session. Clients scope a session around
//! every top-level call: connect on entry, close on every exit path.
//! Connecting a connected transport is an error; closing a closed one is a
//! no-op; executing without a session fails without touching the network.

mod config;
mod error;
mod request;
mod response;

pub mod client;
pub mod queries;
pub mod runner;
pub mod transport;

pub use config::{
    Credentials, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ENDPOINT_ENV_VAR, TOKEN_ENV_VAR,
};
pub use error::{ClientError, Result};
pub use request::{GraphQLRequest, Variables};
pub use response::{GraphQLError, GraphQLLocation, GraphQLResponse, PathSegment};

// Re-export commonly used types at the crate root
pub use client::{AsyncClient, BlockingClient, Client, execute_once};
pub use runner::Runner;
pub use transport::{
    AsyncHttpTransport, AsyncTransport, CheckedTransport, HttpTransport, Transport,
};
