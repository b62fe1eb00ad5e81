//! Client facade over pluggable transports.
//!
//! [`BlockingClient`] and [`AsyncClient`] are thin executors bound to one
//! transport capability each. [`Client`] unifies them behind a synchronous
//! surface: it dispatches on the transport flavor it was built with, and
//! drives non-blocking transports on a fresh single-threaded runtime
//! created per call.
//!
//! # Example
//!
//! ```ignore
//! use octoql::{AsyncHttpTransport, Client, Credentials, HttpTransport};
//!
//! // Blocking flavor: runs on the calling thread
//! let mut client = Client::blocking(HttpTransport::new(credentials.clone()));
//! let data = client.execute(query, variables)?;
//!
//! // Non-blocking flavor behind the same surface
//! let mut client = Client::nonblocking(AsyncHttpTransport::new(credentials));
//! let results = client.execute_batch(queries, variables_list)?;
//! ```

mod async_client;
mod blocking;

pub use async_client::AsyncClient;
pub use blocking::BlockingClient;

use serde_json::Value;

use crate::config::Credentials;
use crate::error::{ClientError, Result};
use crate::request::Variables;
use crate::transport::{AsyncTransport, HttpTransport, Transport};

enum Flavor {
    Blocking(BlockingClient<Box<dyn Transport + Send>>),
    Nonblocking(AsyncClient<Box<dyn AsyncTransport + Send + Sync>>),
}

/// A unified GraphQL client over any transport.
///
/// Calls on a blocking transport run directly on the calling thread. Calls
/// on a non-blocking transport spin up a single-threaded runtime for the
/// duration of the call and tear it down afterward, so callers never need
/// an async context of their own. Every call opens and closes its own
/// session.
pub struct Client {
    flavor: Flavor,
}

impl Client {
    /// Create a client over a blocking transport.
    pub fn blocking(transport: impl Transport + Send + 'static) -> Self {
        Self {
            flavor: Flavor::Blocking(BlockingClient::new(Box::new(transport))),
        }
    }

    /// Create a client over a non-blocking transport.
    pub fn nonblocking(transport: impl AsyncTransport + Send + Sync + 'static) -> Self {
        Self {
            flavor: Flavor::Nonblocking(AsyncClient::new(Box::new(transport))),
        }
    }

    /// Whether this client drives a blocking transport.
    pub fn is_blocking(&self) -> bool {
        matches!(self.flavor, Flavor::Blocking(_))
    }

    /// Execute one query and return its `data` payload.
    pub fn execute(&mut self, query: impl Into<String>, variables: Variables) -> Result<Value> {
        match &mut self.flavor {
            Flavor::Blocking(client) => client.execute(query, variables),
            Flavor::Nonblocking(client) => {
                call_runtime()?.block_on(client.execute(query, variables))
            }
        }
    }

    /// Execute several queries in one logical call.
    ///
    /// Results come back in input order, one per query; the first failure
    /// fails the whole batch. The blocking flavor runs the queries
    /// sequentially, the non-blocking flavor fans them out concurrently.
    pub fn execute_batch(
        &mut self,
        queries: Vec<String>,
        variables: Vec<Variables>,
    ) -> Result<Vec<Value>> {
        match &mut self.flavor {
            Flavor::Blocking(client) => client.execute_batch(queries, variables),
            Flavor::Nonblocking(client) => {
                call_runtime()?.block_on(client.execute_batch(queries, variables))
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flavor = match self.flavor {
            Flavor::Blocking(_) => "blocking",
            Flavor::Nonblocking(_) => "nonblocking",
        };
        f.debug_struct("Client").field("flavor", &flavor).finish()
    }
}

/// Execute one query without keeping any client state around.
///
/// Builds a blocking transport from `credentials`, connects, executes, and
/// tears everything down again.
///
/// # Example
///
/// ```ignore
/// let data = octoql::execute_once(Credentials::from_env()?, query, variables)?;
/// ```
pub fn execute_once(
    credentials: Credentials,
    query: impl Into<String>,
    variables: Variables,
) -> Result<Value> {
    BlockingClient::new(HttpTransport::new(credentials)).execute(query, variables)
}

/// Fresh single-threaded runtime for one facade call.
fn call_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ClientError::Runtime)
}
