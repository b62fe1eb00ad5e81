//! Timing-instrumented query runner.

use std::time::Instant;

use serde_json::Value;

use crate::client::Client;
use crate::error::Result;
use crate::request::Variables;

/// Wraps a [`Client`] and logs wall-clock duration for every call.
///
/// Timing is observational only: results and errors pass through unchanged.
/// Durations are emitted through `tracing` under the `octoql::runner`
/// target.
///
/// # Example
///
/// ```ignore
/// use octoql::{Client, HttpTransport, Runner};
///
/// let mut runner = Runner::new(Client::blocking(HttpTransport::new(credentials)));
/// let data = runner.execute(query, variables)?;
/// // logs e.g.: operation="execute" elapsed_ms=12.3 query finished
/// ```
#[derive(Debug)]
pub struct Runner {
    client: Client,
}

impl Runner {
    /// Wrap a client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Execute one query, logging its duration.
    pub fn execute(&mut self, query: impl Into<String>, variables: Variables) -> Result<Value> {
        let started = Instant::now();
        let result = self.client.execute(query, variables);
        log_elapsed("execute", started, result.is_ok());
        result
    }

    /// Execute a batch of queries, logging the duration of the whole batch.
    pub fn execute_batch(
        &mut self,
        queries: Vec<String>,
        variables: Vec<Variables>,
    ) -> Result<Vec<Value>> {
        let started = Instant::now();
        let result = self.client.execute_batch(queries, variables);
        log_elapsed("execute_batch", started, result.is_ok());
        result
    }

    /// Consume the runner and return the wrapped client.
    pub fn into_inner(self) -> Client {
        self.client
    }
}

fn log_elapsed(operation: &str, started: Instant, ok: bool) {
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if ok {
        tracing::info!(target: "octoql::runner", operation, elapsed_ms, "query finished");
    } else {
        tracing::warn!(target: "octoql::runner", operation, elapsed_ms, "query failed");
    }
}
