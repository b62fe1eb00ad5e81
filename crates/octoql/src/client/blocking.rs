//! Blocking client executor.

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::request::{GraphQLRequest, Variables};
use crate::transport::Transport;

/// Executes queries over a blocking transport with a per-call session scope.
///
/// Every top-level call runs connect, work, close in sequence. `close` runs
/// on every exit path after a successful `connect`; the work's error takes
/// precedence over a close error. Sessions never outlive a call.
///
/// # Example
///
/// ```ignore
/// use octoql::{BlockingClient, Credentials, HttpTransport};
///
/// let mut client = BlockingClient::new(HttpTransport::new(credentials));
/// let data = client.execute(query, variables)?;
/// ```
#[derive(Debug)]
pub struct BlockingClient<T> {
    transport: T,
}

impl<T: Transport> BlockingClient<T> {
    /// Create a client owning `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute one query and return its `data` payload.
    pub fn execute(&mut self, query: impl Into<String>, variables: Variables) -> Result<Value> {
        let request = GraphQLRequest::with_variables(query, variables);

        self.transport.connect()?;
        let result = self.transport.execute(&request);
        let closed = self.transport.close();

        // The work's error takes precedence over a close error
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Execute several queries sequentially over one session.
    ///
    /// Results are returned in input order. The first failure aborts the
    /// remaining queue and fails the whole call. Fails with
    /// [`ClientError::BatchMismatch`] before connecting when the two lists
    /// disagree in length.
    pub fn execute_batch(
        &mut self,
        queries: Vec<String>,
        variables: Vec<Variables>,
    ) -> Result<Vec<Value>> {
        if queries.len() != variables.len() {
            return Err(ClientError::BatchMismatch {
                queries: queries.len(),
                variables: variables.len(),
            });
        }

        let requests: Vec<GraphQLRequest> = queries
            .into_iter()
            .zip(variables)
            .map(|(query, variables)| GraphQLRequest::with_variables(query, variables))
            .collect();

        self.transport.connect()?;
        let result = self.run_batch(&requests);
        let closed = self.transport.close();

        let values = result?;
        closed?;
        Ok(values)
    }

    fn run_batch(&self, requests: &[GraphQLRequest]) -> Result<Vec<Value>> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.transport.execute(request)?);
        }
        Ok(results)
    }
}
