//! Non-blocking client executor.

use futures_util::future::try_join_all;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::request::{GraphQLRequest, Variables};
use crate::transport::AsyncTransport;

/// Executes queries over a non-blocking transport with a per-call session
/// scope.
///
/// Same contract as [`BlockingClient`](crate::BlockingClient) with
/// suspending operations: connect, work, close per top-level call, and the
/// work's error takes precedence over a close error. Batches fan out
/// concurrently over the one session.
///
/// # Example
///
/// ```ignore
/// use octoql::{AsyncClient, AsyncHttpTransport, Credentials};
///
/// let mut client = AsyncClient::new(AsyncHttpTransport::new(credentials));
/// let data = client.execute(query, variables).await?;
/// ```
#[derive(Debug)]
pub struct AsyncClient<T> {
    transport: T,
}

impl<T: AsyncTransport> AsyncClient<T> {
    /// Create a client owning `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute one query and return its `data` payload.
    pub async fn execute(
        &mut self,
        query: impl Into<String>,
        variables: Variables,
    ) -> Result<Value> {
        let request = GraphQLRequest::with_variables(query, variables);

        self.transport.connect().await?;
        let result = self.transport.execute(&request).await;
        let closed = self.transport.close().await;

        // The work's error takes precedence over a close error
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Execute several queries concurrently over one session.
    ///
    /// All requests are issued before any response is collected; results
    /// come back in input order regardless of completion order. The first
    /// failure fails the whole batch. Fails with
    /// [`ClientError::BatchMismatch`] before connecting when the two lists
    /// disagree in length.
    pub async fn execute_batch(
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

        self.transport.connect().await?;
        let result = try_join_all(
            requests
                .iter()
                .map(|request| self.transport.execute(request)),
        )
        .await;
        let closed = self.transport.close().await;

        let values = result?;
        closed?;
        Ok(values)
    }
}
