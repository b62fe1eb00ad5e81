//! Non-blocking HTTP transport.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::{ClientError, Result};
use crate::request::GraphQLRequest;
use crate::response::GraphQLResponse;
use crate::transport::AsyncTransport;

/// A non-blocking HTTP transport backed by a reqwest session.
///
/// The calling task suspends while network I/O is in flight, so several
/// requests can share the session concurrently. The bearer token and the
/// per-request timeout are baked into the session at `connect` time.
///
/// # Example
///
/// ```ignore
/// use octoql::{AsyncHttpTransport, AsyncTransport, Credentials};
///
/// let mut transport = AsyncHttpTransport::new(Credentials::from_env()?);
/// transport.connect().await?;
/// let data = transport.execute(&request).await?;
/// transport.close().await?;
/// ```
#[derive(Debug)]
pub struct AsyncHttpTransport {
    credentials: Credentials,
    session: Option<reqwest::Client>,
}

impl AsyncHttpTransport {
    /// Create an unconnected transport.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session: None,
        }
    }

    /// Whether a session is currently open.
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }
}

#[async_trait]
impl AsyncTransport for AsyncHttpTransport {
    async fn connect(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Err(ClientError::AlreadyConnected);
        }

        let session = reqwest::Client::builder()
            .default_headers(super::session_headers(&self.credentials)?)
            .timeout(self.credentials.request_timeout())
            .build()?;

        tracing::debug!(
            target: "octoql::transport",
            endpoint = %self.credentials.endpoint(),
            "async session opened"
        );
        self.session = Some(session);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if self.session.take().is_some() {
            tracing::debug!(target: "octoql::transport", "async session closed");
        }
        Ok(())
    }

    async fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        let session = self.session.as_ref().ok_or(ClientError::NotConnected)?;

        let response = session
            .post(self.credentials.endpoint().clone())
            .json(request)
            .send()
            .await?;

        // Check the HTTP status before decoding the envelope
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: (!body.is_empty()).then_some(body),
            });
        }

        let response: GraphQLResponse = serde_json::from_str(&body)?;
        response.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> AsyncHttpTransport {
        let credentials = Credentials::new("https://api.github.com/graphql", "token").unwrap();
        AsyncHttpTransport::new(credentials)
    }

    #[tokio::test]
    async fn test_connect_twice_fails() {
        let mut transport = transport();
        transport.connect().await.unwrap();
        assert!(matches!(
            transport.connect().await,
            Err(ClientError::AlreadyConnected)
        ));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let mut transport = transport();
        transport.connect().await.unwrap();
        transport.close().await.unwrap();
        transport.close().await.unwrap();
        assert!(!transport.is_connected());
    }
}
