//! Blocking HTTP transport.

use reqwest::blocking;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::{ClientError, Result};
use crate::request::GraphQLRequest;
use crate::response::GraphQLResponse;
use crate::transport::Transport;

/// A blocking HTTP transport backed by a reqwest session.
///
/// The calling thread blocks for the full round trip of every request.
/// The bearer token and the per-request timeout are baked into the session
/// at `connect` time.
///
/// # Example
///
/// ```ignore
/// use octoql::{Credentials, HttpTransport, Transport};
///
/// let mut transport = HttpTransport::new(Credentials::from_env()?);
/// transport.connect()?;
/// let data = transport.execute(&request)?;
/// transport.close()?;
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    credentials: Credentials,
    session: Option<blocking::Client>,
}

impl HttpTransport {
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

impl Transport for HttpTransport {
    fn connect(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Err(ClientError::AlreadyConnected);
        }

        let session = blocking::Client::builder()
            .default_headers(super::session_headers(&self.credentials)?)
            .timeout(self.credentials.request_timeout())
            .build()?;

        tracing::debug!(
            target: "octoql::transport",
            endpoint = %self.credentials.endpoint(),
            "blocking session opened"
        );
        self.session = Some(session);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.session.take().is_some() {
            tracing::debug!(target: "octoql::transport", "blocking session closed");
        }
        Ok(())
    }

    fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        let session = self.session.as_ref().ok_or(ClientError::NotConnected)?;

        let response = session
            .post(self.credentials.endpoint().clone())
            .json(request)
            .send()?;

        // Check the HTTP status before decoding the envelope
        let status = response.status();
        let body = response.text()?;
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
