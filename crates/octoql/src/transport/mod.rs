//! Pluggable transports for GraphQL execution.
//!
//! A transport owns the session lifecycle and the raw request/response
//! exchange with one endpoint. Three implementations are provided:
//!
//! - [`HttpTransport`]: blocking HTTP session
//! - [`AsyncHttpTransport`]: non-blocking HTTP session
//! - [`CheckedTransport`]: decorator that parses each document before dispatch
//!
//! # Lifecycle
//!
//! Every transport starts unconnected. `connect` opens a session configured
//! with the bearer token and the per-request timeout; `execute` requires a
//! live session and performs no I/O without one; `close` drops the session
//! and is a no-op when already closed.
//!
//! ```ignore
//! use octoql::{Credentials, HttpTransport, Transport};
//!
//! let mut transport = HttpTransport::new(credentials);
//! transport.connect()?;
//! let data = transport.execute(&request)?;
//! transport.close()?;
//! ```

mod async_http;
mod checked;
mod http;

pub use async_http::AsyncHttpTransport;
pub use checked::CheckedTransport;
pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::Credentials;
use crate::error::{ClientError, Result};
use crate::request::GraphQLRequest;

/// A blocking GraphQL transport.
pub trait Transport {
    /// Open the underlying session.
    ///
    /// Fails with [`ClientError::AlreadyConnected`] when a session is
    /// already open.
    fn connect(&mut self) -> Result<()>;

    /// Drop the session. A no-op when already closed.
    fn close(&mut self) -> Result<()>;

    /// Execute one request over the open session and return its `data`
    /// payload.
    ///
    /// Fails with [`ClientError::NotConnected`] before touching the network
    /// when `connect` has not been called.
    fn execute(&self, request: &GraphQLRequest) -> Result<Value>;
}

/// A non-blocking GraphQL transport.
///
/// Same contract as [`Transport`] with suspending operations.
#[async_trait]
pub trait AsyncTransport {
    /// Open the underlying session.
    ///
    /// Fails with [`ClientError::AlreadyConnected`] when a session is
    /// already open.
    async fn connect(&mut self) -> Result<()>;

    /// Drop the session. A no-op when already closed.
    async fn close(&mut self) -> Result<()>;

    /// Execute one request over the open session and return its `data`
    /// payload.
    ///
    /// Fails with [`ClientError::NotConnected`] before touching the network
    /// when `connect` has not been called.
    async fn execute(&self, request: &GraphQLRequest) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        (**self).execute(request)
    }
}

#[async_trait]
impl<T: AsyncTransport + ?Sized + Send + Sync> AsyncTransport for Box<T> {
    async fn connect(&mut self) -> Result<()> {
        (**self).connect().await
    }

    async fn close(&mut self) -> Result<()> {
        (**self).close().await
    }

    async fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        (**self).execute(request).await
    }
}

/// Default headers for a GraphQL session: bearer authorization plus JSON
/// content negotiation.
pub(crate) fn session_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", credentials.token()))
        .map_err(ClientError::InvalidToken)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
