//! Parse-checked transport decorator.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::request::GraphQLRequest;
use crate::transport::{AsyncTransport, Transport};

/// A transport decorator that parses every document before dispatch.
///
/// Wraps any transport and rejects syntactically invalid GraphQL with
/// [`ClientError::Document`] before any network I/O happens; well-formed
/// requests are delegated unchanged. Parsing is purely syntactic, with no
/// schema awareness.
///
/// # Example
///
/// ```ignore
/// use octoql::{CheckedTransport, Credentials, HttpTransport};
///
/// let transport = CheckedTransport::new(HttpTransport::new(credentials));
/// ```
#[derive(Debug)]
pub struct CheckedTransport<T> {
    inner: T,
}

impl<T> CheckedTransport<T> {
    /// Wrap a transport.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consume the decorator and return the wrapped transport.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Parse `query` and collect any parser diagnostics.
fn check_document(query: &str) -> Result<()> {
    let tree = apollo_parser::Parser::new(query).parse();
    let errors = tree
        .errors()
        .map(|err| format!("{:?}", err))
        .collect::<Vec<_>>();

    if !errors.is_empty() {
        return Err(ClientError::Document(errors.join(", ")));
    }
    Ok(())
}

impl<T: Transport> Transport for CheckedTransport<T> {
    fn connect(&mut self) -> Result<()> {
        self.inner.connect()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }

    fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        check_document(&request.query)?;
        self.inner.execute(request)
    }
}

#[async_trait]
impl<T: AsyncTransport + Send + Sync> AsyncTransport for CheckedTransport<T> {
    async fn connect(&mut self) -> Result<()> {
        self.inner.connect().await
    }

    async fn close(&mut self) -> Result<()> {
        self.inner.close().await
    }

    async fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        check_document(&request.query)?;
        self.inner.execute(request).await
    }
}
