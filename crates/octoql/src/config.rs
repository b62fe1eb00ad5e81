//! Endpoint configuration for GraphQL transports.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Default GraphQL endpoint when the environment does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GraphQL endpoint.
pub const ENDPOINT_ENV_VAR: &str = "GITHUB_GRAPHQL_ENDPOINT";

/// Connection settings for a GraphQL endpoint.
///
/// Holds the endpoint URL, the bearer token, and the per-request timeout.
/// Transports read these once at construction; changing settings after a
/// transport exists has no effect on it.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use octoql::Credentials;
///
/// let credentials = Credentials::new("https://api.github.com/graphql", token)?
///     .timeout(Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct Credentials {
    endpoint: Url,
    token: String,
    timeout: Duration,
}

impl Credentials {
    /// Create credentials for an endpoint with a bearer token.
    ///
    /// The endpoint is parsed eagerly; an unparseable URL fails with
    /// [`ClientError::InvalidEndpoint`] here rather than at request time.
    pub fn new(endpoint: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self {
            endpoint,
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read credentials from the environment.
    ///
    /// `GITHUB_TOKEN` must be set; `GITHUB_GRAPHQL_ENDPOINT` overrides the
    /// default GitHub endpoint when present.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV_VAR).map_err(|_| ClientError::MissingToken)?;
        let endpoint =
            env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint, token)
    }

    /// Set the per-request timeout (defaults to one second).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The GraphQL endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The token never appears in debug output
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_endpoint() {
        let credentials = Credentials::new("https://api.github.com/graphql", "token").unwrap();
        assert_eq!(
            credentials.endpoint().as_str(),
            "https://api.github.com/graphql"
        );
        assert_eq!(credentials.token(), "token");
        assert_eq!(credentials.request_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let err = Credentials::new("not a url", "token").unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_timeout_override() {
        let credentials = Credentials::new("https://api.github.com/graphql", "token")
            .unwrap()
            .timeout(Duration::from_millis(250));
        assert_eq!(credentials.request_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_from_env() {
        // Single test drives both env paths to keep the harness race-free
        unsafe {
            env::remove_var(TOKEN_ENV_VAR);
            env::remove_var(ENDPOINT_ENV_VAR);
        }
        assert!(matches!(
            Credentials::from_env(),
            Err(ClientError::MissingToken)
        ));

        unsafe {
            env::set_var(TOKEN_ENV_VAR, "env-token");
            env::set_var(ENDPOINT_ENV_VAR, "https://graphql.example.com/");
        }
        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.token(), "env-token");
        assert_eq!(credentials.endpoint().as_str(), "https://graphql.example.com/");

        unsafe {
            env::remove_var(ENDPOINT_ENV_VAR);
        }
        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.endpoint().as_str(), DEFAULT_ENDPOINT);

        unsafe {
            env::remove_var(TOKEN_ENV_VAR);
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials =
            Credentials::new("https://api.github.com/graphql", "sekrit-token").unwrap();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("sekrit-token"));
        assert!(debug.contains("api.github.com"));
    }
}
