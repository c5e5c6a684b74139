//! Connection settings for the REST client

use std::time::Duration;

use crate::RestError;

/// Default public API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.catapult.inetwork.com";

/// Default API version path segment
pub const DEFAULT_VERSION: &str = "v1";

/// API token/secret pair sent as HTTP Basic authorization
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("secret", &"***")
            .finish()
    }
}

/// Configuration for [`RestClient`](crate::RestClient)
///
/// Relative resource URIs are resolved against [`base_url`](Self::base_url),
/// which has the shape `{endpoint}/{version}/users/{user_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestClientConfig {
    pub endpoint: String,
    pub version: String,
    pub user_id: Option<String>,
    pub credentials: Option<Credentials>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            version: DEFAULT_VERSION.to_string(),
            user_id: None,
            credentials: None,
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl RestClientConfig {
    /// Create a configuration for the given user on the default endpoint
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `TELEPHONY_API_ENDPOINT`: API endpoint (default [`DEFAULT_ENDPOINT`])
    /// - `TELEPHONY_API_VERSION`: API version (default [`DEFAULT_VERSION`])
    /// - `TELEPHONY_USER_ID`: user id (required)
    /// - `TELEPHONY_API_TOKEN` / `TELEPHONY_API_SECRET`: credentials
    pub fn from_env() -> Result<Self, RestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, RestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_id = lookup("TELEPHONY_USER_ID")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RestError::Config("TELEPHONY_USER_ID is not set".to_string()))?;

        let mut config = Self::new(user_id);

        if let Some(endpoint) = lookup("TELEPHONY_API_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(version) = lookup("TELEPHONY_API_VERSION") {
            config.version = version;
        }

        match (lookup("TELEPHONY_API_TOKEN"), lookup("TELEPHONY_API_SECRET")) {
            (Some(token), Some(secret)) => config.credentials = Some(Credentials::new(token, secret)),
            (None, None) => {}
            _ => {
                return Err(RestError::Config(
                    "TELEPHONY_API_TOKEN and TELEPHONY_API_SECRET must be set together".to_string(),
                ))
            }
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_credentials(mut self, token: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(token, secret));
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Base URL that relative resource URIs are resolved against
    pub fn base_url(&self) -> String {
        let mut base = self.endpoint.trim_end_matches('/').to_string();
        if !self.version.is_empty() {
            base.push('/');
            base.push_str(self.version.trim_matches('/'));
        }
        if let Some(user_id) = &self.user_id {
            base.push_str("/users/");
            base.push_str(user_id);
        }
        base
    }
}
