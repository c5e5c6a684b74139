use std::fs::File;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};

use crate::{text_value, Params, RestClientConfig, RestError, Transport};

/// A minimal blocking REST client for the telephony service
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
    base_url: String,
    authorization: Option<String>,
}

impl RestClient {
    /// Create a client from the given configuration
    pub fn new(config: &RestClientConfig) -> Self {
        let authorization = config.credentials.as_ref().map(|c| {
            let token = STANDARD.encode(format!("{}:{}", c.token, c.secret));
            format!("Basic {}", token)
        });

        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(config.connect_timeout)
                .timeout_read(config.read_timeout)
                .build(),
            base_url: config.base_url(),
            authorization,
        }
    }

    /// Create a client configured from `TELEPHONY_*` environment variables
    pub fn from_env() -> Result<Self, RestError> {
        Ok(Self::new(&RestClientConfig::from_env()?))
    }

    /// Base URL relative URIs are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a resource URI to an absolute URL
    pub fn resolve(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return uri.to_string();
        }
        format!("{}/{}", self.base_url, uri.trim_start_matches('/'))
    }

    fn request(&self, method: &str, uri: &str) -> ureq::Request {
        let url = self.resolve(uri);
        tracing::debug!("{} {}", method, url);

        let request = self
            .agent
            .request(method, &url)
            .set("Accept", "application/json");
        match &self.authorization {
            Some(auth) => request.set("Authorization", auth),
            None => request,
        }
    }

    fn read_body(response: ureq::Response) -> Result<Option<Value>, RestError> {
        let text = response
            .into_string()
            .map_err(|e| RestError::Network(e.to_string()))?;

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| RestError::Parse(e.to_string()))
    }
}

impl Transport for RestClient {
    fn read(&self, uri: &str) -> Result<Value, RestError> {
        let response = self.request("GET", uri).call().map_err(map_error)?;

        Self::read_body(response)?
            .ok_or_else(|| RestError::Parse(format!("Empty response body for {}", uri)))
    }

    fn read_collection(&self, uri: &str, query: &Params) -> Result<Vec<Value>, RestError> {
        let mut request = self.request("GET", uri);
        for (key, value) in query {
            request = request.query(key, &text_value(value));
        }

        let response = request.call().map_err(map_error)?;
        match Self::read_body(response)? {
            Some(Value::Array(items)) => Ok(items),
            None => Ok(Vec::new()),
            Some(other) => Err(RestError::Parse(format!(
                "Expected a JSON array from {}, got {}",
                uri, other
            ))),
        }
    }

    fn write(&self, uri: &str, body: &Params) -> Result<Option<Value>, RestError> {
        let response = self
            .request("POST", uri)
            .send_json(body)
            .map_err(map_error)?;

        // Creation endpoints answer with an empty body and point at the new entity.
        let location = response.header("Location").map(str::to_string);

        match Self::read_body(response)? {
            Some(value) => Ok(Some(value)),
            None => Ok(location
                .as_deref()
                .and_then(|l| l.trim_end_matches('/').rsplit('/').next())
                .filter(|id| !id.is_empty())
                .map(|id| json!({ "id": id }))),
        }
    }

    fn delete(&self, uri: &str) -> Result<(), RestError> {
        self.request("DELETE", uri).call().map_err(map_error)?;
        Ok(())
    }

    fn download_to(&self, uri: &str, destination: &Path) -> Result<(), RestError> {
        let response = self.request("GET", uri).call().map_err(map_error)?;

        let mut file = File::create(destination)?;
        let bytes = std::io::copy(&mut response.into_reader(), &mut file)?;
        tracing::debug!("Downloaded {} bytes to {}", bytes, destination.display());

        Ok(())
    }
}

fn map_error(error: ureq::Error) -> RestError {
    match error {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();
            RestError::fault(status, &body)
        }
        ureq::Error::Transport(transport) => RestError::Network(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_uri() {
        let client = RestClient::new(
            &RestClientConfig::new("u-1").with_endpoint("https://api.example.com"),
        );

        assert_eq!(client.base_url(), "https://api.example.com/v1/users/u-1");
        assert_eq!(
            client.resolve("calls/c-1/events"),
            "https://api.example.com/v1/users/u-1/calls/c-1/events"
        );
        assert_eq!(
            client.resolve("/calls"),
            "https://api.example.com/v1/users/u-1/calls"
        );
    }

    #[test]
    fn test_resolve_absolute_uri_is_untouched() {
        let client = RestClient::new(&RestClientConfig::new("u-1"));
        let media = "https://media.example.com/v1/users/u-1/media/greeting.wav";
        assert_eq!(client.resolve(media), media);
    }

    #[test]
    fn test_authorization_header_value() {
        let client = RestClient::new(&RestClientConfig::new("u-1").with_credentials("token", "secret"));
        // base64("token:secret")
        assert_eq!(
            client.authorization.as_deref(),
            Some("Basic dG9rZW46c2VjcmV0")
        );
    }
}
