//! Private REST client for the telephony control API
//!
//! This crate provides the blocking HTTP transport used by `telephony-api`.
//! Everything above it talks to the service through the [`Transport`] trait,
//! which keeps the resource model independent of the HTTP stack and lets
//! tests substitute an in-memory transport.

mod client;
mod config;
mod error;

pub use client::RestClient;
pub use config::{Credentials, RestClientConfig, DEFAULT_ENDPOINT, DEFAULT_VERSION};
pub use error::RestError;

use std::fmt::Debug;
use std::path::Path;

use serde_json::{Map, Value};

/// Request body or query parameters: string keys to JSON values
///
/// Scalars are expected to already be in their textual form; nested maps and
/// lists are only used for grouped sub-parameters in request bodies.
pub type Params = Map<String, Value>;

/// Synchronous request/response access to the remote service
///
/// URIs may be relative (resolved against the configured base URL) or
/// absolute. Implementations must not retry; failures are reported as-is.
pub trait Transport: Send + Sync + Debug {
    /// Read a single entity
    fn read(&self, uri: &str) -> Result<Value, RestError>;

    /// Read a collection, passing `query` as URL query parameters
    fn read_collection(&self, uri: &str, query: &Params) -> Result<Vec<Value>, RestError>;

    /// Issue a state-changing write. Returns the response body, if any.
    fn write(&self, uri: &str, body: &Params) -> Result<Option<Value>, RestError>;

    /// Delete an entity
    fn delete(&self, uri: &str) -> Result<(), RestError>;

    /// Download binary content into a local file
    fn download_to(&self, uri: &str, destination: &Path) -> Result<(), RestError>;
}

/// Textual form of a parameter value as it goes on the wire
///
/// Strings are passed through unquoted, everything else uses its JSON text.
pub fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_value() {
        assert_eq!(text_value(&json!("abc")), "abc");
        assert_eq!(text_value(&json!(5)), "5");
        assert_eq!(text_value(&json!(true)), "true");
        assert_eq!(text_value(&json!("")), "");
    }
}
