//! Error types for the REST client

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the telephony REST service
#[derive(Debug, Error)]
pub enum RestError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The service answered with an error status.
    ///
    /// `payload` carries the service's JSON error body when it could be parsed,
    /// so callers can inspect the remote reason (illegal transition, quota, ...).
    #[error("Service fault: HTTP {status}: {message}")]
    Fault {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    /// Response body was not the expected JSON shape
    #[error("Response parsing error: {0}")]
    Parse(String),

    /// Local I/O failure (download destination)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// HTTP status of a service fault, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Fault { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a fault from a status code and the raw response body
    pub(crate) fn fault(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();
        let message = payload
            .as_ref()
            .and_then(|p| p.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.trim().to_string());

        RestError::Fault {
            status,
            message,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_extracts_service_message() {
        let err = RestError::fault(400, r#"{"category":"bad-request","message":"Call is not active"}"#);
        match &err {
            RestError::Fault { status, message, payload } => {
                assert_eq!(*status, 400);
                assert_eq!(message, "Call is not active");
                assert_eq!(payload.as_ref().unwrap()["category"], "bad-request");
            }
            _ => panic!("Expected RestError::Fault"),
        }
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_fault_with_plain_text_body() {
        let err = RestError::fault(502, "Bad Gateway\n");
        match err {
            RestError::Fault { message, payload, .. } => {
                assert_eq!(message, "Bad Gateway");
                assert!(payload.is_none());
            }
            _ => panic!("Expected RestError::Fault"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = RestError::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network/HTTP error: connection refused");
        assert_eq!(err.status(), None);
    }
}
