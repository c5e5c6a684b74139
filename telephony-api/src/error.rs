use rest_client::RestError;
use thiserror::Error;

/// Errors raised by the telephony resource model
///
/// Business-rule violations (illegal state transitions, quota exhaustion,
/// malformed phone numbers) are never detected locally; they come back from
/// the service as [`ApiError::Transport`] with the service payload attached.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP-level failure, including service faults
    ///
    /// Propagated unmodified and never retried.
    #[error(transparent)]
    Transport(#[from] RestError),

    /// A field is present but cannot be coerced to its typed representation
    #[error("Malformed value '{value}' for field '{field}': {reason}")]
    MalformedData {
        field: String,
        value: String,
        reason: String,
    },

    /// A URI was requested from a resource whose payload has no identifier
    #[error("Resource has no '{field}' identifier and cannot be addressed")]
    MissingIdentifier { field: &'static str },
}

impl ApiError {
    pub(crate) fn malformed(
        field: &str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedData {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The service's error payload, when this error is a service fault
    pub fn service_payload(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Transport(RestError::Fault { payload, .. }) => payload.as_ref(),
            _ => None,
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rest_error_conversion() {
        let api_error: ApiError = RestError::Network("connection timeout".to_string()).into();
        assert!(matches!(api_error, ApiError::Transport(RestError::Network(_))));
        assert_eq!(format!("{}", api_error), "Network/HTTP error: connection timeout");
    }

    #[test]
    fn test_service_payload() {
        let api_error: ApiError = RestError::Fault {
            status: 400,
            message: "Call is not active".to_string(),
            payload: Some(json!({"message": "Call is not active"})),
        }
        .into();

        assert_eq!(
            api_error.service_payload(),
            Some(&json!({"message": "Call is not active"}))
        );
        assert!(ApiError::MissingIdentifier { field: "id" }.service_payload().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::malformed("startTime", "yesterday", "expected %Y-%m-%dT%H:%M:%SZ");
        assert_eq!(
            format!("{}", err),
            "Malformed value 'yesterday' for field 'startTime': expected %Y-%m-%dT%H:%M:%SZ"
        );

        let err = ApiError::MissingIdentifier { field: "mediaName" };
        assert_eq!(
            format!("{}", err),
            "Resource has no 'mediaName' identifier and cannot be addressed"
        );
    }
}
