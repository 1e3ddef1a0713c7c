use serde_json::Value;
use thiserror::Error;

/// Failure kinds of a single relay invocation.
///
/// Every variant is converted into an HTTP error envelope at the boundary;
/// none of them is fatal to the host process.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("credential '{0}' is not configured")]
    MissingCredential(String),

    /// Non-success status or an `error` field in the provider payload.
    /// `body` has already been scrubbed of the credential.
    #[error("provider returned status {status}")]
    Provider { status: u16, body: Value },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider request timed out")]
    Timeout,
}

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_display() {
        let err = RelayError::BadRequest("\"messages\" must be an array".to_string());
        assert_eq!(err.to_string(), "bad request: \"messages\" must be an array");

        let err = RelayError::Provider {
            status: 401,
            body: serde_json::json!({"error": "nope"}),
        };
        assert_eq!(err.to_string(), "provider returned status 401");
    }

    #[test]
    fn test_missing_credential_names_variable_only() {
        let err = RelayError::MissingCredential("OPENAI_API_KEY".to_string());
        assert_eq!(err.to_string(), "credential 'OPENAI_API_KEY' is not configured");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: "neurosync.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert!(err.to_string().contains("neurosync.toml"));
        assert!(err.to_string().contains("expected"));
    }
}
