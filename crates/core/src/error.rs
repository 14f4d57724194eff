//! Error types for the Relief Explainer.
//!
//! Startup failures (`Config`, `Load`) abort the process. `Synthesis`
//! failures are query-scoped: the orchestrator logs them and shows the user
//! a generic message instead.

use thiserror::Error;

/// Unified error type for the Relief Explainer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (missing credential, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document corpus could not be loaded
    #[error("Load error: {0}")]
    Load(String),

    /// The text-generation endpoint call failed
    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Prompt template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Failure modes of a single text-generation call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// The request never produced an HTTP response
    #[error("network failure: {0}")]
    Network(String),

    /// The endpoint rejected the credential
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The endpoint throttled the request
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success status
    #[error("endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response decoded but carried no text
    #[error("empty response from model")]
    EmptyResponse,
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_error_converts() {
        let err: AppError = SynthesisError::Auth("bad key".to_string()).into();
        assert!(matches!(err, AppError::Synthesis(SynthesisError::Auth(_))));
        assert_eq!(
            err.to_string(),
            "Synthesis error: authentication failed: bad key"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_api_error_display() {
        let err = SynthesisError::Api {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "endpoint returned 500: boom");
    }
}
