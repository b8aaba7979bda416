use thiserror::Error;

/// Errors raised while loading configuration at startup.
///
/// These are fatal: a missing credential aborts the process before any
/// remote call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    MissingVar(String),

    #[error("invalid value for '{name}': {reason}")]
    InvalidVar { name: String, reason: String },
}

/// Errors from remote service calls (embedding, search, generation).
///
/// Propagated unhandled to the caller; a single failed call aborts the
/// whole conversation run.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("OPENAI_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "missing required environment variable 'OPENAI_API_KEY'"
        );
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::Provider {
            message: "HTTP 500: boom".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500: boom");
    }
}
