//! Environment-based configuration loader.
//!
//! All credentials are read once at startup. A missing or empty required
//! variable is a fatal [`ConfigError`]; no remote call is attempted before
//! configuration resolves.

use secrecy::SecretString;

use duologue_types::error::ConfigError;

/// Default text-generation model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-5-nano";

/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Connection credentials for one Supabase project.
pub struct SupabaseCredentials {
    pub url: String,
    pub service_role_key: SecretString,
}

/// Process configuration: one generation-service credential and two
/// independent search-backend credentials, one per persona.
pub struct AppConfig {
    pub openai_api_key: SecretString,
    pub first_supabase: SupabaseCredentials,
    pub second_supabase: SupabaseCredentials,
    pub chat_model: String,
    pub embedding_model: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `OPENAI_API_KEY`, `FIRST_SUPABASE_URL`,
    /// `FIRST_SUPABASE_SERVICE_ROLE_KEY`, `SECOND_SUPABASE_URL`,
    /// `SECOND_SUPABASE_SERVICE_ROLE_KEY`.
    ///
    /// Optional overrides: `DUOLOGUE_CHAT_MODEL`, `DUOLOGUE_EMBEDDING_MODEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?.into(),
            first_supabase: SupabaseCredentials {
                url: required("FIRST_SUPABASE_URL")?,
                service_role_key: required("FIRST_SUPABASE_SERVICE_ROLE_KEY")?.into(),
            },
            second_supabase: SupabaseCredentials {
                url: required("SECOND_SUPABASE_URL")?,
                service_role_key: required("SECOND_SUPABASE_SERVICE_ROLE_KEY")?.into(),
            },
            chat_model: optional("DUOLOGUE_CHAT_MODEL")
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            embedding_model: optional("DUOLOGUE_EMBEDDING_MODEL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidVar {
            name: name.to_string(),
            reason: "value is empty".to_string(),
        }),
        Err(_) => Err(ConfigError::MissingVar(name.to_string())),
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_present() {
        // SAFETY: var name is unique to this test and removed before exit.
        unsafe { std::env::set_var("DUOLOGUE_TEST_REQUIRED_VAR", "some-value") };
        assert_eq!(required("DUOLOGUE_TEST_REQUIRED_VAR").unwrap(), "some-value");
        unsafe { std::env::remove_var("DUOLOGUE_TEST_REQUIRED_VAR") };
    }

    #[test]
    fn test_required_missing() {
        let err = required("DUOLOGUE_TEST_ABSENT_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
    }

    #[test]
    fn test_required_rejects_empty() {
        // SAFETY: var name is unique to this test and removed before exit.
        unsafe { std::env::set_var("DUOLOGUE_TEST_EMPTY_VAR", "  ") };
        let err = required("DUOLOGUE_TEST_EMPTY_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { .. }));
        unsafe { std::env::remove_var("DUOLOGUE_TEST_EMPTY_VAR") };
    }

    #[test]
    fn test_optional_falls_back_to_none() {
        assert_eq!(optional("DUOLOGUE_TEST_UNSET_OPTIONAL"), None);
    }

    #[test]
    fn test_optional_ignores_empty_value() {
        // SAFETY: var name is unique to this test and removed before exit.
        unsafe { std::env::set_var("DUOLOGUE_TEST_EMPTY_OPTIONAL", "") };
        assert_eq!(optional("DUOLOGUE_TEST_EMPTY_OPTIONAL"), None);
        unsafe { std::env::remove_var("DUOLOGUE_TEST_EMPTY_OPTIONAL") };
    }
}
