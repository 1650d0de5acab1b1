use std::env;

use crate::providers::error::ProviderError;

pub trait ProviderConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self, ProviderError>
    where
        Self: Sized;

    /// Helper function to get environment variables with error handling
    fn get_env(
        key: &str,
        required: bool,
        default: Option<String>,
    ) -> Result<Option<String>, ProviderError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) if !required => Ok(default),
            Err(env::VarError::NotPresent) => Err(ProviderError::Authentication(format!(
                "environment variable '{}' is required but not set",
                key
            ))),
            Err(e) => Err(ProviderError::Authentication(format!(
                "environment variable '{}' could not be read: {}",
                key, e
            ))),
        }
    }
}
