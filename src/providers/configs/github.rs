use super::base::ProviderConfig;
use crate::providers::error::ProviderError;

pub const DEFAULT_HOST: &str = "https://models.inference.ai.azure.com";

/// Connection settings for the GitHub Models inference endpoint. Constructed
/// once at startup and passed into the provider; never read from globals.
#[derive(Debug, Clone)]
pub struct GithubModelsConfig {
    pub token: String,
    pub host: String,
}

impl GithubModelsConfig {
    pub fn new(token: String, host: String) -> Self {
        Self { token, host }
    }
}

impl ProviderConfig for GithubModelsConfig {
    fn from_env() -> Result<Self, ProviderError> {
        let token = Self::get_env("GITHUB_TOKEN", true, None)?.ok_or_else(|| {
            ProviderError::Authentication("GitHub token should be present".to_string())
        })?;

        let host = Self::get_env("GITHUB_MODELS_HOST", false, Some(DEFAULT_HOST.to_string()))?
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self::new(token, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation, so both cases run in one test to avoid
    // interference between parallel test threads.
    #[test]
    fn test_from_env_requires_token() {
        std::env::remove_var("GITHUB_TOKEN");
        let result = GithubModelsConfig::from_env();
        assert!(matches!(result, Err(ProviderError::Authentication(_))));

        std::env::set_var("GITHUB_TOKEN", "test_token");
        let config = GithubModelsConfig::from_env().unwrap();
        assert_eq!(config.token, "test_token");
        assert_eq!(config.host, DEFAULT_HOST);
        std::env::remove_var("GITHUB_TOKEN");
    }
}
