use serde::{Deserialize, Serialize};

/// Sampling parameters for a single completion request.
///
/// No local range checking is done; the provider rejects out-of-range values
/// itself. Unset options are omitted from the request payload so the provider
/// applies its own defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
    pub top_p: Option<f32>,
}

impl GenerationConfig {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            temperature: None,
            max_tokens: None,
            top_p: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new("gpt-4o-mini")
            .with_temperature(1.0)
            .with_max_tokens(1000)
            .with_top_p(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_sampling_unset() {
        let config = GenerationConfig::new("gpt-4o");
        assert_eq!(config.model, "gpt-4o");
        assert!(config.temperature.is_none());
        assert!(config.max_tokens.is_none());
        assert!(config.top_p.is_none());
    }

    #[test]
    fn test_default_matches_demo_settings() {
        let config = GenerationConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, Some(1.0));
        assert_eq!(config.max_tokens, Some(1000));
        assert_eq!(config.top_p, Some(1.0));
    }

    #[test]
    fn test_builder_setters() {
        let config = GenerationConfig::new("gpt-4o")
            .with_temperature(0.2)
            .with_max_tokens(64)
            .with_top_p(0.9);
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(64));
        assert_eq!(config.top_p, Some(0.9));
    }
}
