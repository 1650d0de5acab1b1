use std::time::Duration;

use reqwest::blocking::Client; // sync calls only, one round trip per completion
use reqwest::StatusCode;
use serde_json::Value;

use super::configs::{GithubModelsConfig, ProviderConfig};
use super::error::ProviderError;
use super::types::completion::Completion;
use super::types::generation::GenerationConfig;
use super::types::message::conversation;
use super::utils::{build_payload, response_to_completion};

/// Completion requester for the GitHub Models inference endpoint.
///
/// Stateless apart from the connection pool inside the HTTP client; every
/// call is a single request-response round trip with no retry or backoff.
pub struct GithubModelsProvider {
    client: Client,
    config: GithubModelsConfig,
}

impl GithubModelsProvider {
    pub fn new(config: GithubModelsConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        let config = GithubModelsConfig::from_env()?;
        Self::new(config)
    }

    /// Send `prompt` as a two-message conversation and return the first
    /// candidate's text. The prompt must be non-empty; no other validation
    /// is performed locally.
    pub fn complete(
        &self,
        prompt: &str,
        generation: &GenerationConfig,
    ) -> Result<Completion, ProviderError> {
        if prompt.is_empty() {
            return Err(ProviderError::EmptyPrompt);
        }

        let payload = build_payload(generation, &conversation(prompt));
        let response = self.post(payload)?;

        // Some gateways report failures inside a 200 body.
        if let Some(error) = response.get("error") {
            return Err(ProviderError::Api {
                status: StatusCode::OK.as_u16(),
                message: error_text(error),
            });
        }

        response_to_completion(response)
    }

    fn post(&self, payload: Value) -> Result<Value, ProviderError> {
        let url = format!(
            "{}/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .json(&payload)
            .send()?;

        let status = response.status();
        match status {
            StatusCode::OK => Ok(response.json()?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ProviderError::Authentication(format!(
                    "token rejected by provider ({})",
                    status
                )))
            }
            _ => {
                let body = response.text().unwrap_or_default();
                Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&body, status),
                })
            }
        }
    }
}

/// Pull the human-readable message out of an error body, falling back to the
/// raw body or the status line when the shape is unfamiliar.
fn api_error_message(body: &str, status: StatusCode) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => parsed
            .get("error")
            .map(error_text)
            .unwrap_or_else(|| body.to_string()),
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => status.to_string(),
    }
}

fn error_text(error: &Value) -> String {
    error
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn provider_for(server: &mockito::ServerGuard) -> GithubModelsProvider {
        GithubModelsProvider::new(GithubModelsConfig::new(
            "test_token".to_string(),
            server.url(),
        ))
        .unwrap()
    }

    fn demo_generation() -> GenerationConfig {
        GenerationConfig::new("gpt-4o-mini")
            .with_temperature(1.0)
            .with_max_tokens(1000)
            .with_top_p(1.0)
    }

    #[test]
    fn test_complete_returns_first_candidate_text() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{
                        "message": { "role": "assistant", "content": "X" }
                    }],
                    "usage": { "prompt_tokens": 5, "completion_tokens": 7 }
                })
                .to_string(),
            )
            .create();

        let completion = provider_for(&server)
            .complete("Teach me about resilience.", &demo_generation())
            .unwrap();

        mock.assert();
        assert_eq!(completion.text(), "X");
        assert_eq!(completion.usage.total_tokens, Some(12));
    }

    #[test]
    fn test_request_payload_carries_conversation_and_params() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "You are a helpful assistant." },
                    { "role": "user", "content": "Summarize the text." }
                ],
                "temperature": 1.0,
                "max_tokens": 1000,
                "top_p": 1.0
            })))
            .with_status(200)
            .with_body(
                json!({ "choices": [{ "message": { "content": "ok" } }] }).to_string(),
            )
            .create();

        provider_for(&server)
            .complete("Summarize the text.", &demo_generation())
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_unauthorized_maps_to_authentication_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "bad token"}}"#)
            .create();

        let result = provider_for(&server).complete("hello", &demo_generation());
        assert!(matches!(result, Err(ProviderError::Authentication(_))));
    }

    #[test]
    fn test_non_success_status_is_an_error_not_a_string() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": {"message": "rate limited"}}"#)
            .create();

        let result = provider_for(&server).complete("hello", &demo_generation());
        match result {
            Err(ProviderError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_inside_success_status() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"error": {"message": "unknown model", "code": "model_not_found"}}"#)
            .create();

        let result = provider_for(&server).complete("hello", &demo_generation());
        assert!(matches!(result, Err(ProviderError::Api { .. })));
    }

    #[test]
    fn test_empty_prompt_rejected_before_any_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create();

        let result = provider_for(&server).complete("", &demo_generation());

        assert!(matches!(result, Err(ProviderError::EmptyPrompt)));
        mock.assert();
    }

    #[test]
    fn test_success_without_content_is_malformed() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create();

        let result = provider_for(&server).complete("hello", &demo_generation());
        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }
}
