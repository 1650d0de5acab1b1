use serde_json::{json, Value};

use super::error::ProviderError;
use super::types::completion::{Completion, Usage};
use super::types::generation::GenerationConfig;
use super::types::message::Message;

/// Convert internal messages to the provider's API message specification
pub fn messages_to_request_spec(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .map(|message| {
            json!({
                "role": message.role,
                "content": message.content,
            })
        })
        .collect()
}

/// Build the chat completion request body. `model` and `messages` are always
/// present; sampling parameters are included only when set, unmodified.
pub fn build_payload(generation: &GenerationConfig, messages: &[Message]) -> Value {
    let mut payload = json!({
        "model": generation.model,
        "messages": messages_to_request_spec(messages),
    });

    let body = payload.as_object_mut().expect("payload is an object");
    if let Some(temperature) = generation.temperature {
        body.insert("temperature".to_string(), json!(temperature));
    }
    if let Some(max_tokens) = generation.max_tokens {
        body.insert("max_tokens".to_string(), json!(max_tokens));
    }
    if let Some(top_p) = generation.top_p {
        body.insert("top_p".to_string(), json!(top_p));
    }

    payload
}

/// Extract the first candidate's text from the provider's response body.
///
/// A successful status with no extractable text is an error, never an empty
/// string.
pub fn response_to_completion(response: Value) -> Result<Completion, ProviderError> {
    let text = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            ProviderError::MalformedResponse(
                "missing choices[0].message.content".to_string(),
            )
        })?
        .to_string();

    Ok(Completion::new(text, get_usage(&response)))
}

fn get_usage(data: &Value) -> Usage {
    let usage = match data.get("usage") {
        Some(usage) => usage,
        None => return Usage::new(None, None, None),
    };

    let input_tokens = usage
        .get("prompt_tokens")
        .and_then(|v| v.as_i64())
        .map(|v| v as i32);

    let output_tokens = usage
        .get("completion_tokens")
        .and_then(|v| v.as_i64())
        .map(|v| v as i32);

    let total_tokens = usage
        .get("total_tokens")
        .and_then(|v| v.as_i64())
        .map(|v| v as i32)
        .or_else(|| match (input_tokens, output_tokens) {
            (Some(input), Some(output)) => Some(input + output),
            _ => None,
        });

    Usage::new(input_tokens, output_tokens, total_tokens)
}
