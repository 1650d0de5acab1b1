use thiserror::Error;

/// Failure modes of a completion request. None of these are recovered
/// locally; every variant propagates to the caller and surfaces at the
/// process boundary.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response from provider: {0}")]
    MalformedResponse(String),

    #[error("Prompt must not be empty")]
    EmptyPrompt,
}
