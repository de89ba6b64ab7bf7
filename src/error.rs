use thiserror::Error;

/// Anything that can go wrong between receiving a profile and holding the
/// model's text. The HTTP layer reports every variant the same way.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to render prompt: {0}")]
    Prompt(#[from] minijinja::Error),
    #[error("failed to reach model provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("malformed model response: {0}")]
    Malformed(String),
}
