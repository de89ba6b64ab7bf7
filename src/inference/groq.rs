use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::PlanModel;
use crate::config::ModelConfig;
use crate::error::GenerationError;

/// Plans are requested with deterministic sampling.
const TEMPERATURE: f32 = 0.0;

// ------------------------------------------------------------
// WIRE TYPES (OpenAI-compatible chat completions)
// ------------------------------------------------------------
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

// ------------------------------------------------------------
// CLIENT
// ------------------------------------------------------------
/// Groq chat-completions client. Immutable once built, shared by all requests.
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn provider_error(status: reqwest::StatusCode, body: &str) -> GenerationError {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string(),
            Err(_) => body.chars().take(200).collect(),
        };
        GenerationError::Provider {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl PlanModel for GroqClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all)]
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending chat completion");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("groq request failed: {e}");
                GenerationError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::provider_error(status, &body));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::Malformed("response contained no choices".into()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
