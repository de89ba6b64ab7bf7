use async_trait::async_trait;
use std::sync::Mutex;

use super::PlanModel;
use crate::error::GenerationError;

pub(crate) enum Reply {
    Text(String),
    Echo,
    Fail(u16, String),
}

/// In-process stand-in for the provider; remembers every prompt it saw.
pub(crate) struct FakeModel {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub(crate) fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub(crate) fn echoing() -> Self {
        Self::with(Reply::Echo)
    }

    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self::with(Reply::Fail(status, message.to_string()))
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanModel for FakeModel {
    fn model_name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        tokio::task::yield_now().await;
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Echo => Ok(prompt.to_string()),
            Reply::Fail(status, message) => Err(GenerationError::Provider {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
