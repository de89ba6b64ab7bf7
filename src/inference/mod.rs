pub mod groq;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use groq::GroqClient;

/// A hosted text-generation model that turns one prompt into one reply.
#[async_trait]
pub trait PlanModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}
