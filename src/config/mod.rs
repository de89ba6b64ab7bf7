use anyhow::{anyhow, Context, Result};
use std::fmt;

pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Settings for the hosted model. The API key is never printed.
#[derive(Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the process environment (and `.env`, if it was loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("GROQ_API_KEY")
            .ok_or_else(|| anyhow!("GROQ_API_KEY is not set"))?;
        let model = var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = var("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            model: ModelConfig {
                api_key,
                model,
                base_url,
            },
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
