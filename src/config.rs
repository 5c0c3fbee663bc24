use anyhow::{bail, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Request body limit applied to document uploads.
    pub max_upload_bytes: usize,
}

#[derive(Clone, Deserialize)]
pub struct LLMConfig {
    pub google_api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

// Keeps the key out of startup logs
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("google_api_key", &"***")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// The API key is the only required value. `GEMINI_API_KEY` wins over
    /// `GOOGLE_GENERATIVE_AI_API_KEY` when both are present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("GOOGLE_GENERATIVE_AI_API_KEY"))
            .map(|key| key.trim().to_string())
            .unwrap_or_default();

        if google_api_key.is_empty() {
            bail!("GEMINI_API_KEY environment variable is not set");
        }

        Ok(Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .unwrap_or_else(|| "8000".to_string())
                    .parse()?,
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|| (25 * 1024 * 1024).to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                google_api_key,
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: lookup("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs: lookup("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse()?,
            },
        })
    }
}
