use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3001;
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-lite";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

/// Immutable process configuration, read once at startup and then only shared.
#[derive(Clone, Debug)]
pub struct Config {
    /// Credential for the Gemini REST API.
    pub api_key: String,
    /// Port to listen on unless `--address` overrides it.
    pub port: u16,
    /// Base URL of the generative API. Points at a local mock server in tests.
    pub api_base: String,
    /// Model used for recipe recommendations.
    pub text_model: String,
    /// Model used for food photographs.
    pub image_model: String,
}

impl Config {
    /// Load the configuration from the environment (and `.env`, if loaded).
    pub fn from_env() -> Result<Self> {
        let api_key = dotenvy::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY is not set; the server cannot call the generative API")?;
        let port = match dotenvy::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            api_key,
            port,
            api_base: dotenvy::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            text_model: dotenvy::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.into()),
            image_model: dotenvy::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// A configuration pointing at a test server instead of the real API.
    pub fn for_tests(api_base: &str) -> Self {
        Self {
            api_key: "test-key".into(),
            port: DEFAULT_PORT,
            api_base: api_base.trim_end_matches('/').into(),
            text_model: "test-text-model".into(),
            image_model: "test-image-model".into(),
        }
    }
}
