//! Adapter for the Gemini `generateContent` REST API.

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::extract;

/// The seam between the HTTP relay and the generative service. Routes only
/// see this trait, so tests can swap in a stub and the real client can be
/// replaced without touching them.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send a prompt to the text model and return its raw textual reply.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
    /// Send a prompt to the image model and return the first generated image.
    async fn generate_image(&self, prompt: &str) -> Result<InlineImage>;
}

/// A decoded image straight from the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

// -- Wire format (response side) --

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// One segment of a model reply: prose, an image, or (rarely) both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

/// Client for the Gemini REST API. Holds the one credential in the process;
/// everything in it is fixed at construction.
pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    async fn post_generate(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, model, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .context("Calling the generative API")?;
        let status = response.status();
        if !status.is_success() {
            // Kept for the server log only; never forwarded to clients.
            let detail = response.text().await.unwrap_or_default();
            bail!("Generative API returned {status}: {detail}");
        }
        response
            .json()
            .await
            .context("Decoding the generative API response")
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let response = self.post_generate(&self.text_model, &body).await?;
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .ok_or_else(|| anyhow!("No text in the model response"))
    }

    async fn generate_image(&self, prompt: &str) -> Result<InlineImage> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        });
        let response = self.post_generate(&self.image_model, &body).await?;
        let parts = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();
        Ok(extract::first_inline_image(&parts)?)
    }
}
