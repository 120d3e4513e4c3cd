//! VocabImpostor — AI vocabulary-list generator client.
//!
//! Asks an LLM for a themed word list and turns the answer into a
//! [`Category`]. Every failure mode — missing key, network, HTTP status,
//! malformed JSON, empty word list — collapses to "no category
//! produced"; generation can never corrupt game state.

use std::sync::Arc;

use async_trait::async_trait;
use impostor_content::Category;
use impostor_core::clock::Clock;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, warn};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const GEMINI_MODEL: &str = "gemini-2.5-flash";

const SYSTEM_INSTRUCTION: &str = "You are an educational assistant for a classroom game called \
    \"Impostor\" (like Spyfall). Your goal is to generate vocabulary lists based on a topic \
    provided by the teacher. The words should be distinct, clear, and suitable for the requested \
    difficulty level or language.";

/// Asynchronous provider of generated vocabulary categories.
#[async_trait]
pub trait VocabularyGenerator: Send + Sync {
    /// Generates a category for `topic` with words in `language`.
    /// Returns `None` on any failure; never panics or blocks the caller
    /// beyond the awaited request.
    async fn generate(&self, topic: &str, language: &str) -> Option<Category>;
}

/// Internal failure taxonomy; callers only ever see `None`.
#[derive(Debug, Error)]
enum GenerateError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),

    #[error("generated category is unusable: {0}")]
    Unusable(#[from] impostor_core::error::GameError),
}

/// The JSON payload the model is asked to produce.
#[derive(Debug, Deserialize)]
struct GeneratedPayload {
    #[serde(rename = "categoryName")]
    category_name: String,
    words: Vec<String>,
}

/// Generator backed by the Gemini `generateContent` endpoint.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: Option<String>,
    clock: Arc<dyn Clock>,
}

impl GeminiGenerator {
    /// Creates a generator. `api_key` of `None` means generation is
    /// unavailable; every call will produce `None`.
    #[must_use]
    pub fn new(api_key: Option<String>, clock: Arc<dyn Clock>) -> Self {
        Self { client: reqwest::Client::new(), api_key, clock }
    }

    async fn request_category(&self, topic: &str, language: &str, api_key: &str) -> Result<Category, GenerateError> {
        let url = format!("{GEMINI_BASE_URL}/models/{GEMINI_MODEL}:generateContent");
        let prompt = format!(
            "Generate a list of 15 unique words related to the topic: \"{topic}\". \
             The words should be in {language}."
        );
        let body = serde_json::json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "categoryName": { "type": "STRING" },
                        "words": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["categoryName", "words"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let text = extract_text(&response)
            .ok_or(GenerateError::MalformedResponse("no candidate text in response"))?;
        let payload = parse_payload(text)
            .ok_or(GenerateError::MalformedResponse("candidate text is not the requested JSON"))?;

        let category = Category {
            id: format!("gen-{}", self.clock.now().timestamp_millis()),
            name: payload.category_name,
            words: payload.words,
            is_custom: true,
        };
        category.validate()?;
        Ok(category)
    }
}

#[async_trait]
impl VocabularyGenerator for GeminiGenerator {
    async fn generate(&self, topic: &str, language: &str) -> Option<Category> {
        if topic.trim().is_empty() {
            warn!("generation requested with a blank topic");
            return None;
        }
        let Some(api_key) = self.api_key.as_deref() else {
            error!("generator API key not configured");
            return None;
        };

        match self.request_category(topic.trim(), language, api_key).await {
            Ok(category) => {
                info!(
                    category_id = %category.id,
                    words = category.words.len(),
                    "generated vocabulary category"
                );
                Some(category)
            }
            Err(e) => {
                warn!(topic, error = %e, "vocabulary generation failed");
                None
            }
        }
    }
}

/// Pulls the first candidate's text out of a `generateContent` response.
fn extract_text(response: &serde_json::Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Parses the model's JSON payload.
fn parse_payload(text: &str) -> Option<GeneratedPayload> {
    serde_json::from_str(text).ok()
}
