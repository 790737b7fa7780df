use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{Result, SweepError};
use super::Translator;

/// Google Translate API v2 backend
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleTranslator {
    /// Maximum characters per string accepted by the v2 API
    const MAX_CHARS_PER_STRING: usize = 30_000;

    pub fn new(api_key: String, endpoint: &str, timeout: Duration) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(SweepError::TranslatorUnavailable(
                "Google Translate API key cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SweepError::TranslatorUnavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.to_string(),
        })
    }

    /// Build from config, reading the key from the configured environment variable
    pub fn from_config(config: &TranslateConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            SweepError::TranslatorUnavailable(format!(
                "{} environment variable not set",
                config.api_key_env
            ))
        })?;

        Self::new(
            api_key,
            config.endpoint(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl std::fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("api_key", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Pull `data.translations[0].translatedText` out of a v2 response body
fn extract_translation(json: &Value) -> Result<String> {
    json["data"]["translations"]
        .as_array()
        .and_then(|translations| translations.first())
        .and_then(|t| t["translatedText"].as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            SweepError::Translation(
                "Invalid API response: missing 'data.translations[0].translatedText'".to_string(),
            )
        })
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        if text.chars().count() > Self::MAX_CHARS_PER_STRING {
            return Err(SweepError::Translation(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }

        let body = json!({
            "q": [text],
            "source": source_language,
            "target": target_language,
            "format": "text"
        });

        debug!("Sending translation request to: {}", self.endpoint);

        // The key travels in a header so it never shows up in error URLs
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SweepError::Http(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SweepError::Translation(format!(
                "Google Translate API error {}: {}",
                status, error_text
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| SweepError::Translation(format!("Failed to parse API response: {}", e)))?;

        extract_translation(&json)
    }

    fn name(&self) -> &str {
        "google"
    }
}
