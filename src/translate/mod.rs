// Translation backends
//
// The sweep only needs one operation from a backend: translate a single phrase
// between two languages. Backends are chosen through a factory:
// - Google: Google Translate API v2 (API key from the environment)
// - Ollama: local LLM prompted for a JSON-wrapped translation

pub mod google;
pub mod ollama;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::config::{TranslateConfig, TranslatorProvider};
use crate::error::Result;

pub use google::GoogleTranslator;
pub use ollama::OllamaTranslator;

/// Main trait for translation backends
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_language` to `target_language`
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String>;

    /// Verify the backing service can be used before any file is touched
    async fn check_availability(&self) -> Result<()> {
        Ok(())
    }

    /// Short backend name for log lines
    fn name(&self) -> &str;
}

/// Source and target language codes for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("ko", "en")
    }
}

/// Factory for creating translator instances
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator for the configured provider
    ///
    /// Fails with `TranslatorUnavailable` when the backend cannot be set up,
    /// e.g. a missing API key.
    pub fn create_translator(config: &TranslateConfig) -> Result<Box<dyn Translator>> {
        match config.provider {
            TranslatorProvider::Google => Ok(Box::new(GoogleTranslator::from_config(config)?)),
            TranslatorProvider::Ollama => Ok(Box::new(OllamaTranslator::from_config(config)?)),
        }
    }
}

/// Convert a language code to its English name for prompts
pub fn language_code_to_name(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "ko" => "Korean".to_string(),
        "en" => "English".to_string(),
        "ja" => "Japanese".to_string(),
        "zh" => "Chinese".to_string(),
        "fr" => "French".to_string(),
        "de" => "German".to_string(),
        "es" => "Spanish".to_string(),
        "ru" => "Russian".to_string(),
        "it" => "Italian".to_string(),
        "pt" => "Portuguese".to_string(),
        "vi" => "Vietnamese".to_string(),
        "th" => "Thai".to_string(),
        _ => code.to_string(),
    }
}
