use std::collections::HashMap;
use tracing::{debug, warn};

use crate::translate::{LanguagePair, Translator};

/// Counters reported in the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups that went to the translator
    pub misses: usize,
    /// Translator calls that failed or came back empty and fell back to the
    /// original text
    pub failures: usize,
}

/// Per-run map from trimmed segment text to its translation
///
/// Each distinct phrase reaches the translator at most once. A failed
/// translation is stored as the phrase itself, so it is not retried and
/// substituting it is a no-op.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<String, String>,
    stats: CacheStats,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the translation of `key`, asking `translator` only on a miss
    pub async fn lookup_or_translate(
        &mut self,
        key: &str,
        translator: &dyn Translator,
        languages: &LanguagePair,
    ) -> String {
        let key_trimmed = key.trim();
        if key_trimmed.is_empty() {
            return key.to_string();
        }

        if let Some(cached) = self.entries.get(key_trimmed) {
            self.stats.hits += 1;
            return cached.clone();
        }

        self.stats.misses += 1;
        debug!("Translating segment: {}", key_trimmed);

        let translation = match translator
            .translate(key_trimmed, &languages.source, &languages.target)
            .await
        {
            // An empty translation would delete the phrase from the file
            Ok(translation) if translation.trim().is_empty() => {
                warn!("Empty translation for '{}', keeping original", key_trimmed);
                self.stats.failures += 1;
                key_trimmed.to_string()
            }
            Ok(translation) => translation,
            Err(e) => {
                warn!("Failed to translate '{}': {}", key_trimmed, e);
                self.stats.failures += 1;
                key_trimmed.to_string()
            }
        };

        self.entries
            .insert(key_trimmed.to_string(), translation.clone());
        translation
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;
    use crate::translate::MockTranslator;

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, source, target| text == "안녕" && source == "ko" && target == "en")
            .times(1)
            .returning(|_, _, _| Ok("hello".to_string()));

        let languages = LanguagePair::default();
        let mut cache = TranslationCache::new();

        assert_eq!(cache.lookup_or_translate("안녕", &translator, &languages).await, "hello");
        assert_eq!(cache.lookup_or_translate("안녕", &translator, &languages).await, "hello");
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, failures: 0 });
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_key_is_trimmed_before_lookup() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, _, _| text == "설명")
            .times(1)
            .returning(|_, _, _| Ok("description".to_string()));

        let languages = LanguagePair::default();
        let mut cache = TranslationCache::new();

        cache.lookup_or_translate("설명\u{3000}", &translator, &languages).await;
        let second = cache.lookup_or_translate("설명", &translator, &languages).await;
        assert_eq!(second, "description");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_key_and_is_not_retried() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .times(1)
            .returning(|_, _, _| Err(SweepError::Translation("quota exceeded".to_string())));

        let languages = LanguagePair::default();
        let mut cache = TranslationCache::new();

        assert_eq!(cache.lookup_or_translate("천장", &translator, &languages).await, "천장");
        assert_eq!(cache.lookup_or_translate("천장", &translator, &languages).await, "천장");
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, failures: 1 });
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_translation_keeps_original() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, _, _| text == "이동")
            .times(1)
            .returning(|_, _, _| Ok(String::new()));
        translator
            .expect_translate()
            .withf(|text, _, _| text == "점프")
            .times(1)
            .returning(|_, _, _| Ok(" \n".to_string()));

        let languages = LanguagePair::default();
        let mut cache = TranslationCache::new();

        assert_eq!(cache.lookup_or_translate("이동", &translator, &languages).await, "이동");
        assert_eq!(cache.lookup_or_translate("점프", &translator, &languages).await, "점프");
        assert_eq!(cache.lookup_or_translate("이동", &translator, &languages).await, "이동");
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2, failures: 2 });
    }

    #[tokio::test]
    async fn test_blank_key_passes_through() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().times(0);

        let languages = LanguagePair::default();
        let mut cache = TranslationCache::new();

        assert_eq!(cache.lookup_or_translate("", &translator, &languages).await, "");
        assert_eq!(
            cache.lookup_or_translate("\u{3000} ", &translator, &languages).await,
            "\u{3000} "
        );
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
