use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hangul_sweep::error::{Result, SweepError};
use hangul_sweep::translate::Translator;

/// Deterministic translator backed by a fixed dictionary
///
/// Phrases missing from the dictionary fail, which exercises the fallback path.
/// Every call is recorded so tests can count external requests.
#[derive(Clone, Default)]
pub struct DictionaryTranslator {
    entries: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl DictionaryTranslator {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: Arc::default(),
        }
    }

    /// Shared handle to the recorded calls, usable after the translator is boxed
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Translator for DictionaryTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(text.to_string());
        self.entries
            .get(text)
            .cloned()
            .ok_or_else(|| SweepError::Translation(format!("no dictionary entry for '{}'", text)))
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}
