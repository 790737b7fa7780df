use crate::cache::TranslationCache;
use crate::segment::segments;
use crate::translate::{LanguagePair, Translator};

/// Result of rewriting one file's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// True iff `text` differs from the input
    pub changed: bool,
    /// Number of segments that were looked up
    pub segments: usize,
}

/// Replace every Hangul segment in `original` with its translation
///
/// Whitespace at either edge of a matched span is copied from the original
/// around the translated core. Text between segments is copied verbatim.
pub async fn rewrite(
    original: &str,
    cache: &mut TranslationCache,
    translator: &dyn Translator,
    languages: &LanguagePair,
) -> Rewrite {
    let mut text = String::with_capacity(original.len());
    let mut last = 0;
    let mut count = 0;

    for segment in segments(original) {
        count += 1;
        text.push_str(&original[last..segment.start]);

        let key = segment.key();
        if key.is_empty() {
            text.push_str(segment.text);
        } else {
            let translated = cache.lookup_or_translate(key, translator, languages).await;
            text.push_str(segment.leading_whitespace());
            text.push_str(&translated);
            text.push_str(segment.trailing_whitespace());
        }

        last = segment.end;
    }
    text.push_str(&original[last..]);

    let changed = text != original;
    Rewrite {
        text,
        changed,
        segments: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;
    use crate::translate::MockTranslator;

    fn dictionary_translator(pairs: &'static [(&'static str, &'static str)]) -> MockTranslator {
        let mut translator = MockTranslator::new();
        translator.expect_translate().returning(move |text, _, _| {
            pairs
                .iter()
                .find(|(ko, _)| *ko == text)
                .map(|(_, en)| en.to_string())
                .ok_or_else(|| SweepError::Translation(format!("no entry for {}", text)))
        });
        translator
    }

    #[tokio::test]
    async fn test_comment_is_translated() {
        let translator = dictionary_translator(&[("주석", "comment"), ("설명", "description")]);
        let mut cache = TranslationCache::new();

        let result = rewrite(
            "// 주석 설명\nint x = 1;",
            &mut cache,
            &translator,
            &LanguagePair::default(),
        )
        .await;

        assert_eq!(result.text, "// comment description\nint x = 1;");
        assert!(result.changed);
        assert_eq!(result.segments, 2);
    }

    #[tokio::test]
    async fn test_text_without_hangul_is_unchanged() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().times(0);
        let mut cache = TranslationCache::new();

        let original = "int main() {\n    return 0; // café\n}\n";
        let result = rewrite(original, &mut cache, &translator, &LanguagePair::default()).await;

        assert_eq!(result.text, original);
        assert!(!result.changed);
        assert_eq!(result.segments, 0);
    }

    #[tokio::test]
    async fn test_repeated_phrase_translated_once() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|text, _, _| text == "안녕")
            .times(1)
            .returning(|_, _, _| Ok("hello".to_string()));
        let mut cache = TranslationCache::new();

        let result = rewrite("안녕 안녕", &mut cache, &translator, &LanguagePair::default()).await;

        assert_eq!(result.text, "hello hello");
        assert_eq!(result.segments, 2);
        assert_eq!(cache.stats().hits, 1);
    }

    #[tokio::test]
    async fn test_trailing_whitespace_is_preserved() {
        let translator = dictionary_translator(&[("안녕！", "Hi!")]);
        let mut cache = TranslationCache::new();

        let result = rewrite(
            "  안녕！\u{3000}\u{3000}x",
            &mut cache,
            &translator,
            &LanguagePair::default(),
        )
        .await;

        assert_eq!(result.text, "  Hi!\u{3000}\u{3000}x");
        assert!(result.changed);
    }

    #[tokio::test]
    async fn test_failed_phrase_is_left_in_place() {
        let translator = dictionary_translator(&[("점프", "jump")]);
        let mut cache = TranslationCache::new();

        let result = rewrite(
            "// 점프 천장",
            &mut cache,
            &translator,
            &LanguagePair::default(),
        )
        .await;
        assert_eq!(result.text, "// jump 천장");
        assert!(result.changed);

        let result = rewrite("// 천장", &mut cache, &translator, &LanguagePair::default()).await;
        assert_eq!(result.text, "// 천장");
        assert!(!result.changed);
        assert_eq!(cache.stats().failures, 1);
    }

    #[tokio::test]
    async fn test_empty_translation_does_not_delete_phrase() {
        let translator = dictionary_translator(&[("이동", "")]);
        let mut cache = TranslationCache::new();

        let result = rewrite("int x; // 이동\n", &mut cache, &translator, &LanguagePair::default()).await;

        assert_eq!(result.text, "int x; // 이동\n");
        assert!(!result.changed);
    }

    #[tokio::test]
    async fn test_cache_is_shared_across_calls() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .times(1)
            .returning(|_, _, _| Ok("movement".to_string()));
        let mut cache = TranslationCache::new();
        let languages = LanguagePair::default();

        let first = rewrite("/* 이동 */", &mut cache, &translator, &languages).await;
        let second = rewrite("FString Name = TEXT(\"이동\");", &mut cache, &translator, &languages).await;

        assert_eq!(first.text, "/* movement */");
        assert_eq!(second.text, "FString Name = TEXT(\"movement\");");
    }
}
