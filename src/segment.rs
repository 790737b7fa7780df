//! Hangul segment detection
//!
//! A segment starts at a Hangul character (compatibility jamo or a precomposed
//! syllable) and extends over every following character outside 7-bit ASCII,
//! so punctuation such as `！` or `。` stays attached to the phrase it follows.

use std::ops::Range;

/// A detected run of Hangul text inside a larger string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// The matched text, `&source[start..end]`
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whitespace-trimmed text used as the translation cache key
    pub fn key(&self) -> &'a str {
        self.text.trim()
    }

    pub fn leading_whitespace(&self) -> &'a str {
        let len = self.text.len() - self.text.trim_start().len();
        &self.text[..len]
    }

    pub fn trailing_whitespace(&self) -> &'a str {
        let len = self.text.len() - self.text.trim_end().len();
        &self.text[self.text.len() - len..]
    }
}

/// Hangul Compatibility Jamo (U+3131..=U+318E) or Hangul Syllables (U+AC00..=U+D7A3)
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{3131}'..='\u{318E}' // Hangul Compatibility Jamo
        | '\u{AC00}'..='\u{D7A3}' // Hangul Syllables
    )
}

/// Anything outside 7-bit ASCII may continue a segment
pub fn is_continuation(c: char) -> bool {
    !c.is_ascii()
}

pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul)
}

/// Iterate over all segments in `text`, left to right
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Lazy iterator returned by [`segments`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let (offset, _) = rest.char_indices().find(|&(_, c)| is_hangul(c))?;
        let start = self.pos + offset;

        // Hangul is itself non-ASCII, so one continuation scan covers both
        // the script run and whatever trails it.
        let end = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !is_continuation(c))
            .map(|(i, _)| start + i)
            .unwrap_or(self.text.len());

        self.pos = end;
        Some(Segment {
            start,
            end,
            text: &self.text[start..end],
        })
    }
}
