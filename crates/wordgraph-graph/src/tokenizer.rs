//! Text normalization into lowercase alphabetic tokens.

use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());

/// A slice of the original text, either a word or the run between words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Maximal run of ASCII letters, original casing
    Word(&'a str),
    /// Anything between two words (punctuation, whitespace, digits, non-Latin letters)
    Gap(&'a str),
}

impl<'a> Fragment<'a> {
    /// The original text of this fragment
    pub fn as_str(&self) -> &'a str {
        match self {
            Fragment::Word(s) | Fragment::Gap(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Fragment::Word(_))
    }
}

/// Split text into lowercase tokens.
///
/// Every character outside `A-Z`/`a-z` acts as a separator; empty runs are
/// dropped. Never fails, and the empty string yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Split text into alternating word and gap fragments, keeping every byte.
///
/// Concatenating the fragments reproduces the input exactly.
pub fn fragments(text: &str) -> Vec<Fragment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for m in WORD_PATTERN.find_iter(text) {
        if m.start() > cursor {
            out.push(Fragment::Gap(&text[cursor..m.start()]));
        }
        out.push(Fragment::Word(m.as_str()));
        cursor = m.end();
    }

    if cursor < text.len() {
        out.push(Fragment::Gap(&text[cursor..]));
    }

    out
}
