use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Parenthesized annotation, ASCII or full-width
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(（][^()（）]*[)）]").unwrap());

pub trait Preprocessor {
    /// Default text cleanup for scraped fields
    fn process(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        collapse_whitespace(&text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Collapse whitespace runs (newlines included) to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `得(助动词)` -> `得`
pub fn strip_annotations(hanzi: &str) -> String {
    ANNOTATION_RE.replace_all(hanzi, "").trim().to_string()
}

/// All annotations on a headword, in order
pub fn annotations(hanzi: &str) -> Vec<&str> {
    ANNOTATION_RE.find_iter(hanzi).map(|m| m.as_str()).collect()
}
