use hsk_core::dictionary::Dictionary;
use hsk_core::{DictionaryTable, ParsedContent};

mod localize;

pub use localize::{TranslationReport, localize};

/// Returned by translators when a headword has no entry
pub const NOT_FOUND: &str = "NOT FOUND";

/// Translation provider interface
pub trait Translator {
    /// Translate a headword, `NOT_FOUND` when absent
    fn translate(&self, term: &str) -> String;

    /// Translate a headword, preferring the homograph read as `pinyin`
    fn translate_with_reading(&self, term: &str, pinyin: &str) -> String {
        let _ = pinyin;
        self.translate(term)
    }

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    /// ISO 639-1 code of the produced translations
    pub language: String,
}

/// Looks headwords up verbatim in a loaded word list
pub struct DictionaryTranslator<'a> {
    table: &'a DictionaryTable,
}

impl<'a> DictionaryTranslator<'a> {
    pub fn new(table: &'a DictionaryTable) -> Self {
        Self { table }
    }
}

impl Translator for DictionaryTranslator<'_> {
    fn translate(&self, term: &str) -> String {
        self.table
            .first_translation(term)
            .unwrap_or(NOT_FOUND)
            .to_string()
    }

    fn translate_with_reading(&self, term: &str, pinyin: &str) -> String {
        let records = self.table.lookup_exact(term);
        if records.len() > 1 {
            let wanted = pinyin.trim();
            if let Some(record) = records.iter().find(|r| r.pinyin == wanted) {
                return record.translation.clone();
            }
            tracing::debug!("No homograph of {} read as {}, using the first", term, wanted);
        }
        self.translate(term)
    }

    fn metadata(&self) -> ProviderMetadata {
        let meta = self.table.metadata();
        ProviderMetadata {
            name: meta.name,
            language: meta.language,
        }
    }
}

/// Translate every word of `content` with a dictionary table
pub fn translate_content(
    content: &ParsedContent,
    table: &DictionaryTable,
) -> (ParsedContent, TranslationReport) {
    localize(content, &DictionaryTranslator::new(table))
}
