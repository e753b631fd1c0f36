use hsk_core::ParsedContent;

use crate::{NOT_FOUND, Translator};

/// Outcome of translating a page's words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub translated: usize,
    /// Headwords that received the `NOT_FOUND` sentinel
    pub missing: Vec<String>,
}

/// Copy of `content` whose word definitions come from `translator`.
/// Words are looked up by `hanzi_raw`; sentences keep their definitions.
pub fn localize(
    content: &ParsedContent,
    translator: &dyn Translator,
) -> (ParsedContent, TranslationReport) {
    let mut report = TranslationReport::default();
    let mut localized = content.clone();

    for word in &mut localized.words {
        let translation = translator.translate_with_reading(&word.hanzi_raw, &word.pinyin);
        if translation == NOT_FOUND {
            tracing::warn!("{} has no translation", word.hanzi_raw);
            report.missing.push(word.hanzi_raw.clone());
        } else {
            report.translated += 1;
        }
        word.definition = translation;
    }

    tracing::info!(
        "Translated {} words with {}, {} missing",
        report.translated,
        translator.metadata().name,
        report.missing.len()
    );

    (localized, report)
}
