use std::path::{Path, PathBuf};

use anyhow::Context;
use hsk_config::Config;
use hsk_core::dictionary::DictionaryLoader;
use hsk_core::{Language, ParsedContent};
use hsk_lang_chinese::CedictLoader;

/// One page conversion
#[derive(Debug, Clone)]
pub struct Job {
    pub page: PathBuf,
    /// French decks are produced when set
    pub dictionary: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub config: Config,
}

/// Parse the page, translate if asked, and write every list and deck
pub fn run(job: &Job) -> anyhow::Result<Vec<PathBuf>> {
    let content = load_page(&job.page, &job.config)?;

    let (content, language) = match &job.dictionary {
        Some(path) => (translate(&content, path)?, Language::French),
        None => (content, Language::English),
    };

    let unknown = hsk_anki::unknown_annotations(&content, language);
    if !unknown.is_empty() {
        tracing::warn!("Missing grammar indicators: {:?}", unknown);
    }

    hsk_anki::export_all(&content, language, &job.config.deck.delimiter, &job.out_dir)
        .with_context(|| format!("Failed to write decks to {}", job.out_dir.display()))
}

fn load_page(path: &Path, config: &Config) -> anyhow::Result<ParsedContent> {
    tracing::info!("Reading HSK page {}", path.display());
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    hsk_extract::parse_page(&html, &config.template)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn translate(content: &ParsedContent, dictionary: &Path) -> anyhow::Result<ParsedContent> {
    let table = CedictLoader::new(Language::French.code())
        .load_from_file(dictionary)
        .with_context(|| format!("Failed to load dictionary {}", dictionary.display()))?;

    let (translated, report) = hsk_translator::translate_content(content, &table);
    if !report.missing.is_empty() {
        tracing::warn!(
            "{} words have no French translation and are marked {:?}",
            report.missing.len(),
            hsk_translator::NOT_FOUND
        );
    }

    Ok(translated)
}
