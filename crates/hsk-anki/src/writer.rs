use std::io::Write;
use std::path::{Path, PathBuf};

use hsk_core::{Language, ParsedContent};

use crate::DeckError;
use crate::formats::{
    sentence_deck_automatic, sentence_deck_manual, sentence_list, word_deck_automatic,
    word_deck_manual, word_list,
};
use crate::xml::render;

/// Write `contents` to `path` through a temp file in the same directory,
/// so a failed write never leaves a truncated file behind
pub fn write_output(path: &Path, contents: &str) -> Result<(), DeckError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| DeckError::Io(e.error))?;

    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Write the two lists and four decks for one page into `out_dir`.
/// Files already written stay in place if a later one fails.
pub fn export_all(
    content: &ParsedContent,
    language: Language,
    delimiter: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, DeckError> {
    std::fs::create_dir_all(out_dir)?;

    let level = content.hsk_level;
    let outputs = [
        (format!("hsk{level}_words.txt"), word_list(content, delimiter)),
        (format!("hsk{level}_sentences.txt"), sentence_list(content, delimiter)),
        (
            format!("hsk{level}_words_auto.xml"),
            render(&word_deck_automatic(content, language))?,
        ),
        (
            format!("hsk{level}_sentences_auto.xml"),
            render(&sentence_deck_automatic(content, language))?,
        ),
        (
            format!("hsk{level}_words.xml"),
            render(&word_deck_manual(content, language))?,
        ),
        (
            format!("hsk{level}_sentences.xml"),
            render(&sentence_deck_manual(content, language))?,
        ),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (name, contents) in outputs {
        let path = out_dir.join(name);
        write_output(&path, &contents)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use hsk_core::WordEntry;

    use super::*;

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.xml");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_output(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.xml");

        assert!(matches!(write_output(&path, "x"), Err(DeckError::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn exports_six_files() {
        let dir = tempfile::tempdir().unwrap();
        let content = ParsedContent {
            words: vec![WordEntry {
                id: 1,
                hanzi: "爱".to_string(),
                hanzi_raw: "爱".to_string(),
                pinyin: "ài".to_string(),
                definition: "to love".to_string(),
                ..WordEntry::default()
            }],
            sentences: vec![],
            hsk_level: 1,
        };

        let written = export_all(&content, Language::English, "\t", dir.path()).unwrap();
        assert_eq!(written.len(), 6);
        assert!(written.iter().all(|p| p.exists()));

        let list = std::fs::read_to_string(dir.path().join("hsk1_words.txt")).unwrap();
        assert_eq!(list, "爱\tài\tto love\n");
        let sentences = std::fs::read_to_string(dir.path().join("hsk1_sentences.txt")).unwrap();
        assert_eq!(sentences, "");
    }
}
