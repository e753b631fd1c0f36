use std::io::ErrorKind;
use std::path::Path;

use hsk_core::dictionary::{DictionaryLoader, DictionaryRecord, DictionaryTable, LoadError};

use crate::pinyin::format_pinyin;

/// Loader for CEDICT-format word lists (CC-CEDICT, CFDICT, HanDeDict):
///
/// ```text
/// # comment
/// 中國 中国 [Zhong1 guo2] /Chine/Empire du Milieu/
/// ```
///
/// A malformed line aborts the whole load.
pub struct CedictLoader {
    language: String,
}

impl CedictLoader {
    /// `language` is the ISO 639-1 code of the glosses
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Build a table from the text of a word list
    pub fn parse(&self, name: &str, text: &str) -> Result<DictionaryTable, LoadError> {
        let mut table = DictionaryTable::new(name, self.language.clone());

        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            table.insert(parse_line(line, index + 1)?);
        }

        Ok(table)
    }
}

impl DictionaryLoader for CedictLoader {
    fn load_from_file(&self, path: &Path) -> Result<DictionaryTable, LoadError> {
        tracing::info!("Loading CEDICT word list from file: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cedict".to_string());

        let table = self.parse(&name, &text)?;
        tracing::info!(
            "Loaded {} records for {} headwords",
            table.record_count(),
            table.headword_count()
        );
        Ok(table)
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["u8".to_string(), "txt".to_string()]
    }
}

fn invalid(line: usize, reason: &str) -> LoadError {
    LoadError::InvalidFormat {
        line,
        reason: reason.to_string(),
    }
}

/// `Traditional Simplified [pin1 yin1] /gloss 1/gloss 2/`
fn parse_line(line: &str, number: usize) -> Result<DictionaryRecord, LoadError> {
    let (head, rest) = line
        .split_once('[')
        .ok_or_else(|| invalid(number, "missing [pinyin]"))?;
    let (pinyin, glosses) = rest
        .split_once(']')
        .ok_or_else(|| invalid(number, "unterminated [pinyin]"))?;

    let mut characters = head.split_whitespace();
    let (Some(traditional), Some(simplified), None) =
        (characters.next(), characters.next(), characters.next())
    else {
        return Err(invalid(number, "expected traditional and simplified headwords"));
    };

    let glosses = glosses.trim();
    if !glosses.starts_with('/') {
        return Err(invalid(number, "missing /translation/"));
    }
    let translation = glosses
        .split('/')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(" ; ");
    if translation.is_empty() {
        return Err(invalid(number, "empty translation"));
    }

    Ok(DictionaryRecord {
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: format_pinyin(pinyin.trim()),
        translation,
    })
}
