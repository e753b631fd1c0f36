use std::collections::HashMap;
use std::path::Path;

/// Dictionary lookup operations
pub trait Dictionary {
    /// All records whose headword is exactly `query`, in file order
    fn lookup_exact(&self, query: &str) -> &[DictionaryRecord];

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Load dictionaries from files
pub trait DictionaryLoader {
    /// Load dictionary from file path
    fn load_from_file(&self, path: &Path) -> Result<DictionaryTable, LoadError>;

    /// Supported file formats
    fn supported_formats(&self) -> Vec<String>;
}

/// One line of a bilingual word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRecord {
    pub traditional: String,
    pub simplified: String,
    /// Tone-marked pinyin
    pub pinyin: String,
    pub translation: String,
}

/// Simplified headword -> records, homographs kept in file order
#[derive(Debug, Clone, Default)]
pub struct DictionaryTable {
    name: String,
    language: String,
    entries: HashMap<String, Vec<DictionaryRecord>>,
    record_count: usize,
}

impl DictionaryTable {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            entries: HashMap::new(),
            record_count: 0,
        }
    }

    pub fn insert(&mut self, record: DictionaryRecord) {
        self.record_count += 1;
        self.entries
            .entry(record.simplified.clone())
            .or_default()
            .push(record);
    }

    /// First-wins translation for an exact headword
    pub fn first_translation(&self, headword: &str) -> Option<&str> {
        self.lookup_exact(headword)
            .first()
            .map(|r| r.translation.as_str())
    }

    pub fn headword_count(&self) -> usize {
        self.entries.len()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for DictionaryTable {
    fn lookup_exact(&self, query: &str) -> &[DictionaryRecord] {
        self.entries.get(query).map(Vec::as_slice).unwrap_or(&[])
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            language: self.language.clone(),
            entry_count: self.record_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
