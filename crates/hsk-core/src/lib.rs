pub mod dictionary;
pub mod language;
pub mod preprocess;
pub mod types;

pub use dictionary::{DictionaryRecord, DictionaryTable, LoadError};
pub use language::Language;
pub use types::{AudioRefs, ParsedContent, SentenceEntry, WordEntry};
