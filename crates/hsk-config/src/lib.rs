use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::deck::DeckConfig;
use self::dictionary::DictionaryConfig;
use self::template::TemplateConfig;

pub mod deck;
pub mod dictionary;
pub mod template;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck.delimiter must not be empty")]
    EmptyDelimiter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class names marking zones of the vocabulary page
    pub template: TemplateConfig,
    pub deck: DeckConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    /// Defaults, overridden by `HSK_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)?;
        config.apply_env();

        // list lines must split back into their fields
        if config.deck.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(delimiter) = env::var("HSK_DELIMITER") {
            if !delimiter.is_empty() {
                self.deck.delimiter = delimiter;
            }
        }

        if let Ok(out_dir) = env::var("HSK_OUT_DIR") {
            self.deck.out_dir = out_dir;
        }

        if let Ok(path) = env::var("HSK_DICTIONARY") {
            self.dictionary.path = Some(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "template": {{ "word_block": "vocab-item" }} }}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.template.word_block, "vocab-item");
        assert_eq!(config.template.pinyin, "pinyin");
        assert_eq!(config.deck.delimiter, "\t");
    }

    #[test]
    fn rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(Config::load(file.path()), Err(ConfigError::Json(_))));
    }

    #[test]
    fn rejects_empty_delimiter() {
        if env::var("HSK_DELIMITER").is_ok_and(|d| !d.is_empty()) {
            return;
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "deck": {{ "delimiter": "" }} }}"#).unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::EmptyDelimiter)
        ));
    }
}
