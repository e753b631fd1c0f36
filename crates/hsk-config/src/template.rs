use serde::{Deserialize, Serialize};

fn default_word_block() -> String {
    "word-card".to_string()
}

fn default_sentence_block() -> String {
    "sentence-card".to_string()
}

fn default_hanzi() -> String {
    "hanzi".to_string()
}

fn default_traditional() -> String {
    "hanzi-traditional".to_string()
}

fn default_pinyin() -> String {
    "pinyin".to_string()
}

fn default_definition() -> String {
    "definition".to_string()
}

fn default_audio() -> String {
    "audio".to_string()
}

fn default_level() -> String {
    "hsk-level".to_string()
}

fn default_id_attribute() -> String {
    "data-id".to_string()
}

/// CSS class tokens the vocabulary page uses for its blocks and fields
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TemplateConfig {
    #[serde(default = "default_word_block")]
    pub word_block: String,
    #[serde(default = "default_sentence_block")]
    pub sentence_block: String,
    #[serde(default = "default_hanzi")]
    pub hanzi: String,
    #[serde(default = "default_traditional")]
    pub traditional: String,
    #[serde(default = "default_pinyin")]
    pub pinyin: String,
    #[serde(default = "default_definition")]
    pub definition: String,
    #[serde(default = "default_audio")]
    pub audio: String,
    /// Heading holding "HSK n"; `<title>` and `<h1>` are always checked too
    #[serde(default = "default_level")]
    pub level: String,
    /// Attribute on a word block carrying its numeric id
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            word_block: default_word_block(),
            sentence_block: default_sentence_block(),
            hanzi: default_hanzi(),
            traditional: default_traditional(),
            pinyin: default_pinyin(),
            definition: default_definition(),
            audio: default_audio(),
            level: default_level(),
            id_attribute: default_id_attribute(),
        }
    }
}
