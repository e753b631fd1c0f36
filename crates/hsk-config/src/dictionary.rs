use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// CEDICT-format `.u8` word list; French decks are produced when set
    #[serde(default)]
    pub path: Option<String>,
}
