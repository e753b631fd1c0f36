use serde::{Deserialize, Serialize};

/// Audio file names attached to a word card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRefs {
    pub mp3: String,
    pub ogg: String,
}

/// One vocabulary entry of an HSK page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: u32,
    /// Simplified headword, may carry an annotation such as `(助动词)`
    pub hanzi: String,
    /// `hanzi` with annotations removed
    pub hanzi_raw: String,
    pub traditional: String,
    /// Tone-marked, space separated syllables
    pub pinyin: String,
    pub definition: String,
    pub audio: AudioRefs,
}

/// One example sentence of an HSK page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceEntry {
    pub hanzi: String,
    pub pinyin: String,
    pub definition: String,
}

/// Everything extracted from one page, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContent {
    pub words: Vec<WordEntry>,
    pub sentences: Vec<SentenceEntry>,
    /// 0 when the page does not name its level
    pub hsk_level: u8,
}

impl ParsedContent {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty()
    }
}
