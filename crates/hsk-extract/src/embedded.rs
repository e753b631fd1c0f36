//! Page state that the vocabulary site embeds as `window.__REACT_DATA = {...};`

use hsk_core::preprocess::{DefaultPreprocessor, Preprocessor, strip_annotations};
use hsk_core::{AudioRefs, SentenceEntry, WordEntry};
use serde::Deserialize;

use crate::error::ParseError;
use crate::ids::{PendingWord, assign_ids};
use crate::zone::audio_file_name;

const MARKER: &str = "window.__REACT_DATA = ";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddedState {
    #[serde(default)]
    words: Vec<EmbeddedWord>,
    #[serde(default)]
    localized_sentences: Vec<EmbeddedSentence>,
    #[serde(default)]
    hsk_level: Option<EmbeddedLevel>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbeddedLevel {
    Number(u8),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddedWord {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    hanzi: String,
    #[serde(default)]
    hanzi_traditional: String,
    #[serde(default)]
    pinyin_tone_space: String,
    #[serde(default)]
    def: String,
    #[serde(default)]
    audio: Option<EmbeddedAudio>,
}

#[derive(Debug, Deserialize, Default)]
struct EmbeddedAudio {
    #[serde(default)]
    mp3: String,
    #[serde(default)]
    ogg: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddedSentence {
    #[serde(default)]
    hanzi: String,
    #[serde(default)]
    pinyin_tone: String,
    #[serde(default)]
    def: String,
}

/// Records decoded from the embedded page state
#[derive(Debug, Default)]
pub struct EmbeddedContent {
    pub words: Vec<WordEntry>,
    pub sentences: Vec<SentenceEntry>,
    pub hsk_level: Option<u8>,
}

/// Decode the page state if `script` carries it
pub fn decode(script: &str) -> Result<Option<EmbeddedContent>, ParseError> {
    let Some(start) = script.find(MARKER) else {
        return Ok(None);
    };

    // the object is followed by `;` and possibly more script
    let rest = &script[start + MARKER.len()..];
    let state = match serde_json::Deserializer::from_str(rest)
        .into_iter::<EmbeddedState>()
        .next()
    {
        Some(state) => state?,
        None => return Ok(None),
    };

    state.into_content().map(Some)
}

impl EmbeddedState {
    fn into_content(self) -> Result<EmbeddedContent, ParseError> {
        let pre = DefaultPreprocessor;

        let pending = self
            .words
            .into_iter()
            .map(|w| {
                let hanzi = pre.process(&w.hanzi);
                let audio = w.audio.unwrap_or_default();
                PendingWord {
                    id: w.id,
                    word: WordEntry {
                        id: 0,
                        hanzi_raw: strip_annotations(&hanzi),
                        hanzi,
                        traditional: pre.process(&w.hanzi_traditional),
                        pinyin: pre.process(&w.pinyin_tone_space),
                        definition: pre.process(&w.def),
                        audio: AudioRefs {
                            mp3: audio_file_name(&audio.mp3).unwrap_or_default().to_string(),
                            ogg: audio_file_name(&audio.ogg).unwrap_or_default().to_string(),
                        },
                    },
                }
            })
            .collect();
        let words = assign_ids(pending)?;

        let sentences = self
            .localized_sentences
            .into_iter()
            .map(|s| SentenceEntry {
                hanzi: pre.process(&s.hanzi),
                pinyin: pre.process(&s.pinyin_tone),
                definition: pre.process(&s.def),
            })
            .collect();

        let hsk_level = match self.hsk_level {
            Some(EmbeddedLevel::Number(n)) => Some(n),
            Some(EmbeddedLevel::Text(text)) => text.trim().parse().ok(),
            None => None,
        };

        Ok(EmbeddedContent {
            words,
            sentences,
            hsk_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_scripts_without_marker() {
        assert!(decode("console.log(1 < 2);").unwrap().is_none());
    }

    #[test]
    fn decodes_state_followed_by_code() {
        let script = r#"
            window.__REACT_DATA = {"hskLevel": "2", "words": [
                {"id": 7, "hanzi": "得(助动词)", "hanziRaw": "得", "pinyinToneSpace": "děi",
                 "def": "must", "audio": {"mp3": "https://cdn/x/dei3.mp3", "ogg": ""}}
            ], "localizedSentences": [
                {"hanzi": "我得走了。", "pinyinTone": "wǒ děi zǒu le.", "def": "I must go."}
            ]};
            window.init();
        "#;

        let content = decode(script).unwrap().unwrap();
        assert_eq!(content.hsk_level, Some(2));
        assert_eq!(content.words.len(), 1);
        assert_eq!(content.words[0].id, 7);
        assert_eq!(content.words[0].hanzi_raw, "得");
        assert_eq!(content.words[0].audio.mp3, "dei3.mp3");
        assert_eq!(content.sentences[0].pinyin, "wǒ děi zǒu le.");
    }

    #[test]
    fn missing_ids_skip_explicit_ones() {
        let script = r#"window.__REACT_DATA = {"words": [
            {"id": 2, "hanzi": "爱"}, {"hanzi": "八"}, {"id": 3, "hanzi": "爸爸"}
        ]};"#;

        let content = decode(script).unwrap().unwrap();
        let ids: Vec<u32> = content.words.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 4, 3]);
    }

    #[test]
    fn duplicate_state_ids_fail() {
        let script = r#"window.__REACT_DATA = {"words": [{"id": 2, "hanzi": "爱"}, {"id": 2, "hanzi": "八"}]};"#;
        assert!(matches!(decode(script), Err(ParseError::DuplicateId(2))));
    }

    #[test]
    fn broken_state_is_an_error() {
        let err = decode("window.__REACT_DATA = {\"words\": [oops]};").unwrap_err();
        assert!(matches!(err, ParseError::EmbeddedState(_)));
    }
}
