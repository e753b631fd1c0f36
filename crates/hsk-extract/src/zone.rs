use std::fmt;

use hsk_core::preprocess::{DefaultPreprocessor, Preprocessor, strip_annotations};
use hsk_core::{AudioRefs, SentenceEntry, WordEntry};

use crate::error::ParseError;
use crate::ids::PendingWord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Word,
    Sentence,
}

impl EntryKind {
    fn zone(self) -> Zone {
        match self {
            EntryKind::Word => Zone::InWord,
            EntryKind::Sentence => Zone::InSentence,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Word => f.write_str("word"),
            EntryKind::Sentence => f.write_str("sentence"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Hanzi,
    Traditional,
    Pinyin,
    Definition,
    Audio,
}

impl FieldKind {
    /// Sentence blocks only carry hanzi, pinyin and definition
    fn applies_to(self, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Word => true,
            EntryKind::Sentence => matches!(
                self,
                FieldKind::Hanzi | FieldKind::Pinyin | FieldKind::Definition
            ),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Hanzi => "hanzi",
            FieldKind::Traditional => "traditional",
            FieldKind::Pinyin => "pinyin",
            FieldKind::Definition => "definition",
            FieldKind::Audio => "audio",
        };
        f.write_str(name)
    }
}

/// Recognized meaning of a class token on an opening tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Entry(EntryKind),
    Field(FieldKind),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Entry(kind) => write!(f, "{kind} block"),
            Signal::Field(field) => write!(f, "{field} field"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Outside,
    InWord,
    InSentence,
    InField(EntryKind, FieldKind),
}

impl Zone {
    /// Zone entered when an element carrying `signal` opens.
    /// `Ok(None)` means the signal does not apply here and the element is ignored.
    pub fn open(self, signal: Signal, line: u64) -> Result<Option<Zone>, ParseError> {
        match (self, signal) {
            (Zone::Outside, Signal::Entry(kind)) => Ok(Some(kind.zone())),
            (_, Signal::Entry(kind)) => Err(ParseError::NestedEntry { kind, line }),
            (Zone::InWord, Signal::Field(field)) => {
                Ok(Some(Zone::InField(EntryKind::Word, field)))
            }
            (Zone::InSentence, Signal::Field(field)) if field.applies_to(EntryKind::Sentence) => {
                Ok(Some(Zone::InField(EntryKind::Sentence, field)))
            }
            (Zone::InField(kind, _), Signal::Field(field)) if field.applies_to(kind) => {
                Err(ParseError::NestedField { field, line })
            }
            _ => Ok(None),
        }
    }

    /// Zone left when the element that opened `signal` closes
    pub fn close(self, signal: Signal, line: u64) -> Result<Zone, ParseError> {
        match (self, signal) {
            (Zone::InField(kind, open), Signal::Field(field)) if open == field => {
                Ok(kind.zone())
            }
            (Zone::InWord, Signal::Entry(EntryKind::Word))
            | (Zone::InSentence, Signal::Entry(EntryKind::Sentence)) => Ok(Zone::Outside),
            _ => Err(ParseError::UnexpectedClose {
                what: signal.to_string(),
                line,
            }),
        }
    }
}

/// Fields collected for the entry currently open
#[derive(Debug)]
pub struct EntryBuilder {
    pub kind: EntryKind,
    pub id: Option<u32>,
    hanzi: String,
    traditional: String,
    pinyin: String,
    definition: String,
    audio: AudioRefs,
}

impl EntryBuilder {
    pub fn new(kind: EntryKind, id: Option<u32>) -> Self {
        Self {
            kind,
            id,
            hanzi: String::new(),
            traditional: String::new(),
            pinyin: String::new(),
            definition: String::new(),
            audio: AudioRefs::default(),
        }
    }

    pub fn push_text(&mut self, field: FieldKind, text: &str) {
        let buf = match field {
            FieldKind::Hanzi => &mut self.hanzi,
            FieldKind::Traditional => &mut self.traditional,
            FieldKind::Pinyin => &mut self.pinyin,
            FieldKind::Definition => &mut self.definition,
            // audio is read from link attributes, not text
            FieldKind::Audio => return,
        };
        buf.push_str(text);
    }

    /// Record an audio link; the first file of each format wins
    pub fn push_audio_link(&mut self, link: &str) {
        let Some(file) = audio_file_name(link) else {
            return;
        };

        let slot = if file.to_ascii_lowercase().ends_with(".mp3") {
            &mut self.audio.mp3
        } else {
            &mut self.audio.ogg
        };

        if slot.is_empty() {
            *slot = file.to_string();
        }
    }

    /// Word with its explicit id, if any; fallback ids are settled per page
    pub fn into_word(self) -> PendingWord {
        let pre = DefaultPreprocessor;
        let hanzi = pre.process(&self.hanzi);
        PendingWord {
            id: self.id,
            word: WordEntry {
                id: 0,
                hanzi_raw: strip_annotations(&hanzi),
                hanzi,
                traditional: pre.process(&self.traditional),
                pinyin: pre.process(&self.pinyin),
                definition: pre.process(&self.definition),
                audio: self.audio,
            },
        }
    }

    pub fn into_sentence(self) -> SentenceEntry {
        let pre = DefaultPreprocessor;
        SentenceEntry {
            hanzi: pre.process(&self.hanzi),
            pinyin: pre.process(&self.pinyin),
            definition: pre.process(&self.definition),
        }
    }
}

/// Last path component of an `.mp3`/`.ogg` link, without query or fragment
pub fn audio_file_name(link: &str) -> Option<&str> {
    let path = link.split(['?', '#']).next().unwrap_or_default().trim();
    let file = path.rsplit('/').next().unwrap_or_default();
    let lower = file.to_ascii_lowercase();

    if lower.ends_with(".mp3") || lower.ends_with(".ogg") {
        Some(file)
    } else {
        None
    }
}
