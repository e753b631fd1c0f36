use std::collections::HashMap;

use hsk_config::template::TemplateConfig;

use crate::zone::{EntryKind, FieldKind, Signal};

/// Class token -> signal, built once per parser from the page template
#[derive(Debug, Clone)]
pub struct SignalTable {
    signals: HashMap<String, Signal>,
    level_class: String,
    id_attribute: String,
}

impl SignalTable {
    pub fn new(template: &TemplateConfig) -> Self {
        let pairs = [
            (&template.word_block, Signal::Entry(EntryKind::Word)),
            (&template.sentence_block, Signal::Entry(EntryKind::Sentence)),
            (&template.hanzi, Signal::Field(FieldKind::Hanzi)),
            (&template.traditional, Signal::Field(FieldKind::Traditional)),
            (&template.pinyin, Signal::Field(FieldKind::Pinyin)),
            (&template.definition, Signal::Field(FieldKind::Definition)),
            (&template.audio, Signal::Field(FieldKind::Audio)),
        ];

        let signals = pairs
            .into_iter()
            .filter(|(class, _)| !class.is_empty())
            .map(|(class, signal)| (class.clone(), signal))
            .collect();

        Self {
            signals,
            level_class: template.level.clone(),
            id_attribute: template.id_attribute.to_ascii_lowercase(),
        }
    }

    /// First recognized token of a `class` attribute value
    pub fn classify(&self, class_attr: &str) -> Option<Signal> {
        class_attr
            .split_ascii_whitespace()
            .find_map(|token| self.signals.get(token).copied())
    }

    pub fn is_level_class(&self, class_attr: &str) -> bool {
        !self.level_class.is_empty()
            && class_attr
                .split_ascii_whitespace()
                .any(|token| token == self.level_class)
    }

    pub fn id_attribute(&self) -> &str {
        &self.id_attribute
    }
}
