use hsk_core::Language;

/// Field declared in a deck's `<fields>` schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Element name: `chinese`, `text` or `rich-text`
    pub kind: String,
    pub name: String,
    /// Visibility per side, e.g. `10` front only, `11` both
    pub sides: String,
    pub lang: Option<String>,
    pub pinyin_mode: Option<String>,
}

impl FieldSpec {
    fn new(kind: &str, name: &str, sides: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            sides: sides.to_string(),
            lang: None,
            pinyin_mode: None,
        }
    }

    fn lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    fn pinyin_mode(mut self, mode: &str) -> Self {
        self.pinyin_mode = Some(mode.to_string());
        self
    }
}

/// Deck name plus field schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckTemplate {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl DeckTemplate {
    /// Chinese field whose pinyin the flashcard app derives itself
    pub fn automatic(name: String, language: Language) -> Self {
        Self {
            name,
            fields: vec![
                FieldSpec::new("chinese", language.chinese_label(), "10")
                    .lang("zh-CN")
                    .pinyin_mode("back"),
                FieldSpec::new("text", language.translation_label(), "01").lang(language.tag()),
            ],
        }
    }

    /// Plain text sides with the pinyin supplied on the back
    pub fn manual(name: String) -> Self {
        Self {
            name,
            fields: vec![
                FieldSpec::new("text", "Front", "11").lang("zh-CN"),
                FieldSpec::new("text", "Back", "01").lang("zh-CN"),
                FieldSpec::new("rich-text", "Pinyin", "01"),
            ],
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Value of one card field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Rendered as `<i>..</i>` inside a rich-text field
    Italic(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteField {
    pub kind: String,
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub fields: Vec<NoteField>,
}

impl Card {
    /// Set a field declared by `template`; unknown names are skipped
    pub fn with(mut self, template: &DeckTemplate, name: &str, value: FieldValue) -> Self {
        if let Some(spec) = template.field(name) {
            self.fields.push(NoteField {
                kind: spec.kind.clone(),
                name: spec.name.clone(),
                value,
            });
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub template: DeckTemplate,
    pub cards: Vec<Card>,
}
