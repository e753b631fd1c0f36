use serde::{Deserialize, Serialize};

/// Target language of a generated deck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
}

/// Grammar annotations found on headwords, with their English and French labels
const ANNOTATIONS: [(&str, &str, &str); 9] = [
    ("(助动词)", "(auxiliary verb)", "(verbe auxiliaire)"),
    ("(助词)", "(particle)", "(particule)"),
    ("(动词)", "(verb)", "(verbe)"),
    ("(叹词)", "(interjection)", "(interjection)"),
    ("(形容词)", "(adjective)", "(adjectif)"),
    ("(介词)", "(preposition)", "(préposition)"),
    ("(副词)", "(adverb)", "(adverbe)"),
    ("(名词)", "(noun)", "(nom)"),
    ("(量词)", "(quantifier)", "(quantificateur)"),
];

impl Language {
    /// Language tag used in deck field schemas
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en-EN",
            Language::French => "fr-FR",
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    pub fn chinese_label(&self) -> &'static str {
        match self {
            Language::English => "Chinese",
            Language::French => "Chinois",
        }
    }

    pub fn translation_label(&self) -> &'static str {
        match self {
            Language::English => "Translation",
            Language::French => "Traduction",
        }
    }

    pub fn word_list_label(&self) -> &'static str {
        match self {
            Language::English => "Word List",
            Language::French => "Vocabulaire",
        }
    }

    pub fn sentences_label(&self) -> &'static str {
        match self {
            Language::English => "Sentences",
            Language::French => "Phrases",
        }
    }

    /// Label for a grammar annotation like `(助动词)`, None if unknown
    pub fn annotation_label(&self, annotation: &str) -> Option<&'static str> {
        ANNOTATIONS
            .iter()
            .find(|(zh, _, _)| *zh == annotation)
            .map(|(_, en, fr)| match self {
                Language::English => *en,
                Language::French => *fr,
            })
    }
}
