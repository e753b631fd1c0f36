mod formats;
mod template;
mod writer;
mod xml;

pub use formats::{
    display_hanzi, sentence_deck_automatic, sentence_deck_manual, sentence_list,
    unknown_annotations, word_deck_automatic, word_deck_manual, word_list,
};
pub use template::{Card, Deck, DeckTemplate, FieldSpec, FieldValue, NoteField};
pub use writer::{export_all, write_output};
pub use xml::render;

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
