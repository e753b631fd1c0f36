use crate::zone::{EntryKind, FieldKind};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{kind} block opened on line {line} while another entry is still open")]
    NestedEntry { kind: EntryKind, line: u64 },

    #[error("{field} field opened on line {line} inside another field")]
    NestedField { field: FieldKind, line: u64 },

    #[error("{what} closed on line {line} outside of its zone")]
    UnexpectedClose { what: String, line: u64 },

    #[error("{kind} block still open at end of document")]
    UnclosedEntry { kind: EntryKind },

    #[error("duplicate word id {0}")]
    DuplicateId(u32),

    #[error("parser already consumed a document")]
    AlreadyFed,

    #[error("Invalid embedded page state: {0}")]
    EmbeddedState(#[from] serde_json::Error),
}
