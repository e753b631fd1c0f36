mod embedded;
mod error;
mod ids;
mod parser;
mod signals;
mod zone;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use parser::{HskPageParser, parse_page};
pub use zone::{EntryKind, FieldKind};
