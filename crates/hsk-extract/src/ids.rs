use std::collections::HashSet;

use hsk_core::WordEntry;

use crate::error::ParseError;

/// Word read from a page, before its id is settled
#[derive(Debug)]
pub struct PendingWord {
    /// Id given by the page, if it parsed as an integer
    pub id: Option<u32>,
    pub word: WordEntry,
}

/// Settle word ids for one page.
///
/// Explicit ids must be unique. A word without one takes its 1-based ordinal,
/// or the next id above it that no other word holds.
pub fn assign_ids(pending: Vec<PendingWord>) -> Result<Vec<WordEntry>, ParseError> {
    let mut taken = HashSet::with_capacity(pending.len());
    for id in pending.iter().filter_map(|p| p.id) {
        if !taken.insert(id) {
            return Err(ParseError::DuplicateId(id));
        }
    }

    let mut words = Vec::with_capacity(pending.len());
    for (ordinal, p) in (1u32..).zip(pending) {
        let mut word = p.word;
        word.id = match p.id {
            Some(id) => id,
            None => {
                let mut id = ordinal;
                while !taken.insert(id) {
                    id += 1;
                }
                id
            }
        };
        words.push(word);
    }

    Ok(words)
}
