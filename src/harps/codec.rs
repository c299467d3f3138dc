//! # Delimiter Codec
//!
//! A global search harp remembers two things: the file it was set in and the
//! stored pattern. The external store only holds flat strings, so both fields
//! are packed into one value separated by [`SENTINEL`]:
//!
//! ```text
//! /home/me/notes.md␡foo bar␡e
//! └──── path ─────┘ └ pattern ┘
//! ```
//!
//! The *first* sentinel splits the record. Everything after it belongs to the
//! pattern verbatim, which is how a stored pattern can carry its own offset
//! separator (see [`crate::offset`]) or even end with the sentinel byte.
//!
//! No escaping, quoting or length prefix is ever applied. Changing this format
//! breaks every value already sitting in users' stores.

use serde::{Deserialize, Serialize};

/// Field separator shared by every stored value: ASCII DEL (0x7F).
///
/// Nobody types DEL into a search prompt, which is the whole reason it was
/// picked. This byte is part of the on-disk contract with the store.
pub const SENTINEL: char = '\u{7f}';

/// A decoded global search value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalSearchRecord {
    /// File the search belongs to. Never contains [`SENTINEL`]; empty when the
    /// stored value carried no path at all.
    pub path: String,
    /// Stored pattern, possibly with its own `SENTINEL + offset` tail.
    pub pattern: String,
}

impl GlobalSearchRecord {
    pub fn new(path: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pattern: pattern.into(),
        }
    }

    /// False for legacy or malformed values that decoded without a path.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn encode(&self) -> String {
        encode(&self.path, &self.pattern)
    }
}

/// Packs `path` and `pattern` into a single store value.
pub fn encode(path: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(path.len() + SENTINEL.len_utf8() + pattern.len());
    out.push_str(path);
    out.push(SENTINEL);
    out.push_str(pattern);
    out
}

/// Recovers the fields packed by [`encode`].
///
/// A value without any sentinel is not an error: the whole string is taken as
/// the pattern and the path is left empty.
pub fn decode(stored: &str) -> GlobalSearchRecord {
    match stored.split_once(SENTINEL) {
        Some((path, pattern)) => GlobalSearchRecord::new(path, pattern),
        None => GlobalSearchRecord::new(String::new(), stored),
    }
}
