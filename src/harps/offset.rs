//! # Offset Splitter
//!
//! A stored pattern is the search pattern, optionally followed by
//! `SENTINEL + offset`. The separator is only written when an offset exists,
//! so a value with no sentinel means "no offset", never "empty offset".
//!
//! When several sentinels are present the *last* one wins: everything before
//! it is the pattern. A pattern that legitimately contains the sentinel and was
//! stored without an offset therefore reads back as pattern + offset. Values
//! already persisted depend on this, so it is kept as is.

use crate::codec::SENTINEL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredPattern {
    pub pattern: String,
    pub offset: Option<String>,
}

impl StoredPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            offset: None,
        }
    }

    pub fn with_offset(pattern: impl Into<String>, offset: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            offset: Some(offset.into()),
        }
    }

    /// The store representation: the pattern, plus `SENTINEL + offset` only
    /// when an offset is present.
    pub fn serialize(&self) -> String {
        match &self.offset {
            Some(offset) => format!("{}{}{}", self.pattern, SENTINEL, offset),
            None => self.pattern.clone(),
        }
    }
}

/// Splits a stored pattern into its pattern and trailing offset.
pub fn split(stored: &str) -> StoredPattern {
    match stored.rsplit_once(SENTINEL) {
        Some((pattern, offset)) => StoredPattern::with_offset(pattern, offset),
        None => StoredPattern::new(stored),
    }
}
