use crate::error::{HarpsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single-character key identifying one harp within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Register(char);

impl Register {
    pub fn new(c: char) -> Self {
        Self(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl FromStr for Register {
    type Err = HarpsError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(HarpsError::InvalidRegister(s.to_string())),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of registers inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Pattern (with optional offset) for the current buffer.
    Search,
    /// `path + SENTINEL + pattern`: a search that first opens its file.
    GlobalSearch,
}

impl Section {
    /// Key used for the section inside the store.
    pub fn name(self) -> &'static str {
        match self {
            Section::Search => "harp_search",
            Section::GlobalSearch => "harp_global_search",
        }
    }

    pub fn from_global(global: bool) -> Self {
        if global {
            Section::GlobalSearch
        } else {
            Section::Search
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stored entry, exactly as the store holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harp {
    pub register: Register,
    pub value: String,
}

impl Harp {
    pub fn new(register: Register, value: impl Into<String>) -> Self {
        Self {
            register,
            value: value.into(),
        }
    }
}
