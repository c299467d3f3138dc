//! # Search Command Compiler
//!
//! Turns a pattern and optional offset into the line-oriented search syntax
//! understood by ed/vi style editors:
//!
//! ```text
//! /pattern          forward
//! /pattern/offset   forward, with offset
//! ?pattern?offset   backward, with offset
//! ```
//!
//! The offset is re-delimited with the same marker as the pattern. Nothing is
//! escaped: a `/` inside a forward pattern is the caller's business.

use crate::offset::{self, StoredPattern};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn from_backwards(backwards: bool) -> Self {
        if backwards {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    pub fn is_backward(self) -> bool {
        self == Direction::Backward
    }

    pub fn marker(self) -> char {
        match self {
            Direction::Forward => '/',
            Direction::Backward => '?',
        }
    }
}

/// A fully resolved search, ready to hand to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDirective {
    pub pattern: String,
    pub offset: Option<String>,
    pub direction: Direction,
}

impl SearchDirective {
    pub fn new(pattern: impl Into<String>, offset: Option<String>, backwards: bool) -> Self {
        Self {
            pattern: pattern.into(),
            offset,
            direction: Direction::from_backwards(backwards),
        }
    }

    pub fn from_stored(stored: StoredPattern, backwards: bool) -> Self {
        Self::new(stored.pattern, stored.offset, backwards)
    }

    /// Splits a stored pattern value and builds the directive in one go.
    pub fn parse_stored(value: &str, backwards: bool) -> Self {
        Self::from_stored(offset::split(value), backwards)
    }

    pub fn backwards(&self) -> bool {
        self.direction.is_backward()
    }

    pub fn compile(&self) -> String {
        compile(&self.pattern, self.offset.as_deref(), self.backwards())
    }
}

impl fmt::Display for SearchDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compile())
    }
}

pub fn compile(pattern: &str, offset: Option<&str>, backwards: bool) -> String {
    let marker = Direction::from_backwards(backwards).marker();
    let mut out = String::with_capacity(pattern.len() + offset.map_or(0, str::len) + 2);
    out.push(marker);
    out.push_str(pattern);
    if let Some(offset) = offset {
        out.push(marker);
        out.push_str(offset);
    }
    out
}
