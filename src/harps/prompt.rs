//! # Offset Prompt Adapter
//!
//! Optionally asks the user for an explicit offset before a pattern is stored.
//! The library never reads a terminal itself: the line source is handed in as
//! an [`OffsetInput`], so the CLI can read stdin and tests can script replies.
//!
//! Two outcomes must never be confused:
//! - [`PromptReply::Cancelled`] aborts the whole set operation.
//! - `PromptReply::Line("")` means "no offset", and the pattern is stored as is.

use crate::codec::SENTINEL;
use std::collections::VecDeque;

/// Text shown when soliciting an offset.
pub const OFFSET_PROMPT: &str = "Offset: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Cancelled,
    Line(String),
}

impl PromptReply {
    pub fn line(text: impl Into<String>) -> Self {
        PromptReply::Line(text.into())
    }
}

/// Anything able to produce one line of user input.
pub trait OffsetInput {
    fn read_line(&mut self, prompt: &str) -> PromptReply;
}

impl<F> OffsetInput for F
where
    F: FnMut(&str) -> PromptReply,
{
    fn read_line(&mut self, prompt: &str) -> PromptReply {
        self(prompt)
    }
}

/// Input source for callers that never prompt. Any read cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl OffsetInput for NoInput {
    fn read_line(&mut self, _prompt: &str) -> PromptReply {
        PromptReply::Cancelled
    }
}

/// Replays canned replies in order; cancels once they run out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    replies: VecDeque<PromptReply>,
    prompts_seen: usize,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = PromptReply>>(replies: I) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            prompts_seen: 0,
        }
    }

    pub fn lines<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(lines.into_iter().map(PromptReply::line))
    }

    pub fn cancel() -> Self {
        Self::new([PromptReply::Cancelled])
    }

    /// How many times the adapter asked for input.
    pub fn prompts_seen(&self) -> usize {
        self.prompts_seen
    }
}

impl OffsetInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> PromptReply {
        self.prompts_seen += 1;
        self.replies.pop_front().unwrap_or(PromptReply::Cancelled)
    }
}

/// Appends a user-supplied offset to `pattern` when `ask` is set.
///
/// Returns `None` if the user cancelled: nothing should be persisted.
pub fn maybe_add_offset<I: OffsetInput + ?Sized>(
    pattern: &str,
    ask: bool,
    input: &mut I,
) -> Option<String> {
    if !ask {
        return Some(pattern.to_string());
    }

    match input.read_line(OFFSET_PROMPT) {
        PromptReply::Cancelled => None,
        PromptReply::Line(offset) if offset.is_empty() => Some(pattern.to_string()),
        PromptReply::Line(offset) => Some(format!("{}{}{}", pattern, SENTINEL, offset)),
    }
}
