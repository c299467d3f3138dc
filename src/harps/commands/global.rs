//! Global searches remember the file they were set in. Getting one yields the
//! path to open and the directive to run once it is open.

use super::helpers::{prepare_pattern, SetSearch};
use crate::codec::{self, SENTINEL};
use crate::commands::{CmdMessage, CmdResult};
use crate::directive::SearchDirective;
use crate::error::{HarpsError, Result};
use crate::model::{Register, Section};
use crate::prompt::OffsetInput;
use crate::store::HarpStore;
use std::path::PathBuf;

pub fn set<S: HarpStore, I: OffsetInput + ?Sized>(
    store: &mut S,
    register: Register,
    path: &str,
    opts: &SetSearch,
    input: &mut I,
) -> Result<CmdResult> {
    if path.contains(SENTINEL) {
        return Err(HarpsError::InvalidPath(path.to_string()));
    }

    let mut result = CmdResult::default();

    let Some(pattern) = prepare_pattern(opts, input)? else {
        tracing::debug!(register = %register, "offset prompt cancelled");
        result.add_message(CmdMessage::warning("Cancelled, nothing stored."));
        return Ok(result);
    };

    let stored = codec::encode(path, &pattern);
    store.set(Section::GlobalSearch, register, &stored)?;
    tracing::info!(register = %register, path = %path, "global search harp set");

    let shown = SearchDirective::parse_stored(&pattern, false);
    let mut result = result.with_stored(stored);
    result.add_message(CmdMessage::success(format!(
        "Set global search harp {}: {} in {}",
        register, shown, path
    )));
    Ok(result)
}

pub fn get<S: HarpStore>(store: &S, register: Register, backwards: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(value) = store.get(Section::GlobalSearch, register)? else {
        result.add_message(CmdMessage::info(format!(
            "Global search harp {} is empty.",
            register
        )));
        return Ok(result);
    };

    let record = codec::decode(&value);
    let directive = SearchDirective::parse_stored(&record.pattern, backwards);
    tracing::debug!(register = %register, path = %record.path, command = %directive, "compiled global search harp");

    if record.has_path() {
        result = result.with_path(PathBuf::from(record.path));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Global search harp {} has no file, searching the current buffer.",
            register
        )));
    }
    Ok(result.with_directive(directive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::prompt::{NoInput, ScriptedInput};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn reg(c: char) -> Register {
        Register::new(c)
    }

    #[test]
    fn set_encodes_path_and_pattern() {
        let mut store = InMemoryStore::new();
        let result = set(
            &mut store,
            reg('g'),
            "/src/main.rs",
            &SetSearch::new("fn main"),
            &mut NoInput,
        )
        .unwrap();

        assert_eq!(result.stored.as_deref(), Some("/src/main.rs\u{7f}fn main"));
        assert_eq!(
            store.get(Section::GlobalSearch, reg('g')).unwrap().as_deref(),
            Some("/src/main.rs\u{7f}fn main")
        );
    }

    #[test]
    fn get_returns_path_and_directive() {
        let mut store = InMemoryStore::new();
        let mut input = ScriptedInput::lines(["e+1"]);
        let opts = SetSearch::new("needle").ask_offset(true);
        set(&mut store, reg('g'), "notes.md", &opts, &mut input).unwrap();

        let result = get(&store, reg('g'), true).unwrap();
        assert_eq!(result.path, Some(PathBuf::from("notes.md")));
        assert_eq!(result.command().as_deref(), Some("?needle?e+1"));
    }

    #[test]
    fn pattern_ending_in_sentinel_keeps_it_through_decode() {
        let store = StoreFixture::new()
            .with_harp(Section::GlobalSearch, 'g', "p\u{7f}x\u{7f}")
            .store;
        let directive = get(&store, reg('g'), false).unwrap().directive.unwrap();
        assert_eq!(directive.pattern, "x");
        assert_eq!(directive.offset.as_deref(), Some(""));
    }

    #[test]
    fn legacy_value_without_path_still_searches() {
        let store = StoreFixture::new()
            .with_harp(Section::GlobalSearch, 'g', "just a pattern")
            .store;
        let result = get(&store, reg('g'), false).unwrap();
        assert_eq!(result.path, None);
        assert_eq!(result.command().as_deref(), Some("/just a pattern"));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn path_with_sentinel_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = set(
            &mut store,
            reg('g'),
            "bad\u{7f}path",
            &SetSearch::new("x"),
            &mut NoInput,
        )
        .unwrap_err();
        assert!(matches!(err, HarpsError::InvalidPath(_)));
        assert!(store.list(Section::GlobalSearch).unwrap().is_empty());
    }

    #[test]
    fn cancelled_set_does_not_persist() {
        let mut store = InMemoryStore::new();
        let opts = SetSearch::new("x").ask_offset(true);
        let result = set(&mut store, reg('g'), "f", &opts, &mut ScriptedInput::cancel()).unwrap();
        assert!(result.stored.is_none());
        assert_eq!(store.get(Section::GlobalSearch, reg('g')).unwrap(), None);
    }

    #[test]
    fn get_empty_register() {
        let store = InMemoryStore::new();
        let result = get(&store, reg('q'), false).unwrap();
        assert!(result.is_empty());
        assert!(result.messages[0].content.contains("empty"));
    }
}
