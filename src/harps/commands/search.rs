use super::helpers::{prepare_pattern, SetSearch};
use crate::commands::{CmdMessage, CmdResult};
use crate::directive::SearchDirective;
use crate::error::Result;
use crate::model::{Register, Section};
use crate::prompt::OffsetInput;
use crate::store::HarpStore;

/// Stores a search for the current buffer under `register`.
pub fn set<S: HarpStore, I: OffsetInput + ?Sized>(
    store: &mut S,
    register: Register,
    opts: &SetSearch,
    input: &mut I,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(stored) = prepare_pattern(opts, input)? else {
        tracing::debug!(register = %register, "offset prompt cancelled");
        result.add_message(CmdMessage::warning("Cancelled, nothing stored."));
        return Ok(result);
    };

    store.set(Section::Search, register, &stored)?;
    tracing::info!(register = %register, "search harp set");

    let shown = SearchDirective::parse_stored(&stored, false);
    let mut result = result.with_stored(stored);
    result.add_message(CmdMessage::success(format!(
        "Set search harp {}: {}",
        register, shown
    )));
    Ok(result)
}

/// Loads the search stored under `register` and compiles it.
pub fn get<S: HarpStore>(store: &S, register: Register, backwards: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(value) = store.get(Section::Search, register)? else {
        result.add_message(CmdMessage::info(format!(
            "Search harp {} is empty.",
            register
        )));
        return Ok(result);
    };

    let directive = SearchDirective::parse_stored(&value, backwards);
    tracing::debug!(register = %register, command = %directive, "compiled search harp");
    Ok(result.with_directive(directive))
}
