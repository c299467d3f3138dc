//! # API Facade
//!
//! Thin entry point over the command layer. It parses registers, picks the
//! section, and dispatches. No business logic, no output: callers get a
//! [`CmdResult`](crate::commands::CmdResult) and decide how to present it.
//!
//! `HarpsApi<S: HarpStore>` runs on [`FileStore`](crate::store::fs::FileStore)
//! in the binary and on [`InMemoryStore`](crate::store::memory::InMemoryStore)
//! in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Register, Section};
use crate::prompt::OffsetInput;
use crate::store::HarpStore;
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, ListedHarp, MessageLevel, SetSearch};

pub struct HarpsApi<S: HarpStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: HarpStore> HarpsApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn set_search<I: OffsetInput + ?Sized>(
        &mut self,
        register: &str,
        opts: &SetSearch,
        input: &mut I,
    ) -> Result<CmdResult> {
        let register = register.parse::<Register>()?;
        commands::search::set(&mut self.store, register, opts, input)
    }

    pub fn get_search(&self, register: &str, backwards: bool) -> Result<CmdResult> {
        let register = register.parse::<Register>()?;
        commands::search::get(&self.store, register, backwards)
    }

    pub fn set_global_search<I: OffsetInput + ?Sized>(
        &mut self,
        register: &str,
        path: &str,
        opts: &SetSearch,
        input: &mut I,
    ) -> Result<CmdResult> {
        let register = register.parse::<Register>()?;
        commands::global::set(&mut self.store, register, path, opts, input)
    }

    pub fn get_global_search(&self, register: &str, backwards: bool) -> Result<CmdResult> {
        let register = register.parse::<Register>()?;
        commands::global::get(&self.store, register, backwards)
    }

    pub fn list(&self, section: Section) -> Result<CmdResult> {
        commands::list::run(&self.store, section)
    }

    pub fn clear<I: AsRef<str>>(&mut self, section: Section, registers: &[I]) -> Result<CmdResult> {
        let registers = registers
            .iter()
            .map(|r| r.as_ref().parse::<Register>())
            .collect::<Result<Vec<_>>>()?;
        commands::clear::run(&mut self.store, section, &registers)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarpsError;
    use crate::prompt::{NoInput, ScriptedInput};
    use crate::store::memory::InMemoryStore;

    fn api() -> HarpsApi<InMemoryStore> {
        HarpsApi::new(InMemoryStore::new(), std::env::temp_dir().join("harps-api-unused"))
    }

    #[test]
    fn set_and_get_search_dispatch() {
        let mut api = api();
        api.set_search("a", &SetSearch::new("foo"), &mut NoInput)
            .unwrap();
        let result = api.get_search("a", true).unwrap();
        assert_eq!(result.command().as_deref(), Some("?foo"));
    }

    #[test]
    fn global_search_dispatch() {
        let mut api = api();
        let mut input = ScriptedInput::lines(["e"]);
        api.set_global_search("g", "a.rs", &SetSearch::new("x").ask_offset(true), &mut input)
            .unwrap();
        let result = api.get_global_search("g", false).unwrap();
        assert_eq!(result.path, Some(PathBuf::from("a.rs")));
        assert_eq!(result.command().as_deref(), Some("/x/e"));
    }

    #[test]
    fn invalid_register_is_rejected_before_dispatch() {
        let mut api = api();
        assert!(matches!(
            api.set_search("ab", &SetSearch::new("foo"), &mut NoInput),
            Err(HarpsError::InvalidRegister(_))
        ));
        assert!(api.get_search("", false).is_err());
        assert!(api.clear(Section::Search, &["a", "nope"]).is_err());
    }

    #[test]
    fn list_and_clear_dispatch() {
        let mut api = api();
        api.set_search("a", &SetSearch::new("foo"), &mut NoInput)
            .unwrap();
        assert_eq!(api.list(Section::Search).unwrap().listed.len(), 1);

        api.clear(Section::Search, &["a"]).unwrap();
        assert!(api.list(Section::Search).unwrap().listed.is_empty());
    }
}
