//! # Storage Layer
//!
//! Harps live in an external key-value store: a section name plus a register
//! map to one flat string. The [`HarpStore`] trait is that store as far as the
//! rest of the crate is concerned.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document (`harps.json`)
//!   keyed by section name, then register.
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! Values are opaque here. Whatever the codec produced, sentinel bytes
//! included, is written back and read out byte for byte.
//!
//! ## Storage Format
//!
//! ```text
//! $HARPS_HOME/
//! ├── harps.json     # {"harp_search": {"a": "foo<DEL>e"}, ...}
//! └── config.json    # HarpsConfig
//! ```

use crate::error::Result;
use crate::model::{Harp, Register, Section};

pub mod fs;
pub mod memory;

pub trait HarpStore {
    /// Value stored under `register`, or `None` if the harp is empty.
    fn get(&self, section: Section, register: Register) -> Result<Option<String>>;

    /// Create or overwrite a harp.
    fn set(&mut self, section: Section, register: Register, value: &str) -> Result<()>;

    /// Remove a harp. Returns whether anything was there.
    fn remove(&mut self, section: Section, register: Register) -> Result<bool>;

    /// All harps in a section, ordered by register.
    fn list(&self, section: Section) -> Result<Vec<Harp>>;
}
