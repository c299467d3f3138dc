//! # Harps
//!
//! Harps lets an editor user park a search under a single-character register
//! and replay it later, optionally in another file. A harp value is one flat
//! string in an external key-value store; this crate owns the format of that
//! string and the search command it turns back into.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, cli/)                                        │
//! │  - argv, stdin prompting, stdout/stderr, exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Parses registers, picks sections, dispatches             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - set/get search, set/get global search, list, clear       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (codec, offset, suffix, directive, prompt)            │
//! │  - Pure string transforms, no I/O                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store sits beside the commands behind the [`store::HarpStore`] trait.
//!
//! ## Data flow
//!
//! Setting: raw pattern → [`suffix`] / [`prompt`] → [`codec::encode`] (global
//! only) → store.
//!
//! Getting: store → [`codec::decode`] (global only) → [`offset::split`] →
//! [`directive::compile`] → `/pattern/offset` or `?pattern?offset`.
//!
//! ## No I/O in the core
//!
//! Nothing from `api.rs` inward prints or exits. The editor's last-search
//! register comes in as a plain argument, and the offset prompt reads from an
//! [`prompt::OffsetInput`] supplied by the caller.

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod directive;
pub mod error;
pub mod model;
pub mod offset;
pub mod prompt;
pub mod store;
pub mod suffix;
