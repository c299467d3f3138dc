//! # CLI
//!
//! The only place that touches the terminal: argument parsing, stdin for the
//! offset prompt, stdout for results, stderr for logs and errors.
//!
//! ## Output contract
//!
//! `get` prints exactly one line, the search string (`/pat/off`, `?pat?off`).
//! `get-global` prints the file path first when the harp has one, then the
//! search string. Editor glue reads these lines verbatim. Empty harps print
//! nothing on stdout and a note on stderr, and still exit 0.
//!
//! ## Offset prompt
//!
//! With `--ask-offset` one line is read from stdin. End of input cancels the
//! set, an empty line stores the pattern without an offset.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `input`: stdin-backed [`harps::prompt::OffsetInput`]
//! - `print`: message and listing output
//! - `setup`: clap definitions

mod commands;
mod input;
mod print;
pub mod setup;

pub use commands::run;
