use crate::config::HarpsConfig;
use crate::directive::SearchDirective;
use crate::model::Register;
use std::path::PathBuf;

pub mod clear;
pub mod config;
pub mod global;
pub mod helpers;
pub mod list;
pub mod search;

pub use helpers::SetSearch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A harp as presented to the user: decoded, with a forward directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedHarp {
    pub register: Register,
    pub path: Option<String>,
    pub directive: SearchDirective,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Raw value written to the store by a set command. `None` if nothing was written.
    pub stored: Option<String>,
    pub directive: Option<SearchDirective>,
    /// File to open before running the directive (global searches only).
    pub path: Option<PathBuf>,
    pub listed: Vec<ListedHarp>,
    pub config: Option<HarpsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_stored(mut self, stored: String) -> Self {
        self.stored = Some(stored);
        self
    }

    pub fn with_directive(mut self, directive: SearchDirective) -> Self {
        self.directive = Some(directive);
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedHarp>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_config(mut self, config: HarpsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The compiled search string, if this result carries a directive.
    pub fn command(&self) -> Option<String> {
        self.directive.as_ref().map(SearchDirective::compile)
    }

    /// True when a set command was cancelled or a get found nothing.
    pub fn is_empty(&self) -> bool {
        self.stored.is_none() && self.directive.is_none() && self.listed.is_empty()
    }
}
