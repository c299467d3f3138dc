use crate::error::{HarpsError, Result};
use crate::prompt::{self, OffsetInput};
use crate::suffix;

/// Options for storing a search pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetSearch {
    /// Raw pattern, as found in the editor's last-search register.
    pub pattern: String,
    pub infer_offset: bool,
    pub ask_offset: bool,
}

impl SetSearch {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub fn infer_offset(mut self, enabled: bool) -> Self {
        self.infer_offset = enabled;
        self
    }

    pub fn ask_offset(mut self, enabled: bool) -> Self {
        self.ask_offset = enabled;
        self
    }
}

/// Runs a raw pattern through the suffix heuristic and the offset prompt,
/// producing the value to persist. `Ok(None)` means the user cancelled.
///
/// An offset inferred from the pattern itself wins: the user is not asked again.
pub fn prepare_pattern<I: OffsetInput + ?Sized>(
    opts: &SetSearch,
    input: &mut I,
) -> Result<Option<String>> {
    if opts.pattern.is_empty() {
        return Err(HarpsError::EmptyPattern);
    }

    let stored = suffix::extract_stored(&opts.pattern, opts.infer_offset);
    if let Some(offset) = &stored.offset {
        tracing::debug!(pattern = %stored.pattern, offset = %offset, "inferred offset from pattern suffix");
        return Ok(Some(stored.serialize()));
    }

    Ok(prompt::maybe_add_offset(&stored.pattern, opts.ask_offset, input))
}
