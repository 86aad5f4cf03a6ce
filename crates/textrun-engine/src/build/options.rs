use serde::{Deserialize, Serialize};

/// Conversion options.
///
/// The separators are substituted verbatim for line breaks and block
/// boundaries; no escaping or transformation is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Inserted for explicit line breaks.
    pub line_separator: String,
    /// Appended when a paragraph closes and between adjacent blocks.
    pub paragraph_separator: String,
    /// Bound on context-stack depth and on list nesting.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
            paragraph_separator: "\n\n".to_string(),
            max_depth: 128,
        }
    }
}
