use bitflags::bitflags;

use super::error::BuildError;

bitflags! {
    /// Inline text styles that can be active while text is appended.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Style: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::empty()
    }
}

/// The formatting state applied to text at the moment it is appended.
///
/// A heading level of 0 means "not inside a heading"; levels 1..=6 map to
/// the usual heading depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub style: Style,
    pub heading: u8,
}

/// A bounded stack of [`Context`] levels.
///
/// Level 0 is the implicit root context (no style, no heading) and can never
/// be removed. Pushing clones the current top so the caller can then adjust
/// exactly the fields the new markup level changes.
#[derive(Debug)]
pub struct ContextStack {
    levels: Vec<Context>,
    max_depth: usize,
}

impl ContextStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            levels: vec![Context::default()],
            max_depth,
        }
    }

    /// Number of levels including the root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Clones the top context onto a new level and returns it for mutation.
    pub fn push(&mut self) -> Result<&mut Context, BuildError> {
        if self.levels.len() >= self.max_depth {
            return Err(BuildError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let top = *self.top();
        self.levels.push(top);
        Ok(self.levels.last_mut().expect("just pushed"))
    }

    /// Removes exactly one level. The root level cannot be popped.
    pub fn pop(&mut self) -> Result<(), BuildError> {
        if self.levels.len() == 1 {
            return Err(BuildError::UnbalancedPop);
        }
        self.levels.pop();
        Ok(())
    }

    /// The current effective context.
    pub fn top(&self) -> &Context {
        // The vec is seeded with the root context and pop refuses to drain it.
        self.levels.last().expect("root context always present")
    }

    /// Whether the top context is byte-for-byte equal to the level beneath it.
    ///
    /// This only informs flush decisions; popping still removes exactly one
    /// level regardless of the result.
    pub fn top_equals_parent(&self) -> Result<bool, BuildError> {
        let n = self.levels.len();
        if n == 1 {
            return Err(BuildError::UnbalancedPop);
        }
        Ok(self.levels[n - 1] == self.levels[n - 2])
    }
}
