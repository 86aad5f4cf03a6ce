//! The builder: a context-stack-driven text accumulator.
//!
//! Three independently nested regions share one pending-text buffer:
//! style/heading (a balanced push/pop stack), paragraph (a single flag with
//! auto-close on reopen), and lists (a depth-indexed stack with explicit
//! open/close). Flushes happen only on context change, so consecutive
//! appends under one effective context reach the sink as a single run, and
//! every run's tagged context matches what was active while its bytes were
//! written.

pub mod buffer;
pub mod context;
mod error;
mod options;

pub use context::{Context, ContextStack, Style};
pub use error::BuildError;
pub use options::Options;

use buffer::TextBuffer;

use crate::stream::Sink;

#[derive(Debug)]
struct OpenLink {
    href: String,
    start: usize,
}

#[derive(Debug, Clone, Copy)]
struct ListLevel {
    index: u32,
}

/// Drives one document conversion, delivering runs and span annotations to
/// the owned sink. [`Builder::finish`] consumes the builder and hands the
/// sink back, so a finished session cannot be reused.
#[derive(Debug)]
pub struct Builder<S: Sink> {
    stack: ContextStack,
    buffer: TextBuffer,
    options: Options,
    link: Option<OpenLink>,
    paragraph_start: Option<usize>,
    lists: Vec<ListLevel>,
    sink: S,
}

impl<S: Sink> Builder<S> {
    pub fn new(sink: S, options: Options) -> Self {
        Self {
            stack: ContextStack::new(options.max_depth),
            buffer: TextBuffer::new(),
            options,
            link: None,
            paragraph_start: None,
            lists: Vec::new(),
            sink,
        }
    }

    /// Byte position in the logical concatenation of everything appended so
    /// far, including separators. Monotonically non-decreasing.
    pub fn current_offset(&self) -> usize {
        self.buffer.current_offset()
    }

    pub fn push_bold(&mut self) -> Result<(), BuildError> {
        self.push_style(Style::BOLD)
    }

    pub fn push_italic(&mut self) -> Result<(), BuildError> {
        self.push_style(Style::ITALIC)
    }

    pub fn push_underline(&mut self) -> Result<(), BuildError> {
        self.push_style(Style::UNDERLINED)
    }

    fn push_style(&mut self, bit: Style) -> Result<(), BuildError> {
        // Flush only when the effective style actually changes; the stack
        // still grows either way so later pops stay balanced.
        if !self.stack.top().style.contains(bit) {
            self.flush();
        }
        self.stack.push()?.style.insert(bit);
        Ok(())
    }

    /// Enters a heading. Nested headings overwrite the level rather than
    /// combining.
    pub fn push_heading(&mut self, level: u8) -> Result<(), BuildError> {
        if self.stack.top().heading != level {
            self.flush();
        }
        self.stack.push()?.heading = level;
        Ok(())
    }

    /// Leaves the innermost style or heading level.
    ///
    /// Text written under the deeper context is flushed under that context
    /// first, so it is never retroactively retagged with the shallower one.
    pub fn pop(&mut self) -> Result<(), BuildError> {
        if !self.stack.top_equals_parent()? {
            self.flush();
        }
        self.stack.pop()
    }

    /// Appends literal text. Never flushes implicitly.
    pub fn append_text(&mut self, text: &str) -> Result<(), BuildError> {
        self.buffer.append(text)
    }

    /// Appends the configured line separator as literal text (a line break,
    /// not a paragraph boundary).
    pub fn append_line_separator(&mut self) -> Result<(), BuildError> {
        self.buffer.append(&self.options.line_separator)
    }

    /// Opens a link, capturing the current offset as its start. The href is
    /// copied, so the caller keeps no obligation to the builder.
    pub fn start_link(&mut self, href: impl Into<String>) -> Result<(), BuildError> {
        if self.link.is_some() {
            return Err(BuildError::LinkAlreadyOpen);
        }
        self.link = Some(OpenLink {
            href: href.into(),
            start: self.buffer.current_offset(),
        });
        Ok(())
    }

    /// Closes the open link and reports its span.
    ///
    /// Pending text is flushed first so the reported end is an exact
    /// already-emitted offset. Without an open link this is just the flush.
    pub fn end_link(&mut self) {
        self.flush();
        if let Some(link) = self.link.take() {
            self.sink
                .mark_link(&link.href, link.start, self.buffer.flushed_len());
        }
    }

    /// Opens a paragraph.
    ///
    /// An already-open paragraph is auto-closed first; otherwise, if any
    /// content precedes this block, the paragraph separator is inserted as
    /// an inter-block divider. The new span starts after that divider.
    pub fn start_paragraph(&mut self) -> Result<(), BuildError> {
        self.close_block()?;
        self.paragraph_start = Some(self.buffer.current_offset());
        Ok(())
    }

    /// Closes the paragraph: the separator is appended as literal content
    /// belonging to the closing paragraph, then the span is reported.
    pub fn end_paragraph(&mut self) -> Result<(), BuildError> {
        self.buffer.append(&self.options.paragraph_separator)?;
        let start = self.paragraph_start.take().unwrap_or(0);
        self.sink
            .mark_paragraph(start, self.buffer.current_offset());
        Ok(())
    }

    /// Opens a list level. Item numbering starts at 1 for ordered lists and
    /// stays 0 for unordered ones.
    pub fn start_list(&mut self, ordered: bool) -> Result<(), BuildError> {
        self.close_block()?;
        if self.lists.len() >= self.options.max_depth {
            return Err(BuildError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        self.lists.push(ListLevel {
            index: if ordered { 1 } else { 0 },
        });
        Ok(())
    }

    /// Closes the innermost list level.
    pub fn end_list(&mut self) -> Result<(), BuildError> {
        if self.lists.pop().is_none() {
            return Err(BuildError::ListUnderflow);
        }
        Ok(())
    }

    /// Reports an item boundary at the current list depth. Pending text is
    /// flushed so the boundary lands on a clean offset.
    ///
    /// The reported index is not advanced between items, so successive items
    /// at one depth repeat it.
    /// TODO: confirm whether the index should increment per item.
    pub fn start_list_item(&mut self) -> Result<(), BuildError> {
        let level = *self.lists.last().ok_or(BuildError::ListUnderflow)?;
        self.flush();
        self.sink.start_list_item(self.lists.len(), level.index);
        Ok(())
    }

    /// Reports the end of the current item. Performs no flush, unlike
    /// [`Builder::start_list_item`].
    pub fn end_list_item(&mut self) -> Result<(), BuildError> {
        if self.lists.is_empty() {
            return Err(BuildError::ListUnderflow);
        }
        self.sink.end_list_item();
        Ok(())
    }

    /// Flushes the tail under the final context, signals completion, and
    /// returns the sink.
    pub fn finish(mut self) -> S {
        self.flush();
        self.sink.finish();
        self.sink
    }

    /// Closes whatever block precedes a new one: an open paragraph is ended
    /// outright; otherwise earlier content gets a separator as divider.
    fn close_block(&mut self) -> Result<(), BuildError> {
        if self.paragraph_start.is_some() {
            self.end_paragraph()
        } else if self.buffer.current_offset() > 0 {
            self.buffer.append(&self.options.paragraph_separator)
        } else {
            Ok(())
        }
    }

    fn flush(&mut self) {
        self.buffer.flush(&mut self.sink, self.stack.top());
    }
}
