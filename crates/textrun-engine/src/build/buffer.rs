use super::context::Context;
use super::error::BuildError;
use crate::stream::Sink;

const INITIAL_CAPACITY: usize = 4096;

/// Accumulates text written since the last flush.
///
/// Capacity grows by repeated doubling and never shrinks during a session;
/// the pending region resets to empty on every flush. Growth failure is
/// reported instead of aborting.
#[derive(Debug)]
pub struct TextBuffer {
    pending: String,
    flushed_len: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            pending: String::new(),
            flushed_len: 0,
        }
    }

    /// Appends text to the pending region. Never flushes implicitly.
    pub fn append(&mut self, text: &str) -> Result<(), BuildError> {
        let free = self.pending.capacity() - self.pending.len();
        if free < text.len() {
            let mut target = self.pending.capacity().max(INITIAL_CAPACITY);
            // A chunk larger than the current free space may need more than
            // one doubling.
            while target - self.pending.len() < text.len() {
                target *= 2;
            }
            self.pending.try_reserve_exact(target - self.pending.len())?;
        }
        self.pending.push_str(text);
        Ok(())
    }

    /// Emits the pending text to `sink` tagged with `context`, then clears
    /// the pending region. No-op when nothing is pending.
    pub fn flush<S: Sink>(&mut self, sink: &mut S, context: &Context) {
        if self.pending.is_empty() {
            return;
        }
        sink.append_text(&self.pending, context);
        self.flushed_len += self.pending.len();
        self.pending.clear();
    }

    /// Byte position in the logical concatenation of everything appended so
    /// far, flushed or not.
    pub fn current_offset(&self) -> usize {
        self.flushed_len + self.pending.len()
    }

    /// Bytes already delivered to the sink.
    pub fn flushed_len(&self) -> usize {
        self.flushed_len
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
