//! The callback surface a conversion drives.
//!
//! The builder owns its sink and threads `&mut self` through every call, so
//! one sink instance corresponds to exactly one conversion and a stateless
//! implementation needs no global state to correlate calls.

pub mod invariants;

use crate::build::Context;

/// Receives flushed text runs and span annotations in document order.
///
/// All offsets are byte positions in the logical concatenation of every
/// byte ever appended (text, separators, line breaks).
pub trait Sink {
    /// One run of text, tagged with the context active while it was written.
    fn append_text(&mut self, text: &str, context: &Context);
    /// A completed link span. `end` always lands on a flush boundary.
    fn mark_link(&mut self, href: &str, start: usize, end: usize);
    /// A completed paragraph span, separator included.
    fn mark_paragraph(&mut self, start: usize, end: usize);
    /// An item boundary at `depth` (1 = outermost open list).
    fn start_list_item(&mut self, depth: usize, index: u32);
    fn end_list_item(&mut self);
    /// The conversion is complete; no further calls follow.
    fn finish(&mut self);
}

/// One sink call, captured as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Text {
        text: String,
        context: Context,
    },
    Link {
        href: String,
        start: usize,
        end: usize,
    },
    Paragraph {
        start: usize,
        end: usize,
    },
    ListItemStart {
        depth: usize,
        index: u32,
    },
    ListItemEnd,
    Finished,
}

/// A sink that records every call for later inspection.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Sink for Recorder {
    fn append_text(&mut self, text: &str, context: &Context) {
        self.events.push(Event::Text {
            text: text.to_string(),
            context: *context,
        });
    }

    fn mark_link(&mut self, href: &str, start: usize, end: usize) {
        self.events.push(Event::Link {
            href: href.to_string(),
            start,
            end,
        });
    }

    fn mark_paragraph(&mut self, start: usize, end: usize) {
        self.events.push(Event::Paragraph { start, end });
    }

    fn start_list_item(&mut self, depth: usize, index: u32) {
        self.events.push(Event::ListItemStart { depth, index });
    }

    fn end_list_item(&mut self) {
        self.events.push(Event::ListItemEnd);
    }

    fn finish(&mut self) {
        self.events.push(Event::Finished);
    }
}
