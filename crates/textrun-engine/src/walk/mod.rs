//! Document tree model and the tag dispatcher.
//!
//! [`walk`] traverses an already-built tag tree and issues the matching
//! builder operations in document order. The traversal uses an explicit
//! worklist rather than recursion, so nesting depth is limited by the
//! builder's configured bound, not by the call stack.

use crate::build::{BuildError, Builder};
use crate::stream::Sink;

/// The markup constructs the dispatcher understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Bold,
    Italic,
    Underline,
    /// Heading level 1..=6.
    Heading(u8),
    Paragraph,
    Link {
        href: String,
    },
    LineBreak,
    List {
        ordered: bool,
    },
    ListItem,
    /// A transparent container: children are traversed, the tag itself maps
    /// to no builder operation.
    Other,
}

/// A node of the marked-up document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element { tag: Tag, children: Vec<Node> },
    Text(String),
}

impl Node {
    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }
}

enum Step<'a> {
    Enter(&'a Node),
    Leave(&'a Tag),
}

/// Walks `nodes` in document order, dispatching enter/leave of every tag to
/// `builder`. The caller finishes the builder afterwards.
pub fn walk<S: Sink>(nodes: &[Node], builder: &mut Builder<S>) -> Result<(), BuildError> {
    let mut work: Vec<Step<'_>> = nodes.iter().rev().map(Step::Enter).collect();

    while let Some(step) = work.pop() {
        match step {
            Step::Enter(Node::Text(text)) => builder.append_text(text)?,
            Step::Enter(Node::Element { tag, children }) => {
                enter(tag, builder)?;
                work.push(Step::Leave(tag));
                // Reversed so the first child is handled first.
                work.extend(children.iter().rev().map(Step::Enter));
            }
            Step::Leave(tag) => leave(tag, builder)?,
        }
    }

    Ok(())
}

fn enter<S: Sink>(tag: &Tag, builder: &mut Builder<S>) -> Result<(), BuildError> {
    match tag {
        Tag::Bold => builder.push_bold(),
        Tag::Italic => builder.push_italic(),
        Tag::Underline => builder.push_underline(),
        Tag::Heading(level) => builder.push_heading(*level),
        Tag::Paragraph => builder.start_paragraph(),
        Tag::Link { href } => builder.start_link(href.clone()),
        Tag::LineBreak => builder.append_line_separator(),
        Tag::List { ordered } => builder.start_list(*ordered),
        Tag::ListItem => builder.start_list_item(),
        Tag::Other => Ok(()),
    }
}

fn leave<S: Sink>(tag: &Tag, builder: &mut Builder<S>) -> Result<(), BuildError> {
    match tag {
        Tag::Bold | Tag::Italic | Tag::Underline | Tag::Heading(_) => builder.pop(),
        Tag::Paragraph => builder.end_paragraph(),
        Tag::Link { .. } => {
            builder.end_link();
            Ok(())
        }
        Tag::List { .. } => builder.end_list(),
        Tag::ListItem => builder.end_list_item(),
        Tag::LineBreak | Tag::Other => Ok(()),
    }
}
