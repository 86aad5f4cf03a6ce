pub mod build;
pub mod stream;
pub mod walk;

// Re-export key types for easier usage
pub use build::{BuildError, Builder, Context, ContextStack, Options, Style};
pub use stream::{Event, Recorder, Sink};
pub use walk::{Node, Tag, walk};
