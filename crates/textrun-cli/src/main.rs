use anyhow::{Context as _, Result};
use std::{env, path::Path, process};
use textrun_engine::{Builder, Context, Node, Options, Sink, Tag, walk};

/// Prints every sink call as one line, in the order the builder issues them.
struct PrintSink;

impl Sink for PrintSink {
    fn append_text(&mut self, text: &str, context: &Context) {
        println!(
            "APPEND: [{text}] [{}] [style {:#05b}] [heading {}]",
            text.len(),
            context.style.bits(),
            context.heading
        );
    }

    fn mark_link(&mut self, href: &str, start: usize, end: usize) {
        println!("MARK LINK: [{href}] ({start}, {end})");
    }

    fn mark_paragraph(&mut self, start: usize, end: usize) {
        println!("MARK PARAGRAPH: ({start}, {end})");
    }

    fn start_list_item(&mut self, depth: usize, index: u32) {
        println!("LIST ITEM START: (depth {depth}, index {index})");
    }

    fn end_list_item(&mut self) {
        println!("LIST ITEM END");
    }

    fn finish(&mut self) {
        println!("FINISH");
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match args.len() {
        1 => Options::default(),
        2 => load_options(Path::new(&args[1]))?,
        _ => {
            eprintln!("Usage: textrun [options.toml]");
            process::exit(2);
        }
    };

    let mut builder = Builder::new(PrintSink, options);
    walk(&demo_document(), &mut builder)?;
    builder.finish();
    Ok(())
}

fn load_options(path: &Path) -> Result<Options> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse options file {}", path.display()))
}

/// A small document exercising paragraphs, inline styles, a link, a line
/// break, a heading, and a list.
fn demo_document() -> Vec<Node> {
    vec![
        Node::element(Tag::Heading(1), vec![Node::text("Demo")]),
        Node::element(
            Tag::Paragraph,
            vec![
                Node::text("Paragraph 1 "),
                Node::element(
                    Tag::Link {
                        href: "hello".to_string(),
                    },
                    vec![
                        Node::element(Tag::Bold, vec![Node::text("hello")]),
                        Node::text(" "),
                        Node::element(Tag::Italic, vec![Node::text("world")]),
                    ],
                ),
            ],
        ),
        Node::element(
            Tag::Paragraph,
            vec![
                Node::text("Paragraph 2"),
                Node::element(Tag::LineBreak, vec![]),
                Node::text("More content"),
            ],
        ),
        Node::element(
            Tag::List { ordered: true },
            vec![
                Node::element(Tag::ListItem, vec![Node::text("first")]),
                Node::element(Tag::ListItem, vec![Node::text("second")]),
            ],
        ),
    ]
}
