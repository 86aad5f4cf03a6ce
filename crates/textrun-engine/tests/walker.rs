use pretty_assertions::assert_eq;
use textrun_engine::{
    Builder, Context, Event, Node, Options, Recorder, Style, Tag, stream::invariants, walk,
};

fn convert(nodes: &[Node], options: Options) -> Vec<Event> {
    let mut builder = Builder::new(Recorder::default(), options);
    walk(nodes, &mut builder).unwrap();
    let events = builder.finish().events;
    invariants::check(&events);
    events
}

#[test]
fn two_paragraph_document_with_link_and_styles() {
    let doc = [
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
    ];
    let options = Options {
        line_separator: "<BR>".to_string(),
        paragraph_separator: "</P>".to_string(),
        ..Options::default()
    };

    let events = convert(&doc, options);

    assert_eq!(
        events,
        vec![
            Event::Text {
                text: "Paragraph 1 ".to_string(),
                context: Context::default(),
            },
            Event::Text {
                text: "hello".to_string(),
                context: Context {
                    style: Style::BOLD,
                    heading: 0,
                },
            },
            Event::Text {
                text: " ".to_string(),
                context: Context::default(),
            },
            Event::Text {
                text: "world".to_string(),
                context: Context {
                    style: Style::ITALIC,
                    heading: 0,
                },
            },
            Event::Link {
                href: "hello".to_string(),
                start: 12,
                end: 23,
            },
            Event::Paragraph { start: 0, end: 27 },
            Event::Paragraph { start: 31, end: 62 },
            Event::Text {
                text: "</P></P>Paragraph 2<BR>More content</P>".to_string(),
                context: Context::default(),
            },
            Event::Finished,
        ]
    );
}

#[test]
fn list_tags_are_wired_through() {
    let doc = [Node::element(
        Tag::List { ordered: false },
        vec![
            Node::element(Tag::ListItem, vec![Node::text("one")]),
            Node::element(Tag::ListItem, vec![Node::text("two")]),
        ],
    )];

    let events = convert(&doc, Options::default());

    assert_eq!(
        events,
        vec![
            Event::ListItemStart { depth: 1, index: 0 },
            Event::ListItemEnd,
            Event::Text {
                text: "one".to_string(),
                context: Context::default(),
            },
            Event::ListItemStart { depth: 1, index: 0 },
            Event::ListItemEnd,
            Event::Text {
                text: "two".to_string(),
                context: Context::default(),
            },
            Event::Finished,
        ]
    );
}

#[test]
fn heading_element_maps_to_its_level() {
    let doc = [
        Node::element(Tag::Heading(2), vec![Node::text("Title")]),
        Node::element(Tag::Paragraph, vec![Node::text("body")]),
    ];

    let events = convert(&doc, Options::default());

    assert_eq!(
        events,
        vec![
            Event::Text {
                text: "Title".to_string(),
                context: Context {
                    style: Style::empty(),
                    heading: 2,
                },
            },
            Event::Paragraph { start: 7, end: 13 },
            Event::Text {
                text: "\n\nbody\n\n".to_string(),
                context: Context::default(),
            },
            Event::Finished,
        ]
    );
}

#[test]
fn transparent_containers_map_to_no_operation() {
    let doc = [Node::element(
        Tag::Other,
        vec![Node::text("a"), Node::text("b")],
    )];

    let events = convert(&doc, Options::default());

    assert_eq!(
        events,
        vec![
            Event::Text {
                text: "ab".to_string(),
                context: Context::default(),
            },
            Event::Finished,
        ]
    );
}

/// Deep nesting must not exhaust the call stack: the traversal holds its own
/// worklist.
#[test]
fn deeply_nested_containers_walk_iteratively() {
    let mut node = Node::text("leaf");
    for _ in 0..4096 {
        node = Node::element(Tag::Other, vec![node]);
    }
    let doc = [node];

    let events = convert(&doc, Options::default());

    assert_eq!(
        events,
        vec![
            Event::Text {
                text: "leaf".to_string(),
                context: Context::default(),
            },
            Event::Finished,
        ]
    );
}
