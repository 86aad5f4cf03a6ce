use super::Event;

/// Validates a recorded event stream.
///
/// Asserts that:
/// - Link ends land exactly on flush boundaries
/// - Every span satisfies `start <= end` and stays within the total output
/// - Paragraph spans are non-overlapping with strictly increasing offsets
/// - `Finished` appears exactly once, as the last event
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(events: &[Event]) {
    let mut flushed = 0usize;
    let mut last_paragraph_end: Option<usize> = None;

    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Text { text, .. } => {
                assert!(!text.is_empty(), "empty run emitted at event {i}");
                flushed += text.len();
            }
            Event::Link { href: _, start, end } => {
                assert!(start <= end, "link span inverted: ({start}, {end})");
                assert_eq!(
                    *end, flushed,
                    "link end not on a flush boundary: end {end}, flushed {flushed}"
                );
            }
            Event::Paragraph { start, end } => {
                assert!(start <= end, "paragraph span inverted: ({start}, {end})");
                if let Some(prev_end) = last_paragraph_end {
                    assert!(
                        *start >= prev_end,
                        "paragraph spans overlap: start {start} before previous end {prev_end}"
                    );
                }
                last_paragraph_end = Some(*end);
            }
            Event::ListItemStart { depth, .. } => {
                assert!(*depth > 0, "list item at depth 0");
            }
            Event::ListItemEnd => {}
            Event::Finished => {
                assert_eq!(i, events.len() - 1, "events after finish");
            }
        }
    }

    assert!(
        matches!(events.last(), Some(Event::Finished)),
        "stream not finished"
    );

    // Every reported offset must fall inside the final output.
    for event in events {
        let end = match event {
            Event::Link { end, .. } | Event::Paragraph { end, .. } => *end,
            _ => continue,
        };
        assert!(
            end <= flushed,
            "span end {end} beyond total output length {flushed}"
        );
    }
}
