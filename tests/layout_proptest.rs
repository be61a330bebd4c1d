//! Property-based tests for parsing, width measurement and centering.

use centerline::render::{padding, to_centered, Layout, LayoutEvent, RenderOptions};
use centerline::{display_width, parse_bytes};
use proptest::prelude::*;

/// Bytes drawn from an alphabet that exercises paragraph breaks, spaces,
/// multi-byte glyphs and invalid UTF-8, but never NUL.
fn document_bytes() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        4 => Just(b"\n".to_vec()),
        4 => Just(b"a".to_vec()),
        2 => Just(b"word".to_vec()),
        2 => Just(b" ".to_vec()),
        1 => Just("日".as_bytes().to_vec()),
        1 => Just("e\u{301}".as_bytes().to_vec()),
        1 => Just("\u{301}".as_bytes().to_vec()),
        1 => Just("\u{200B}".as_bytes().to_vec()),
        1 => Just(b"\t".to_vec()),
        1 => Just(b"\r".to_vec()),
        1 => Just(vec![0xFF]),
        1 => Just(vec![0xE6, 0x97]),
    ];
    prop::collection::vec(piece, 0..80).prop_map(|pieces| pieces.concat())
}

/// Input with leading and trailing newlines removed and every run of two or
/// more newlines collapsed to exactly two.
fn canonical(input: &[u8]) -> Vec<u8> {
    let start = input.iter().position(|&b| b != b'\n').unwrap_or(input.len());
    let end = input
        .iter()
        .rposition(|&b| b != b'\n')
        .map_or(start, |i| i + 1);

    let mut out = Vec::new();
    let mut newlines = 0;
    for &b in &input[start..end] {
        if b == b'\n' {
            newlines += 1;
            continue;
        }
        match newlines {
            0 => {}
            1 => out.push(b'\n'),
            _ => out.extend_from_slice(b"\n\n"),
        }
        newlines = 0;
        out.push(b);
    }
    out
}

proptest! {
    #[test]
    fn paragraphs_round_trip(input in document_bytes()) {
        let doc = parse_bytes(&input).unwrap();
        prop_assert_eq!(doc.to_bytes(), canonical(&input));
    }

    #[test]
    fn no_empty_paragraphs_or_lines(input in document_bytes()) {
        let doc = parse_bytes(&input).unwrap();
        for para in doc.paragraphs() {
            prop_assert!(para.line_count() >= 1);
            for line in para.lines() {
                prop_assert!(!line.is_empty());
                prop_assert!(!line.as_bytes().contains(&b'\n'));
            }
        }
    }

    #[test]
    fn paragraph_count_matches_blank_line_runs(input in document_bytes()) {
        let doc = parse_bytes(&input).unwrap();
        let expected = canonical(&input)
            .split(|&b| b == b'\n')
            .fold((0usize, true), |(count, prev_blank), line| {
                let blank = line.is_empty();
                (count + usize::from(prev_blank && !blank), blank)
            })
            .0;
        prop_assert_eq!(doc.paragraph_count(), expected);
    }

    #[test]
    fn padding_centers_lines_that_fit(input in document_bytes(), columns in 1u16..200) {
        let doc = parse_bytes(&input).unwrap();
        let columns_usize = usize::from(columns);
        for event in Layout::new(&doc, columns) {
            if let LayoutEvent::Line(placed) = event {
                if placed.width <= columns_usize {
                    prop_assert!(placed.padding + placed.width <= columns_usize);
                    prop_assert_eq!(placed.padding, (columns_usize - placed.width) / 2);
                } else {
                    prop_assert_eq!(placed.padding, 0);
                }
                prop_assert_eq!(placed.padding, padding(columns_usize, placed.width));
            }
        }
    }

    #[test]
    fn rendered_output_matches_layout(input in document_bytes(), columns in 1u16..200) {
        let doc = parse_bytes(&input).unwrap();
        let output = to_centered(&doc, &RenderOptions::new().with_columns(columns)).unwrap();

        let mut expected = Vec::new();
        for event in Layout::new(&doc, columns) {
            match event {
                LayoutEvent::Line(placed) => {
                    expected.extend(std::iter::repeat(b' ').take(placed.padding));
                    expected.extend_from_slice(placed.line.as_bytes());
                    expected.push(b'\n');
                }
                LayoutEvent::ParagraphBreak => expected.push(b'\n'),
            }
        }
        prop_assert_eq!(&output, &expected);

        // One newline per line plus one between each pair of paragraphs
        let newlines = output.iter().filter(|&&b| b == b'\n').count();
        let separators = doc.paragraph_count().saturating_sub(1);
        prop_assert_eq!(newlines, doc.line_count() + separators);
    }

    #[test]
    fn width_is_idempotent(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let first = display_width(&bytes);
        prop_assert_eq!(display_width(&bytes), first);
        prop_assert_eq!(display_width(&bytes), first);
    }

    #[test]
    fn width_is_additive_on_char_boundaries(
        a in "\\PC*",
        b in prop::collection::vec(1u8..=255, 0..64),
    ) {
        let mut joined = a.as_bytes().to_vec();
        joined.extend_from_slice(&b);
        prop_assert_eq!(
            display_width(&joined),
            display_width(a.as_bytes()) + display_width(&b)
        );
    }

    #[test]
    fn width_never_exceeds_twice_byte_length(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(display_width(&bytes) <= 2 * bytes.len());
    }
}
