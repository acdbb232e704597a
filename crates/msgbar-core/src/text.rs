#![forbid(unsafe_code)]

//! Text measurement for message sizing.
//!
//! Measurement happens in display columns (east-asian-wide aware), which the
//! layout layer converts to points through font metrics. Wrapping is greedy
//! word wrap over Unicode word boundaries; a single word wider than the line
//! is hard-split at grapheme boundaries rather than overflowing.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in columns.
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Word-wrap `text` to at most `max_cols` columns per line.
///
/// Returns borrowed slices of the input, one per output line. Embedded
/// newlines force breaks and blank lines are preserved. `max_cols` is
/// clamped to at least one column.
pub fn wrap(text: &str, max_cols: usize) -> Vec<&str> {
    let max_cols = max_cols.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.is_empty() {
            lines.push(raw);
        } else {
            wrap_line(raw, max_cols, &mut lines);
        }
    }
    lines
}

/// Number of wrapped lines `text` occupies at `max_cols` columns.
///
/// Empty text occupies zero lines. This is the sizing-path entry point; the
/// draw path uses [`wrap`] directly.
pub fn line_count(text: &str, max_cols: usize) -> usize {
    if text.is_empty() {
        0
    } else {
        wrap(text, max_cols).len()
    }
}

fn wrap_line<'a>(line: &'a str, max_cols: usize, out: &mut Vec<&'a str>) {
    let mut start = 0usize;
    let mut end = 0usize;
    let mut width = 0usize;

    for (off, seg) in line.split_word_bound_indices() {
        let seg_width = display_width(seg);
        if width + seg_width <= max_cols {
            width += seg_width;
            end = off + seg.len();
            continue;
        }

        if seg.trim().is_empty() {
            // Whitespace at a break point is dropped, not carried over.
            out.push(line[start..end].trim_end());
            start = off + seg.len();
            end = start;
            width = 0;
            continue;
        }

        if width > 0 {
            out.push(line[start..end].trim_end());
            start = off;
            end = off;
            width = 0;
        }

        if seg_width <= max_cols {
            width = seg_width;
            end = off + seg.len();
        } else {
            // A single word wider than the line: split at graphemes.
            let mut piece_start = off;
            let mut piece_width = 0usize;
            for (goff, g) in seg.grapheme_indices(true) {
                let gw = display_width(g);
                if piece_width + gw > max_cols && piece_width > 0 {
                    out.push(&line[piece_start..off + goff]);
                    piece_start = off + goff;
                    piece_width = 0;
                }
                piece_width += gw;
            }
            start = piece_start;
            end = off + seg.len();
            width = piece_width;
        }
    }

    if end > start {
        out.push(line[start..end].trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_single_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn breaks_at_word_boundary() {
        assert_eq!(wrap("hello brave world", 11), vec!["hello brave", "world"]);
    }

    #[test]
    fn no_line_exceeds_limit() {
        let text = "The quick brown fox jumps over the lazy dog";
        for line in wrap(text, 10) {
            assert!(display_width(line) <= 10, "line too wide: {line:?}");
        }
    }

    #[test]
    fn long_word_hard_splits() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn embedded_newlines_force_breaks() {
        assert_eq!(wrap("one\ntwo", 20), vec!["one", "two"]);
    }

    #[test]
    fn blank_lines_preserved() {
        assert_eq!(wrap("a\n\nb", 20), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_whitespace_trimmed_at_breaks() {
        let lines = wrap("word    next", 5);
        assert_eq!(lines, vec!["word", "next"]);
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK glyph is two columns.
        assert_eq!(display_width("\u{4F60}\u{597D}"), 4);
        let lines = wrap("\u{4F60}\u{597D}\u{4E16}\u{754C}", 4);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn zero_max_cols_clamped() {
        // Should not loop forever or panic.
        let lines = wrap("ab", 0);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn line_count_empty_is_zero() {
        assert_eq!(line_count("", 10), 0);
        assert_eq!(line_count("x", 10), 1);
    }

    #[test]
    fn reconstruction_loses_only_break_whitespace() {
        let text = "alpha beta gamma delta";
        let joined = wrap(text, 8).join(" ");
        assert_eq!(joined, text);
    }
}
