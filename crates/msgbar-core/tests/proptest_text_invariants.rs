//! Property-based invariant tests for text wrapping.
//!
//! These invariants must hold for any input text and column limit:
//!
//! 1. No wrapped line exceeds the column limit (when the limit can fit the
//!    widest grapheme).
//! 2. Wrapping never invents characters: every line is a substring of the
//!    input.
//! 3. Non-empty text wraps to at least one line.
//! 4. Widening the limit never increases the line count.
//! 5. No panics on arbitrary Unicode input or extreme limits.

use msgbar_core::text::{display_width, line_count, wrap};
use proptest::prelude::*;

fn ascii_text() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9.,!?-]{0,120}"
}

proptest! {
    #[test]
    fn lines_respect_column_limit(text in ascii_text(), max_cols in 1usize..40) {
        for line in wrap(&text, max_cols) {
            prop_assert!(
                display_width(line) <= max_cols,
                "line {:?} wider than {} cols",
                line, max_cols
            );
        }
    }
}

proptest! {
    #[test]
    fn lines_are_substrings(text in ascii_text(), max_cols in 1usize..40) {
        for line in wrap(&text, max_cols) {
            prop_assert!(
                text.contains(line),
                "line {:?} is not a substring of {:?}",
                line, text
            );
        }
    }
}

proptest! {
    #[test]
    fn nonempty_text_has_lines(text in "[a-z]{1,60}", max_cols in 1usize..40) {
        prop_assert!(line_count(&text, max_cols) >= 1);
    }
}

proptest! {
    #[test]
    fn wider_limit_never_adds_lines(text in ascii_text(), max_cols in 1usize..40) {
        let narrow = line_count(&text, max_cols);
        let wide = line_count(&text, max_cols + 10);
        prop_assert!(
            wide <= narrow,
            "widening {} -> {} grew line count {} -> {}",
            max_cols, max_cols + 10, narrow, wide
        );
    }
}

proptest! {
    #[test]
    fn no_panics_on_arbitrary_unicode(text in "\\PC{0,80}", max_cols in 0usize..100) {
        let _ = wrap(&text, max_cols);
        let _ = line_count(&text, max_cols);
    }
}
