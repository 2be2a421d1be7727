//! Test utilities for TUI component tests.

/// Strips ANSI escape codes from a string.
///
/// Highlighted code lines carry 24-bit colour escapes; tests use this to
/// compare the visible text only.
///
/// # Example
///
/// ```
/// use codesense::tui::components::test_utils::strip_ansi_codes;
///
/// let coloured = "\x1b[38;2;1;2;3mlet\x1b[0m";
/// assert_eq!(strip_ansi_codes(coloured), "let");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;

    for ch in s.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            // A letter terminates the CSI sequence.
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            result.push(ch);
        }
    }

    result
}
