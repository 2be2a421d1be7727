//! Text wrapping utilities for terminal display.
//!
//! Provides two wrapping strategies:
//! - **Character-based wrapping** (`wrap_to_width`): Hard-wraps at exactly N
//!   columns, used for code blocks where preserving exact layout matters.
//! - **Word-based wrapping** (`wrap_words`): Wraps prose at word boundaries,
//!   used for paragraphs, headings and list items.
//!
//! Widths are measured in terminal columns, so wide characters such as CJK
//! text count double.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps a single line at `max_width` columns.
///
/// A width of zero disables wrapping.
///
/// # Examples
///
/// ```
/// use codesense::tui::components::wrap_to_width;
///
/// assert_eq!(wrap_to_width("hello", 80), vec!["hello".to_owned()]);
/// assert_eq!(wrap_to_width("abcdef", 4), vec!["abcd".to_owned(), "ef".to_owned()]);
/// ```
#[must_use]
pub fn wrap_to_width(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || line.width() <= max_width {
        return vec![line.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    lines.push(current);

    lines
}

/// Word-wraps text to `max_width` columns.
///
/// Embedded newlines start a new line. Runs of spaces collapse to one at
/// wrap points. Words longer than the width are hard-wrapped.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || line.width() <= max_width {
        return vec![line.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0_usize;

    for word in line.split_whitespace() {
        let word_width = word.width();

        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = wrap_to_width(word, max_width);
            let last = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = last.width();
            current = last;
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width.saturating_add(1).saturating_add(word_width)
        };

        if needed > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
