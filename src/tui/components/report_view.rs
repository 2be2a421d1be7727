//! Report view component for laying out rendered report blocks.
//!
//! Converts the block tree produced by [`crate::report::render`] into
//! terminal lines for a given width. Headings are underlined, prose is
//! word-wrapped, lists and quotes are indented, tables are padded per column
//! and code blocks are syntax highlighted.

use unicode_width::UnicodeWidthStr;

use crate::report::{Alignment, Block, ListItem, Span, TableCell};

use super::code_highlight::CodeHighlighter;
use super::text_wrap::wrap_words;

const CODE_INDENT: &str = "    ";
const QUOTE_PREFIX: &str = "│ ";
const BULLET: &str = "• ";
const COLUMN_SEPARATOR: &str = " │ ";
const MIN_CONTENT_WIDTH: usize = 8;
const SGR_RESET: &str = "\x1b[0m";

/// Component that lays out report blocks for the terminal.
#[derive(Debug, Default)]
pub struct ReportView {
    highlighter: CodeHighlighter,
}

impl ReportView {
    /// Creates a new report view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `blocks` as terminal lines no wider than `max_width` columns,
    /// except for tables and highlighted code, which the viewport truncates.
    #[must_use]
    pub fn render_lines(&self, blocks: &[Block], max_width: usize) -> Vec<String> {
        self.layout(blocks, max_width, true)
    }

    fn layout(&self, blocks: &[Block], max_width: usize, spaced: bool) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            if spaced && index > 0 {
                lines.push(String::new());
            }
            lines.extend(self.render_block(block, max_width));
        }
        lines
    }

    fn render_block(&self, block: &Block, max_width: usize) -> Vec<String> {
        let width = max_width.max(MIN_CONTENT_WIDTH);
        match block {
            Block::Heading { level, spans } => render_heading(*level, spans, width),
            Block::Paragraph(spans) => render_paragraph(spans, width),
            Block::CodeBlock { language, code } => self
                .highlighter
                .highlight_or_plain(
                    code,
                    language.as_deref(),
                    width.saturating_sub(CODE_INDENT.len()),
                )
                .into_iter()
                .map(|line| format!("{CODE_INDENT}{line}"))
                .collect(),
            Block::List { start, items } => self.render_list(*start, items, width),
            Block::BlockQuote(children) => self
                .render_lines(children, width.saturating_sub(QUOTE_PREFIX.width()))
                .into_iter()
                .map(|line| format!("{QUOTE_PREFIX}{line}").trim_end().to_owned())
                .collect(),
            Block::Table {
                alignments,
                header,
                rows,
            } => render_table(alignments, header, rows),
            Block::Rule => vec!["─".repeat(width)],
        }
    }

    fn render_list(&self, start: Option<u64>, items: &[ListItem], width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut number = start;

        for item in items {
            let mut marker = number.map_or_else(|| BULLET.to_owned(), |n| format!("{n}. "));
            number = number.map(|n| n.saturating_add(1));
            if let Some(checked) = item.checked {
                marker.push_str(if checked { "[x] " } else { "[ ] " });
            }

            let indent = " ".repeat(marker.width());
            let body = self.layout(&item.blocks, width.saturating_sub(marker.width()), false);
            if body.is_empty() {
                lines.push(marker.trim_end().to_owned());
                continue;
            }
            for (index, line) in body.into_iter().enumerate() {
                let prefix = if index == 0 { &marker } else { &indent };
                lines.push(format!("{prefix}{line}").trim_end().to_owned());
            }
        }

        lines
    }
}

fn render_heading(level: u8, spans: &[Span], width: usize) -> Vec<String> {
    let text = inline_text(spans);
    let mut lines = wrap_words(&text, width);
    let underline = match level {
        1 => Some('═'),
        2 => Some('─'),
        _ => None,
    };

    match underline {
        Some(ch) => {
            let rule_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
            lines.push(ch.to_string().repeat(rule_width));
        }
        None => {
            let hashes = "#".repeat(usize::from(level));
            if let Some(first) = lines.first_mut() {
                *first = format!("{hashes} {first}");
            }
        }
    }

    lines
}

/// Flattens spans to display text.
///
/// Inline code is wrapped in backticks, struck text in tildes, and links show
/// their destination when it differs from the link text.
#[must_use]
pub fn inline_text(spans: &[Span]) -> String {
    styled_chars(spans).into_iter().map(|(ch, _)| ch).collect()
}

/// Weight and slant carried by a displayed character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Emphasis {
    strong: bool,
    italic: bool,
}

impl Emphasis {
    const fn is_plain(self) -> bool {
        !self.strong && !self.italic
    }

    const fn sgr(self) -> &'static str {
        match (self.strong, self.italic) {
            (true, true) => "\x1b[1;3m",
            (true, false) => "\x1b[1m",
            (false, true) => "\x1b[3m",
            (false, false) => "",
        }
    }
}

/// Display characters of `spans`, each tagged with its emphasis.
fn styled_chars(spans: &[Span]) -> Vec<(char, Emphasis)> {
    let mut chars = Vec::new();
    for span in spans {
        let emphasis = Emphasis {
            strong: span.style.strong,
            italic: span.style.emphasis,
        };
        let mut piece = span.text.clone();
        if span.style.code {
            piece = format!("`{piece}`");
        }
        if span.style.strikethrough {
            piece = format!("~~{piece}~~");
        }
        chars.extend(piece.chars().map(|ch| (ch, emphasis)));
        if let Some(link) = span.style.link.as_deref()
            && link != span.text
            && !link.is_empty()
        {
            chars.extend(format!(" <{link}>").chars().map(|ch| (ch, Emphasis::default())));
        }
    }
    chars
}

/// Word-wraps a paragraph, then marks strong and emphasised runs with SGR
/// bold and italic.
fn render_paragraph(spans: &[Span], width: usize) -> Vec<String> {
    let chars = styled_chars(spans);
    let text: String = chars.iter().map(|(ch, _)| *ch).collect();
    let lines = wrap_words(&text, width);
    if chars.iter().all(|(_, emphasis)| emphasis.is_plain()) {
        return lines;
    }

    // Wrapped lines keep the source characters in order; wrapping only
    // drops newlines and collapses whitespace.
    let mut source = chars.iter().copied();
    lines
        .iter()
        .map(|line| {
            let mut styled = String::new();
            let mut active = Emphasis::default();
            for ch in line.chars() {
                let emphasis = source
                    .by_ref()
                    .find(|(found, _)| *found == ch || (ch == ' ' && found.is_whitespace()))
                    .map_or(Emphasis::default(), |(_, emphasis)| emphasis);
                if emphasis != active {
                    if !active.is_plain() {
                        styled.push_str(SGR_RESET);
                    }
                    styled.push_str(emphasis.sgr());
                    active = emphasis;
                }
                styled.push(ch);
            }
            if !active.is_plain() {
                styled.push_str(SGR_RESET);
            }
            styled
        })
        .collect()
}

fn render_table(
    alignments: &[Alignment],
    header: &[TableCell],
    rows: &[Vec<TableCell>],
) -> Vec<String> {
    let header_text: Vec<String> = header.iter().map(|cell| inline_text(cell)).collect();
    let rows_text: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| inline_text(cell)).collect())
        .collect();

    let columns = std::iter::once(header_text.len())
        .chain(rows_text.iter().map(Vec::len))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|column| {
            std::iter::once(&header_text)
                .chain(rows_text.iter())
                .filter_map(|row| row.get(column))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = cells.get(column).map_or("", String::as_str);
                let alignment = alignments.get(column).copied().unwrap_or_default();
                pad_cell(cell, *width, alignment)
            })
            .collect();
        padded.join(COLUMN_SEPARATOR).trim_end().to_owned()
    };

    let separator: Vec<String> = widths.iter().map(|width| "─".repeat(*width)).collect();

    let mut lines = vec![format_row(&header_text), separator.join("─┼─")];
    lines.extend(rows_text.iter().map(|row| format_row(row)));
    lines
}

fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let gap = width.saturating_sub(cell.width());
    match alignment {
        Alignment::Right => format!("{}{cell}", " ".repeat(gap)),
        Alignment::Center => {
            let right = gap.div_ceil(2);
            let left = gap.saturating_sub(right);
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(right))
        }
        Alignment::None | Alignment::Left => format!("{cell}{}", " ".repeat(gap)),
    }
}

#[cfg(test)]
#[path = "report_view_tests.rs"]
mod tests;
