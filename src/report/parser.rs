//! Markdown to [`Block`] conversion built on `pulldown-cmark` events.

use std::borrow::Cow;
use std::mem;

use pulldown_cmark::{
    Alignment as CmarkAlignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};

use super::blocks::{Alignment, Block, ListItem, Span, SpanStyle, TableCell};

/// Converts a markdown document into structured blocks.
///
/// Follows `CommonMark` with tables, strikethrough and task lists. Raw HTML
/// is kept as literal text. Control characters other than newline and tab
/// never reach the blocks: carriage returns are dropped and the rest become
/// U+FFFD, so report text cannot drive the terminal.
///
/// # Example
///
/// ```
/// use codesense::report::{Block, render};
///
/// let blocks = render("# Summary\n\nLooks good.");
/// assert!(matches!(blocks.first(), Some(Block::Heading { level: 1, .. })));
/// assert_eq!(blocks.len(), 2);
/// ```
#[must_use]
pub fn render(markdown: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(markdown, parser_options()) {
        builder.handle(event);
    }
    builder.finish()
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Open container blocks.
#[derive(Debug)]
enum Frame {
    Quote(Vec<Block>),
    List {
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Item(ListItem),
}

/// Leaf block currently collecting content.
#[derive(Debug)]
enum Leaf {
    Code {
        language: Option<String>,
        code: String,
    },
    Html(String),
}

#[derive(Debug, Default)]
struct TableBuilder {
    alignments: Vec<Alignment>,
    header: Vec<TableCell>,
    rows: Vec<Vec<TableCell>>,
    row: Vec<TableCell>,
}

#[derive(Debug, Default)]
struct InlineBuffer {
    spans: Vec<Span>,
    emphasis: usize,
    strong: usize,
    strikethrough: usize,
    links: Vec<String>,
}

impl InlineBuffer {
    fn style(&self, code: bool) -> SpanStyle {
        SpanStyle {
            emphasis: self.emphasis > 0,
            strong: self.strong > 0,
            strikethrough: self.strikethrough > 0,
            code,
            link: self.links.last().cloned(),
        }
    }

    fn push(&mut self, text: &str, code: bool) {
        if text.is_empty() {
            return;
        }
        let style = self.style(code);
        let text = neutralise_controls(text);
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(Span::styled(text, style)),
        }
    }

    fn take(&mut self) -> Vec<Span> {
        mem::take(&mut self.spans)
    }
}

#[derive(Debug, Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    frames: Vec<Frame>,
    leaf: Option<Leaf>,
    table: Option<TableBuilder>,
    inline: InlineBuffer,
}

impl BlockBuilder {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline.push(&code, true),
            Event::Html(html) | Event::InlineHtml(html) => self.html(&html),
            Event::InlineMath(math) | Event::DisplayMath(math) => self.inline.push(&math, false),
            Event::FootnoteReference(label) => self.inline.push(&format!("[^{label}]"), false),
            Event::SoftBreak => self.inline.push(" ", false),
            Event::HardBreak => self.inline.push("\n", false),
            Event::Rule => {
                self.flush_loose_inline();
                self.push_block(Block::Rule);
            }
            Event::TaskListMarker(checked) => {
                if let Some(Frame::Item(item)) = self.frames.last_mut() {
                    item.checked = Some(checked);
                }
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::Heading { .. } => self.flush_loose_inline(),
            Tag::BlockQuote(_) => {
                self.flush_loose_inline();
                self.frames.push(Frame::Quote(Vec::new()));
            }
            Tag::CodeBlock(kind) => {
                self.flush_loose_inline();
                self.leaf = Some(Leaf::Code {
                    language: fence_language(&kind),
                    code: String::new(),
                });
            }
            Tag::HtmlBlock => {
                self.flush_loose_inline();
                self.leaf = Some(Leaf::Html(String::new()));
            }
            Tag::List(start) => {
                self.flush_loose_inline();
                self.frames.push(Frame::List {
                    start,
                    items: Vec::new(),
                });
            }
            Tag::Item => self.frames.push(Frame::Item(ListItem::default())),
            Tag::Table(alignments) => {
                self.flush_loose_inline();
                self.table = Some(TableBuilder {
                    alignments: alignments.into_iter().map(map_alignment).collect(),
                    ..TableBuilder::default()
                });
            }
            Tag::Emphasis => self.inline.emphasis += 1,
            Tag::Strong => self.inline.strong += 1,
            Tag::Strikethrough => self.inline.strikethrough += 1,
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                self.inline.links.push(dest_url.into_string());
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                let spans = self.inline.take();
                if !spans.is_empty() {
                    self.push_block(Block::Paragraph(spans));
                }
            }
            TagEnd::Heading(level) => {
                let spans = self.inline.take();
                self.push_block(Block::Heading {
                    level: heading_depth(level),
                    spans,
                });
            }
            TagEnd::BlockQuote(_) => {
                self.flush_loose_inline();
                if let Some(Frame::Quote(blocks)) = self.frames.pop() {
                    self.push_block(Block::BlockQuote(blocks));
                }
            }
            TagEnd::CodeBlock => {
                if let Some(Leaf::Code { language, code }) = self.leaf.take() {
                    let trimmed = code.strip_suffix('\n').unwrap_or(&code).to_owned();
                    self.push_block(Block::CodeBlock {
                        language,
                        code: trimmed,
                    });
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(Leaf::Html(html)) = self.leaf.take() {
                    let literal = html.trim_end();
                    if !literal.is_empty() {
                        self.push_block(Block::Paragraph(vec![Span::plain(literal)]));
                    }
                }
            }
            TagEnd::List(_) => {
                if let Some(Frame::List { start, items }) = self.frames.pop() {
                    self.push_block(Block::List { start, items });
                }
            }
            TagEnd::Item => {
                self.flush_loose_inline();
                if let Some(Frame::Item(item)) = self.frames.pop()
                    && let Some(Frame::List { items, .. }) = self.frames.last_mut()
                {
                    items.push(item);
                }
            }
            TagEnd::TableCell => {
                let cell = self.inline.take();
                if let Some(table) = self.table.as_mut() {
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header = mem::take(&mut table.row);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.push_block(Block::Table {
                        alignments: table.alignments,
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            TagEnd::Emphasis => self.inline.emphasis = self.inline.emphasis.saturating_sub(1),
            TagEnd::Strong => self.inline.strong = self.inline.strong.saturating_sub(1),
            TagEnd::Strikethrough => {
                self.inline.strikethrough = self.inline.strikethrough.saturating_sub(1);
            }
            TagEnd::Link | TagEnd::Image => {
                self.inline.links.pop();
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        match self.leaf.as_mut() {
            Some(Leaf::Code { code, .. }) => code.push_str(&neutralise_controls(text)),
            Some(Leaf::Html(html)) => html.push_str(&neutralise_controls(text)),
            None => self.inline.push(text, false),
        }
    }

    fn html(&mut self, html: &str) {
        match self.leaf.as_mut() {
            Some(Leaf::Html(buffer)) => buffer.push_str(&neutralise_controls(html)),
            _ => self.inline.push(html, false),
        }
    }

    /// Tight list items carry inline text without a paragraph wrapper.
    fn flush_loose_inline(&mut self) {
        if self.inline.spans.is_empty() || self.table.is_some() {
            return;
        }
        let spans = self.inline.take();
        self.push_block(Block::Paragraph(spans));
    }

    fn push_block(&mut self, block: Block) {
        match self.frames.last_mut() {
            Some(Frame::Quote(blocks) | Frame::Item(ListItem { blocks, .. })) => blocks.push(block),
            Some(Frame::List { .. }) | None => self.blocks.push(block),
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_loose_inline();
        self.blocks
    }
}

/// Replaces terminal control characters in report text.
///
/// Newlines and tabs are layout and pass through. Carriage returns are
/// dropped; every other C0, DEL or C1 character becomes U+FFFD.
fn neutralise_controls(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| ch.is_control() && !matches!(ch, '\n' | '\t')) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .filter(|ch| *ch != '\r')
            .map(|ch| {
                if ch.is_control() && !matches!(ch, '\n' | '\t') {
                    char::REPLACEMENT_CHARACTER
                } else {
                    ch
                }
            })
            .collect(),
    )
}

fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split_whitespace()
            .next()
            .map(|language| language.split(',').next().unwrap_or(language))
            .filter(|language| !language.is_empty())
            .map(ToOwned::to_owned),
        CodeBlockKind::Indented => None,
    }
}

const fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

const fn map_alignment(alignment: CmarkAlignment) -> Alignment {
    match alignment {
        CmarkAlignment::None => Alignment::None,
        CmarkAlignment::Left => Alignment::Left,
        CmarkAlignment::Center => Alignment::Center,
        CmarkAlignment::Right => Alignment::Right,
    }
}
