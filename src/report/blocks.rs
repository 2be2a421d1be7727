//! Structured content produced by the report renderer.

/// Inline formatting flags for a run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanStyle {
    /// Rendered with emphasis (italic).
    pub emphasis: bool,
    /// Rendered strong (bold).
    pub strong: bool,
    /// Rendered struck through.
    pub strikethrough: bool,
    /// Inline code.
    pub code: bool,
    /// Link destination, when the text is a link.
    pub link: Option<String>,
}

impl SpanStyle {
    /// Returns true when no formatting applies.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        !self.emphasis && !self.strong && !self.strikethrough && !self.code && self.link.is_none()
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Literal text.
    pub text: String,
    /// Formatting applied to the text.
    pub style: SpanStyle,
}

impl Span {
    /// Creates an unstyled span.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
        }
    }

    /// Creates a span with the given style.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Concatenates the text of a span sequence, dropping formatting.
#[must_use]
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// No alignment specified.
    #[default]
    None,
    /// Left aligned.
    Left,
    /// Centred.
    Center,
    /// Right aligned.
    Right,
}

/// Contents of a single table cell.
pub type TableCell = Vec<Span>;

/// One entry of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Task checkbox state, for task list items.
    pub checked: Option<bool>,
    /// Nested block content.
    pub blocks: Vec<Block>,
}

/// A block of report content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading, level 1 to 6.
    Heading {
        /// Heading depth.
        level: u8,
        /// Heading text.
        spans: Vec<Span>,
    },
    /// Paragraph of inline text.
    Paragraph(Vec<Span>),
    /// Literal code block.
    CodeBlock {
        /// Fence language tag, if any.
        language: Option<String>,
        /// Code without the trailing newline.
        code: String,
    },
    /// Bulleted or numbered list. Ordered iff `start` is set.
    List {
        /// First number of an ordered list.
        start: Option<u64>,
        /// List entries.
        items: Vec<ListItem>,
    },
    /// Quoted content.
    BlockQuote(Vec<Block>),
    /// Table with a header row.
    Table {
        /// Per-column alignment.
        alignments: Vec<Alignment>,
        /// Header cells.
        header: Vec<TableCell>,
        /// Body rows.
        rows: Vec<Vec<TableCell>>,
    },
    /// Thematic break.
    Rule,
}
