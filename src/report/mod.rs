//! Review report rendering.
//!
//! The review service returns markdown. [`render`] turns it into a small,
//! display-agnostic block tree that the terminal view lays out.

mod blocks;
mod parser;

pub use blocks::{Alignment, Block, ListItem, Span, SpanStyle, TableCell, plain_text};
pub use parser::render;
