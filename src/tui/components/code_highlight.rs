//! Syntax highlighting adapter using syntect.
//!
//! Highlights fenced code blocks from review reports, picking the syntax
//! from the fence language tag. Lines are wrapped to a maximum width before
//! highlighting to avoid ANSI escape code complexity in width calculations.

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use thiserror::Error;

use super::text_wrap::wrap_to_width;

const THEME_NAME: &str = "base16-ocean.dark";
const ANSI_RESET: &str = "\x1b[0m";

/// Errors that can occur during syntax highlighting.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// No syntax definition matches the fence language.
    #[error("no syntax found for language: {language}")]
    NoSyntaxFound {
        /// The language tag that could not be matched.
        language: String,
    },
    /// Syntect internal error during highlighting.
    #[error("highlighting failed: {message}")]
    HighlightFailed {
        /// Description of the failure.
        message: String,
    },
}

/// Code highlighter with preloaded syntax definitions.
#[derive(Debug)]
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter {
    /// Creates a new highlighter with default syntax and theme sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Highlights a code block, falling back to plain wrapped lines when
    /// the language is unknown or highlighting fails.
    #[must_use]
    pub fn highlight_or_plain(
        &self,
        code: &str,
        language: Option<&str>,
        max_width: usize,
    ) -> Vec<String> {
        language
            .ok_or_else(|| HighlightError::NoSyntaxFound {
                language: String::new(),
            })
            .and_then(|found| self.highlight_code_block(code, found, max_width))
            .unwrap_or_else(|_| wrap_plain(code, max_width))
    }

    /// Attempts to highlight a code block with syntax colouring.
    ///
    /// Each returned line ends with an ANSI reset so styles never leak into
    /// the surrounding layout.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::NoSyntaxFound`] if the language tag cannot
    /// be matched to a syntax definition, or
    /// [`HighlightError::HighlightFailed`] if syntect encounters an internal
    /// error.
    pub fn highlight_code_block(
        &self,
        code: &str,
        language: &str,
        max_width: usize,
    ) -> Result<Vec<String>, HighlightError> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .ok_or_else(|| HighlightError::NoSyntaxFound {
                language: language.to_owned(),
            })?;

        let theme = self
            .theme_set
            .themes
            .get(THEME_NAME)
            .or_else(|| self.theme_set.themes.values().next())
            .ok_or_else(|| HighlightError::HighlightFailed {
                message: "no theme available".to_owned(),
            })?;

        let mut highlighter = HighlightLines::new(syntax, theme);

        wrap_plain(code, max_width)
            .into_iter()
            .map(|line| {
                let ranges = highlighter
                    .highlight_line(&line, &self.syntax_set)
                    .map_err(|error| HighlightError::HighlightFailed {
                        message: error.to_string(),
                    })?;
                let mut escaped = as_24_bit_terminal_escaped(&ranges, false);
                escaped.push_str(ANSI_RESET);
                Ok(escaped)
            })
            .collect()
    }
}

fn wrap_plain(code: &str, max_width: usize) -> Vec<String> {
    code.lines()
        .flat_map(|line| wrap_to_width(line, max_width))
        .collect()
}
