//! Result view state: the consumed handoff and its scroll position.
//!
//! Report blocks are parsed once when the view opens. Terminal lines are
//! re-laid out whenever the width changes; the scroll offset is clamped so
//! the last page stays full.

use crate::report::{Block, render};
use crate::review::{NavigationHandoff, PullRequestLocator};
use crate::tui::components::ReportView;

/// State of the result view for one consumed handoff.
#[derive(Debug, Clone)]
pub struct ResultViewState {
    handoff: NavigationHandoff,
    blocks: Vec<Block>,
    lines: Vec<String>,
    rendered_width: usize,
    scroll: usize,
}

impl ResultViewState {
    /// Parses the handoff's report and lays it out for `width` columns.
    #[must_use]
    pub fn new(handoff: NavigationHandoff, view: &ReportView, width: usize) -> Self {
        let blocks = render(handoff.report().markdown());
        let lines = view.render_lines(&blocks, width);
        Self {
            handoff,
            blocks,
            lines,
            rendered_width: width,
            scroll: 0,
        }
    }

    /// The handoff this view was opened with.
    #[must_use]
    pub const fn handoff(&self) -> &NavigationHandoff {
        &self.handoff
    }

    /// Parsed report blocks.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Laid-out report lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first visible line.
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Title naming the reviewed pull request and its mode.
    ///
    /// Falls back to the raw URL if it no longer parses as a locator.
    #[must_use]
    pub fn title(&self) -> String {
        let request = self.handoff.request();
        PullRequestLocator::parse(&request.pr_url).map_or_else(
            |_| format!("Review: {} ({})", request.pr_url, request.mode),
            |locator| format!("Review: {locator} ({})", request.mode),
        )
    }

    /// Re-lays out the report when `width` differs from the last layout.
    pub fn relayout(&mut self, view: &ReportView, width: usize) {
        if width == self.rendered_width {
            return;
        }
        self.lines = view.render_lines(&self.blocks, width);
        self.rendered_width = width;
        self.scroll = self.scroll.min(self.lines.len().saturating_sub(1));
    }

    /// Scrolls up by `amount` lines.
    pub const fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scrolls down by `amount` lines, keeping a full page visible.
    pub fn scroll_down(&mut self, amount: usize, visible: usize) {
        let target = self.scroll.saturating_add(amount);
        self.scroll = target.min(self.max_scroll(visible));
    }

    /// Jumps to the first line.
    pub const fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jumps so the last line is at the bottom of the page.
    pub fn scroll_to_bottom(&mut self, visible: usize) {
        self.scroll = self.max_scroll(visible);
    }

    fn max_scroll(&self, visible: usize) -> usize {
        self.lines.len().saturating_sub(visible.max(1))
    }
}
