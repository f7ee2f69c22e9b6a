//! Screen layout and mouse hit-testing.
//!
//! Geometry is computed separately from rendering so the event loop can
//! hit-test clicks against the rectangles of the last drawn frame.

use super::constants::{
    CONTROLS_HEIGHT, HEADER_HEIGHT, NEXT_LABEL, PREVIOUS_LABEL, STATUS_BAR_HEIGHT,
};
use super::styles::BookStyles;
use super::{controls, help, page_panel};
use crate::model::BookSettings;
use crate::source::ContentSource;
use crate::viewer::{AutoplayPhase, Viewer};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// What a screen cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The "previous" control.
    PreviousButton,
    /// The "next" control.
    NextButton,
    /// The page surface (swipe and tap area).
    Surface,
    /// Header, status bar, indicator or gaps.
    Outside,
}

/// Rectangles of every screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Book title and subtitle.
    pub header: Rect,
    /// Page surface.
    pub surface: Rect,
    /// Whole control row.
    pub controls: Rect,
    /// "previous" control within the control row.
    pub previous_button: Rect,
    /// Page indicator within the control row.
    pub indicator: Rect,
    /// "next" control within the control row.
    pub next_button: Rect,
    /// Status bar.
    pub status: Rect,
}

impl ScreenLayout {
    /// Compute the layout for a terminal area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        let controls = rows[2];
        let (previous_button, indicator, next_button) = split_controls(controls);

        Self {
            header: rows[0],
            surface: rows[1],
            controls,
            previous_button,
            indicator,
            next_button,
            status: rows[3],
        }
    }

    /// Classify the cell at (`column`, `row`).
    ///
    /// Buttons win over everything else; zero-sized regions never match.
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);
        if self.previous_button.contains(position) {
            HitTarget::PreviousButton
        } else if self.next_button.contains(position) {
            HitTarget::NextButton
        } else if self.surface.contains(position) {
            HitTarget::Surface
        } else {
            HitTarget::Outside
        }
    }
}

/// Place the previous control flush left, the next control flush right and
/// the indicator in between.
///
/// When the row is too narrow for both labels, each control gets half.
fn split_controls(row: Rect) -> (Rect, Rect, Rect) {
    let previous_width = label_width(PREVIOUS_LABEL);
    let next_width = label_width(NEXT_LABEL);

    let (previous_width, next_width) = if previous_width + next_width > row.width {
        let half = row.width / 2;
        (half, row.width - half)
    } else {
        (previous_width, next_width)
    };

    let previous = Rect::new(row.x, row.y, previous_width, row.height);
    let next = Rect::new(
        row.x + row.width - next_width,
        row.y,
        next_width,
        row.height,
    );
    let indicator = Rect::new(
        previous.x + previous.width,
        row.y,
        row.width - previous_width - next_width,
        row.height,
    );

    (previous, indicator, next)
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}

/// Status bar marker shown while content edits are picked up live.
pub const WATCH_MARKER: &str = "  ⟳ live";

/// Everything the frame shows besides the pages themselves.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Element styles.
    pub styles: &'a BookStyles,
    /// Whether the help overlay is open.
    pub help_visible: bool,
}

/// Render a complete frame and return the layout used.
pub fn render_layout(
    frame: &mut Frame,
    source: &ContentSource,
    viewer: &Viewer,
    context: FrameContext<'_>,
) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());
    let styles = context.styles;

    render_header(frame, layout.header, source.settings(), styles);

    let page = if viewer.is_empty() {
        None
    } else {
        source.pages().get(viewer.current_index())
    };
    page_panel::render_page_panel(frame, layout.surface, page, styles);

    controls::render_controls(frame, &layout, viewer, styles);
    render_status_bar(frame, layout.status, source, viewer, styles);

    if context.help_visible {
        help::render_help_overlay(frame, source.settings(), styles);
    }

    layout
}

fn render_header(frame: &mut Frame, area: Rect, settings: &BookSettings, styles: &BookStyles) {
    let mut lines = vec![Line::from(Span::styled(
        settings.display_title().to_string(),
        styles.book_title,
    ))];
    if !settings.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            settings.subtitle.clone(),
            styles.subtitle,
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Status text: autoplay badge, key hints, watch marker and the book-wide
/// call-to-action.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    source: &ContentSource,
    viewer: &Viewer,
    styles: &BookStyles,
) {
    let badge = match viewer.autoplay_phase() {
        AutoplayPhase::Running { .. } => Span::styled("▶ Autoplay", styles.playing),
        AutoplayPhase::Suspended { .. } => Span::styled("⏸ Paused", styles.paused),
        AutoplayPhase::Inert => Span::styled("■ Still", styles.muted),
    };

    let mut spans = vec![
        badge,
        Span::styled("  ←/→ page  ? help  q quit", styles.muted),
    ];

    if source.is_watching() {
        spans.push(Span::styled(WATCH_MARKER, styles.muted));
    }

    let settings = source.settings();

    let label = settings
        .primary_cta_label
        .as_deref()
        .filter(|label| !label.is_empty());
    if let Some(label) = label {
        spans.push(Span::styled("  ", styles.muted));
        spans.push(Span::styled(label.to_string(), styles.call_to_action));
        if let Some(link) = settings.primary_cta_link.as_deref().filter(|l| !l.is_empty()) {
            spans.push(Span::styled(format!(" ({})", link), styles.muted));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
