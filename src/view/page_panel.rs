//! Page surface widget.
//!
//! Draws the current page inside a bordered block, or the empty state when
//! the book has no pages.

use super::styles::BookStyles;
use crate::model::Page;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown instead of a page when the sequence is empty.
pub const EMPTY_MESSAGE: &str = "No pages available";

/// Build the text lines for one page.
///
/// Title, caption, image reference and (when both label and link are
/// present) the call-to-action, separated by blank lines.
pub fn page_lines<'a>(page: &'a Page, styles: &BookStyles) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(page.title.as_str(), styles.page_title)),
        Line::default(),
    ];

    if !page.caption.is_empty() {
        lines.push(Line::from(Span::styled(page.caption.as_str(), styles.caption)));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("Image: ", styles.muted),
        Span::styled(page.image_url.as_str(), styles.image),
    ]));

    if let Some(cta) = page.call_to_action() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("→ ", styles.call_to_action),
            Span::styled(cta.label, styles.call_to_action),
            Span::styled(format!(" ({})", cta.link), styles.muted),
        ]));
    }

    lines
}

/// Render the page surface. `None` renders the empty state.
pub fn render_page_panel(frame: &mut Frame, area: Rect, page: Option<&Page>, styles: &BookStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border);

    let paragraph = match page {
        Some(page) => Paragraph::new(page_lines(page, styles))
            .block(block)
            .wrap(Wrap { trim: true }),
        None => Paragraph::new(Line::from(Span::styled(EMPTY_MESSAGE, styles.muted)))
            .block(block)
            .alignment(Alignment::Center),
    };

    frame.render_widget(paragraph, area);
}
