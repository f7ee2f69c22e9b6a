//! Help overlay: key shortcuts and the book description.
//!
//! Toggled by '?', dismissed by '?' or Esc.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::BookStyles;
use crate::model::BookSettings;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, settings: &BookSettings, styles: &BookStyles) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(settings, styles))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a rect centered in `area` covering the given percentages.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Shortcuts first, then the book's details text and bullet points.
fn build_help_content(settings: &BookSettings, styles: &BookStyles) -> Vec<Line<'static>> {
    let shortcut = |keys: &'static str, description: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), styles.button),
            Span::styled(description, styles.caption),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled("Keys", styles.page_title)),
        shortcut("←", "Previous page"),
        shortcut("→", "Next page"),
        shortcut("?", "Toggle this help"),
        shortcut("q / Esc", "Quit"),
        Line::default(),
        Line::from(Span::styled("Mouse", styles.page_title)),
        shortcut("click", "Previous / Next controls"),
        shortcut("drag", "Swipe the page left or right"),
        Line::default(),
        Line::from(Span::styled(
            "Autoplay pauses on input and resumes after a quiet spell.",
            styles.muted,
        )),
    ];

    let details = settings
        .details_text
        .as_deref()
        .filter(|text| !text.is_empty());
    if details.is_some() || !settings.bullet_points.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            settings.display_title().to_string(),
            styles.page_title,
        )));
    }
    if let Some(details) = details {
        lines.push(Line::from(Span::styled(details.to_string(), styles.caption)));
    }
    for point in &settings.bullet_points {
        lines.push(Line::from(Span::styled(format!("  • {}", point), styles.caption)));
    }

    lines
}

// ===== Tests =====
