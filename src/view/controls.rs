//! Previous/next controls and the page indicator.

use super::constants::{NEXT_LABEL, PREVIOUS_LABEL};
use super::layout::ScreenLayout;
use super::styles::BookStyles;
use crate::viewer::Viewer;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the control row.
///
/// With fewer than two pages the controls are drawn disabled. The indicator
/// is left blank only when the book is empty.
pub fn render_controls(frame: &mut Frame, layout: &ScreenLayout, viewer: &Viewer, styles: &BookStyles) {
    let button_style = if viewer.controls_enabled() {
        styles.button
    } else {
        styles.button_disabled
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(PREVIOUS_LABEL, button_style))),
        layout.previous_button,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(NEXT_LABEL, button_style)))
            .alignment(Alignment::Right),
        layout.next_button,
    );

    let indicator = viewer.indicator().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(indicator, styles.indicator)))
            .alignment(Alignment::Center),
        layout.indicator,
    );
}
