//! Mouse-to-input translation.
//!
//! A left press on a control is a click. A left press on the page surface
//! starts a contact; drags feed it and the release ends it. A press and
//! release with no drag in between is a surface tap.

use super::layout::{HitTarget, ScreenLayout};
use crate::viewer::InputEvent;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Tracks one contact on the page surface across mouse events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    contact: Option<Contact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Contact {
    dragged: bool,
}

impl PointerTracker {
    /// Translate one mouse event into viewer input, using `layout` for
    /// hit-testing.
    pub fn translate(&mut self, mouse: MouseEvent, layout: &ScreenLayout) -> Vec<InputEvent> {
        let x = i32::from(mouse.column);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match layout.hit_test(mouse.column, mouse.row) {
                    HitTarget::PreviousButton => vec![InputEvent::PreviousClicked],
                    HitTarget::NextButton => vec![InputEvent::NextClicked],
                    HitTarget::Surface => {
                        self.contact = Some(Contact { dragged: false });
                        vec![InputEvent::TouchStart { x }]
                    }
                    HitTarget::Outside => Vec::new(),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.contact.as_mut() {
                Some(contact) => {
                    contact.dragged = true;
                    vec![InputEvent::TouchMove { x }]
                }
                None => Vec::new(),
            },
            MouseEventKind::Up(MouseButton::Left) => match self.contact.take() {
                Some(Contact { dragged: true }) => vec![InputEvent::TouchEnd],
                Some(Contact { dragged: false }) => {
                    vec![InputEvent::TouchEnd, InputEvent::SurfaceTap]
                }
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// True while a surface contact is in progress.
    pub fn is_tracking(&self) -> bool {
        self.contact.is_some()
    }

    /// Forget the current contact.
    pub fn reset(&mut self) {
        self.contact = None;
    }
}
