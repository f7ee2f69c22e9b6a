//! Tests for screen layout and hit-testing.

use super::*;

fn full_screen() -> ScreenLayout {
    ScreenLayout::compute(Rect::new(0, 0, 80, 24))
}

#[test]
fn regions_stack_top_to_bottom() {
    let layout = full_screen();

    assert_eq!(layout.header, Rect::new(0, 0, 80, HEADER_HEIGHT));
    assert_eq!(layout.surface, Rect::new(0, 2, 80, 20));
    assert_eq!(layout.controls, Rect::new(0, 22, 80, 1));
    assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
}

#[test]
fn controls_sit_at_row_edges_with_indicator_between() {
    let layout = full_screen();
    let previous_width = label_width(PREVIOUS_LABEL);
    let next_width = label_width(NEXT_LABEL);

    assert_eq!(layout.previous_button, Rect::new(0, 22, previous_width, 1));
    assert_eq!(
        layout.next_button,
        Rect::new(80 - next_width, 22, next_width, 1)
    );
    assert_eq!(layout.indicator.x, previous_width);
    assert_eq!(
        layout.indicator.width,
        80 - previous_width - next_width,
        "Indicator fills the gap between the controls"
    );
}

#[test]
fn narrow_row_splits_controls_in_half() {
    let layout = ScreenLayout::compute(Rect::new(0, 0, 11, 10));

    assert_eq!(layout.previous_button.width, 5);
    assert_eq!(layout.next_button.width, 6);
    assert_eq!(layout.indicator.width, 0);
    assert_eq!(layout.next_button.x, 5);
}

#[test]
fn hit_test_finds_buttons() {
    let layout = full_screen();

    assert_eq!(layout.hit_test(0, 22), HitTarget::PreviousButton);
    assert_eq!(layout.hit_test(79, 22), HitTarget::NextButton);
}

#[test]
fn hit_test_finds_surface() {
    let layout = full_screen();

    assert_eq!(layout.hit_test(40, 2), HitTarget::Surface);
    assert_eq!(layout.hit_test(0, 21), HitTarget::Surface);
}

#[test]
fn hit_test_outside_regions() {
    let layout = full_screen();

    assert_eq!(layout.hit_test(10, 0), HitTarget::Outside, "header");
    assert_eq!(layout.hit_test(40, 22), HitTarget::Outside, "indicator");
    assert_eq!(layout.hit_test(10, 23), HitTarget::Outside, "status bar");
    assert_eq!(layout.hit_test(200, 200), HitTarget::Outside, "off screen");
}

#[test]
fn tiny_terminal_does_not_panic() {
    let layout = ScreenLayout::compute(Rect::new(0, 0, 1, 1));
    let _ = layout.hit_test(0, 0);

    let layout = ScreenLayout::compute(Rect::new(0, 0, 0, 0));
    assert_eq!(layout.hit_test(0, 0), HitTarget::Outside);
}
