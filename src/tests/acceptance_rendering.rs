//! Acceptance tests: what the reader sees.
//!
//! Full frames are checked with insta snapshots (`src/tests/snapshots/`).

use crate::model::{BookSettings, Page};
use crate::test_harness::{numbered_pages, AcceptanceTestHarness};
use crate::view::ViewOptions;
use crossterm::event::KeyCode;

const HARBOR_DIR: &str = "tests/fixtures/harbor";

#[test]
fn renders_title_page_and_indicator() {
    // GIVEN: The harbor book from disk
    let mut harness = AcceptanceTestHarness::from_content_dir(HARBOR_DIR.as_ref(), false)
        .expect("Fixture should load");

    // WHEN: The first frame is drawn
    let screen = harness.render_to_string();

    // THEN: Header, first page, centered indicator and status bar are in place
    insta::assert_snapshot!("harbor_first_page", screen);
}

#[test]
fn renders_page_call_to_action() {
    // GIVEN: The harbor book advanced by autoplay to the market page
    let mut harness = AcceptanceTestHarness::from_content_dir(HARBOR_DIR.as_ref(), false)
        .expect("Fixture should load");
    harness.advance_ms(2000);

    // WHEN: The frame is drawn
    let screen = harness.render_to_string();

    // THEN: The page's call-to-action follows the image reference
    insta::assert_snapshot!("harbor_page_with_call_to_action", screen);
}

#[test]
fn render_follows_navigation() {
    let mut harness = AcceptanceTestHarness::from_content_dir(HARBOR_DIR.as_ref(), false)
        .expect("Fixture should load");

    harness.send_key(KeyCode::Right);
    let screen = harness.render_to_string();

    assert!(screen.contains("The Fish Market"));
    assert!(screen.contains("→ Order this print (/shop/fish-market)"));
    assert!(screen.contains("Page 2 of 4"));
}

#[test]
fn settings_timing_drives_autoplay() {
    // GIVEN: The harbor book sets a 2000 ms interval
    let mut harness = AcceptanceTestHarness::from_content_dir(HARBOR_DIR.as_ref(), false)
        .expect("Fixture should load");

    // THEN: Pages advance every two seconds
    harness.advance_ms(2000);
    assert_eq!(harness.current_index(), 1);
    harness.advance_ms(2000);
    assert_eq!(harness.current_index(), 2);
}

#[test]
fn status_bar_shows_autoplay_state_and_primary_cta() {
    let mut harness = AcceptanceTestHarness::from_content_dir(HARBOR_DIR.as_ref(), false)
        .expect("Fixture should load");

    let running = harness.render_to_string();
    assert!(running.contains("Autoplay"));
    assert!(running.contains("Pre-order the book (/order)"));

    harness.tap_surface();
    let paused = harness.render_to_string();
    assert!(paused.contains("Paused"));
}

#[test]
fn missing_settings_file_uses_default_title() {
    let mut harness =
        AcceptanceTestHarness::from_content_dir("tests/fixtures/single_page".as_ref(), false)
            .expect("Fixture should load");

    let screen = harness.render_to_string();

    assert!(screen.contains("Photo Book"));
    assert!(screen.contains("Page 1 of 1"));
    assert!(screen.contains("Still"));
}

#[test]
fn single_page_frame_has_disabled_controls() {
    let mut harness =
        AcceptanceTestHarness::from_content_dir("tests/fixtures/single_page".as_ref(), false)
            .expect("Fixture should load");

    let screen = harness.render_to_string();

    insta::assert_snapshot!("single_page_disabled_controls", screen);
}

#[test]
fn empty_book_from_disk_renders_empty_state() {
    let mut harness =
        AcceptanceTestHarness::from_content_dir("tests/fixtures/empty_book".as_ref(), false)
            .expect("An empty page list is valid content");

    let screen = harness.render_to_string();

    assert!(!screen.contains("Page 1 of"));
    insta::assert_snapshot!("empty_book", screen);
}

#[test]
fn help_overlay_renders_book_details() {
    let mut harness = AcceptanceTestHarness::from_content_dir(HARBOR_DIR.as_ref(), false)
        .expect("Fixture should load");

    harness.send_key(KeyCode::Char('?'));
    let screen = harness.render_to_string();

    insta::assert_snapshot!("harbor_help_overlay", screen);
}

#[test]
fn no_color_option_renders_same_text() {
    let pages: Vec<Page> = numbered_pages(2);
    let mut colored = AcceptanceTestHarness::with_content(
        pages.clone(),
        BookSettings::default(),
        ViewOptions::default(),
    );
    let mut plain = AcceptanceTestHarness::with_content(
        pages,
        BookSettings::default(),
        ViewOptions {
            no_color: true,
            ..ViewOptions::default()
        },
    );

    assert_eq!(colored.render_to_string(), plain.render_to_string());
}
