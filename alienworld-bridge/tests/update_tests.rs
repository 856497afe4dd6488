//! Message handling: frame clock, login clicks, window title.

use alienworld_bridge::app::AlienworldApp;
use alienworld_bridge::messages::Message;
use alienworld_bridge::update::{frame_delta, update};
use alienworld_bridge::view_ui::title_for;
use alienworld_core::boot::BIOS_LINES;
use alienworld_core::{AppPhase, Settings};

use iced::time::Instant;
use std::time::Duration;

fn app() -> AlienworldApp {
    AlienworldApp::new(Settings::default())
}

fn boot_total() -> Duration {
    Settings::default().timings.boot_total(BIOS_LINES.len())
}

/// Feeds frames `step` apart until `span` has passed.
fn run_frames(app: &mut AlienworldApp, start: Instant, span: Duration, step: Duration) {
    let mut at = Duration::ZERO;
    while at <= span {
        let _ = update(app, Message::Frame(start + at));
        at += step;
    }
}

// ════════════════════════════════════════════════════════════════
// Frame clock
// ════════════════════════════════════════════════════════════════

#[test]
fn test_first_frame_has_no_delta() {
    let now = Instant::now();
    assert_eq!(frame_delta(None, now), Duration::ZERO);
}

#[test]
fn test_frame_delta_measures_since_last() {
    let start = Instant::now();
    let later = start + Duration::from_millis(16);
    assert_eq!(frame_delta(Some(start), later), Duration::from_millis(16));
}

#[test]
fn test_frame_delta_never_goes_negative() {
    let start = Instant::now();
    let later = start + Duration::from_millis(16);
    assert_eq!(frame_delta(Some(later), start), Duration::ZERO);
}

#[test]
fn test_first_frame_only_starts_the_clock() {
    let mut app = app();
    let _ = update(&mut app, Message::Frame(Instant::now()));
    assert_eq!(app.container.now(), Duration::ZERO);
    assert!(app.last_frame.is_some());
}

#[test]
fn test_frames_drive_boot_to_logon() {
    let mut app = app();
    let start = Instant::now();

    let frame = Duration::from_millis(16);

    run_frames(&mut app, start, boot_total() - Duration::from_millis(100), frame);
    assert_eq!(app.container.phase(), AppPhase::Booting);

    run_frames(&mut app, start + boot_total(), Duration::from_millis(100), frame);
    assert_eq!(app.container.phase(), AppPhase::Logon);
}

#[test]
fn test_one_long_frame_catches_up() {
    let mut app = app();
    let start = Instant::now();
    let _ = update(&mut app, Message::Frame(start));
    let _ = update(&mut app, Message::Frame(start + Duration::from_secs(60)));
    assert_eq!(app.container.phase(), AppPhase::Logon);
}

// ════════════════════════════════════════════════════════════════
// Login
// ════════════════════════════════════════════════════════════════

#[test]
fn test_login_click_while_booting_is_ignored() {
    let mut app = app();
    let _ = update(&mut app, Message::LoginClicked);
    assert_eq!(app.container.phase(), AppPhase::Booting);
}

#[test]
fn test_login_click_on_logon_opens_desktop() {
    let mut app = app();
    app.container.advance(boot_total());
    assert_eq!(app.container.phase(), AppPhase::Logon);

    let _ = update(&mut app, Message::LoginClicked);
    assert_eq!(app.container.phase(), AppPhase::Desktop);

    let _ = update(&mut app, Message::LoginClicked);
    assert_eq!(app.container.phase(), AppPhase::Desktop);
}

// ════════════════════════════════════════════════════════════════
// Title
// ════════════════════════════════════════════════════════════════

#[test]
fn test_title_names_the_phase() {
    assert_eq!(title_for(AppPhase::Booting), "alienworld XP /// booting");
    assert_eq!(title_for(AppPhase::Logon), "alienworld XP /// logon");
    assert_eq!(title_for(AppPhase::Desktop), "alienworld XP /// desktop");
}
