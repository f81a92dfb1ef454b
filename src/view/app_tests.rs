//! Tests for the terminal host.

use super::*;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;

// ===== Test Helpers =====

/// 10 columns; 3 rows of panel plus the status line.
fn create_test_app(content: &str) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    TuiApp::with_terminal(
        terminal,
        content.to_string(),
        &TypewriterSettings::terminal(10.0),
        60,
    )
    .unwrap()
}

fn screen_row(app: &TuiApp<TestBackend>, y: u16) -> String {
    let buffer = app.terminal().backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap()
}

fn tick_until_prompt(app: &mut TuiApp<TestBackend>) {
    for _ in 0..1_000 {
        app.tick(0.1);
        if app.prompt() != Prompt::Typing {
            return;
        }
    }
    panic!("page never finished revealing");
}

const FOUR_LINES: &str = "one\ntwo\nthree\nfour";

// ===== startup =====

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn app_starts_revealing_immediately() {
    let app = create_test_app(FOUR_LINES);
    assert!(app.typewriter().engine().is_running());
    assert_eq!(app.prompt(), Prompt::Typing);
    assert_eq!(app.typewriter().panel_size(), (10.0, 3.0));
}

#[test]
fn invalid_settings_fail_to_start() {
    let terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    let settings = TypewriterSettings {
        speed: 0.0,
        ..TypewriterSettings::terminal(1.0)
    };

    let result = TuiApp::with_terminal(terminal, "x".to_string(), &settings, 60);

    assert!(matches!(
        result,
        Err(TuiError::Config(ConfigError::InvalidSpeed(_)))
    ));
}

// ===== paging flow =====

#[test]
fn finished_page_with_more_content_prompts_next_page() {
    let mut app = create_test_app(FOUR_LINES);

    tick_until_prompt(&mut app);

    assert_eq!(app.prompt(), Prompt::NextPage);
}

#[test]
fn advance_skips_typing_then_turns_the_page() {
    let mut app = create_test_app(FOUR_LINES);

    assert!(!press(&mut app, KeyCode::Char(' ')));
    assert!(app.typewriter().engine().is_complete());
    app.tick(0.016);
    assert_eq!(app.prompt(), Prompt::NextPage);

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.prompt(), Prompt::Typing);
    assert_eq!(app.typewriter().page_state().scroll_offset_y, 3.0);
    assert!(!app.typewriter().engine().is_complete());
}

#[test]
fn last_page_shows_end_marker() {
    let mut app = create_test_app(FOUR_LINES);
    tick_until_prompt(&mut app);
    press(&mut app, KeyCode::Char(' '));

    tick_until_prompt(&mut app);

    assert_eq!(app.prompt(), Prompt::End);
    app.draw().unwrap();
    assert_eq!(screen_row(&app, 0), "four");
    assert!(screen_row(&app, 3).contains("end"));
}

#[test]
fn advance_on_last_page_does_nothing_more() {
    let mut app = create_test_app("short");
    tick_until_prompt(&mut app);
    assert_eq!(app.prompt(), Prompt::End);

    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.prompt(), Prompt::End);
    assert_eq!(app.typewriter().page_state().scroll_offset_y, 0.0);
}

// ===== other actions =====

#[test]
fn pause_key_toggles_reveal() {
    let mut app = create_test_app(FOUR_LINES);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.typewriter().engine().phase(), RevealPhase::Paused);
    app.tick(0.5);
    assert_eq!(app.typewriter().engine().state().x, 0.0);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.typewriter().engine().phase(), RevealPhase::Running);
}

#[test]
fn restart_retypes_current_page() {
    let mut app = create_test_app(FOUR_LINES);
    tick_until_prompt(&mut app);

    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.prompt(), Prompt::Typing);
    assert_eq!(app.typewriter().engine().state().x, 0.0);
    assert!(app.typewriter().engine().clip_region().is_empty());
}

#[test]
fn quit_keys_quit() {
    let mut app = create_test_app(FOUR_LINES);
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn unbound_key_is_ignored() {
    let mut app = create_test_app(FOUR_LINES);
    assert!(!press(&mut app, KeyCode::Char('z')));
    assert!(app.typewriter().engine().is_running());
}

#[test]
fn resize_relayouts_and_restarts() {
    let mut app = create_test_app(FOUR_LINES);
    tick_until_prompt(&mut app);

    app.handle_resize(20, 6).unwrap();

    assert_eq!(app.typewriter().panel_size(), (20.0, 5.0));
    assert!(!app.typewriter().has_next_page());
    assert_eq!(app.prompt(), Prompt::Typing);
}

// ===== rendering =====

#[test]
fn draw_shows_partial_first_line_and_key_hints() {
    let mut app = create_test_app(FOUR_LINES);
    app.tick(0.25);

    app.draw().unwrap();

    assert_eq!(screen_row(&app, 0), "on");
    assert_eq!(screen_row(&app, 1), "");
    assert!(screen_row(&app, 3).starts_with("space"));
}
