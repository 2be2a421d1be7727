//! Regression tests for key handling in the TUI update loop.

use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};

use super::*;
use crate::tui::messages::AppMsg;

fn key_msg(key: KeyCode) -> bubbletea_rs::event::KeyMsg {
    bubbletea_rs::event::KeyMsg {
        key,
        modifiers: KeyModifiers::empty(),
    }
}

#[test]
fn help_overlay_closes_on_any_key() {
    let mut app = ReviewApp::empty();
    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.show_help);

    let cmd = app.update(Box::new(key_msg(KeyCode::Char('x'))));

    assert!(cmd.is_none());
    assert!(!app.show_help);
    assert_eq!(app.form().pr_url(), "");
}

#[test]
fn help_overlay_consumes_escape_without_quitting() {
    let mut app = ReviewApp::empty();
    app.handle_message(&AppMsg::ToggleHelp);

    let cmd = app.update(Box::new(key_msg(KeyCode::Esc)));

    assert!(cmd.is_none());
    assert!(!app.show_help);
}

#[test]
fn letters_type_into_the_form_on_start_view() {
    let mut app = ReviewApp::empty();

    for ch in ['q', '?'] {
        let cmd = app.update(Box::new(key_msg(KeyCode::Char(ch))));
        assert!(cmd.is_none());
    }

    assert_eq!(app.form().pr_url(), "q?");
}

#[test]
fn escape_quits_from_start_view() {
    let mut app = ReviewApp::empty();

    let cmd = app.update(Box::new(key_msg(KeyCode::Esc)));

    assert!(cmd.is_some());
}

#[test]
fn f1_opens_help_from_start_view() {
    let mut app = ReviewApp::empty();

    app.update(Box::new(key_msg(KeyCode::F(1))));

    assert!(app.show_help);
    assert!(app.view().contains("Keyboard Shortcuts"));
}

#[test]
fn window_size_message_resizes_frame() {
    let mut app = ReviewApp::empty();

    app.update(Box::new(bubbletea_rs::event::WindowSizeMsg {
        width: 40,
        height: 10,
    }));

    let frame = app.view();
    assert_eq!(frame.lines().count(), 10);
    assert!(frame.lines().all(|line| line.chars().count() == 39));
}
