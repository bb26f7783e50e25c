// Viewport scenarios driven through the public view API.

use channel_term::app::ChatView;
use channel_term::app::input::InputState;
use channel_term::app::view::ViewEvent;
use channel_term::backend::ChannelId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use crate::helpers::{channels, render, row_text, view};

// 120x10 terminal: channel and chat panes both have 5 inner rows starting at y = 1.
const WIDTH: u16 = 120;
const HEIGHT: u16 = 10;
const PANE_TOP: u16 = 1;

fn press(view: &mut ChatView, code: KeyCode) -> Option<ViewEvent> {
    view.on_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn edge_follow_engages_at_pane_bottom() {
    let mut view = view(WIDTH, HEIGHT);
    view.set_channels(channels(10));
    assert_eq!(view.channels.viewport().height, 5);

    for _ in 0..4 {
        press(&mut view, KeyCode::Down);
    }
    assert_eq!(view.channels.selected_index(), 4);
    assert_eq!(view.channels.offset(), 0);
    assert_eq!(view.channels.cursor_row(), PANE_TOP + 4);

    let event = press(&mut view, KeyCode::Down);
    assert_eq!(event, Some(ViewEvent::SelectionChanged(ChannelId::new("C05"))));
    assert_eq!(view.channels.selected_index(), 5);
    assert_eq!(view.channels.offset(), 1);
    assert_eq!(view.channels.cursor_row(), PANE_TOP + 4);
}

#[test]
fn log_renders_bottom_up_with_blank_rows_above() {
    let mut view = view(WIDTH, HEIGHT);
    view.log.append_all(["message1", "message2", "message3"]);
    let buf = render(&view, WIDTH, HEIGHT);

    let inner = view.log.viewport();
    assert_eq!(inner.height, 5);
    let row = |y: u16| row_text(&buf, y, inner.x, inner.right()).trim_end().to_owned();
    assert_eq!(row(inner.y + 4), "message3");
    assert_eq!(row(inner.y + 3), "message2");
    assert_eq!(row(inner.y + 2), "message1");
    assert_eq!(row(inner.y + 1), "");
    assert_eq!(row(inner.y), "");
}

#[test]
fn input_accepts_nine_chars_in_ten_wide_pane() {
    let mut input = InputState::new();
    input.set_width(10);
    for c in "123456789".chars() {
        assert!(input.insert_char(c));
    }
    assert!(!input.insert_char('0'));
    assert_eq!(input.text(), "123456789");
}

#[test]
fn jump_to_bottom_of_long_list() {
    let mut view = view(WIDTH, HEIGHT);
    view.set_channels(channels(20));
    press(&mut view, KeyCode::Char('G'));
    assert_eq!(view.channels.offset(), 15);
    assert_eq!(view.channels.cursor_row(), PANE_TOP + 4);
    assert_eq!(view.channels.selected_index(), 19);
}

#[test]
fn boundaries_leave_state_unchanged() {
    let mut view = view(WIDTH, HEIGHT);
    view.set_channels(channels(7));
    assert_eq!(press(&mut view, KeyCode::Up), None);
    assert_eq!(
        (view.channels.selected_index(), view.channels.offset(), view.channels.cursor_row()),
        (0, 0, PANE_TOP)
    );

    press(&mut view, KeyCode::Char('G'));
    let before =
        (view.channels.selected_index(), view.channels.offset(), view.channels.cursor_row());
    assert_eq!(press(&mut view, KeyCode::Down), None);
    assert_eq!(
        (view.channels.selected_index(), view.channels.offset(), view.channels.cursor_row()),
        before
    );
}

#[test]
fn offsets_stay_bounded_across_resizes_and_scrolls() {
    let mut view = view(WIDTH, 30);
    view.set_channels(channels(40));
    view.log.append_all((0..60).map(|i| format!("line {i} with some padding text to wrap")));

    let sizes = [(120, 30), (40, 12), (200, 8), (30, 50), (80, 6)];
    for (width, height) in sizes {
        view.on_resize(width, height);
        for code in [KeyCode::Down, KeyCode::Down, KeyCode::PageUp, KeyCode::Char('G'), KeyCode::PageUp] {
            press(&mut view, code);

            let list_height = usize::from(view.channels.viewport().height);
            let entries = view.channels.entries().len();
            assert!(view.channels.offset() <= entries.saturating_sub(list_height));
            assert!(view.channels.selected_index() < entries);
            assert!(view.channels.cursor_row() >= view.channels.viewport().y);
            assert!(view.channels.cursor_row() < view.channels.viewport().bottom());

            let log_height = usize::from(view.log.viewport().height);
            let wrapped = view.log.wrapped_lines().len();
            assert!(view.log.offset() <= wrapped.saturating_sub(log_height));
        }
    }
}

#[test]
fn unread_round_trip_restores_every_label() {
    let mut view = view(WIDTH, HEIGHT);
    view.set_channels(channels(6));
    let before: Vec<String> =
        view.channels.entries().iter().map(|e| e.display_label().into_owned()).collect();

    for i in 0..6 {
        let id = ChannelId::new(format!("C{i:02}"));
        view.channels.set_unread(&id);
        view.channels.set_read(&id);
    }
    let after: Vec<String> =
        view.channels.entries().iter().map(|e| e.display_label().into_owned()).collect();
    assert_eq!(after, before);
}
