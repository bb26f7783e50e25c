// Grid output of a full frame painted through `render_view`.

use channel_term::app::ChatView;
use channel_term::app::keys::InputMode;
use channel_term::backend::ChannelId;
use channel_term::config::Config;
use channel_term::ui::theme;
use pretty_assertions::assert_eq;

use crate::helpers::{channel, channels, quiet_config, render, row_text};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 12;

/// Sidebar at a third of the width so channel labels fit.
fn wide_sidebar_view() -> ChatView {
    let config = Config { sidebar_width: 4, ..quiet_config() };
    let mut view = ChatView::new(&config);
    view.on_resize(WIDTH, HEIGHT);
    view
}

#[test]
fn painting_twice_yields_identical_grids() {
    let mut view = wide_sidebar_view();
    view.set_channels(channels(12));
    view.log.append_all(["alpha", "beta"]);
    assert_eq!(render(&view, WIDTH, HEIGHT), render(&view, WIDTH, HEIGHT));
}

#[test]
fn selected_channel_row_is_inverted() {
    let mut view = wide_sidebar_view();
    view.set_channels(channels(4));
    view.channels.move_selection_down();
    let buf = render(&view, WIDTH, HEIGHT);

    let pane = view.channels.viewport();
    let label = row_text(&buf, pane.y + 1, pane.x, pane.right());
    assert_eq!(label.trim_end(), " [ws] #chan-01");
    for x in pane.x..pane.right() {
        assert_eq!(buf[(x, pane.y + 1)].style(), theme::highlight());
        assert_eq!(buf[(x, pane.y)].style(), theme::item());
    }
}

#[test]
fn unread_marker_replaces_leading_space() {
    let mut view = wide_sidebar_view();
    view.set_channels(vec![channel("C1", "general"), channel("C2", "random")]);
    view.on_channel_switch(&ChannelId::new("C1"));
    view.on_message_arrived(&ChannelId::new("C2"), "ping".to_owned());
    let buf = render(&view, WIDTH, HEIGHT);

    let pane = view.channels.viewport();
    assert_eq!(row_text(&buf, pane.y + 1, pane.x, pane.right()).trim_end(), "*[ws] #random");

    view.channels.set_read(&ChannelId::new("C2"));
    let buf = render(&view, WIDTH, HEIGHT);
    assert_eq!(row_text(&buf, pane.y + 1, pane.x, pane.right()).trim_end(), " [ws] #random");
}

#[test]
fn rows_below_last_channel_are_blank() {
    let mut view = wide_sidebar_view();
    view.set_channels(channels(2));
    let buf = render(&view, WIDTH, HEIGHT);

    let pane = view.channels.viewport();
    for y in pane.y + 2..pane.bottom() {
        assert_eq!(row_text(&buf, y, pane.x, pane.right()).trim(), "");
    }
}

#[test]
fn long_messages_wrap_inside_chat_pane() {
    let mut view = wide_sidebar_view();
    let pane = view.log.viewport();
    let width = usize::from(pane.width);
    let message = "x".repeat(width + 3);
    view.log.append(message);
    let buf = render(&view, WIDTH, HEIGHT);

    let bottom = pane.bottom() - 1;
    assert_eq!(row_text(&buf, bottom - 1, pane.x, pane.right()), "x".repeat(width));
    assert_eq!(row_text(&buf, bottom, pane.x, pane.right()).trim_end(), "xxx");
}

#[test]
fn scrolling_back_reveals_older_lines() {
    let mut view = wide_sidebar_view();
    let pane = view.log.viewport();
    let height = usize::from(pane.height);
    view.log.append_all((0..height + 4).map(|i| format!("line {i}")));

    let bottom = pane.bottom() - 1;
    let buf = render(&view, WIDTH, HEIGHT);
    assert_eq!(
        row_text(&buf, bottom, pane.x, pane.right()).trim_end(),
        format!("line {}", height + 3)
    );

    view.log.scroll_up();
    let buf = render(&view, WIDTH, HEIGHT);
    assert_eq!(view.log.offset(), 4);
    assert_eq!(row_text(&buf, bottom, pane.x, pane.right()).trim_end(), format!("line {}", height - 1));
    assert_eq!(row_text(&buf, pane.y, pane.x, pane.right()).trim_end(), "line 0");
}

#[test]
fn input_cursor_cell_is_highlighted() {
    let mut view = wide_sidebar_view();
    view.mode = InputMode::Insert;
    for c in "hey".chars() {
        view.input.insert_char(c);
    }
    view.input.move_left();
    let buf = render(&view, WIDTH, HEIGHT);

    let input = channel_term::ui::layout::inner(view.layout().input);
    assert_eq!(row_text(&buf, input.y, input.x, input.x + 3), "hey");
    assert_eq!(buf[(input.x + 2, input.y)].style(), theme::highlight());
    assert_eq!(buf[(input.x + 1, input.y)].style(), theme::item());
    assert_eq!(buf[(input.x + 3, input.y)].style(), theme::item());
}

#[test]
fn mode_label_is_centered() {
    let mut view = wide_sidebar_view();
    let pane = channel_term::ui::layout::inner(view.layout().mode);
    let buf = render(&view, WIDTH, HEIGHT);
    let row = row_text(&buf, pane.y, pane.x, pane.right());
    assert_eq!(row.trim(), "COMMAND");
    let start = row.find('C').unwrap();
    assert_eq!(start, usize::from(pane.width / 2) - "COMMAND".len() / 2);

    view.mode = InputMode::Insert;
    let buf = render(&view, WIDTH, HEIGHT);
    assert_eq!(row_text(&buf, pane.y, pane.x, pane.right()).trim(), "INSERT");
}

#[test]
fn chat_border_carries_channel_title() {
    let mut view = wide_sidebar_view();
    let mut general = channel("C1", "general");
    general.topic = "news".to_owned();
    view.set_channels(vec![general]);
    view.on_channel_switch(&ChannelId::new("C1"));
    let buf = render(&view, WIDTH, HEIGHT);

    let chat = view.layout().chat;
    let top = row_text(&buf, chat.y, chat.x, chat.right());
    assert!(top.contains(" general - news "), "border row was {top:?}");
}

#[test]
fn frame_for_a_smaller_grid_does_not_panic() {
    let mut view = wide_sidebar_view();
    view.set_channels(channels(20));
    view.log.append_all((0..30).map(|i| format!("message {i}")));
    let buf = render(&view, 20, 5);
    assert_eq!(buf.area.width, 20);
}
