// Event routing between the view, the local backend and the event queue.

use channel_term::app::{App, handle_backend_event, handle_terminal_event, start_backend};
use channel_term::backend::{BackendEvent, ChannelId};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::task::LocalSet;

use crate::helpers::test_app;

const WORKSPACE: &str = r#"{
  "workspace": "acme",
  "user": "dana",
  "channels": [
    { "id": "C2", "name": "random",
      "messages": [ { "time": "11:00", "user": "carol", "text": "coffee?" } ] },
    { "id": "C1", "name": "general", "topic": "news",
      "messages": [
        { "time": "09:00", "user": "alice", "text": "one" },
        { "time": "09:01", "user": "bob", "text": "two &amp; three" }
      ] }
  ]
}"#;

const LIVE_WORKSPACES: &str = r#"{
  "workspaces": [
    { "workspace": "home", "user": "dee",
      "channels": [
        { "id": "H2", "name": "zoe", "kind": "direct_message" },
        { "id": "H1", "name": "family" }
      ],
      "incoming": [
        { "channel": "H1", "after_ms": 500, "user": "sam", "text": "bread?" },
        { "channel": "A1", "after_ms": 1000, "user": "bob", "text": "deploying" }
      ] },
    { "workspace": "acme", "user": "dana",
      "channels": [
        { "id": "A2", "name": "ops", "kind": "group" },
        { "id": "A1", "name": "general" }
      ] }
  ]
}"#;

fn key(app: &mut App, code: KeyCode) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

async fn next_event(app: &mut App) -> BackendEvent {
    app.event_rx.recv().await.expect("event queue closed")
}

/// Load the channel list and deliver the history fetched for the first channel.
async fn start(app: &mut App) {
    app.view.on_resize(80, 24);
    let channels = app.backend.list_channels().await.unwrap();
    handle_backend_event(app, BackendEvent::ChannelsLoaded(channels));
    let history = next_event(app).await;
    handle_backend_event(app, history);
}

#[tokio::test]
async fn first_load_opens_first_sorted_channel() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            start(&mut app).await;

            assert_eq!(app.view.current_channel(), Some(&ChannelId::new("C1")));
            assert_eq!(app.view.chat_title(), "general - news");
            assert_eq!(
                app.view.log.messages(),
                ["[09:00] <alice> one", "[09:01] <bob> two & three"]
            );
        })
        .await;
}

#[tokio::test]
async fn moving_selection_switches_channel() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            start(&mut app).await;

            key(&mut app, KeyCode::Char('j'));
            assert_eq!(app.view.current_channel(), Some(&ChannelId::new("C2")));
            assert!(app.view.log.messages().is_empty());

            let history = next_event(&mut app).await;
            handle_backend_event(&mut app, history);
            assert_eq!(app.view.log.messages(), ["[11:00] <carol> coffee?"]);
        })
        .await;
}

#[tokio::test]
async fn message_for_background_channel_marks_it_unread() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            start(&mut app).await;

            let random = ChannelId::new("C2");
            handle_backend_event(
                &mut app,
                BackendEvent::MessageArrived { channel_id: random.clone(), text: "hi".to_owned() },
            );
            assert!(app.view.channels.entry(&random).unwrap().unread);
            assert_eq!(app.view.log.messages().len(), 2);

            key(&mut app, KeyCode::Char('j'));
            assert!(!app.view.channels.entry(&random).unwrap().unread);
        })
        .await;
}

#[tokio::test]
async fn sent_message_clears_input_and_echoes() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            start(&mut app).await;

            key(&mut app, KeyCode::Char('i'));
            for c in "hello".chars() {
                key(&mut app, KeyCode::Char(c));
            }
            key(&mut app, KeyCode::Enter);
            assert_eq!(app.view.input.text(), "hello");

            let sent = next_event(&mut app).await;
            assert!(matches!(sent, BackendEvent::MessageSent { .. }));
            handle_backend_event(&mut app, sent);

            assert!(app.view.input.is_empty());
            let last = app.view.log.messages().last().unwrap();
            assert!(last.ends_with("<dana> hello"), "last line was {last:?}");
        })
        .await;
}

#[tokio::test]
async fn failed_send_keeps_input() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            app.view.on_resize(80, 24);
            app.view.on_channel_switch(&ChannelId::new("missing"));

            key(&mut app, KeyCode::Char('i'));
            key(&mut app, KeyCode::Char('x'));
            key(&mut app, KeyCode::Enter);

            let failed = next_event(&mut app).await;
            assert!(matches!(failed, BackendEvent::RequestFailed(_)));
            handle_backend_event(&mut app, failed);

            assert_eq!(app.view.input.text(), "x");
            assert!(app.last_error.as_deref().unwrap().contains("missing"));
        })
        .await;
}

#[tokio::test]
async fn quit_key_stops_the_loop() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            key(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit);
        })
        .await;
}

#[tokio::test]
async fn late_send_confirmation_leaves_new_channel_alone() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(WORKSPACE);
            start(&mut app).await;
            let general = ChannelId::new("C1");

            key(&mut app, KeyCode::Char('i'));
            for c in "hello".chars() {
                key(&mut app, KeyCode::Char(c));
            }
            key(&mut app, KeyCode::Enter);
            key(&mut app, KeyCode::Esc);
            key(&mut app, KeyCode::Char('j'));
            key(&mut app, KeyCode::Char('i'));
            for c in "draft".chars() {
                key(&mut app, KeyCode::Char(c));
            }

            // Send confirmation for general and history for random, in either order.
            for _ in 0..2 {
                let event = next_event(&mut app).await;
                handle_backend_event(&mut app, event);
            }

            assert_eq!(app.view.current_channel(), Some(&ChannelId::new("C2")));
            assert_eq!(app.view.input.text(), "draft");
            assert!(!app.view.channels.entry(&general).unwrap().unread);
            assert_eq!(app.view.log.messages(), ["[11:00] <carol> coffee?"]);
        })
        .await;
}

#[tokio::test]
async fn channels_from_several_workspaces_interleave_in_sort_order() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(LIVE_WORKSPACES);
            let channels = app.backend.list_channels().await.unwrap();
            handle_backend_event(&mut app, BackendEvent::ChannelsLoaded(channels));

            let labels: Vec<String> = app
                .view
                .channels
                .entries()
                .iter()
                .map(|e| e.display_label().into_owned())
                .collect();
            assert_eq!(
                labels,
                vec![" [acme] #general", " [acme] +ops", " [home] #family", " [home] @zoe"]
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn incoming_feed_reaches_the_view() {
    LocalSet::new()
        .run_until(async {
            let mut app = test_app(LIVE_WORKSPACES);
            app.view.on_resize(80, 24);
            start_backend(&app);

            let loaded = next_event(&mut app).await;
            assert!(matches!(loaded, BackendEvent::ChannelsLoaded(_)));
            handle_backend_event(&mut app, loaded);
            let history = next_event(&mut app).await;
            assert!(matches!(history, BackendEvent::HistoryLoaded { .. }));
            handle_backend_event(&mut app, history);
            assert_eq!(app.view.current_channel(), Some(&ChannelId::new("A1")));

            let family = ChannelId::new("H1");
            let arrived = next_event(&mut app).await;
            assert!(
                matches!(&arrived, BackendEvent::MessageArrived { channel_id, .. } if *channel_id == family)
            );
            handle_backend_event(&mut app, arrived);
            assert!(app.view.channels.entry(&family).unwrap().unread);
            assert!(app.view.log.messages().is_empty());

            let arrived = next_event(&mut app).await;
            handle_backend_event(&mut app, arrived);
            let last = app.view.log.messages().last().unwrap();
            assert!(last.ends_with("<bob> deploying"), "last line was {last:?}");
        })
        .await;
}
