mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_gateway::MockGateway;
use common::{entitlement, runner_with};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use entdesk::store::{Action, ModalState};
use entdesk::ui::app::{App, Focus};
use entdesk::ui::input::handle_key;

const WAIT: Duration = Duration::from_secs(5);

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn app_with(gateway: Arc<MockGateway>) -> (App, std::sync::mpsc::Receiver<Action>) {
    let (runner, rx) = runner_with(gateway);
    (App::new(runner, "http://localhost:18000".to_string()), rx)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn typing_then_submitting_fetches_exactly_once() {
    let gateway = Arc::new(MockGateway::new());
    gateway.push_ok(vec![entitlement(1)]);
    let (mut app, rx) = app_with(Arc::clone(&gateway));

    for ch in "bob".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    // The field shows the typed value before anything resolves.
    assert_eq!(app.search().value(), "bob");
    assert!(gateway.calls().is_empty(), "typing alone must not fetch");

    handle_key(&mut app, key(KeyCode::Enter));
    let action = rx.recv_timeout(WAIT).expect("outcome action");
    assert_eq!(gateway.calls(), vec!["bob"]);

    // Submitting does not clear the field.
    assert_eq!(app.search().value(), "bob");

    app.dispatch(action);
    assert_eq!(app.state().entitlements.for_user.as_deref(), Some("bob"));
    assert_eq!(app.state().entitlements.items.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn editing_keys_shape_the_query() {
    let gateway = Arc::new(MockGateway::new());
    let (mut app, _rx) = app_with(gateway);

    for ch in "boob".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    handle_key(&mut app, key(KeyCode::Left));
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.search().value(), "bob");

    handle_key(&mut app, key(KeyCode::Right));
    handle_key(&mut app, key(KeyCode::Char('!')));
    assert_eq!(app.search().value(), "bob!");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn open_modal_captures_keys_until_dismissed() {
    let gateway = Arc::new(MockGateway::new());
    let (mut app, _rx) = app_with(Arc::clone(&gateway));

    app.dispatch(Action::FetchFailed {
        username: "alice".to_string(),
        generation: 1,
        error: "entitlement service returned HTTP 500".to_string(),
    });
    assert!(app.state().modal.is_visible());

    // Keystrokes are swallowed while the modal is up.
    handle_key(&mut app, key(KeyCode::Char('x')));
    assert_eq!(app.search().value(), "");
    assert!(gateway.calls().is_empty());

    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.state().modal, ModalState::Hidden);

    // After dismissal the search field receives input again.
    handle_key(&mut app, key(KeyCode::Char('x')));
    assert_eq!(app.search().value(), "x");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn focus_and_selection_drive_the_detail_modal() {
    let gateway = Arc::new(MockGateway::new());
    let (mut app, _rx) = app_with(gateway);

    app.dispatch(Action::FetchSucceeded {
        username: "alice".to_string(),
        generation: 1,
        entitlements: vec![entitlement(1), entitlement(2), entitlement(3)],
    });

    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Results);

    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.selection(), 1);

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.state().modal, ModalState::Detail { index: 1 });

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.state().modal, ModalState::Hidden);

    // Esc in the results pane returns focus to the search field.
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.focus(), Focus::Search);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn selection_is_clamped_when_the_collection_shrinks() {
    let gateway = Arc::new(MockGateway::new());
    let (mut app, _rx) = app_with(gateway);

    app.dispatch(Action::FetchSucceeded {
        username: "alice".to_string(),
        generation: 1,
        entitlements: vec![entitlement(1), entitlement(2), entitlement(3)],
    });
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, key(KeyCode::Down));
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.selection(), 2);

    app.dispatch(Action::FetchSucceeded {
        username: "alice".to_string(),
        generation: 2,
        entitlements: vec![entitlement(9)],
    });
    assert_eq!(app.selection(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ctrl_q_requests_quit() {
    let gateway = Arc::new(MockGateway::new());
    let (mut app, _rx) = app_with(gateway);

    assert!(!app.should_quit());
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn prefill_submits_once_on_startup() {
    let gateway = Arc::new(MockGateway::new());
    gateway.push_ok(Vec::new());
    let (mut app, rx) = app_with(Arc::clone(&gateway));

    app.prefill_search("carol".to_string());
    let _ = rx.recv_timeout(WAIT).expect("outcome action");
    assert_eq!(gateway.calls(), vec!["carol"]);
    assert_eq!(app.search().value(), "carol");
}
