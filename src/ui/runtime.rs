use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::entitlements::{EntitlementsGateway, HttpEntitlementsGateway};
use crate::store::{Action, ActionSink, EffectRunner};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Mount the widget: set up the terminal, wire store + gateway + views,
/// and drive the event loop until quit.
pub fn run(config: Config, initial_user: Option<String>) -> Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    // Gateway calls run on their own small runtime; outcomes re-enter the
    // UI loop through the event channel, so reducers stay on this thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let gateway: Arc<dyn EntitlementsGateway> =
        Arc::new(HttpEntitlementsGateway::new(&config.service)?);
    let sender = events.sender();
    let sink: Arc<dyn ActionSink> = Arc::new(move |action: Action| {
        let _ = sender.send(AppEvent::Action(action));
    });
    let runner = EffectRunner::new(gateway, runtime.handle().clone(), sink);

    let mut app = App::new(runner, config.service.base_url.clone());
    if let Some(username) = initial_user {
        app.prefill_search(username);
    }
    info!("entitlement desk started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Action(action)) => app.dispatch(action),
            Ok(AppEvent::Tick) => {}
            // The next draw picks up the new size from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("entitlement desk stopped");
    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
