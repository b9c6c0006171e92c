use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

use crate::config::Config;
use crate::gateway::{HttpGateway, ServerApi};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;

/// Run the dashboard until the user quits.
///
/// The draw/event loop runs on the calling thread. Gateway calls run on a
/// one-worker tokio runtime and report back through the event channel; it is
/// shut down without waiting, which abandons any request still in flight.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("serverdash-gateway")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let tick_rate = config.tick_rate();
    let api: Arc<dyn ServerApi> = Arc::new(HttpGateway::new(config.base_url()));
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(config.base_url());
    app.set_command_sender(spawn_worker(runtime.handle(), api, events.sender()));
    app.request_refresh();

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Dashboard(intent)) => app.dispatch_dashboard(intent),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("dashboard closed");
    Ok(())
}
