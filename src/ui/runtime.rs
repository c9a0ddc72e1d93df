use crate::config::Config;
use crate::reviews::ReviewsClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;

/// Fetch reviews once on `handle` and post the outcome to `tx`.
///
/// Handled failures arrive as an empty `ReviewsLoaded`; only a fetch task
/// that panics or is cancelled produces `FetchFailed`.
pub fn spawn_fetch(handle: &Handle, client: Arc<ReviewsClient>, tx: Sender<AppEvent>) {
    let runtime = handle.clone();
    handle.spawn(async move {
        let task = runtime.spawn(async move { client.fetch_reviews().await });
        let event = match task.await {
            Ok(reviews) => AppEvent::ReviewsLoaded(reviews),
            Err(err) => {
                tracing::error!(error = %err, "Reviews fetch task failed");
                AppEvent::FetchFailed(err.to_string())
            }
        };
        if tx.send(event).is_err() {
            tracing::trace!("Reviews result dropped (UI gone)");
        }
    });
}

pub fn run(config: &Config, client: ReviewsClient, handle: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    tracing::info!(url = %client.url(), "Loading reviews");
    spawn_fetch(handle, Arc::new(client), events.sender());

    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, &app, now))?;
        app.on_frame_rendered();
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::ReviewsLoaded(reviews)) => app.on_reviews_loaded(reviews, Instant::now()),
            Ok(AppEvent::FetchFailed(message)) => app.on_fetch_failed(message),
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    Ok(())
}
