use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod utils;
mod view_models;
mod views;

#[cfg(test)]
mod test_support;

use actions::{Action, BootstrapAction, GlobalAction};
use gh_noti_client::{HttpBackend, HttpBackendConfig, NotificationBackend, SyncPolicy, SyncQueue};
use gh_noti_config::{AppConfig, PreferenceStore};
use middleware::{
    inbox_middleware::InboxMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, polling_middleware::PollingMiddleware,
    preferences_middleware::PreferencesMiddleware, sync_middleware::SyncMiddleware,
};
use state::AppState;
use store::Store;

/// How long queued updates may take to drain on exit
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-noti, logging to {:?}", log_file);

    let app_config = AppConfig::load();
    app_config.validate()?;
    if !app_config.has_username() {
        log::warn!("No username configured, the \"by me\" tabs will stay empty");
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let backend: Arc<dyn NotificationBackend> = Arc::new(HttpBackend::new(
        HttpBackendConfig::new(app_config.backend_url()?)
            .with_timeout_secs(app_config.request_timeout_secs),
    )?);
    let policy = SyncPolicy {
        max_attempts: app_config.sync_max_attempts,
        base_delay: app_config.sync_retry_base(),
    };
    let (sync_queue, sync_worker) =
        SyncQueue::spawn(runtime.handle(), Arc::clone(&backend), policy);

    let poll_interval = app_config.poll_interval();
    let mut store = Store::new(AppState::new(app_config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PreferencesMiddleware::new(PreferenceStore::open())));
    store.add_middleware(Box::new(PollingMiddleware::new(
        runtime.handle().clone(),
        poll_interval,
    )));
    store.add_middleware(Box::new(InboxMiddleware::new(
        runtime.handle().clone(),
        Arc::clone(&backend),
    )));
    store.add_middleware(Box::new(SyncMiddleware::new(sync_queue)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    store.dispatch(Action::Bootstrap(BootstrapAction::Start));

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the store stops the poller and closes the sync queue
    drop(store);
    match runtime.block_on(tokio::time::timeout(SHUTDOWN_GRACE, sync_worker)) {
        Ok(Ok(stats)) => log::info!(
            "Sync finished: {} delivered, {} dropped",
            stats.delivered,
            stats.dropped
        ),
        Ok(Err(e)) => log::error!("Sync worker failed: {}", e),
        Err(_) => log::warn!("Pending updates not delivered within {:?}", SHUTDOWN_GRACE),
    }

    log::info!("Exiting gh-noti");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Results from background tasks
        store.process_pending();
    }

    Ok(())
}
