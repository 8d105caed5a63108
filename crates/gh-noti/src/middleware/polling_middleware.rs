//! Polling Middleware
//!
//! Refreshes the inbox on a fixed period, starting right after bootstrap.

use crate::actions::{Action, BootstrapAction, GlobalAction, InboxAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Dispatch a refresh now and then once every `period`
pub fn spawn_poller(handle: &Handle, period: Duration, dispatcher: Dispatcher) -> JoinHandle<()> {
    handle.spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            log::debug!("Poller: refresh");
            dispatcher.dispatch(Action::Inbox(InboxAction::Refresh));
        }
    })
}

pub struct PollingMiddleware {
    handle: Handle,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl PollingMiddleware {
    pub fn new(handle: Handle, period: Duration) -> Self {
        Self {
            handle,
            period,
            task: None,
        }
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            log::debug!("PollingMiddleware: stopping poller");
            task.abort();
        }
    }
}

impl Drop for PollingMiddleware {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Middleware for PollingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) if self.task.is_none() => {
                log::info!("PollingMiddleware: polling every {:?}", self.period);
                self.task = Some(spawn_poller(&self.handle, self.period, dispatcher.clone()));
            }
            Action::Global(GlobalAction::Quit) => self.stop(),
            _ => {}
        }
        true
    }
}
