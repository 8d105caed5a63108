//! Inbox Middleware
//!
//! Side effects of inbox actions:
//! - fetching the notification list (plain and force pull)
//! - handing optimistic edits to the sync queue
//! - opening items in the browser

use crate::actions::{Action, InboxAction, SyncAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Notification;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;
use gh_noti_client::{NotificationBackend, ThreadAction, ThreadUpdate};
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct InboxMiddleware {
    handle: Handle,
    backend: Arc<dyn NotificationBackend>,
}

impl InboxMiddleware {
    pub fn new(handle: Handle, backend: Arc<dyn NotificationBackend>) -> Self {
        Self { handle, backend }
    }

    /// Fetch the list in the background, optionally after a force pull
    fn fetch(&self, force_pull: bool, dispatcher: &Dispatcher) {
        let backend = Arc::clone(&self.backend);
        let dispatcher = dispatcher.clone();

        self.handle.spawn(async move {
            if force_pull {
                if let Err(e) = backend.force_pull().await {
                    log::error!("InboxMiddleware: force pull failed: {}", e);
                    dispatcher.dispatch(Action::Inbox(InboxAction::LoadFailed(e.to_string())));
                    return;
                }
                log::info!("InboxMiddleware: backend acknowledged force pull");
            }

            let action = match backend.fetch_threads().await {
                Ok(threads) => {
                    let items: Vec<Notification> =
                        threads.into_iter().map(Notification::from).collect();
                    InboxAction::Loaded(items)
                }
                Err(e) => {
                    log::error!("InboxMiddleware: failed to fetch notifications: {}", e);
                    InboxAction::LoadFailed(e.to_string())
                }
            };
            dispatcher.dispatch(Action::Inbox(action));
        });
    }

    /// Queue the remote counterpart of a local edit
    ///
    /// Runs before the edit is reduced; the queued action is drained after.
    fn sync(&self, action: ThreadAction, id: i64, state: &AppState, dispatcher: &Dispatcher) {
        let Some(item) = state.inbox.repository.get(id) else {
            log::debug!("InboxMiddleware: no notification {}, nothing to sync", id);
            return;
        };
        if action == ThreadAction::Read && !item.unread {
            return;
        }
        dispatcher.dispatch(Action::Sync(SyncAction::Enqueue(ThreadUpdate::new(
            action, id,
        ))));
    }
}

impl Middleware for InboxMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Inbox(inbox_action) = action else {
            return true;
        };

        match inbox_action {
            InboxAction::Refresh => self.fetch(false, dispatcher),
            InboxAction::ForceRefresh => self.fetch(true, dispatcher),
            InboxAction::TogglePin(id) => self.sync(ThreadAction::TogglePin, *id, state, dispatcher),
            InboxAction::ToggleRead(id) => {
                self.sync(ThreadAction::ToggleRead, *id, state, dispatcher)
            }
            InboxAction::MarkRead(id) => self.sync(ThreadAction::Read, *id, state, dispatcher),
            InboxAction::Open(id) => {
                if let Some(item) = state.inbox.repository.get(*id) {
                    let url = item.url.clone();
                    log::info!("Opening {} in browser", url);
                    self.handle.spawn(open_url(url));
                    dispatcher.dispatch(Action::Inbox(InboxAction::MarkRead(*id)));
                }
                return false;
            }
            _ => {}
        }

        true
    }
}
