//! Application State Module

mod app;
mod inbox;
mod repository;

pub use app::AppState;
pub use inbox::InboxState;
pub use repository::NotificationRepository;
