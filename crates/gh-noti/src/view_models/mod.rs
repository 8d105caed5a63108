//! View models
//!
//! Pre-computed, display-ready data for the views. Views only lay out what
//! these produce.

pub mod activity_view_model;
pub mod inbox_view_model;
pub mod status_bar_view_model;

pub use activity_view_model::ActivityViewModel;
pub use inbox_view_model::{InboxLine, InboxViewModel, RowViewModel};
pub use status_bar_view_model::StatusBarViewModel;
