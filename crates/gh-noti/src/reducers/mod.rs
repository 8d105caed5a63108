pub mod app_reducer;
pub mod inbox_reducer;
pub mod preferences_reducer;
