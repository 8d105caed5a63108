/// Startup actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Dispatched once the store and terminal are ready
    Start,
}
