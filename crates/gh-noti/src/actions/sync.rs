use gh_noti_client::ThreadUpdate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Hand a local change to the delivery queue
    Enqueue(ThreadUpdate),
}
