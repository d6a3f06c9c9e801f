/// Keyed string storage the handoff channels sit on.
///
/// `take` must remove and return the value in one step: no other caller may
/// observe the value between the read and the removal.
pub trait HandoffStorage: Send + Sync {
    /// Store `value` under `key`, replacing any unread value.
    fn put(&self, key: &str, value: String);

    /// Remove and return the value under `key`.
    fn take(&self, key: &str) -> Option<String>;

    /// Whether a value is waiting under `key`, without consuming it.
    fn contains(&self, key: &str) -> bool;
}
