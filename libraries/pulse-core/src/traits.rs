//! Core traits for Pulse Player

/// Key-value preference store
///
/// Implemented by the embedding shell (browser local storage, a settings
/// file, ...). Reads and writes are infallible from the core's point of view:
/// a store that cannot persist simply forgets.
pub trait PreferenceStore: Send {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
}
