use crate::error::SessionError;

/// SessionStore is the key-value store behind a client session.
///
/// Keys follow the `{user_type}_{field}` convention: `admin_token`,
/// `admin_user`, `staff_token`, `staff_user`. Values are opaque strings;
/// user objects are stored as JSON text.
pub trait SessionStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), SessionError>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>, SessionError>;
}
