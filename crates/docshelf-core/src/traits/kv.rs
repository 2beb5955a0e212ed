//! Key-value storage trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for host key-value storage backends.
///
/// All values are stored as strings (JSON). Each record collection lives
/// under its own key; [`KeyValueStore::set_many`] exists so callers can
/// rewrite several keys as one all-or-nothing unit.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, overwriting any existing value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists.
    async fn contains(&self, key: &str) -> AppResult<bool>;

    /// Apply several writes as one unit: either every entry lands or none
    /// does. A failure must not leave a subset of the entries applied.
    async fn set_many(&self, entries: &[(String, String)]) -> AppResult<()>;

    /// Get a typed value by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value by serializing to JSON.
    async fn set_json<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json).await
    }
}
