//! String-keyed persistent storage holding JSON values, the local-storage
//! contract every repository is built on.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Storage keys owned by the recipe book.
pub mod keys {
    pub const USERS_DIRECTORY: &str = "usersDirectory";
    pub const CURRENT_SESSION: &str = "currentSession";
    pub const USER_RECIPES: &str = "userRecipes";
    pub const FAVORITE_RECIPE_IDS: &str = "favoriteRecipeIds";
    pub const SELECTED_RECIPE_ID: &str = "selectedRecipeId";
}

/// Failure surfaced by a [`KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage quota exceeded writing {key:?} (limit {limit} bytes)")]
    QuotaExceeded { key: String, limit: usize },
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent string key/value storage.
///
/// Backends implement the raw string primitives; JSON and typed access are
/// provided on top. A write either lands completely or not at all.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match self.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.set_item(key, &serde_json::to_string(value)?)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        self.set_item(key, &serde_json::to_string(value)?)
    }
}

/// Reject a write whose resulting footprint (`len(key) + len(value)` summed
/// over all entries) would exceed `quota`.
pub(crate) fn check_quota<'a>(
    entries: impl Iterator<Item = (&'a String, &'a String)>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> Result<(), StorageError> {
    let Some(limit) = quota else {
        return Ok(());
    };
    let others: usize = entries
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    if others + key.len() + value.len() > limit {
        return Err(StorageError::QuotaExceeded {
            key: key.to_owned(),
            limit,
        });
    }
    Ok(())
}
