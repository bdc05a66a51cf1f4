//! Whole-collection slot persistence.
//!
//! # Responsibility
//! - Serialize a full collection value into its keyed slot and back.
//! - Establish the fallback value as the initial slot state on first load.
//!
//! # Invariants
//! - Writes replace the entire slot; there is no partial or incremental
//!   persistence.
//! - Malformed stored bytes propagate as `RepoError::Corrupt`; the stored
//!   value is never silently discarded.

use crate::repo::kv_repo::{KvBacking, RepoError, RepoResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads the slot under `key`, falling back to `fallback` when absent.
///
/// On first access the fallback is also written back, so later readers of
/// the raw slot observe a well-formed serialized collection.
///
/// # Errors
/// - `RepoError::Corrupt` when present bytes do not decode into `T`.
pub fn load_or_init<T, B>(backing: &B, key: &str, fallback: T) -> RepoResult<T>
where
    T: Serialize + DeserializeOwned,
    B: KvBacking,
{
    match backing.read(key)? {
        Some(bytes) => serde_json::from_slice(&bytes).map_err(|source| RepoError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => {
            save(backing, key, &fallback)?;
            Ok(fallback)
        }
    }
}

/// Serializes `value` and overwrites the slot under `key`.
pub fn save<T, B>(backing: &B, key: &str, value: &T) -> RepoResult<()>
where
    T: Serialize + ?Sized,
    B: KvBacking,
{
    let bytes = serde_json::to_vec(value).map_err(|source| RepoError::Encode {
        key: key.to_string(),
        source,
    })?;
    backing.write(key, &bytes)
}
