//! Paired durable credential record (`auth-token` + `user-data`).
//!
//! DESIGN
//! ======
//! The token and the serialized user are written and cleared together. The
//! user record is serialized before any write, and a failed second write
//! puts the token key back to what it held before, so readers never observe
//! a token paired with the wrong user.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use super::storage::{KeyValueStore, StorageError};
use crate::net::types::User;

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "auth-token";

/// Storage key holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "user-data";

/// What the durable store currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredCredentials {
    /// Neither key is set.
    Absent,
    /// Both keys are set and the user record parses.
    Present { token: String, user: User },
    /// Both keys are set but the user record does not parse.
    Corrupt,
    /// Only one of the two keys is set.
    Orphaned,
}

/// Classify the credential record in `store`. Empty values count as absent.
pub fn read_credentials(store: &dyn KeyValueStore) -> StoredCredentials {
    let token = store.get(TOKEN_KEY).filter(|v| !v.is_empty());
    let raw_user = store.get(USER_KEY).filter(|v| !v.is_empty());
    match (token, raw_user) {
        (None, None) => StoredCredentials::Absent,
        (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => StoredCredentials::Present { token, user },
            Err(_) => StoredCredentials::Corrupt,
        },
        _ => StoredCredentials::Orphaned,
    }
}

/// Persist `token` and `user` as a pair.
///
/// # Errors
///
/// Returns an error if serialization fails or either write is rejected. On a
/// rejected user write the previous token value is restored.
pub fn write_credentials(store: &dyn KeyValueStore, token: &str, user: &User) -> Result<(), StorageError> {
    let raw_user = serde_json::to_string(user)?;
    let previous_token = store.get(TOKEN_KEY);
    store.set(TOKEN_KEY, token)?;
    if let Err(e) = store.set(USER_KEY, &raw_user) {
        let rollback = match previous_token {
            Some(previous) => store.set(TOKEN_KEY, &previous),
            None => store.remove(TOKEN_KEY),
        };
        if let Err(rollback_err) = rollback {
            log::warn!("credential rollback failed: {rollback_err}");
        }
        return Err(e);
    }
    Ok(())
}

/// Remove both credential keys.
///
/// Both removals are attempted even if the first fails.
///
/// # Errors
///
/// Returns the first removal error encountered.
pub fn clear_credentials(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    let token = store.remove(TOKEN_KEY);
    let user = store.remove(USER_KEY);
    token.and(user)
}
