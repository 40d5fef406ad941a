//! Shared record types exchanged between the session core and the views.
//!
//! DESIGN
//! ======
//! `User` is also the serialized form written to durable storage, so field
//! names here are the storage schema. Renaming a field orphans every session
//! persisted by an older build.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier. The mock backend always issues `"1"`.
    pub id: String,
    /// Email address used to sign in.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// First character of the display name, uppercased, for avatar fallbacks.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}
