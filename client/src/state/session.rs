//! Session store: the single owner of "who is signed in".
//!
//! ARCHITECTURE
//! ============
//! `App` constructs exactly one `SessionStore` and hands clones of it to the
//! guards and pages that need it. Clones share the same reactive state,
//! durable storage and latency, so every holder sees the same session.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to callers. Bad credentials resolve to
//! `false`, a corrupt stored session is purged during `restore`, and storage
//! failures while signing out are logged and otherwise ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use uuid::Uuid;

use super::auth::{AuthPhase, AuthState};
use crate::net::latency::{AUTH_LATENCY, Latency, TimerLatency};
use crate::net::types::User;
use crate::util::credentials::{StoredCredentials, clear_credentials, read_credentials, write_credentials};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Shortest password the mock backend accepts, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Id assigned to every mock account.
pub const MOCK_USER_ID: &str = "1";

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Why the mock backend refused a sign-in or sign-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("email is required")]
    MissingEmail,
    #[error("password must be at least {min} characters", min = MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("name is required")]
    MissingName,
}

/// Check sign-in input against the mock backend's acceptance policy.
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), CredentialError> {
    if email.is_empty() {
        return Err(CredentialError::MissingEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}

/// Sign-up policy: the sign-in rules plus a non-empty display name.
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn validate_sign_up(email: &str, password: &str, name: &str) -> Result<(), CredentialError> {
    validate_sign_in(email, password)?;
    if name.is_empty() {
        return Err(CredentialError::MissingName);
    }
    Ok(())
}

/// Local part of an email address (everything before the first `@`).
#[must_use]
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Deterministic avatar URL seeded by the email address.
#[must_use]
pub fn avatar_url(email: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={email}")
}

/// Fresh opaque session token.
#[must_use]
pub fn generate_token() -> String {
    format!("session-{}", Uuid::new_v4().simple())
}

fn mock_user(email: &str, name: &str) -> User {
    User {
        id: MOCK_USER_ID.to_owned(),
        email: email.to_owned(),
        name: name.to_owned(),
        avatar: Some(avatar_url(email)),
    }
}

/// Shared handle to the session state and its durable backing.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
    storage: Arc<dyn KeyValueStore>,
    latency: Arc<dyn Latency>,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, latency: Arc<dyn Latency>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), storage, latency }
    }

    /// Store backed by `localStorage` with the standard auth latency.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage), Arc::new(TimerLatency::new(AUTH_LATENCY)))
    }

    /// Read-only reactive view of the session for guards and views.
    #[must_use]
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Untracked copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(AuthState::is_authenticated)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.with_untracked(AuthState::is_loading)
    }

    /// Load the stored session, once. Later calls do nothing.
    ///
    /// A stored record that cannot be used (unparseable user, or only one of
    /// the two keys present) is purged and the session starts signed out.
    pub fn restore(&self) {
        if self.state.with_untracked(AuthState::is_ready) {
            return;
        }

        let user = match read_credentials(self.storage.as_ref()) {
            StoredCredentials::Absent => None,
            StoredCredentials::Present { user, .. } => {
                log::debug!("restored session for {}", user.email);
                Some(user)
            }
            stale @ (StoredCredentials::Corrupt | StoredCredentials::Orphaned) => {
                log::warn!("discarding stored session: {stale:?}");
                if let Err(e) = clear_credentials(self.storage.as_ref()) {
                    log::warn!("failed to purge stored session: {e}");
                }
                None
            }
        };

        self.state.update(|s| {
            s.user = user;
            s.phase = AuthPhase::Ready;
        });
    }

    /// Sign in with the mock backend. Resolves `true` on success.
    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        self.begin_call();
        self.latency.settle().await;

        let user = match validate_sign_in(email, password) {
            Ok(()) => Some(mock_user(email, display_name_from_email(email))),
            Err(e) => {
                log::debug!("sign-in rejected: {e}");
                None
            }
        };
        self.settle_call(user)
    }

    /// Create an account with the mock backend. Resolves `true` on success.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> bool {
        self.begin_call();
        self.latency.settle().await;

        let user = match validate_sign_up(email, password, name) {
            Ok(()) => Some(mock_user(email, name)),
            Err(e) => {
                log::debug!("sign-up rejected: {e}");
                None
            }
        };
        self.settle_call(user)
    }

    /// Forget the session locally and in durable storage. Always succeeds.
    pub fn sign_out(&self) {
        if let Err(e) = clear_credentials(self.storage.as_ref()) {
            log::warn!("failed to clear stored session: {e}");
        }
        if self.state.with_untracked(AuthState::is_authenticated) {
            self.state.update(|s| s.user = None);
            log::info!("signed out");
        }
    }

    fn begin_call(&self) {
        self.state.update(|s| s.in_flight += 1);
    }

    /// Persist `user` (if accepted) and release the in-flight slot in one
    /// state update, so observers never see a half-applied sign-in.
    fn settle_call(&self, user: Option<User>) -> bool {
        let accepted = match &user {
            Some(user) => match write_credentials(self.storage.as_ref(), &generate_token(), user) {
                Ok(()) => {
                    log::info!("signed in as {}", user.email);
                    true
                }
                Err(e) => {
                    log::warn!("failed to persist session: {e}");
                    false
                }
            },
            None => false,
        };

        // The signal may be gone if the app was torn down mid-call.
        let _ = self.state.try_update(|s| {
            s.in_flight = s.in_flight.saturating_sub(1);
            if accepted {
                s.user = user;
            }
        });
        accepted
    }
}
