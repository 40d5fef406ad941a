//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components to coordinate redirects
//! and identity-dependent rendering. Only `SessionStore` writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Startup lifecycle of the session.
///
/// Moves from `Initializing` to `Ready` once the stored session has been
/// restored (or found missing) and never moves back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Initializing,
    Ready,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: AuthPhase,
    /// Sign-in/sign-up calls started but not yet settled.
    pub in_flight: u32,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == AuthPhase::Ready
    }

    /// True while the startup restore is pending or any call is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.is_ready() || self.in_flight > 0
    }
}
