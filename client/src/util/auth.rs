//! Route-guard decisions shared by the protected and public regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical redirect behavior. The decision is a pure
//! function of `AuthState`; the Leptos guard components only render it and
//! perform the navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::{DASHBOARD_PATH, SIGN_IN_PATH};
use crate::state::auth::AuthState;

/// Which side of the auth gate a route lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardRegion {
    /// Only signed-in users may stay.
    Protected,
    /// Only signed-out users may stay.
    Public,
}

/// What a guarded region should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Stored session not restored yet; show the loading indicator.
    Checking,
    /// Render the wrapped content.
    Allow,
    /// Leave for the given path.
    Redirect(&'static str),
}

/// Decide what `region` does for `state`.
///
/// Keyed off the auth phase only: an in-flight sign-in never flips a region
/// back to `Checking`.
#[must_use]
pub fn decide(region: GuardRegion, state: &AuthState) -> GuardDecision {
    if !state.is_ready() {
        return GuardDecision::Checking;
    }
    match (region, state.is_authenticated()) {
        (GuardRegion::Protected, true) | (GuardRegion::Public, false) => GuardDecision::Allow,
        (GuardRegion::Protected, false) => GuardDecision::Redirect(SIGN_IN_PATH),
        (GuardRegion::Public, true) => GuardDecision::Redirect(DASHBOARD_PATH),
    }
}

/// Navigate away (replacing the history entry) whenever `region` decides to
/// redirect.
pub fn install_guard_redirect<F>(state: ReadSignal<AuthState>, region: GuardRegion, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = state.with(|s| decide(region, s)) {
            log::debug!("{region:?} route redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
