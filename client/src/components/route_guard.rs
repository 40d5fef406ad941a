//! Protected and public route regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page except the not-found fallback is wrapped in one of these.
//! They never touch storage; they render `decide` for the session they are
//! handed and redirect when it says so.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, GuardRegion, decide, install_guard_redirect};

/// Neutral placeholder shown until the stored session has been restored.
#[component]
pub fn AuthLoading() -> impl IntoView {
    view! {
        <div class="auth-loading" role="status">
            <p class="auth-loading__text">"Loading authentication..."</p>
        </div>
    }
}

/// Renders `children` only for signed-in users; others go to `/signin`.
#[component]
pub fn ProtectedRoute(session: SessionStore, children: ChildrenFn) -> impl IntoView {
    guarded_region(session, GuardRegion::Protected, children)
}

/// Renders `children` only for signed-out users; others go to `/dashboard`.
#[component]
pub fn PublicRoute(session: SessionStore, children: ChildrenFn) -> impl IntoView {
    guarded_region(session, GuardRegion::Public, children)
}

fn guarded_region(session: SessionStore, region: GuardRegion, children: ChildrenFn) -> impl IntoView {
    let state = session.state();
    let navigate = use_navigate();
    let location = use_location();
    let mounted_at = location.pathname.get_untracked();

    // Skip the redirect once the user has already navigated elsewhere (sign out
    // leaves for `/` in the same tick as it clears the session).
    install_guard_redirect(state, region, move |path: &str, options: NavigateOptions| {
        if location.pathname.get_untracked() == mounted_at {
            navigate(path, options);
        }
    });

    // Memoized so unrelated state changes (a call going in flight) do not
    // rebuild the children and wipe form input.
    let decision = Memo::new(move |_| state.with(|s| decide(region, s)));

    move || match decision.get() {
        GuardDecision::Checking => view! { <AuthLoading/> }.into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
