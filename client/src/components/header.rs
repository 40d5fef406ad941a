//! Top bar of the console: brand, account buttons, sign out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::LANDING_PATH;
use crate::net::types::User;
use crate::state::session::SessionStore;

/// Sign out locally, then leave for the landing page.
///
/// Signing out cannot fail from the caller's point of view, so navigation
/// always follows.
pub(crate) fn sign_out_and_leave(session: &SessionStore, navigate: &impl Fn(&str, NavigateOptions)) {
    session.sign_out();
    navigate(LANDING_PATH, NavigateOptions::default());
}

#[component]
pub fn Header(session: SessionStore) -> impl IntoView {
    let navigate = use_navigate();
    let state = session.state();
    let user_name = move || state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let avatar = move || {
        state.with(|s| match s.user.as_ref() {
            Some(User { avatar: Some(src), .. }) => {
                view! { <img class="console-header__avatar" src=src.clone() alt=""/> }.into_any()
            }
            Some(user) => view! { <span class="console-header__avatar">{user.initial()}</span> }.into_any(),
            None => ().into_any(),
        })
    };

    view! {
        <header class="console-header">
            <div class="console-header__brand">
                <span class="console-header__logo">"🛡"</span>
                <div>
                    <h1 class="console-header__title">"CloudGuardian Bot"</h1>
                    <p class="console-header__subtitle">"AI-Powered DevOps Automation"</p>
                </div>
            </div>
            <div class="console-header__actions">
                <button class="button button--ghost">"⚙ Settings"</button>
                <button class="button button--ghost" title=user_name>
                    {avatar}
                    "Profile"
                </button>
                <button
                    class="button button--outline"
                    on:click=move |_| sign_out_and_leave(&session, &navigate)
                >
                    "⎋ Sign Out"
                </button>
            </div>
        </header>
    }
}
