//! Sign-in page backed by the mock session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lives inside `PublicRoute`. Submission runs `SessionStore::sign_in` on the
//! local task queue; on success the page moves to the dashboard, otherwise it
//! shows an inline error. Completion after unmount is ignored.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{DASHBOARD_PATH, SIGN_UP_PATH};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::ui::{Notice, UiState};

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const SIGN_IN_FAILED: &str = "Invalid email or password. Please try again.";
pub const DEMO_HINT: &str = "Demo: Use any email and password with 6+ characters";

/// Client-side check before the form is submitted.
pub(crate) fn validate_sign_in_form(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

/// `type` attribute for a password input with a show/hide toggle.
pub(crate) fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn SignInPage(session: SessionStore) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let state = session.state();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let busy = move || state.with(AuthState::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = validate_sign_in_form(&email_value, &password_value) {
            error.set(Some(message));
            ui.update(|u| u.notice = Some(Notice::destructive("Missing Information", message)));
            return;
        }
        error.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session.sign_in(&email_value, &password_value).await {
                let _ = ui.try_update(|u| {
                    u.notice = Some(Notice::info("Welcome back!", "You've been signed in successfully"));
                });
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            } else {
                let _ = error.try_set(Some(SIGN_IN_FAILED));
                let _ = ui.try_update(|u| u.notice = Some(Notice::destructive("Sign in failed", SIGN_IN_FAILED)));
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__brand">
                <span class="auth-page__logo">"🛡"</span>
                <h1>"CloudGuardian"</h1>
                <p class="muted">"Secure your digital infrastructure"</p>
            </div>
            <div class="card auth-card">
                <h2>"Welcome Back"</h2>
                <p class="muted">"Sign in to your CloudGuardian account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="input"
                        type="email"
                        placeholder="your@email.com"
                        disabled=busy
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <div class="auth-form__password">
                        <input
                            id="password"
                            class="input"
                            type=move || password_input_type(show_password.get())
                            placeholder="Enter your password"
                            disabled=busy
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="button button--ghost auth-form__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button button--primary auth-form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href=SIGN_UP_PATH>"Sign up"</A>
                </p>
            </div>
            <p class="auth-page__hint">{DEMO_HINT}</p>
        </div>
    }
}
