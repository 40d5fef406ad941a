//! Account creation page.
//!
//! Mirrors the sign-in flow: validate locally, call
//! `SessionStore::sign_up`, then move to the dashboard or show an error.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::sign_in::{DEMO_HINT, MISSING_FIELDS, password_input_type};
use crate::app::{DASHBOARD_PATH, SIGN_IN_PATH};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::ui::{Notice, UiState};

pub const SIGN_UP_FAILED: &str = "Could not create account. Passwords need 6+ characters.";

pub(crate) fn validate_sign_up_form(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

#[component]
pub fn SignUpPage(session: SessionStore) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let state = session.state();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let busy = move || state.with(AuthState::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = validate_sign_up_form(&name_value, &email_value, &password_value) {
            error.set(Some(message));
            ui.update(|u| u.notice = Some(Notice::destructive("Missing Information", message)));
            return;
        }
        error.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session.sign_up(&email_value, &password_value, &name_value).await {
                let _ = ui.try_update(|u| {
                    u.notice = Some(Notice::info("Account created!", "Welcome to CloudGuardian"));
                });
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            } else {
                let _ = error.try_set(Some(SIGN_UP_FAILED));
                let _ = ui.try_update(|u| u.notice = Some(Notice::destructive("Sign up failed", SIGN_UP_FAILED)));
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
                <h2>"Create Account"</h2>
                <p class="muted">"Start protecting your cloud infrastructure today"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="input"
                        type="text"
                        placeholder="Jane Doe"
                        disabled=busy
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                            placeholder="At least 6 characters"
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
                        {move || if busy() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=SIGN_IN_PATH>"Sign in"</A>
                </p>
            </div>
            <p class="auth-page__hint">{DEMO_HINT}</p>
        </div>
    }
}
