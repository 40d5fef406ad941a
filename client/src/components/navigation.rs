//! Console sidebar: tab switcher plus secondary actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active tab lives in the shared `UiState` context so the page body and
//! the sidebar agree on it without prop threading.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::header::sign_out_and_leave;
use crate::state::session::SessionStore;
use crate::state::ui::{DashboardTab, UiState};

#[component]
pub fn Navigation(session: SessionStore) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let items = DashboardTab::ALL
        .into_iter()
        .map(|tab| {
            let class = move || {
                if ui.with(|u| u.active_tab == tab) { "nav-item nav-item--active" } else { "nav-item" }
            };
            view! {
                <button
                    class=class
                    data-tab=tab.id()
                    on:click=move |_| ui.update(|u| u.active_tab = tab)
                >
                    <span class="nav-item__label">{tab.label()}</span>
                    {tab.badge().map(|badge| view! { <span class="badge nav-item__badge">{badge}</span> })}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="console-nav">
            <div class="console-nav__tabs">{items}</div>
            <div class="console-nav__footer">
                <button class="nav-item">
                    <span class="nav-item__label">"System Status"</span>
                    <span class="nav-item__dot"></span>
                </button>
                <button class="nav-item">
                    <span class="nav-item__label">"Notifications"</span>
                </button>
                <button class="nav-item">
                    <span class="nav-item__label">"Settings"</span>
                </button>
                <button class="nav-item" on:click=move |_| sign_out_and_leave(&session, &navigate)>
                    <span class="nav-item__label">"Sign Out"</span>
                </button>
            </div>
        </nav>
    }
}
