//! Authenticated console: header, sidebar, and the active tab's content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only inside `ProtectedRoute`. The active tab is read from the
//! shared `UiState` so `Navigation` can switch it; a `?tab=` query picks the
//! initial tab.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::audit_log::AuditLog;
use crate::components::header::Header;
use crate::components::incident_alert::IncidentAlert;
use crate::components::navigation::Navigation;
use crate::components::overview::Overview;
use crate::components::script_helper::ScriptHelper;
use crate::state::incidents::seed_incidents;
use crate::state::session::SessionStore;
use crate::state::ui::{DashboardTab, UiState};

#[component]
pub fn DashboardPage(session: SessionStore) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // `/dashboard?tab=<id>` opens a specific tab.
    if let Some(id) = use_query_map().with_untracked(|q| q.get("tab")) {
        ui.update(|u| u.active_tab = DashboardTab::from_id(&id));
    }
    let active_tab = Memo::new(move |_| ui.with(|u| u.active_tab));

    let content = move || match active_tab.get() {
        DashboardTab::Dashboard => view! { <Overview/> }.into_any(),
        DashboardTab::Incidents => view! { <IncidentsPanel/> }.into_any(),
        DashboardTab::Scripts => view! { <ScriptHelper/> }.into_any(),
        DashboardTab::Audit => view! { <AuditLog/> }.into_any(),
    };

    view! {
        <div class="console">
            <Header session=session.clone()/>
            <div class="console__body">
                <Navigation session=session/>
                <main class="console__main">{content}</main>
            </div>
        </div>
    }
}

/// Read-only list of every seeded incident.
#[component]
fn IncidentsPanel() -> impl IntoView {
    view! {
        <div class="incidents-panel">
            <div class="section-header">
                <div>
                    <h2>"Incident Management"</h2>
                    <p class="muted">"Monitor and respond to infrastructure alerts"</p>
                </div>
            </div>
            <div class="incident-list">
                {seed_incidents()
                    .into_iter()
                    .map(|incident| view! { <IncidentAlert incident=incident/> })
                    .collect_view()}
            </div>
        </div>
    }
}
