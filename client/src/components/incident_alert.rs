//! Card for a single open incident with approve/dismiss actions.
//!
//! DESIGN
//! ======
//! The card is display-only; the owning list decides what approve and
//! dismiss do. Without callbacks the buttons render but do nothing, which is
//! how the read-only Incidents tab uses it.

use leptos::prelude::*;

use crate::state::incidents::{Incident, Severity};

#[component]
pub fn IncidentAlert(
    incident: Incident,
    #[prop(optional)] on_approve: Option<Callback<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<String>>,
) -> impl IntoView {
    let severity = incident.severity.label();
    let icon = match incident.severity {
        Severity::Critical | Severity::Warning => "⚠",
        Severity::Info => "▣",
    };
    let approve_id = incident.id.clone();
    let dismiss_id = incident.id.clone();

    view! {
        <div class=format!("card incident-alert incident-alert--{severity}")>
            <div class="incident-alert__header">
                <span class=format!("incident-alert__icon incident-alert__icon--{severity}")>{icon}</span>
                <div>
                    <h3 class="incident-alert__title">{incident.title}</h3>
                    <div class="incident-alert__meta">
                        <span class="badge">{severity}</span>
                        <span class="incident-alert__time">"🕒 " {incident.timestamp}</span>
                    </div>
                </div>
            </div>
            <p class="incident-alert__description">{incident.description}</p>
            <div class="incident-alert__facts">
                <div>
                    <span class="incident-alert__label">"Resource:"</span>
                    <span class="incident-alert__value">{incident.resource}</span>
                </div>
                <div>
                    <span class="incident-alert__label">"Metric:"</span>
                    <span class="incident-alert__value">{incident.metric}</span>
                </div>
            </div>
            <div class="incident-alert__suggestion">
                <span class="incident-alert__label">"Suggested Action:"</span>
                <span class="incident-alert__value">{incident.suggested_action}</span>
            </div>
            <div class="incident-alert__actions">
                <button
                    class="button button--approve"
                    on:click=move |_| {
                        if let Some(cb) = on_approve {
                            cb.run(approve_id.clone());
                        }
                    }
                >
                    "✓ Approve & Execute"
                </button>
                <button
                    class="button button--dismiss"
                    on:click=move |_| {
                        if let Some(cb) = on_dismiss {
                            cb.run(dismiss_id.clone());
                        }
                    }
                >
                    "✕ Dismiss"
                </button>
            </div>
        </div>
    }
}
