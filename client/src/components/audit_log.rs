//! Audit Log tab with a live search filter.

use leptos::prelude::*;

use crate::state::audit::{AuditEntry, filter_entries, seed_entries, showing_summary};

#[component]
pub fn AuditLog() -> impl IntoView {
    let entries = StoredValue::new(seed_entries());
    let query = RwSignal::new(String::new());

    let visible = move || {
        let needle = query.get();
        entries.with_value(|all| filter_entries(all, &needle).into_iter().cloned().collect::<Vec<_>>())
    };
    let summary = move || showing_summary(visible().len());

    view! {
        <div class="card audit-log">
            <div class="section-header">
                <div>
                    <h2>"Audit Log"</h2>
                    <p class="muted">"Complete history of all CloudGuardian actions"</p>
                </div>
                <div class="audit-log__tools">
                    <input
                        class="input"
                        type="search"
                        placeholder="Search audit logs..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="button button--outline">"Date Range"</button>
                </div>
            </div>

            <div class="audit-log__entries">
                {move || visible().into_iter().map(|entry| view! { <AuditRow entry=entry/> }).collect_view()}
            </div>

            <div class="audit-log__footer">
                <p class="muted">{summary}</p>
                <div class="audit-log__pager">
                    <button class="button button--outline" disabled=true>"Previous"</button>
                    <button class="button button--outline">"Next"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AuditRow(entry: AuditEntry) -> impl IntoView {
    let status = entry.status;
    view! {
        <div class="card audit-entry">
            <span class=format!("audit-entry__icon audit-entry__icon--{}", entry.action.tone())>"●"</span>
            <div class="audit-entry__body">
                <div class="audit-entry__headline">
                    <span class="audit-entry__user">{entry.user}</span>
                    <span class="muted">{entry.action.label()}</span>
                    <span class=format!("badge badge--{}", status.tone())>{status.label()}</span>
                </div>
                <p class="muted">
                    <strong>"Resource:"</strong>
                    " "
                    {entry.resource}
                </p>
                <p class="muted">{entry.details}</p>
                <div class="audit-entry__meta">
                    <span>{entry.timestamp}</span>
                    <span>"IP: " {entry.ip}</span>
                    <span>"User Agent: " {entry.user_agent}</span>
                </div>
            </div>
            <button class="button button--ghost">"View Details"</button>
        </div>
    }
}
