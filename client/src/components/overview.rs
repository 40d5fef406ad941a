//! Dashboard tab: hero, live status cards, actionable incidents, quick stats.
//!
//! SYSTEM CONTEXT
//! ==============
//! Incident state is local to this tab. Approving or dismissing posts a notice
//! through the shared `UiState` context. In browser builds a background loop
//! re-rolls the live metrics every `METRICS_REFRESH` until the tab unmounts.

use leptos::prelude::*;

use super::incident_alert::IncidentAlert;
use super::status_card::StatusCard;
use crate::state::incidents::{HealthStatus, IncidentsState, Trend, incident_count_status};
use crate::state::ui::{Notice, UiState};

#[component]
pub fn Overview() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let incidents = RwSignal::new(IncidentsState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::incidents::METRICS_REFRESH;

        let refresh_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let refresh_alive_task = refresh_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(METRICS_REFRESH).await;
                if !refresh_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let (health_roll, latency_roll) = (js_sys::Math::random(), js_sys::Math::random());
                if incidents.try_update(|s| s.refresh_live(health_roll, latency_roll)).is_none() {
                    break;
                }
            }
        });
        on_cleanup(move || refresh_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_approve = Callback::new(move |id: String| {
        if incidents.try_update(|s| s.approve(&id)).unwrap_or(false) {
            ui.update(|u| {
                u.notice = Some(Notice::info(
                    "Remediation Approved",
                    "Auto Scaling Group will scale out by +1 instance. ETA: 2-3 minutes.",
                ));
            });
        }
    });
    let on_dismiss = Callback::new(move |id: String| {
        if incidents.try_update(|s| s.dismiss(&id)).unwrap_or(false) {
            ui.update(|u| u.notice = Some(Notice::info("Incident Dismissed", "Alert has been marked as acknowledged.")));
        }
    });

    let total = Signal::derive(move || incidents.with(|s| s.metrics.total_incidents.to_string()));
    let total_status = Signal::derive(move || incidents.with(|s| incident_count_status(s.metrics.total_incidents)));
    let health = Signal::derive(move || incidents.with(|s| s.metrics.system_health.clone()));
    let response_time = Signal::derive(move || incidents.with(|s| s.metrics.response_time.clone()));
    let operational = Signal::stored(HealthStatus::Operational);

    let incident_list = move || {
        let open = incidents.with(|s| s.incidents.clone());
        if open.is_empty() {
            return view! {
                <div class="card empty-state">
                    <span class="empty-state__icon">"🛡"</span>
                    <h3>"All Systems Operational"</h3>
                    <p>"No active incidents detected. Your infrastructure is running smoothly."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="incident-list">
                {open
                    .into_iter()
                    .map(|incident| view! { <IncidentAlert incident=incident on_approve=on_approve on_dismiss=on_dismiss/> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="overview">
            <section class="card hero">
                <h1>"CloudGuardian Bot Active"</h1>
                <p>"AI-powered monitoring and automation protecting your infrastructure"</p>
                <div class="hero__badges">
                    <span class="badge">"Real-time Monitoring"</span>
                    <span class="badge">"Auto-remediation"</span>
                </div>
            </section>

            <section class="status-grid">
                <StatusCard
                    title="Active Incidents"
                    value=total
                    status=total_status
                    description="Open incidents requiring attention"
                    trend=Trend::Down
                />
                <StatusCard
                    title="System Health"
                    value=health
                    status=operational
                    description="Overall infrastructure health score"
                    trend=Trend::Up
                />
                <StatusCard
                    title="Response Time"
                    value=response_time
                    status=operational
                    description="Average API response time"
                    trend=Trend::Stable
                />
                <StatusCard
                    title="Auto-fixes Applied"
                    value=Signal::stored("12".to_owned())
                    status=operational
                    description="Successful remediations today"
                    trend=Trend::Up
                />
            </section>

            <section>
                <div class="section-header">
                    <h2>"Active Incidents"</h2>
                    <button class="button button--outline">"View Analytics"</button>
                </div>
                {incident_list}
            </section>

            <section class="quick-stats">
                <QuickStat label="EC2 Instances" value="24 Running"/>
                <QuickStat label="RDS Instances" value="3 Active"/>
                <QuickStat label="Avg MTTR" value="4.2 min"/>
            </section>
        </div>
    }
}

#[component]
fn QuickStat(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="card quick-stat">
            <p class="quick-stat__label">{label}</p>
            <p class="quick-stat__value">{value}</p>
        </div>
    }
}
