//! Headline metric card.

use leptos::prelude::*;

use crate::state::incidents::{HealthStatus, Trend};

#[component]
pub fn StatusCard(
    title: &'static str,
    value: Signal<String>,
    status: Signal<HealthStatus>,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(optional)] trend: Option<Trend>,
) -> impl IntoView {
    let badge_class = move || format!("status-badge status-badge--{}", status.get().label());

    view! {
        <div class="card status-card">
            <div class="status-card__header">
                <h3 class="status-card__title">{title}</h3>
                <span class=badge_class>{move || status.get().label()}</span>
            </div>
            <div class="status-card__body">
                <span class="status-card__value">{move || value.get()}</span>
                {trend.map(|t| view! { <span class="status-card__trend">{t.glyph()}</span> })}
            </div>
            {description.map(|d| view! { <p class="status-card__description">{d}</p> })}
        </div>
    }
}
