//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::LANDING_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        log::warn!("404: no route for {}", location.pathname.get());
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <A href=LANDING_PATH attr:class="button button--outline">"Return to Home"</A>
        </div>
    }
}
