//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice::NoticeToast;
use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, not_found::NotFoundPage, sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

pub const LANDING_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one `SessionStore` of the app and restores it from storage once
/// mounted in the browser. The server never runs the restore, so SSR output
/// always shows the loading state and hydration matches.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::browser();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    let restorer = session.clone();
    Effect::new(move || restorer.restore());

    let landing = session.clone();
    let sign_in = session.clone();
    let sign_up = session.clone();
    let dashboard = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/cloudguardian.css"/>
        <Title text="CloudGuardian"/>

        <Router>
            <NoticeToast/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        view! {
                            <PublicRoute session=landing.clone()>
                                <LandingPage/>
                            </PublicRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("signin")
                    view=move || {
                        let page = sign_in.clone();
                        view! {
                            <PublicRoute session=sign_in.clone()>
                                <SignInPage session=page.clone()/>
                            </PublicRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("signup")
                    view=move || {
                        let page = sign_up.clone();
                        view! {
                            <PublicRoute session=sign_up.clone()>
                                <SignUpPage session=page.clone()/>
                            </PublicRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=move || {
                        let page = dashboard.clone();
                        view! {
                            <ProtectedRoute session=dashboard.clone()>
                                <DashboardPage session=page.clone()/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
