//! Marketing landing page for signed-out visitors.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{SIGN_IN_PATH, SIGN_UP_PATH};

const FEATURES: [(&str, &str, &str); 4] = [
    ("🛡", "Advanced Security", "Enterprise-grade security monitoring and threat detection"),
    ("👁", "Real-time Monitoring", "24/7 surveillance of your cloud infrastructure"),
    ("⚡", "Instant Alerts", "Immediate notifications for security events and anomalies"),
    ("🔒", "Compliance Ready", "Meet industry standards with automated compliance reporting"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let features = FEATURES
        .into_iter()
        .map(|(icon, title, description)| {
            view! {
                <div class="card feature">
                    <span class="feature__icon">{icon}</span>
                    <h3>{title}</h3>
                    <p class="muted">{description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="landing">
            <nav class="landing__nav">
                <span class="brand">"🛡 CloudGuardian"</span>
                <div class="landing__nav-actions">
                    <A href=SIGN_IN_PATH attr:class="button button--ghost">"Sign In"</A>
                    <A href=SIGN_UP_PATH attr:class="button button--primary">"Get Started"</A>
                </div>
            </nav>

            <section class="landing__hero">
                <span class="pill">"✓ Trusted by 10,000+ businesses worldwide"</span>
                <h1>"Secure Your " <span class="landing__accent">"Cloud. Empower Your Future."</span></h1>
                <p class="landing__lead">
                    "CloudGuardian helps you safeguard critical infrastructure with real-time monitoring, \
                     instant alerts, and enterprise-grade compliance, so you can focus on innovation, \
                     not security risks."
                </p>
                <div class="landing__cta">
                    <A href=SIGN_UP_PATH attr:class="button button--primary button--lg">"Start Free Trial →"</A>
                    <button class="button button--outline button--lg">"Watch Demo"</button>
                </div>
            </section>

            <section class="landing__features">
                <h2>"Enterprise Security Features"</h2>
                <p class="muted">"Comprehensive protection for your cloud infrastructure with cutting-edge security tools"</p>
                <div class="feature-grid">{features}</div>
            </section>

            <section class="landing__closing">
                <h2>"Ready to Secure Your Infrastructure?"</h2>
                <p class="muted">"Join thousands of companies already protecting their cloud environments with CloudGuardian"</p>
                <div class="landing__cta">
                    <A href=SIGN_UP_PATH attr:class="button button--primary button--lg">"Get Started Free →"</A>
                    <A href=SIGN_IN_PATH attr:class="button button--outline button--lg">"Sign In"</A>
                </div>
            </section>

            <footer class="landing__footer">
                <span class="brand">"🛡 CloudGuardian"</span>
                <p class="muted">"© CloudGuardian. All rights reserved."</p>
            </footer>
        </div>
    }
}
