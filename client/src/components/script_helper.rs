//! Script Helper tab: turn a plain-English request into a Lambda template.
//!
//! DESIGN
//! ======
//! Generation waits on `SCRIPT_LATENCY` and then looks the command up in the
//! static template table. The result and the busy flag are written with
//! `try_update` because the tab may be gone by the time the delay ends.

use leptos::prelude::*;

use crate::net::latency::{SCRIPT_LATENCY, TimerLatency};
use crate::state::scripts::{ScriptHelperState, TEMPLATES, generate_script};
use crate::state::ui::{Notice, UiState};

#[component]
pub fn ScriptHelper() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let helper = RwSignal::new(ScriptHelperState::default());
    let latency = TimerLatency::new(SCRIPT_LATENCY);

    let run = move |command: String| {
        if helper.with_untracked(|h| h.generating) || command.is_empty() {
            return;
        }
        helper.update(|h| h.generating = true);
        leptos::task::spawn_local(async move {
            let script = generate_script(&latency, &command).await;
            let updated = helper.try_update(|h| {
                h.generating = false;
                h.script = Some(script.to_owned());
            });
            if updated.is_some() {
                let description = format!("Lambda function for \"{command}\" is ready!");
                let _ = ui.try_update(|u| u.notice = Some(Notice::info("Script Generated", &description)));
            }
        });
    };

    let on_copy = move |_| {
        let Some(script) = helper.with_untracked(|h| h.script.clone()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&script);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = script;
        ui.update(|u| {
            u.notice = Some(Notice::info("Copied to clipboard", "Script has been copied to your clipboard"));
        });
    };

    let templates = TEMPLATES
        .iter()
        .map(|template| {
            let command = template.command;
            view! {
                <button class="button button--outline template" on:click=move |_| run(command.to_owned())>
                    <span>{command}</span>
                    <span class="badge">{template.category}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="script-helper">
            <div class="card">
                <div class="section-header">
                    <div>
                        <h2>"Script Helper"</h2>
                        <p class="muted">"Generate AWS Lambda automation scripts"</p>
                    </div>
                </div>
                <div class="script-helper__form">
                    <input
                        class="input"
                        type="text"
                        placeholder="Describe your automation need (e.g., remove S3 duplicates)"
                        prop:value=move || helper.with(|h| h.command.clone())
                        on:input=move |ev| helper.update(|h| h.command = event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        disabled=move || !helper.with(ScriptHelperState::can_generate)
                        on:click=move |_| run(helper.with_untracked(|h| h.command.clone()))
                    >
                        {move || if helper.with(|h| h.generating) { "Generating..." } else { "Generate" }}
                    </button>
                </div>
                <p class="muted">"Or try one of these templates:"</p>
                <div class="script-helper__templates">{templates}</div>
            </div>

            <Show when=move || helper.with(|h| h.script.is_some())>
                <div class="card">
                    <div class="section-header">
                        <h3>"Generated Lambda Function"</h3>
                        <button class="button button--outline" on:click=on_copy>"Copy Script"</button>
                    </div>
                    <textarea class="script-helper__output" readonly=true>
                        {move || helper.with(|h| h.script.clone().unwrap_or_default())}
                    </textarea>
                    <div class="script-helper__actions">
                        <button class="button button--success">"Deploy to Lambda"</button>
                        <button class="button button--outline">"Save to Library"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
