//! Toast for the most recent `UiState::notice`.

use leptos::prelude::*;

use crate::state::ui::{NoticeTone, UiState};

#[cfg(feature = "hydrate")]
const NOTICE_TTL: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Each new notice clears itself after a while unless a newer one replaced it.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(shown) = ui.with(|u| u.notice.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(NOTICE_TTL).await;
            let _ = ui.try_update(|u| {
                if u.notice.as_ref() == Some(&shown) {
                    u.notice = None;
                }
            });
        });
    });

    move || {
        ui.with(|u| u.notice.clone()).map(|notice| {
            let tone = match notice.tone {
                NoticeTone::Info => "info",
                NoticeTone::Destructive => "destructive",
            };
            view! {
                <div class=format!("toast toast--{tone}") role="status">
                    <div class="toast__text">
                        <p class="toast__title">{notice.title}</p>
                        <p class="toast__description">{notice.description}</p>
                    </div>
                    <button class="toast__close" on:click=move |_| ui.update(|u| u.notice = None)>"✕"</button>
                </div>
            }
        })
    }
}
