//! Toast stack rendered from the shared `ToastState`.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                toasts.update(|s| s.dismiss(id));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class=toast.kind.class() role="status">
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
