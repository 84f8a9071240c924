//! Success/error alert that closes itself after a delay.

use leptos::prelude::*;

/// Default visibility before an alert closes on its own.
pub const ALERT_AUTO_CLOSE_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-modal alert-modal--success",
            Self::Error => "alert-modal alert-modal--error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "!",
        }
    }
}

/// Alert content shown by [`AlertModal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Error, title: title.into(), message: message.into() }
    }
}

/// Modal alert. `auto_close_ms = None` keeps it open until dismissed.
#[component]
pub fn AlertModal(
    alert: Alert,
    on_close: Callback<()>,
    #[prop(optional)] auto_close_ms: Option<u32>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        if let Some(delay) = auto_close_ms {
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay).await;
                if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    on_close.run(());
                }
            });
            on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auto_close_ms;

    let Alert { kind, title, message } = alert;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class=kind.class() on:click=move |ev| ev.stop_propagation()>
                <span class="alert-modal__icon">{kind.icon()}</span>
                <h2>{title}</h2>
                <p class="alert-modal__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
