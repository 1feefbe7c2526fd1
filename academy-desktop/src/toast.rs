use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::favorites::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

/// Shows a transient message; it removes itself after the toast duration.
pub fn push_toast(message: impl Into<String>, kind: ToastKind) {
    let id = uuid::Uuid::new_v4().to_string();
    TOASTS.write().push(Toast {
        id: id.clone(),
        message: message.into(),
        kind,
    });

    spawn(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        TOASTS.write().retain(|toast| toast.id != id);
    });
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div {
            class: "toast-host",
            "aria-live": "polite",
            style: "position: fixed; right: 1rem; bottom: 4rem; z-index: 10000; display: flex; flex-direction: column; gap: 0.5rem; pointer-events: none;",

            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Info => "toast",
                        ToastKind::Error => "toast toast-error",
                    },
                    role: "status",
                    style: match toast.kind {
                        ToastKind::Info => "padding: 0.6rem 0.9rem; background: var(--window-bg, #1e293b); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-md, 0 4px 6px rgba(0,0,0,0.4)); font-size: 0.875rem;",
                        ToastKind::Error => "padding: 0.6rem 0.9rem; background: var(--danger-bg, #ef4444); color: white; border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-md, 0 4px 6px rgba(0,0,0,0.4)); font-size: 0.875rem;",
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
