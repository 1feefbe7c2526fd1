//! Login and registration pages.
//!
//! Both forms run the shared validation and role rules from
//! `shared_types::accounts` against [`HttpDirectory`]. Messages are shown
//! inline under the form; successful submissions redirect after a short pause
//! so the message can be read.

pub mod directory;
mod login;
mod register;

use dioxus::prelude::*;

pub use directory::HttpDirectory;
pub use login::Login;
pub use register::{Register, RegisterConfirmation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Centered terminal-style panel shared by the auth pages.
#[component]
fn AuthPanel(title: String, children: Element) -> Element {
    rsx! {
        style { {AUTH_CSS} }
        div {
            class: "auth-page",
            div {
                class: "auth-panel",
                h1 { class: "auth-title", "{title}" }
                {children}
            }
        }
    }
}

#[component]
fn MessageLine(message: Option<FormMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        p {
            id: "message",
            "data-testid": "auth-message",
            class: match message.kind {
                MessageKind::Success => "auth-message success",
                MessageKind::Error => "auth-message error",
            },
            "{message.text}"
        }
    }
}

// ── CSS ───────────────────────────────────────────────────────────────────────

const AUTH_CSS: &str = r#"
.auth-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #020617;
    color: #e2e8f0;
    font-family: 'Menlo', 'Consolas', 'Monaco', monospace;
    font-size: 14px;
    line-height: 1.6;
}
.auth-panel {
    width: min(420px, 92vw);
    padding: 2rem;
    border: 1px solid #1e293b;
    border-radius: 8px;
    background: rgba(15, 23, 42, 0.9);
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.auth-title {
    margin: 0 0 0.5rem 0;
    font-size: 1.1rem;
    color: #94a3b8;
}
.auth-field {
    display: flex;
    gap: 1ch;
    align-items: baseline;
}
.auth-field label {
    color: #64748b;
    min-width: 10ch;
    user-select: none;
}
.auth-field input {
    flex: 1;
    background: transparent;
    border: none;
    border-bottom: 1px solid #334155;
    outline: none;
    color: #e2e8f0;
    font: inherit;
    caret-color: #e2e8f0;
    padding: 0.1rem 0;
}
.auth-submit {
    margin-top: 0.5rem;
    padding: 0.5rem 1rem;
    background: #3b82f6;
    color: white;
    border: none;
    border-radius: 4px;
    font: inherit;
    cursor: pointer;
}
.auth-submit:disabled {
    opacity: 0.6;
    cursor: progress;
}
.auth-message {
    margin: 0;
    font-size: 12px;
}
.auth-message.error { color: #f87171; }
.auth-message.success { color: #4ade80; }
.auth-link { color: #60a5fa; }
"#;
