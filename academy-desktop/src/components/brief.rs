use dioxus::prelude::*;

use crate::config::page_config;
use crate::desktop::ChallengeSession;
use crate::favorites::FavoriteButton;

#[component]
pub fn BriefView() -> Element {
    let session = use_context::<ChallengeSession>();
    let config = page_config();
    let status = if (session.started)() {
        "In progress"
    } else {
        "Waiting to start"
    };

    rsx! {
        div {
            class: "challenge-brief",
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; color: var(--text-primary, #f8fafc); font-size: 0.875rem;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem;",
                h3 { style: "margin: 0; font-size: 1rem;", "{config.challenge_title}" }
                if let Some(url) = config.favorite_url.clone() {
                    FavoriteButton { favorite_url: url, initially_favorited: config.favorited }
                }
            }

            span {
                class: "challenge-status",
                style: "font-size: 0.75rem; color: var(--text-muted, #64748b);",
                "{status}"
            }

            p {
                style: "margin: 0; color: var(--text-secondary, #94a3b8); line-height: 1.5;",
                "Find the flag hidden in the target service. Keep your notes in the Notes window; "
                "they are saved for you as you go."
            }

            if config.readonly {
                p {
                    class: "readonly-banner",
                    style: "margin: 0; padding: 0.5rem 0.75rem; border-radius: var(--radius-sm, 4px); background: var(--warning-bg, #f59e0b); color: #111827;",
                    "This challenge is read-only. Changes will not be saved."
                }
            }
        }
    }
}
