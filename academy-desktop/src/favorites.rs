use dioxus::prelude::*;
use shared_types::favorites::FAVORITE_ERROR_TOAST;
use shared_types::FavoriteControl;

use crate::api::toggle_favorite;
use crate::toast::{push_toast, ToastKind};

/// Star toggle for the current challenge. The click flips the star at once;
/// the server's answer either confirms it or puts it back.
#[component]
pub fn FavoriteButton(favorite_url: String, initially_favorited: bool) -> Element {
    let mut control = use_signal(|| FavoriteControl::new(initially_favorited));

    let on_click = move |_| {
        if control.write().begin().is_none() {
            return;
        }
        let url = favorite_url.clone();
        spawn(async move {
            let outcome = toggle_favorite(&url).await;
            control.write().resolve(&outcome);
            if let Err(e) = outcome {
                dioxus_logger::tracing::warn!("Favorite toggle failed: {}", e);
                push_toast(FAVORITE_ERROR_TOAST, ToastKind::Error);
            }
        });
    };

    let state = control();
    let favorited = state.favorited();

    rsx! {
        button {
            class: if favorited { "favorite-btn favorited" } else { "favorite-btn" },
            style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: transparent; border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 1.1rem; color: #facc15;",
            "data-favorited": if favorited { "1" } else { "0" },
            "aria-pressed": if favorited { "true" } else { "false" },
            "aria-busy": if state.in_flight() { "true" } else { "false" },
            title: if favorited { "Remove from favorites" } else { "Add to favorites" },
            onclick: on_click,
            if favorited { "★" } else { "☆" }
        }
    }
}
