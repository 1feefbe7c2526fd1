use dioxus::prelude::*;
use shared_types::Viewport;

use crate::config::page_config;
use crate::desktop::actions;
use crate::desktop::apps::{core_apps, WELCOME_TEXT};
use crate::desktop::components::taskbar::Taskbar;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::state::{default_desktop_state, has_editor, running_windows};
use crate::desktop::ChallengeSession;
use crate::interop::get_viewport_size;
use crate::intro::IntroOverlay;
use crate::progress::ProgressBeacon;
use crate::toast::ToastHost;

#[component]
pub fn DesktopShell() -> Element {
    let config = page_config();

    let desktop_state = use_signal(|| default_desktop_state(&config.challenge_title));
    let viewport = use_signal(get_viewport_size);
    let editor_text = use_signal(|| WELCOME_TEXT.to_string());
    let started = use_signal(|| false);
    use_context_provider(|| ChallengeSession {
        editor_text,
        started,
    });

    let saved_text = use_memo(move || {
        has_editor(&desktop_state.read()).then(|| editor_text.read().clone())
    });

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_hook(effects::lock_page_scroll);

    let open_app_cb = use_callback(move |window_id: String| {
        actions::open_window_action(desktop_state, &window_id);
    });

    let close_window_cb = use_callback(move |window_id: String| {
        actions::close_window_action(desktop_state, &window_id);
    });

    let focus_window_cb = use_callback(move |window_id: String| {
        actions::focus_window_action(desktop_state, &window_id);
    });

    let minimize_window_cb = use_callback(move |window_id: String| {
        actions::minimize_window_action(desktop_state, &window_id);
    });

    let maximize_window_cb = use_callback(move |window_id: String| {
        let viewport = Viewport::from(*viewport.peek());
        actions::maximize_window_action(desktop_state, &window_id, viewport);
    });

    let activate_window_cb = use_callback(move |window_id: String| {
        actions::activate_window_action(desktop_state, &window_id);
    });

    let state_snapshot = desktop_state.read().clone();
    let windows = running_windows(&state_snapshot);
    let active_window = state_snapshot.active_window.clone();
    let save_policy = config.save_policy();

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            style: "position: relative; width: 100vw; height: 100dvh; overflow: hidden;",

            WorkspaceCanvas {
                apps: core_apps(),
                on_open_app: open_app_cb,
                state: desktop_state,
                viewport,
                on_close: close_window_cb,
                on_focus: focus_window_cb,
                on_minimize: minimize_window_cb,
                on_maximize: maximize_window_cb,
            }

            Taskbar {
                windows,
                active_window,
                on_activate_window: activate_window_cb,
                dashboard_url: config.dashboard_url.clone(),
                logout_url: config.logout_url.clone(),
                viewport,
            }
        }

        if let Some(policy) = save_policy {
            ProgressBeacon { policy, editor_text: saved_text }
        }

        IntroOverlay {}
        ToastHost {}
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --border-color: #334155;

    /* Semantic colors */
    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-primary);
    --taskbar-bg: rgba(15, 23, 42, 0.95);
    --editor-bg: #0b1220;
    --dock-bg: rgba(30, 41, 59, 0.8);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-bg: #ef4444;
    --warning-bg: #f59e0b;

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: radial-gradient(circle at 30% 20%, #1e3a8a 0%, var(--bg-primary) 60%);
    color: var(--text-primary);
}

.desktop-icon:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
}

.running-app:hover, .power-item:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1)) !important;
}

.running-app[data-minimized="1"] {
    opacity: 0.6;
}

@keyframes spin {
    to {
        transform: rotate(360deg);
    }
}

@media (max-width: 640px) {
    .running-apps span:last-child {
        display: none;
    }
}
"#;
