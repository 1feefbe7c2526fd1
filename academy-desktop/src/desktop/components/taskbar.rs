use dioxus::prelude::*;
use shared_types::window::TASKBAR_HEIGHT;
use shared_types::WindowState;

use crate::desktop::apps::get_app_icon;
use crate::desktop::components::clock::TaskbarClock;
use crate::desktop::components::power_menu::PowerMenu;

#[component]
pub fn Taskbar(
    windows: Vec<WindowState>,
    active_window: Option<String>,
    on_activate_window: Callback<String>,
    dashboard_url: String,
    logout_url: String,
    viewport: Signal<(u32, u32)>,
) -> Element {
    rsx! {
        div {
            class: "taskbar",
            style: "position: fixed; left: 0; right: 0; bottom: 0; height: {TASKBAR_HEIGHT}px; z-index: 8000; display: flex; align-items: center; gap: 0.5rem; padding: 0 0.75rem; background: var(--taskbar-bg, #0f172a); border-top: 1px solid var(--border-color, #334155);",

            PowerMenu { dashboard_url, logout_url, viewport }

            div {
                class: "running-apps",
                style: "flex: 1; display: flex; align-items: center; gap: 0.25rem; min-width: 0; overflow: hidden;",

                for window in windows.iter() {
                    RunningAppIndicator {
                        key: "{window.id}",
                        window: window.clone(),
                        is_active: active_window.as_ref() == Some(&window.id),
                        on_activate: on_activate_window,
                    }
                }
            }

            TaskbarClock {}
        }
    }
}

#[component]
pub fn RunningAppIndicator(
    window: WindowState,
    is_active: bool,
    on_activate: Callback<String>,
) -> Element {
    let icon = get_app_icon(&window.app_id);
    let window_id = window.id.clone();
    let highlighted = is_active && !window.minimized;

    rsx! {
        button {
            class: if highlighted { "running-app active" } else { "running-app" },
            style: if highlighted {
                "height: 32px; display: flex; align-items: center; gap: 0.4rem; padding: 0 0.6rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 0.8rem; white-space: nowrap;"
            } else {
                "height: 32px; display: flex; align-items: center; gap: 0.4rem; padding: 0 0.6rem; background: var(--window-bg, #1e293b); color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 0.8rem; white-space: nowrap;"
            },
            "data-minimized": if window.minimized { "1" } else { "0" },
            onclick: move |_| on_activate.call(window_id.clone()),
            title: "{window.title}",
            span { style: "font-size: 1rem;", "{icon}" }
            span { "{window.title}" }
        }
    }
}
