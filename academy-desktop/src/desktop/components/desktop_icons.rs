use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::desktop::apps::AppDefinition;

/// Clicks on the same icon inside this window only open it once.
const REOPEN_GUARD_MS: i64 = 500;

#[component]
pub fn DesktopIcons(apps: Vec<AppDefinition>, on_open_app: Callback<String>) -> Element {
    rsx! {
        div {
            class: "desktop-icons",
            style: "position: absolute; top: 1rem; right: 1rem; z-index: 0; display: grid; grid-template-columns: 5rem; gap: 1rem; padding: 0.5rem;",

            for app in apps {
                DesktopIcon {
                    key: "{app.id}",
                    app: app.clone(),
                    on_open_app,
                }
            }
        }
    }
}

#[component]
pub fn DesktopIcon(app: AppDefinition, on_open_app: Callback<String>) -> Element {
    let mut last_click_time = use_signal(|| 0i64);
    let mut is_pressed = use_signal(|| false);
    let app_id = app.id;

    let handle_click = move |_| {
        let now = js_sys::Date::now() as i64;
        if now - *last_click_time.read() >= REOPEN_GUARD_MS {
            on_open_app.call(app_id.to_string());
            last_click_time.set(now);
        }

        is_pressed.set(true);
        spawn(async move {
            TimeoutFuture::new(150).await;
            is_pressed.set(false);
        });
    };

    let scale = if is_pressed() { "0.95" } else { "1.0" };
    let border_color = if is_pressed() { "#60a5fa" } else { "#334155" };

    rsx! {
        button {
            class: "desktop-icon",
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.4rem; padding: 0.5rem; background: transparent; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; transition: all 0.15s ease-out; transform: scale({scale});",
            onclick: handle_click,
            onmouseleave: move |_| is_pressed.set(false),

            div {
                style: "width: 3.5rem; height: 3.5rem; display: flex; align-items: center; justify-content: center; background: var(--dock-bg, rgba(30, 41, 59, 0.8)); border-radius: var(--radius-lg, 12px); border: 1px solid {border_color}; transition: all 0.15s ease-out;",
                span { style: "font-size: 2.25rem; pointer-events: none; user-select: none;", "{app.icon}" }
            }
            span {
                style: "font-size: 0.75rem; color: var(--text-secondary, #94a3b8); text-align: center; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; text-shadow: 0 1px 2px rgba(0,0,0,0.5); pointer-events: none; user-select: none;",
                "{app.name}"
            }
        }
    }
}
