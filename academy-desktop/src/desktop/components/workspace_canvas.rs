use dioxus::prelude::*;
use shared_types::window::TASKBAR_HEIGHT;
use shared_types::DesktopState;

use crate::desktop::apps::AppDefinition;
use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop_window::FloatingWindow;

#[component]
pub fn WorkspaceCanvas(
    apps: Vec<AppDefinition>,
    on_open_app: Callback<String>,
    state: Signal<DesktopState>,
    viewport: Signal<(u32, u32)>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
) -> Element {
    let desktop_state = state.read().clone();

    rsx! {
        div {
            class: "desktop-workspace",
            style: "position: absolute; left: 0; top: 0; right: 0; bottom: {TASKBAR_HEIGHT}px; overflow: hidden;",

            DesktopIcons { apps, on_open_app }

            for window in desktop_state.windows.iter().filter(|w| w.is_visible()) {
                FloatingWindow {
                    key: "{window.id}",
                    window: window.clone(),
                    is_active: desktop_state.active_window.as_ref() == Some(&window.id),
                    desktop: state,
                    viewport,
                    on_close,
                    on_focus,
                    on_minimize,
                    on_maximize,
                }
            }
        }
    }
}
