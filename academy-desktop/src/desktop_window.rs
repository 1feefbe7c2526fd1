use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use shared_types::{DesktopState, Viewport, WindowState};
use wasm_bindgen::JsCast;

use crate::components::{BriefView, EditorView, HelpView};
use crate::desktop::apps::{get_app_icon, BRIEF_APP, EDITOR_APP, HELP_APP};

fn pointer_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn capture_window_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
        .map(|window| window.set_pointer_capture(pointer_id));
}

fn release_window_pointer(e: &PointerEvent, pointer_id: i32) {
    let _ = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
        .map(|window| window.release_pointer_capture(pointer_id));
}

fn window_style(window: &WindowState, is_active: bool) -> String {
    let g = window.geometry;
    let z_index = window.z_index;
    let active_outline = if is_active && !window.is_maximized() {
        "2px solid var(--accent-bg, #3b82f6)"
    } else {
        "none"
    };
    let frame = if window.is_maximized() {
        "border: none; border-radius: 0; box-shadow: none;"
    } else {
        "border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); \
         box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5));"
    };

    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: {z_index}; \
         display: flex; flex-direction: column; background: var(--window-bg, #1e293b); \
         overflow: hidden; {frame} outline: {active_outline};",
        g.left, g.top, g.width, g.height
    )
}

/// Runs `f` against the window if it still exists. Missing windows are logged.
fn with_window<R>(
    mut desktop: Signal<DesktopState>,
    window_id: &str,
    f: impl FnOnce(&mut WindowState) -> R,
) -> Option<R> {
    match desktop.write().window_mut(window_id) {
        Ok(window) => Some(f(window)),
        Err(e) => {
            dioxus_logger::tracing::warn!("Pointer interaction dropped: {}", e);
            None
        }
    }
}

#[component]
pub fn FloatingWindow(
    window: WindowState,
    is_active: bool,
    desktop: Signal<DesktopState>,
    viewport: Signal<(u32, u32)>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
) -> Element {
    let window_id = window.id.clone();
    let maximized = window.is_maximized();
    let mut captured_pointer = use_signal(|| None::<i32>);

    let window_id_for_focus = window_id.clone();
    let window_id_for_keyboard = window_id.clone();
    let window_id_for_pointer_move = window_id.clone();
    let window_id_for_pointer_up = window_id.clone();
    let window_id_for_pointer_cancel = window_id.clone();
    let window_id_for_title_pointer = window_id.clone();
    let window_id_for_title_dblclick = window_id.clone();
    let window_id_for_resize_pointer = window_id.clone();

    let window_style = window_style(&window, is_active);

    let on_window_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::F4 && modifiers.alt() {
            e.prevent_default();
            on_close.call(window_id_for_keyboard.clone());
            return;
        }

        if key == Key::Character("m".to_string()) && modifiers.ctrl() {
            e.prevent_default();
            if modifiers.shift() {
                on_maximize.call(window_id_for_keyboard.clone());
            } else {
                on_minimize.call(window_id_for_keyboard.clone());
            }
        }
    };

    rsx! {
        div {
            id: "{window.id}",
            class: if is_active { "floating-window c-window active" } else { "floating-window c-window" },
            role: "dialog",
            "aria-label": window.title.clone(),
            "data-maximized": if maximized { "1" } else { "0" },
            tabindex: "0",
            style: "{window_style}",
            onpointerdown: move |_| {
                if !is_active {
                    on_focus.call(window_id_for_focus.clone());
                }
            },
            onkeydown: on_window_keydown,
            onpointermove: move |e| {
                if captured_pointer() != Some(e.data().pointer_id()) {
                    return;
                }

                // Pointer capture can be lost across focus changes; a move with no
                // buttons held ends the interaction.
                if pointer_buttons(&e) == 0 {
                    with_window(desktop, &window_id_for_pointer_move, WindowState::end_interaction);
                    captured_pointer.set(None);
                    return;
                }

                let (x, y) = pointer_point(&e);
                let viewport = Viewport::from(*viewport.peek());
                with_window(desktop, &window_id_for_pointer_move, |w| w.pointer_move(x, y, viewport));
            },
            onpointerup: move |e| {
                let Some(pointer_id) = captured_pointer() else {
                    return;
                };
                if e.data().pointer_id() != pointer_id {
                    return;
                }
                release_window_pointer(&e, pointer_id);
                with_window(desktop, &window_id_for_pointer_up, WindowState::end_interaction);
                captured_pointer.set(None);
            },
            onpointercancel: move |e| {
                let Some(pointer_id) = captured_pointer() else {
                    return;
                };
                release_window_pointer(&e, pointer_id);
                with_window(desktop, &window_id_for_pointer_cancel, WindowState::end_interaction);
                captured_pointer.set(None);
            },

            div {
                class: "window-header window-titlebar",
                style: if maximized {
                    "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0.75rem; background: var(--titlebar-bg, #0f172a); border-bottom: 1px solid var(--border-color, #334155); user-select: none; touch-action: none;"
                } else {
                    "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0.75rem; background: var(--titlebar-bg, #0f172a); border-bottom: 1px solid var(--border-color, #334155); cursor: grab; user-select: none; touch-action: none;"
                },
                ondoubleclick: move |_| on_maximize.call(window_id_for_title_dblclick.clone()),
                onpointerdown: move |e| {
                    if pointer_target_is_window_control(&e) {
                        return;
                    }
                    let (x, y) = pointer_point(&e);
                    let started = with_window(desktop, &window_id_for_title_pointer, |w| w.begin_drag(x, y))
                        .unwrap_or(false);
                    if !started {
                        return;
                    }
                    // Stop text selection while dragging.
                    e.prevent_default();
                    let pointer_id = e.data().pointer_id();
                    capture_window_pointer(&e, pointer_id);
                    captured_pointer.set(Some(pointer_id));
                },

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem; min-width: 0;",
                    span { style: "font-size: 1rem;", {get_app_icon(&window.app_id)} }
                    span {
                        style: "font-weight: 500; color: var(--text-primary, white); overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{window.title}"
                    }
                }

                WindowControls {
                    maximized,
                    window_id: window_id.clone(),
                    on_minimize,
                    on_maximize,
                    on_close,
                }
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow: auto;",

                match window.app_id.as_str() {
                    EDITOR_APP => rsx! { EditorView {} },
                    BRIEF_APP => rsx! { BriefView {} },
                    HELP_APP => rsx! { HelpView {} },
                    _ => rsx! {
                        div {
                            style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--text-muted, #64748b); padding: 1rem;",
                            "App not yet implemented"
                        }
                    },
                }
            }

            if !maximized {
                div {
                    class: "resizer resize-handle",
                    style: "position: absolute; right: 0; bottom: 0; width: 16px; height: 16px; cursor: se-resize; touch-action: none;",
                    onpointerdown: move |e| {
                        e.stop_propagation();
                        if !is_active {
                            on_focus.call(window_id_for_resize_pointer.clone());
                        }
                        let (x, y) = pointer_point(&e);
                        let started = with_window(desktop, &window_id_for_resize_pointer, |w| w.begin_resize(x, y))
                            .unwrap_or(false);
                        if !started {
                            return;
                        }
                        e.prevent_default();
                        let pointer_id = e.data().pointer_id();
                        capture_window_pointer(&e, pointer_id);
                        captured_pointer.set(Some(pointer_id));
                    },
                }
            }
        }
    }
}

#[component]
fn WindowControls(
    maximized: bool,
    window_id: String,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_close: Callback<String>,
) -> Element {
    let window_id_for_minimize = window_id.clone();
    let window_id_for_maximize = window_id.clone();
    let window_id_for_close = window_id;

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",

            button {
                class: "win-btn",
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #facc15; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Minimize",
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(window_id_for_minimize.clone());
                },
                "−"
            }
            button {
                class: "win-btn",
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #22c55e; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": if maximized { "Restore" } else { "Maximize" },
                onclick: move |e| {
                    e.stop_propagation();
                    on_maximize.call(window_id_for_maximize.clone());
                },
                if maximized { "❐" } else { "□" }
            }
            button {
                class: "win-btn window-close",
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #ef4444; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 1.25rem; line-height: 1;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id_for_close.clone());
                },
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Geometry;

    fn editor() -> WindowState {
        let mut window = WindowState::new("editor", "editor", "Notes", Geometry::new(40, 60, 500, 320));
        window.open();
        window.z_index = 3;
        window
    }

    #[test]
    fn style_places_window_at_its_geometry() {
        let style = window_style(&editor(), false);
        assert!(style.contains("left: 40px; top: 60px; width: 500px; height: 320px;"));
        assert!(style.contains("z-index: 3;"));
        assert!(style.contains("outline: none;"));
    }

    #[test]
    fn active_window_is_outlined_until_maximized() {
        let mut window = editor();
        assert!(window_style(&window, true).contains("outline: 2px solid"));

        window.toggle_maximize(Viewport::new(1280, 720));
        let style = window_style(&window, true);
        assert!(style.contains("left: 0px; top: 0px; width: 1280px; height: 672px;"));
        assert!(style.contains("border-radius: 0;"));
        assert!(style.contains("outline: none;"));
    }
}
