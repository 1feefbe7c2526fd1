use dioxus::prelude::{Signal, WritableExt};
use shared_types::{DesktopState, Viewport, WindowError};

fn log_window_error(action: &str, result: Result<(), WindowError>) {
    if let Err(e) = result {
        dioxus_logger::tracing::warn!("Failed to {} window: {}", action, e);
    }
}

pub fn open_window_action(mut desktop_state: Signal<DesktopState>, window_id: &str) {
    log_window_error("open", desktop_state.write().open(window_id));
}

pub fn close_window_action(mut desktop_state: Signal<DesktopState>, window_id: &str) {
    log_window_error("close", desktop_state.write().close(window_id));
}

pub fn focus_window_action(mut desktop_state: Signal<DesktopState>, window_id: &str) {
    log_window_error("focus", desktop_state.write().focus(window_id));
}

pub fn minimize_window_action(mut desktop_state: Signal<DesktopState>, window_id: &str) {
    log_window_error("minimize", desktop_state.write().minimize(window_id));
}

pub fn maximize_window_action(
    mut desktop_state: Signal<DesktopState>,
    window_id: &str,
    viewport: Viewport,
) {
    log_window_error("maximize", desktop_state.write().maximize(window_id, viewport));
}

/// Taskbar click on a running app.
pub fn activate_window_action(mut desktop_state: Signal<DesktopState>, window_id: &str) {
    log_window_error("activate", desktop_state.write().activate(window_id));
}
