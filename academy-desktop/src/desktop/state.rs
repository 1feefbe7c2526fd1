use shared_types::{DesktopState, WindowState};

use crate::desktop::apps::{core_apps, AppDefinition, BRIEF_APP, EDITOR_APP};

/// One window per app; the challenge title replaces the brief's default name.
pub fn initial_desktop_state(apps: &[AppDefinition], brief_title: &str) -> DesktopState {
    let mut state = DesktopState::new(
        apps.iter()
            .map(|app| {
                let title = if app.id == BRIEF_APP {
                    brief_title
                } else {
                    app.name
                };
                WindowState::new(app.id, app.id, title, app.geometry)
            })
            .collect(),
    );

    for app in apps.iter().filter(|app| app.open_on_start) {
        let _ = state.open(app.id);
    }
    state
}

pub fn default_desktop_state(brief_title: &str) -> DesktopState {
    initial_desktop_state(&core_apps(), brief_title)
}

/// Whether the notes editor is part of this desktop at all.
pub fn has_editor(state: &DesktopState) -> bool {
    state.windows.iter().any(|w| w.app_id == EDITOR_APP)
}

/// Windows listed in the taskbar: everything currently open, minimized or not.
pub fn running_windows(state: &DesktopState) -> Vec<WindowState> {
    state.windows.iter().filter(|w| w.open).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::apps::HELP_APP;

    #[test]
    fn start_state_opens_startup_apps_and_focuses_the_last() {
        let state = default_desktop_state("SQL Injection 101");

        let open: Vec<_> = state.windows.iter().filter(|w| w.open).map(|w| w.id.as_str()).collect();
        assert_eq!(open, vec![EDITOR_APP, BRIEF_APP]);
        assert_eq!(state.active_window.as_deref(), Some(BRIEF_APP));

        let brief = state.window(BRIEF_APP).unwrap();
        let editor = state.window(EDITOR_APP).unwrap();
        assert_eq!(brief.title, "SQL Injection 101");
        assert!(brief.z_index > editor.z_index);
    }

    #[test]
    fn taskbar_lists_minimized_but_not_closed_windows() {
        let mut state = default_desktop_state("Brief");
        state.minimize(EDITOR_APP).unwrap();

        let ids: Vec<_> = running_windows(&state).into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![EDITOR_APP.to_string(), BRIEF_APP.to_string()]);
        assert!(!ids.contains(&HELP_APP.to_string()));
    }

    #[test]
    fn editor_presence_follows_the_app_list() {
        assert!(has_editor(&default_desktop_state("Brief")));

        let without_editor: Vec<_> = core_apps().into_iter().filter(|a| a.id != EDITOR_APP).collect();
        assert!(!has_editor(&initial_desktop_state(&without_editor, "Brief")));
    }
}
