use shared_types::Geometry;

pub const EDITOR_APP: &str = "editor";
pub const BRIEF_APP: &str = "brief";
pub const HELP_APP: &str = "help";

/// Placeholder shown in the editor before the intro types it out again.
pub const WELCOME_TEXT: &str = "Welcome, operator.\n\n\
Read the challenge brief, then use this scratchpad for notes, payloads and \
findings. Your notes are saved automatically while you work.\n\n\
Good luck.";

#[derive(Debug, Clone, PartialEq)]
pub struct AppDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub geometry: Geometry,
    pub open_on_start: bool,
}

pub fn core_apps() -> Vec<AppDefinition> {
    vec![
        AppDefinition {
            id: EDITOR_APP,
            name: "Notes",
            icon: "📝",
            geometry: Geometry::new(380, 40, 620, 440),
            open_on_start: true,
        },
        AppDefinition {
            id: BRIEF_APP,
            name: "Challenge Brief",
            icon: "🚩",
            geometry: Geometry::new(40, 40, 320, 380),
            open_on_start: true,
        },
        AppDefinition {
            id: HELP_APP,
            name: "Help",
            icon: "❓",
            geometry: Geometry::new(120, 120, 420, 300),
            open_on_start: false,
        },
    ]
}

pub fn get_app_icon(app_id: &str) -> &'static str {
    match app_id {
        EDITOR_APP => "📝",
        BRIEF_APP => "🚩",
        HELP_APP => "❓",
        _ => "📱",
    }
}
