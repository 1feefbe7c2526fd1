//! Challenge desktop: windows, taskbar, intro and progress saving.

use dioxus::prelude::*;

mod actions;
pub mod apps;
mod components;
mod effects;
mod shell;
pub mod state;

pub use shell::DesktopShell;

/// Per-page state shared by the editor, the intro sequence and the save beacon.
#[derive(Clone, Copy, PartialEq)]
pub struct ChallengeSession {
    pub editor_text: Signal<String>,
    /// Set once the user clicks through the fullscreen prompt.
    pub started: Signal<bool>,
}

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
