use dioxus::prelude::*;

use crate::config::page_config;
use crate::desktop::ChallengeSession;
use crate::interop;

/// Kept apart from the window ids, which the window frames use as element ids.
pub const EDITOR_ELEMENT_ID: &str = "welcome-editor-text";

#[component]
pub fn EditorView() -> Element {
    let session = use_context::<ChallengeSession>();
    let mut editor_text = session.editor_text;
    let started = session.started;
    let readonly = page_config().readonly;

    use_effect(move || {
        if started() && !readonly {
            interop::focus_element(EDITOR_ELEMENT_ID);
        }
    });

    rsx! {
        textarea {
            id: EDITOR_ELEMENT_ID,
            class: "editor",
            style: "width: 100%; height: 100%; resize: none; border: none; outline: none; padding: 0.75rem 1rem; background: var(--editor-bg, #0b1220); color: var(--text-primary, #f8fafc); font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.875rem; line-height: 1.5;",
            spellcheck: "false",
            readonly,
            value: "{editor_text}",
            oninput: move |e| editor_text.set(e.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::apps::core_apps;

    #[test]
    fn textarea_id_differs_from_window_ids() {
        assert!(core_apps().iter().all(|app| app.id != EDITOR_ELEMENT_ID));
    }
}
