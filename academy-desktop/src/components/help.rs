use dioxus::prelude::*;

const SHORTCUTS: [(&str, &str); 4] = [
    ("Drag title bar", "Move window"),
    ("Drag bottom-right corner", "Resize window"),
    ("Double-click title bar / Ctrl+Shift+M", "Maximize or restore"),
    ("Ctrl+M / Alt+F4", "Minimize / close"),
];

#[component]
pub fn HelpView() -> Element {
    rsx! {
        div {
            class: "help",
            style: "padding: 1rem; color: var(--text-primary, #f8fafc); font-size: 0.875rem;",
            h3 { style: "margin: 0 0 0.75rem 0; font-size: 1rem;", "Using the desktop" }
            table {
                style: "width: 100%; border-collapse: collapse;",
                for (keys, action) in SHORTCUTS {
                    tr {
                        key: "{keys}",
                        td { style: "padding: 0.25rem 0.5rem 0.25rem 0; color: var(--text-secondary, #94a3b8);", "{keys}" }
                        td { style: "padding: 0.25rem 0;", "{action}" }
                    }
                }
            }
            p {
                style: "margin: 0.75rem 0 0 0; color: var(--text-muted, #64748b);",
                "Closed windows can be reopened from the desktop icons. Use the power button for the dashboard or to log out."
            }
        }
    }
}
