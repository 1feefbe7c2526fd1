use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::power_menu::{
    default_menu, dropdown_placement, DropdownPlacement, PowerEffect, PowerMenuItem,
    PowerMenuState,
};

use crate::interop;
use crate::toast::{push_toast, ToastKind};

const POWER_BUTTON_ID: &str = "power-btn";
const POWER_DROPDOWN_ID: &str = "power-dropdown";
const DROPDOWN_WIDTH: f64 = 200.0;

#[component]
pub fn PowerMenu(dashboard_url: String, logout_url: String, viewport: Signal<(u32, u32)>) -> Element {
    let mut menu = use_signal(PowerMenuState::default);
    let mut placement = use_signal(|| None::<DropdownPlacement>);
    let items = use_hook(|| default_menu(&dashboard_url, &logout_url));
    let listener_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let listener_alive = listener_alive.clone();
        use_drop(move || {
            listener_alive.set(false);
        });
    }

    use_hook(move || {
        interop::listen_on_document("click", move |event| {
            if !listener_alive.get() || !menu.peek().open {
                return;
            }
            let inside_button = interop::target_within(&event, &format!("#{POWER_BUTTON_ID}"));
            let inside_dropdown = interop::target_within(&event, &format!("#{POWER_DROPDOWN_ID}"));
            menu.write().click_elsewhere(inside_button, inside_dropdown);
        });
    });

    let toggle = move |_| {
        menu.write().toggle();
        if !menu.peek().open {
            return;
        }
        let (vw, vh) = *viewport.peek();
        let next = interop::element_rect(POWER_BUTTON_ID)
            .map(|button| dropdown_placement(button, DROPDOWN_WIDTH, vw as f64, vh as f64));
        placement.set(next);
    };

    let is_open = menu.read().open;
    let dropdown_style = match placement() {
        Some(DropdownPlacement { left, bottom }) => format!(
            "position: fixed; left: {left}px; bottom: {bottom}px; width: {DROPDOWN_WIDTH}px;"
        ),
        None => format!("position: fixed; left: 8px; bottom: 56px; width: {DROPDOWN_WIDTH}px;"),
    };

    rsx! {
        button {
            id: POWER_BUTTON_ID,
            class: "power-btn",
            style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; flex-shrink: 0;",
            "aria-haspopup": "menu",
            "aria-expanded": if is_open { "true" } else { "false" },
            title: "Power",
            onclick: toggle,
            "⏻"
        }

        if is_open {
            div {
                id: POWER_DROPDOWN_ID,
                class: "power-dropdown",
                role: "menu",
                style: "{dropdown_style} z-index: 9000; display: flex; flex-direction: column; padding: 0.25rem; background: var(--window-bg, #1e293b); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5));",

                for item in items.iter().cloned() {
                    PowerMenuEntry { key: "{item.label}", item, menu }
                }
            }
        }
    }
}

#[component]
fn PowerMenuEntry(item: PowerMenuItem, menu: Signal<PowerMenuState>) -> Element {
    let action = item.action.clone();

    rsx! {
        button {
            class: "power-item",
            role: "menuitem",
            style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; background: transparent; color: var(--text-primary, #f8fafc); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; text-align: left; font-size: 0.875rem;",
            onclick: move |_| match menu.write().select(&action) {
                PowerEffect::Navigate(url) => interop::navigate(&url),
                PowerEffect::Notice(notice) => push_toast(notice, ToastKind::Info),
            },
            span { "{item.icon}" }
            span { "{item.label}" }
        }
    }
}
