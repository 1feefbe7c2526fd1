//! Taskbar power menu: open/close state, dropdown placement and actions.

use crate::window::TASKBAR_HEIGHT;

pub const DROPDOWN_MARGIN: f64 = 8.0;
pub const RESTART_NOTICE: &str = "Restart is not implemented yet.";

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Dropdown offsets for `position: fixed; left: ..; bottom: ..`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownPlacement {
    pub left: f64,
    pub bottom: f64,
}

/// Places the dropdown directly above the trigger button. The bottom offset
/// never drops below the taskbar so the menu cannot slide underneath it.
pub fn dropdown_placement(
    button: Rect,
    dropdown_width: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> DropdownPlacement {
    let above_button = (viewport_height - button.top).max(TASKBAR_HEIGHT as f64);
    let max_left = (viewport_width - dropdown_width - DROPDOWN_MARGIN).max(DROPDOWN_MARGIN);
    let left = button.left.clamp(DROPDOWN_MARGIN, max_left);
    DropdownPlacement {
        left,
        bottom: above_button + DROPDOWN_MARGIN,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerAction {
    Navigate(String),
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerMenuItem {
    pub label: String,
    pub icon: &'static str,
    pub action: PowerAction,
}

pub fn default_menu(dashboard_url: &str, logout_url: &str) -> Vec<PowerMenuItem> {
    vec![
        PowerMenuItem {
            label: "Dashboard".to_string(),
            icon: "🏠",
            action: PowerAction::Navigate(dashboard_url.to_string()),
        },
        PowerMenuItem {
            label: "Log out".to_string(),
            icon: "⏻",
            action: PowerAction::Navigate(logout_url.to_string()),
        },
        PowerMenuItem {
            label: "Restart".to_string(),
            icon: "↻",
            action: PowerAction::Restart,
        },
    ]
}

/// What the page should do after an action was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerEffect {
    Navigate(String),
    Notice(&'static str),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerMenuState {
    pub open: bool,
}

impl PowerMenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Document click handler: anything outside the trigger and dropdown closes.
    pub fn click_elsewhere(&mut self, inside_button: bool, inside_dropdown: bool) {
        if !inside_button && !inside_dropdown {
            self.open = false;
        }
    }

    pub fn select(&mut self, action: &PowerAction) -> PowerEffect {
        self.open = false;
        match action {
            PowerAction::Navigate(url) => PowerEffect::Navigate(url.clone()),
            PowerAction::Restart => PowerEffect::Notice(RESTART_NOTICE),
        }
    }
}
