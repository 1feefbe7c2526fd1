//! Desktop window state machine.
//!
//! Each window owns its geometry, an optional restore snapshot for
//! maximize/restore, and its own pointer interaction. Nothing here touches the
//! DOM; the frontend feeds pointer coordinates and viewport sizes in and
//! renders the resulting geometry.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Height of the fixed bottom taskbar in CSS pixels.
pub const TASKBAR_HEIGHT: i32 = 48;
pub const MIN_WINDOW_WIDTH: i32 = 260;
pub const MIN_WINDOW_HEIGHT: i32 = 140;
/// Gap kept between a resized window's bottom edge and the viewport bottom.
pub const RESIZE_BOTTOM_GUTTER: i32 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../academy-desktop/src/types/generated.ts")]
pub struct Geometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Geometry of a maximized window: full width, everything above the taskbar.
    pub fn maximized_geometry(&self) -> Geometry {
        Geometry::new(0, 0, self.width, self.height - TASKBAR_HEIGHT)
    }
}

impl From<(u32, u32)> for Viewport {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as i32, height as i32)
    }
}

/// Pointer interaction currently owned by a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        offset_x: i32,
        offset_y: i32,
    },
    Resizing {
        start_x: i32,
        start_y: i32,
        start_width: i32,
        start_height: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("Window not found: {0}")]
    NotFound(String),
}

/// Individual window state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: String,
    pub app_id: String,
    pub title: String,
    pub geometry: Geometry,
    /// Pre-maximize snapshot; present exactly while the window is maximized.
    pub restore: Option<Geometry>,
    pub open: bool,
    pub minimized: bool,
    pub z_index: u32,
    #[serde(skip)]
    pub interaction: Interaction,
}

impl WindowState {
    pub fn new(
        id: impl Into<String>,
        app_id: impl Into<String>,
        title: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        Self {
            id: id.into(),
            app_id: app_id.into(),
            title: title.into(),
            geometry,
            restore: None,
            open: false,
            minimized: false,
            z_index: 0,
            interaction: Interaction::Idle,
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.restore.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.open && !self.minimized
    }

    pub fn open(&mut self) {
        self.open = true;
        self.minimized = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.interaction = Interaction::Idle;
    }

    /// Minimize is a display toggle: hidden windows come back where they were.
    pub fn toggle_minimize(&mut self) {
        self.minimized = !self.minimized;
        self.interaction = Interaction::Idle;
    }

    /// Normal -> maximized snapshots the geometry; maximized -> normal puts it back.
    pub fn toggle_maximize(&mut self, viewport: Viewport) {
        self.interaction = Interaction::Idle;
        match self.restore.take() {
            Some(previous) => self.geometry = previous,
            None => {
                self.restore = Some(self.geometry);
                self.geometry = viewport.maximized_geometry();
            }
        }
    }

    /// Returns false when the press is ignored (maximized windows stay put).
    pub fn begin_drag(&mut self, pointer_x: i32, pointer_y: i32) -> bool {
        if self.is_maximized() || self.interaction != Interaction::Idle {
            return false;
        }
        self.interaction = Interaction::Dragging {
            offset_x: pointer_x - self.geometry.left,
            offset_y: pointer_y - self.geometry.top,
        };
        true
    }

    pub fn begin_resize(&mut self, pointer_x: i32, pointer_y: i32) -> bool {
        if self.is_maximized() || self.interaction != Interaction::Idle {
            return false;
        }
        self.interaction = Interaction::Resizing {
            start_x: pointer_x,
            start_y: pointer_y,
            start_width: self.geometry.width,
            start_height: self.geometry.height,
        };
        true
    }

    /// Applies a pointer move to the active interaction. Returns true when the
    /// geometry may have changed.
    pub fn pointer_move(&mut self, pointer_x: i32, pointer_y: i32, viewport: Viewport) -> bool {
        match self.interaction {
            Interaction::Idle => false,
            Interaction::Dragging { offset_x, offset_y } => {
                let (left, top) = clamp_position(
                    pointer_x - offset_x,
                    pointer_y - offset_y,
                    self.geometry.width,
                    self.geometry.height,
                    viewport,
                );
                self.geometry.left = left;
                self.geometry.top = top;
                true
            }
            Interaction::Resizing {
                start_x,
                start_y,
                start_width,
                start_height,
            } => {
                let (width, height) = clamp_size(
                    start_width + (pointer_x - start_x),
                    start_height + (pointer_y - start_y),
                    self.geometry.left,
                    self.geometry.top,
                    viewport,
                );
                self.geometry.width = width;
                self.geometry.height = height;
                true
            }
        }
    }

    pub fn end_interaction(&mut self) {
        self.interaction = Interaction::Idle;
    }
}

/// Keeps a dragged window inside the viewport and above the taskbar. When the
/// window is larger than the available space the top-left edge wins.
pub fn clamp_position(left: i32, top: i32, width: i32, height: i32, viewport: Viewport) -> (i32, i32) {
    let left = left.min(viewport.width - width).max(0);
    let top = top.min(viewport.height - height - TASKBAR_HEIGHT).max(0);
    (left, top)
}

/// Floors a resize at the minimum size, then caps it to the space remaining
/// from the window's top-left corner.
pub fn clamp_size(width: i32, height: i32, left: i32, top: i32, viewport: Viewport) -> (i32, i32) {
    let width = width
        .max(MIN_WINDOW_WIDTH)
        .min(viewport.width - left);
    let height = height
        .max(MIN_WINDOW_HEIGHT)
        .min(viewport.height - top - RESIZE_BOTTOM_GUTTER);
    (width, height)
}

/// Desktop state - all windows and the active one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowState>,
    pub active_window: Option<String>,
}

impl DesktopState {
    pub fn new(windows: Vec<WindowState>) -> Self {
        Self {
            windows,
            active_window: None,
        }
    }

    pub fn window(&self, window_id: &str) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_mut(&mut self, window_id: &str) -> Result<&mut WindowState, WindowError> {
        self.windows
            .iter_mut()
            .find(|w| w.id == window_id)
            .ok_or_else(|| WindowError::NotFound(window_id.to_string()))
    }

    pub fn open(&mut self, window_id: &str) -> Result<(), WindowError> {
        self.window_mut(window_id)?.open();
        self.focus(window_id)
    }

    pub fn close(&mut self, window_id: &str) -> Result<(), WindowError> {
        self.window_mut(window_id)?.close();
        self.reselect_active(window_id);
        Ok(())
    }

    pub fn minimize(&mut self, window_id: &str) -> Result<(), WindowError> {
        let window = self.window_mut(window_id)?;
        window.toggle_minimize();
        if window.minimized {
            self.reselect_active(window_id);
        }
        Ok(())
    }

    pub fn maximize(&mut self, window_id: &str, viewport: Viewport) -> Result<(), WindowError> {
        self.window_mut(window_id)?.toggle_maximize(viewport);
        Ok(())
    }

    pub fn focus(&mut self, window_id: &str) -> Result<(), WindowError> {
        let max_z = self.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
        let window = self.window_mut(window_id)?;
        if window.z_index != max_z || max_z == 0 {
            window.z_index = max_z + 1;
        }
        self.active_window = Some(window_id.to_string());
        Ok(())
    }

    /// Taskbar entry: open closed windows, bring minimized ones back, focus the rest.
    pub fn activate(&mut self, window_id: &str) -> Result<(), WindowError> {
        let window = self.window_mut(window_id)?;
        if window.minimized {
            window.toggle_minimize();
        }
        window.open = true;
        self.focus(window_id)
    }

    fn reselect_active(&mut self, window_id: &str) {
        if self.active_window.as_deref() != Some(window_id) {
            return;
        }
        self.active_window = self
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1280, 720)
    }

    fn window() -> WindowState {
        let mut w = WindowState::new("editor", "editor", "Editor", Geometry::new(100, 80, 500, 300));
        w.open();
        w
    }

    #[test]
    fn maximize_twice_restores_exact_geometry() {
        let mut w = window();
        let before = w.geometry;

        w.toggle_maximize(viewport());
        assert!(w.is_maximized());
        assert_eq!(w.geometry, Geometry::new(0, 0, 1280, 720 - TASKBAR_HEIGHT));
        assert_eq!(w.restore, Some(before));

        w.toggle_maximize(viewport());
        assert!(!w.is_maximized());
        assert_eq!(w.geometry, before);
        assert_eq!(w.restore, None);
    }

    #[test]
    fn drag_follows_pointer_offset() {
        let mut w = window();
        assert!(w.begin_drag(120, 90));
        w.pointer_move(220, 190, viewport());
        assert_eq!((w.geometry.left, w.geometry.top), (200, 180));
    }

    #[test]
    fn drag_is_clamped_to_viewport_and_taskbar() {
        let mut w = window();
        w.begin_drag(100, 80);

        w.pointer_move(-500, -500, viewport());
        assert_eq!((w.geometry.left, w.geometry.top), (0, 0));

        w.pointer_move(5000, 5000, viewport());
        assert_eq!(w.geometry.left, 1280 - 500);
        assert_eq!(w.geometry.top, 720 - 300 - TASKBAR_HEIGHT);
    }

    #[test]
    fn drag_bounds_hold_for_a_sweep_of_pointer_positions() {
        let vp = viewport();
        let mut w = window();
        w.begin_drag(150, 100);
        for x in (-2000..3000).step_by(137) {
            for y in (-2000..3000).step_by(151) {
                w.pointer_move(x, y, vp);
                let g = w.geometry;
                assert!(g.left >= 0 && g.left <= vp.width - g.width);
                assert!(g.top >= 0 && g.top <= vp.height - g.height - TASKBAR_HEIGHT);
            }
        }
    }

    #[test]
    fn oversized_window_pins_to_top_left() {
        let (left, top) = clamp_position(300, 300, 2000, 1000, viewport());
        assert_eq!((left, top), (0, 0));
    }

    #[test]
    fn resize_respects_minimums_and_viewport() {
        let vp = viewport();
        let mut w = window();
        assert!(w.begin_resize(600, 380));

        w.pointer_move(0, 0, vp);
        assert_eq!((w.geometry.width, w.geometry.height), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        w.pointer_move(9000, 9000, vp);
        assert_eq!(w.geometry.width, vp.width - 100);
        assert_eq!(w.geometry.height, vp.height - 80 - RESIZE_BOTTOM_GUTTER);

        w.pointer_move(700, 430, vp);
        assert_eq!((w.geometry.width, w.geometry.height), (600, 350));
        assert_eq!((w.geometry.left, w.geometry.top), (100, 80));
    }

    #[test]
    fn one_interaction_at_a_time() {
        let mut w = window();
        assert!(w.begin_drag(110, 90));
        assert!(!w.begin_resize(600, 380));
        w.end_interaction();
        assert!(w.begin_resize(600, 380));
        assert!(!w.begin_drag(110, 90));
    }

    #[test]
    fn maximized_window_ignores_presses() {
        let mut w = window();
        w.toggle_maximize(viewport());
        assert!(!w.begin_drag(10, 10));
        assert!(!w.begin_resize(10, 10));
        assert!(!w.pointer_move(50, 50, viewport()));
    }

    #[test]
    fn idle_pointer_move_is_a_no_op() {
        let mut w = window();
        let before = w.geometry;
        assert!(!w.pointer_move(400, 400, viewport()));
        assert_eq!(w.geometry, before);
    }

    #[test]
    fn windows_drag_independently() {
        let vp = viewport();
        let mut state = DesktopState::new(vec![
            window(),
            WindowState::new("brief", "brief", "Brief", Geometry::new(10, 10, 300, 200)),
        ]);
        state.window_mut("editor").unwrap().begin_drag(100, 80);
        assert_eq!(state.window("brief").unwrap().interaction, Interaction::Idle);

        state.window_mut("brief").unwrap().pointer_move(400, 400, vp);
        assert_eq!(state.window("brief").unwrap().geometry.left, 10);
    }

    #[test]
    fn unknown_window_is_reported() {
        let mut state = DesktopState::new(vec![window()]);
        assert_eq!(
            state.open("missing"),
            Err(WindowError::NotFound("missing".to_string()))
        );
        assert!(state.maximize("missing", viewport()).is_err());
    }

    #[test]
    fn minimize_toggles_and_reselects_active() {
        let mut a = window();
        a.id = "a".into();
        let mut b = window();
        b.id = "b".into();
        let mut state = DesktopState::new(vec![a, b]);
        state.focus("a").unwrap();
        state.focus("b").unwrap();

        state.minimize("b").unwrap();
        assert!(state.window("b").unwrap().minimized);
        assert_eq!(state.active_window.as_deref(), Some("a"));

        state.minimize("b").unwrap();
        assert!(!state.window("b").unwrap().minimized);
    }

    #[test]
    fn focus_raises_above_every_other_window() {
        let mut a = window();
        a.id = "a".into();
        let mut b = window();
        b.id = "b".into();
        let mut state = DesktopState::new(vec![a, b]);
        state.focus("a").unwrap();
        state.focus("b").unwrap();
        state.focus("a").unwrap();
        let za = state.window("a").unwrap().z_index;
        let zb = state.window("b").unwrap().z_index;
        assert!(za > zb);
        assert_eq!(state.active_window.as_deref(), Some("a"));
    }

    #[test]
    fn activate_reopens_closed_and_minimized_windows() {
        let mut state = DesktopState::new(vec![window()]);
        state.close("editor").unwrap();
        assert!(!state.window("editor").unwrap().open);
        assert_eq!(state.active_window, None);

        state.activate("editor").unwrap();
        assert!(state.window("editor").unwrap().is_visible());

        state.minimize("editor").unwrap();
        state.activate("editor").unwrap();
        assert!(state.window("editor").unwrap().is_visible());
    }
}
