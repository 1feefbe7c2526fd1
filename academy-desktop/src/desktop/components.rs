pub mod clock;
pub mod desktop_icons;
pub mod power_menu;
pub mod taskbar;
pub mod workspace_canvas;
