//! Shared types for the CTF academy desktop
//!
//! Everything here is free of DOM and network access so it runs the same in
//! the Dioxus frontend (WASM) and in native unit tests:
//! - window manager and power menu state machines
//! - optimistic favorite toggling
//! - progress save payloads and intro sequence timings
//! - registration/login validation against an account directory

pub mod accounts;
pub mod clock;
pub mod favorites;
pub mod intro;
pub mod page;
pub mod power_menu;
pub mod progress;
pub mod window;

pub use accounts::{
    login, register, Account, AccountDirectory, DirectoryError, LoginError, LoginOutcome,
    MemoryDirectory, RegistrationError, Role, UserRecord,
};
pub use favorites::{parse_toggle_response, FavoriteControl, FavoriteError};
pub use intro::{IntroPhase, MessageTicker, Typewriter};
pub use page::PageConfig;
pub use power_menu::{PowerAction, PowerEffect, PowerMenuItem, PowerMenuState};
pub use progress::{SavePolicy, SaveRequest};
pub use window::{DesktopState, Geometry, Interaction, Viewport, WindowError, WindowState};

// ============================================================================
// Tests
// ============================================================================
