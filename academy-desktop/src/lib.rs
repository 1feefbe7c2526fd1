pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod desktop;
pub mod desktop_window;
pub mod favorites;
pub mod interop;
pub mod intro;
pub mod progress;
pub mod routes;
pub mod toast;

pub use auth::{Login, Register, RegisterConfirmation};
pub use dashboard::{AdminDashboard, NotFound, UserDashboard};
pub use desktop::Desktop;
pub use routes::Route;
