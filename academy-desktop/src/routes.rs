use dioxus::prelude::*;

use crate::auth::{Login, Register, RegisterConfirmation};
use crate::dashboard::{AdminDashboard, NotFound, UserDashboard};
use crate::desktop::Desktop;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Desktop {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/register/confirmation?:email")]
    RegisterConfirmation { email: String },
    #[route("/dashboard/admin")]
    AdminDashboard {},
    #[route("/dashboard/user")]
    UserDashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
