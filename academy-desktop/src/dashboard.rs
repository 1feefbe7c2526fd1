//! Landing pages after login. Content is served by the site; these are stubs.

use dioxus::prelude::*;

use crate::config::page_config;
use crate::routes::Route;

#[component]
fn DashboardPage(title: String, blurb: String) -> Element {
    rsx! {
        div {
            class: "dashboard",
            style: "min-height: 100vh; padding: 3rem; background: #0f172a; color: #f8fafc; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            h1 { style: "margin: 0 0 0.5rem 0;", "{title}" }
            p { style: "color: #94a3b8;", "{blurb}" }
            nav {
                style: "display: flex; gap: 1rem; margin-top: 1.5rem;",
                Link { style: "color: #60a5fa;", to: Route::Desktop {}, "Open challenge desktop" }
                a { style: "color: #60a5fa;", href: "{page_config().logout_url}", "Log out" }
            }
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        DashboardPage {
            title: "Admin Dashboard",
            blurb: "Manage challenges, review progress and moderate accounts.",
        }
    }
}

#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        DashboardPage {
            title: "User Dashboard",
            blurb: "Pick up where you left off or start a new challenge.",
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        DashboardPage {
            title: "Page not found",
            blurb: "Nothing lives at {path}.",
        }
    }
}
