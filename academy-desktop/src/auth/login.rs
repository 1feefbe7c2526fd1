use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::accounts::LOGIN_REDIRECT_DELAY_MS;
use shared_types::{login, LoginError, Role};

use super::{AuthPanel, FormMessage, HttpDirectory, MessageLine};
use crate::routes::Route;

fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::User => Route::UserDashboard {},
    }
}

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| None::<FormMessage>);
    let mut busy = use_signal(|| false);
    let nav = navigator();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        message.set(None);

        let email_value = email.read().clone();
        let password_value = password.read().clone();
        spawn(async move {
            match login(&HttpDirectory, &email_value, &password_value).await {
                Ok(outcome) => {
                    dioxus_logger::tracing::info!(
                        "Signed in {} as {}",
                        outcome.email,
                        outcome.role.as_str()
                    );
                    message.set(Some(FormMessage::success(outcome.greeting())));
                    TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                    nav.push(dashboard_route(outcome.role));
                }
                Err(e) => {
                    if let LoginError::Directory(reason) = &e {
                        dioxus_logger::tracing::warn!("Login request failed: {}", reason);
                    }
                    message.set(Some(FormMessage::error(e.to_string())));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        AuthPanel {
            title: "login",
            form {
                id: "loginForm",
                onsubmit: on_submit,
                div {
                    class: "auth-field",
                    label { r#for: "email", "email:" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "username",
                        spellcheck: false,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div {
                    class: "auth-field",
                    label { r#for: "password", "password:" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button { class: "auth-submit", r#type: "submit", disabled: busy(), "Log in" }
            }
            MessageLine { message: message() }
            Link { class: "auth-link", to: Route::Register {}, "No account? Register" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::accounts::{ADMIN_DASHBOARD_PATH, USER_DASHBOARD_PATH};

    #[test]
    fn dashboard_routes_match_role_paths() {
        assert_eq!(dashboard_route(Role::Admin).to_string(), ADMIN_DASHBOARD_PATH);
        assert_eq!(dashboard_route(Role::User).to_string(), USER_DASHBOARD_PATH);
    }
}
