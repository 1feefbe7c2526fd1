use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::accounts::{REGISTER_REDIRECT_DELAY_MS, REGISTRATION_SUCCESS_MESSAGE};
use shared_types::{register, RegistrationError, UserRecord};

use super::{AuthPanel, FormMessage, HttpDirectory, MessageLine};
use crate::routes::Route;

/// Stand-in for the mail the site will send once outbound email exists.
fn log_welcome_email(record: &UserRecord, confirmation_link: &str) {
    dioxus_logger::tracing::info!(
        "Welcome email to {} ({} account). Confirm at {}",
        record.email,
        record.role,
        confirmation_link
    );
}

#[component]
pub fn Register() -> Element {
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
            match register(&HttpDirectory, &email_value, &password_value).await {
                Ok(record) => {
                    let confirmation = Route::RegisterConfirmation {
                        email: record.email.clone(),
                    };
                    log_welcome_email(&record, &confirmation.to_string());

                    message.set(Some(FormMessage::success(REGISTRATION_SUCCESS_MESSAGE)));
                    email.set(String::new());
                    password.set(String::new());

                    TimeoutFuture::new(REGISTER_REDIRECT_DELAY_MS).await;
                    nav.push(confirmation);
                }
                Err(e) => {
                    if let RegistrationError::Directory(reason) = &e {
                        dioxus_logger::tracing::warn!("Registration request failed: {}", reason);
                    }
                    message.set(Some(FormMessage::error(e.to_string())));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        AuthPanel {
            title: "register",
            form {
                id: "registerForm",
                onsubmit: on_submit,
                div {
                    class: "auth-field",
                    label { r#for: "email", "email:" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "email",
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
                        autocomplete: "new-password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button { class: "auth-submit", r#type: "submit", disabled: busy(), "Create account" }
            }
            MessageLine { message: message() }
            Link { class: "auth-link", to: Route::Login {}, "Already registered? Log in" }
        }
    }
}

#[component]
pub fn RegisterConfirmation(email: String) -> Element {
    rsx! {
        AuthPanel {
            title: "check your inbox",
            if email.trim().is_empty() {
                p { "We sent you a confirmation link." }
            } else {
                p { "We sent a confirmation link to {email}." }
            }
            Link { class: "auth-link", to: Route::Login {}, "Back to login" }
        }
    }
}
