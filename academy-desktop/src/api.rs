use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use shared_types::favorites::{parse_toggle_response, FavoriteError};
use shared_types::{SaveRequest, UserRecord};

use crate::config::resolve_url;
use crate::interop;

const CSRF_COOKIE: &str = "csrftoken";

async fn describe_http_error(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    describe_error_body(status, &body)
}

pub(crate) fn describe_error_body(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

/// Same-origin POST carrying Django's CSRF token and the AJAX marker.
fn site_post(url: &str) -> RequestBuilder {
    let builder = Request::post(&resolve_url(url)).header("X-Requested-With", "XMLHttpRequest");
    match interop::cookie(CSRF_COOKIE) {
        Some(token) => builder.header("X-CSRFToken", &token),
        None => builder,
    }
}

// ============================================================================
// Challenge progress
// ============================================================================

pub async fn save_progress(save_url: &str, request: &SaveRequest) -> Result<(), String> {
    let response = site_post(save_url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }
    Ok(())
}

/// Final save while the page unloads. Falls back to a normal request that is
/// never awaited when the browser refuses the beacon.
pub fn beacon_progress(save_url: &str, request: &SaveRequest) {
    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to serialize final save: {}", e);
            return;
        }
    };

    let url = resolve_url(save_url);
    if interop::send_beacon(&url, &body) {
        return;
    }

    let request = request.clone();
    let save_url = save_url.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = save_progress(&save_url, &request).await {
            dioxus_logger::tracing::warn!("Final save failed: {}", e);
        }
    });
}

// ============================================================================
// Favorites
// ============================================================================

pub async fn toggle_favorite(favorite_url: &str) -> Result<bool, FavoriteError> {
    let response = site_post(favorite_url)
        .send()
        .await
        .map_err(|e| FavoriteError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    parse_toggle_response(status, &body)
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// POSTs JSON and hands back the status and raw body for the caller to map.
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(u16, String), String> {
    let response = site_post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok((status, body))
}

/// The site keys accounts by username, so the email doubles as one.
pub async fn register_account(record: &UserRecord) -> Result<(u16, String), String> {
    post_json(
        "/api/register/",
        &RegisterRequest {
            username: &record.email,
            email: &record.email,
            password: &record.password,
        },
    )
    .await
}

pub async fn login_account(email: &str, password: &str) -> Result<(u16, String), String> {
    post_json(
        "/api/login/",
        &LoginRequest {
            username: email,
            password,
        },
    )
    .await
}
