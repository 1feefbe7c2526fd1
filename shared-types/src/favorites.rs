//! Optimistic favorite toggle.
//!
//! A click moves the control into a pending state showing the flipped value.
//! The server answer then either commits its own value or reverts to the
//! value from before the click.

use serde_json::Value;

pub const FAVORITE_ERROR_TOAST: &str = "Unable to save favorite. Please try again.";
pub const TOAST_DURATION_MS: u32 = 2_200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteError {
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to parse JSON: {0}")]
    Malformed(String),
    #[error("Response did not include a favorited flag")]
    MissingFlag,
    #[error("Request failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FavoriteControl {
    favorited: bool,
    /// Value from before the in-flight click, if any.
    pending_from: Option<bool>,
}

impl FavoriteControl {
    pub fn new(favorited: bool) -> Self {
        Self {
            favorited,
            pending_from: None,
        }
    }

    /// Value to render, including an optimistic flip.
    pub fn favorited(&self) -> bool {
        self.favorited
    }

    pub fn in_flight(&self) -> bool {
        self.pending_from.is_some()
    }

    /// Starts a toggle. Returns the tentative value, or `None` when a request
    /// is already in flight and the click must be ignored.
    pub fn begin(&mut self) -> Option<bool> {
        if self.in_flight() {
            return None;
        }
        self.pending_from = Some(self.favorited);
        self.favorited = !self.favorited;
        Some(self.favorited)
    }

    /// The server's value wins, whatever the optimistic guess was.
    pub fn commit(&mut self, server_favorited: bool) {
        self.pending_from = None;
        self.favorited = server_favorited;
    }

    pub fn revert(&mut self) {
        if let Some(previous) = self.pending_from.take() {
            self.favorited = previous;
        }
    }

    pub fn resolve(&mut self, outcome: &Result<bool, FavoriteError>) {
        match outcome {
            Ok(favorited) => self.commit(*favorited),
            Err(_) => self.revert(),
        }
    }
}

/// Reads a toggle endpoint response. Accepts `{favorited}` or
/// `{data: {favorited}}`; any error signal fails the toggle.
pub fn parse_toggle_response(status: u16, body: &str) -> Result<bool, FavoriteError> {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) if (200..300).contains(&status) => return Err(FavoriteError::Malformed(e.to_string())),
        Err(_) => return Err(FavoriteError::Status(status)),
    };

    if let Some(error) = json.get("error").filter(|v| !v.is_null()) {
        let message = error
            .as_str()
            .map(ToString::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(FavoriteError::Rejected(message));
    }

    if !(200..300).contains(&status) {
        return Err(FavoriteError::Status(status));
    }

    if json.get("success").and_then(Value::as_bool) == Some(false) {
        let message = json
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Failed")
            .to_string();
        return Err(FavoriteError::Rejected(message));
    }

    json.get("favorited")
        .or_else(|| json.get("data").and_then(|data| data.get("favorited")))
        .and_then(Value::as_bool)
        .ok_or(FavoriteError::MissingFlag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_overrides_optimistic_guess() {
        let mut control = FavoriteControl::new(true);
        assert_eq!(control.begin(), Some(false));
        assert!(!control.favorited());

        control.resolve(&parse_toggle_response(200, r#"{"favorited": true}"#));
        assert!(control.favorited());
        assert!(!control.in_flight());
    }

    #[test]
    fn failure_returns_to_pre_click_state() {
        for (status, body) in [
            (500, "oops"),
            (200, r#"{"error": "not allowed"}"#),
            (200, r#"{"success": false, "message": "nope"}"#),
            (403, r#"{"favorited": true}"#),
            (200, "{}"),
            (200, "<html>"),
        ] {
            let mut control = FavoriteControl::new(false);
            control.begin();
            assert!(control.favorited());
            control.resolve(&parse_toggle_response(status, body));
            assert!(!control.favorited(), "status {status} body {body}");
        }
    }

    #[test]
    fn network_error_reverts() {
        let mut control = FavoriteControl::new(true);
        control.begin();
        control.resolve(&Err(FavoriteError::Network("offline".into())));
        assert!(control.favorited());
    }

    #[test]
    fn reentrant_clicks_are_ignored() {
        let mut control = FavoriteControl::new(false);
        assert_eq!(control.begin(), Some(true));
        assert_eq!(control.begin(), None);
        assert!(control.favorited());

        control.commit(true);
        assert_eq!(control.begin(), Some(false));
    }

    #[test]
    fn flag_may_be_nested_under_data() {
        assert_eq!(
            parse_toggle_response(200, r#"{"success": true, "data": {"favorited": false}}"#),
            Ok(false)
        );
        assert_eq!(
            parse_toggle_response(200, r#"{"favorited": true, "count": 3}"#),
            Ok(true)
        );
    }

    #[test]
    fn error_field_message_is_kept() {
        assert_eq!(
            parse_toggle_response(400, r#"{"error": "Challenge not found"}"#),
            Err(FavoriteError::Rejected("Challenge not found".into()))
        );
        assert_eq!(
            parse_toggle_response(429, "Too many requests"),
            Err(FavoriteError::Status(429))
        );
    }
}
