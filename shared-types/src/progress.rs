//! Challenge progress saves.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Delay before the first save after the page becomes editable.
pub const INITIAL_SAVE_DELAY_MS: u32 = 2_000;
pub const SAVE_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../academy-desktop/src/types/generated.ts")]
pub struct LastState {
    pub text: Option<String>,
}

/// Body of a save request: `{ "last_state": { "text": ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../academy-desktop/src/types/generated.ts")]
pub struct SaveRequest {
    pub last_state: LastState,
}

impl SaveRequest {
    pub fn capture(editor_text: Option<&str>) -> Self {
        Self {
            last_state: LastState {
                text: editor_text.map(ToString::to_string),
            },
        }
    }
}

/// Where and whether to save. Built only for editable pages with an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePolicy {
    pub save_url: String,
    pub initial_delay_ms: u32,
    pub interval_ms: u32,
}

impl SavePolicy {
    pub fn for_page(readonly: bool, save_url: Option<&str>) -> Option<Self> {
        if readonly {
            return None;
        }
        let save_url = save_url.map(str::trim).filter(|url| !url.is_empty())?;
        Some(Self {
            save_url: save_url.to_string(),
            initial_delay_ms: INITIAL_SAVE_DELAY_MS,
            interval_ms: SAVE_INTERVAL_MS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_body_shape() {
        let body = serde_json::to_value(SaveRequest::capture(Some("flag{...}"))).unwrap();
        assert_eq!(body, serde_json::json!({ "last_state": { "text": "flag{...}" } }));

        let body = serde_json::to_value(SaveRequest::capture(None)).unwrap();
        assert_eq!(body, serde_json::json!({ "last_state": { "text": null } }));
    }

    #[test]
    fn readonly_or_missing_endpoint_disables_saving() {
        assert_eq!(SavePolicy::for_page(true, Some("/save/")), None);
        assert_eq!(SavePolicy::for_page(false, None), None);
        assert_eq!(SavePolicy::for_page(false, Some("   ")), None);

        let policy = SavePolicy::for_page(false, Some("/challenges/7/save/")).unwrap();
        assert_eq!(policy.save_url, "/challenges/7/save/");
        assert_eq!(policy.initial_delay_ms, INITIAL_SAVE_DELAY_MS);
        assert_eq!(policy.interval_ms, SAVE_INTERVAL_MS);
    }
}
