//! Settings the host page hands to the frontend through `<body data-*>`.

use crate::accounts::USER_DASHBOARD_PATH;
use crate::progress::SavePolicy;

pub const DEFAULT_LOGOUT_URL: &str = "/logout";
pub const DEFAULT_CHALLENGE_TITLE: &str = "Challenge Brief";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageConfig {
    pub save_url: Option<String>,
    pub readonly: bool,
    pub favorite_url: Option<String>,
    pub favorited: bool,
    pub challenge_title: String,
    pub logout_url: String,
    pub dashboard_url: String,
    pub api_base: Option<String>,
}

impl PageConfig {
    /// Builds the config from a data-attribute lookup, e.g. `DOMStringMap::get`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            save_url: non_empty("saveUrl"),
            // Present means read-only, including a bare `data-readonly`, unless it says "false".
            readonly: lookup("readonly").is_some_and(|v| v.trim() != "false"),
            favorite_url: non_empty("favoriteUrl"),
            favorited: non_empty("favorited").is_some_and(|v| parse_flag(&v)),
            challenge_title: non_empty("challengeTitle")
                .unwrap_or_else(|| DEFAULT_CHALLENGE_TITLE.to_string()),
            logout_url: non_empty("logoutUrl").unwrap_or_else(|| DEFAULT_LOGOUT_URL.to_string()),
            dashboard_url: non_empty("dashboardUrl").unwrap_or_else(|| USER_DASHBOARD_PATH.to_string()),
            api_base: non_empty("apiBase").map(|v| v.trim_end_matches('/').to_string()),
        }
    }

    pub fn save_policy(&self) -> Option<SavePolicy> {
        SavePolicy::for_page(self.readonly, self.save_url.as_deref())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value, "1" | "true" | "True" | "yes")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> PageConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PageConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_page_uses_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.logout_url, DEFAULT_LOGOUT_URL);
        assert_eq!(cfg.dashboard_url, USER_DASHBOARD_PATH);
        assert_eq!(cfg.challenge_title, DEFAULT_CHALLENGE_TITLE);
        assert!(!cfg.readonly);
        assert!(!cfg.favorited);
        assert_eq!(cfg.save_policy(), None);
    }

    #[test]
    fn editable_page_with_endpoint_saves() {
        let cfg = config(&[("saveUrl", "/challenges/3/save/"), ("readonly", "false")]);
        assert_eq!(cfg.save_policy().unwrap().save_url, "/challenges/3/save/");
    }

    #[test]
    fn readonly_page_never_saves() {
        let cfg = config(&[("saveUrl", "/challenges/3/save/"), ("readonly", "true")]);
        assert!(cfg.readonly);
        assert_eq!(cfg.save_policy(), None);
    }

    #[test]
    fn bare_readonly_attribute_blocks_saving() {
        let cfg = config(&[("saveUrl", "/save/"), ("readonly", "")]);
        assert!(cfg.readonly);
        assert_eq!(cfg.save_policy(), None);
    }

    #[test]
    fn dashboard_url_override() {
        let cfg = config(&[("dashboardUrl", "/dashboard/admin")]);
        assert_eq!(cfg.dashboard_url, "/dashboard/admin");
    }

    #[test]
    fn favorite_flags_and_api_base() {
        let cfg = config(&[
            ("favoriteUrl", "/challenges/3/favorite/"),
            ("favorited", "1"),
            ("apiBase", "https://academy.example/"),
        ]);
        assert_eq!(cfg.favorite_url.as_deref(), Some("/challenges/3/favorite/"));
        assert!(cfg.favorited);
        assert_eq!(cfg.api_base.as_deref(), Some("https://academy.example"));
        assert!(!config(&[("favorited", "0")]).favorited);
    }
}
