use std::sync::OnceLock;

use shared_types::PageConfig;

static PAGE_CONFIG_CACHE: OnceLock<PageConfig> = OnceLock::new();
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Settings from the host page's `<body data-*>` attributes, read once.
pub fn page_config() -> &'static PageConfig {
    PAGE_CONFIG_CACHE.get_or_init(read_page_config)
}

fn read_page_config() -> PageConfig {
    let dataset = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|body| body.dataset());

    match dataset {
        Some(dataset) => PageConfig::from_lookup(|key| dataset.get(key)),
        None => PageConfig::from_lookup(|_| None),
    }
}

/// Get the API base URL based on current environment
/// - An explicit `data-api-base` on the page wins
/// - In development (localhost): the Django dev server on port 8000
/// - In production: same origin
fn get_api_base() -> String {
    if let Some(base) = page_config().api_base.clone() {
        return base;
    }

    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        String::new()
    }
}

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Absolute URLs pass through; paths are joined onto the API base.
pub fn resolve_url(url: &str) -> String {
    join_url(api_base(), url)
}

fn join_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with('/') {
        format!("{base}{url}")
    } else {
        format!("{base}/{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_base() {
        assert_eq!(join_url("http://localhost:8000", "/api/login/"), "http://localhost:8000/api/login/");
        assert_eq!(join_url("", "/challenges/1/save/"), "/challenges/1/save/");
        assert_eq!(join_url("https://a.example", "x/"), "https://a.example/x/");
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            join_url("http://localhost:8000", "https://cdn.example/fav/"),
            "https://cdn.example/fav/"
        );
    }
}
