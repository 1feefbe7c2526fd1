use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{window, Blob, BlobPropertyBag, Event, HtmlDocument};

/// Get the browser viewport dimensions
pub fn get_viewport_size() -> (u32, u32) {
    let Some(window) = window() else {
        return (0, 0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as u32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as u32;
    (width, height)
}

/// Bounding box of the element with `id`, in viewport coordinates.
pub fn element_rect(id: &str) -> Option<shared_types::power_menu::Rect> {
    let element = window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(shared_types::power_menu::Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

pub fn focus_element(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

/// Whether an event target sits inside an element matching `selector`.
pub fn target_within(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

/// Registers a document-level listener for the lifetime of the page.
pub fn listen_on_document<F>(event_type: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = document.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref());
    // Keep listener alive for app lifetime.
    callback.forget();
}

pub fn on_before_unload<F>(handler: F)
where
    F: FnMut(Event) + 'static,
{
    let Some(window) = window() else {
        return;
    };
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = window.add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref());
    callback.forget();
}

pub fn dispatch_document_event(event_type: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(event) = Event::new(event_type) {
        let _ = document.dispatch_event(&event);
    }
}

/// Full page navigation.
pub fn navigate(href: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(href) {
            dioxus_logger::tracing::error!("Failed to navigate to {}: {:?}", href, e);
        }
    }
}

pub fn cookie(name: &str) -> Option<String> {
    let document = window()?.document()?.dyn_into::<HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, name)
}

fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Requests fullscreen on the root element, trying the standard entry point
/// first and then the vendor-prefixed ones. Returns false if none exist.
pub fn request_fullscreen() -> bool {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return false;
    };

    for method in [
        "requestFullscreen",
        "webkitRequestFullscreen",
        "msRequestFullscreen",
    ] {
        let Ok(candidate) = Reflect::get(&root, &JsValue::from_str(method)) else {
            continue;
        };
        let Some(function) = candidate.dyn_ref::<Function>() else {
            continue;
        };
        if let Err(e) = function.call0(&root) {
            dioxus_logger::tracing::warn!("{} failed: {:?}", method, e);
        }
        return true;
    }
    false
}

/// Queues a JSON body with `navigator.sendBeacon`. Returns false when the
/// browser refused to queue it.
pub fn send_beacon(url: &str, json_body: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let parts = Array::of1(&JsValue::from_str(json_body));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return false;
    };
    window
        .navigator()
        .send_beacon_with_opt_blob(url, Some(&blob))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie() {
        let cookies = "sessionid=abc; csrftoken=T0K3N; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("T0K3N"));
        assert_eq!(cookie_value(cookies, "sessionid").as_deref(), Some("abc"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("theme=dark", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("xcsrftoken=1", "csrftoken"), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn document_listener_sees_dispatched_event() {
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        listen_on_document("academy-test-event", move |_| counter.set(counter.get() + 1));

        dispatch_document_event("academy-test-event");
        dispatch_document_event("academy-test-event");
        assert_eq!(seen.get(), 2);
    }

    #[wasm_bindgen_test]
    fn missing_element_has_no_rect() {
        assert!(element_rect("no-such-element").is_none());
    }
}
