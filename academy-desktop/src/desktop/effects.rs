use dioxus::prelude::{Signal, WritableExt};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::interop::get_viewport_size;

pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

fn current_viewport_size() -> Option<(u32, u32)> {
    let (width, height) = get_viewport_size();
    if width > 0 && height > 0 {
        return Some((width, height));
    }

    let root = web_sys::window()?.document()?.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

/// Stops the page itself from scrolling or bouncing behind the desktop.
pub fn lock_page_scroll() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(
            "style",
            "height: 100%; overflow: hidden; overscroll-behavior: none;",
        );
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute(
            "style",
            "margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; overscroll-behavior: none;",
        );
    }
}
