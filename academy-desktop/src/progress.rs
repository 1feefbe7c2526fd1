use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::{SavePolicy, SaveRequest};

use crate::api::{beacon_progress, save_progress};
use crate::interop;

/// Saves the editor periodically and once more on unload. Renders nothing.
///
/// `editor_text` is `None` when the desktop has no editor.
#[component]
pub fn ProgressBeacon(policy: SavePolicy, editor_text: Memo<Option<String>>) -> Element {
    let alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let alive = alive.clone();
        use_drop(move || {
            alive.set(false);
        });
    }

    {
        let alive = alive.clone();
        let save_url = policy.save_url.clone();
        use_hook(move || {
            interop::on_before_unload(move |_event| {
                if !alive.get() {
                    return;
                }
                // Stop the periodic loop before the final save.
                alive.set(false);
                let request = SaveRequest::capture(editor_text.peek().as_deref());
                beacon_progress(&save_url, &request);
            });
        });
    }

    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(policy.initial_delay_ms).await;
            while alive.get() {
                let request = SaveRequest::capture(editor_text.peek().as_deref());
                if let Err(e) = save_progress(&policy.save_url, &request).await {
                    dioxus_logger::tracing::warn!("Progress save failed: {}", e);
                }
                TimeoutFuture::new(policy.interval_ms).await;
            }
        });
    });

    rsx! {}
}
