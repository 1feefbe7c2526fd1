use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::clock::{format_clock, CLOCK_TICK_MS};

fn now_label() -> String {
    format_clock(chrono::Local::now().time())
}

#[component]
pub fn TaskbarClock() -> Element {
    let mut label = use_signal(now_label);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(CLOCK_TICK_MS).await;
            let next = now_label();
            if *label.peek() != next {
                label.set(next);
            }
        }
    });

    rsx! {
        div {
            id: "clock",
            class: "taskbar-clock",
            style: "padding: 0 0.75rem; font-variant-numeric: tabular-nums; font-size: 0.875rem; color: var(--text-secondary, #94a3b8); flex-shrink: 0;",
            "{label}"
        }
    }
}
