//! Loading screen and the click-to-start fullscreen prompt.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::intro::{
    CHALLENGE_START_EVENT, FADE_MS, LOADING_DURATION_MS, MESSAGE_INTERVAL_MS, TYPE_INTERVAL_MS,
};
use shared_types::{IntroPhase, MessageTicker, Typewriter};

use crate::desktop::ChallengeSession;
use crate::interop;

/// Clears the editor and types its previous contents back in.
async fn type_out(mut editor_text: Signal<String>) {
    let text = editor_text.peek().clone();
    if text.is_empty() {
        return;
    }

    let mut typewriter = Typewriter::new(&text);
    editor_text.set(typewriter.visible());
    while let Some(visible) = typewriter.step() {
        editor_text.set(visible);
        TimeoutFuture::new(TYPE_INTERVAL_MS).await;
    }
}

#[component]
pub fn IntroOverlay() -> Element {
    let session = use_context::<ChallengeSession>();
    let mut phase = use_signal(IntroPhase::default);
    let mut message = use_signal(|| None::<&'static str>);

    use_hook(move || {
        spawn(async move {
            let mut ticker = MessageTicker::default();
            while let Some(next) = ticker.tick() {
                message.set(Some(next));
                TimeoutFuture::new(MESSAGE_INTERVAL_MS).await;
            }
        });

        spawn(async move {
            TimeoutFuture::new(LOADING_DURATION_MS).await;
            phase.set(IntroPhase::Fading);
            spawn(type_out(session.editor_text));

            TimeoutFuture::new(FADE_MS).await;
            phase.set(IntroPhase::PromptReady);
        });
    });

    let start = move |_| {
        if !phase.peek().prompt_interactive() {
            return;
        }
        if !interop::request_fullscreen() {
            dioxus_logger::tracing::info!("Fullscreen is not available; starting windowed");
        }
        phase.set(IntroPhase::Starting);
        interop::dispatch_document_event(CHALLENGE_START_EVENT);
        let mut started = session.started;
        started.set(true);

        spawn(async move {
            TimeoutFuture::new(FADE_MS).await;
            phase.set(IntroPhase::Started);
        });
    };

    let current = phase();
    let loading_opacity = if current == IntroPhase::Loading { "1" } else { "0" };
    let (prompt_opacity, prompt_events) = if current.prompt_interactive() {
        ("1", "auto")
    } else {
        ("0", "none")
    };

    rsx! {
        if current.shows_loading() {
            div {
                id: "loading-screen",
                class: "loading-screen",
                style: "position: fixed; inset: 0; z-index: 20000; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; background: var(--bg-primary, #0f172a); color: var(--text-primary, #f8fafc); opacity: {loading_opacity}; transition: opacity {FADE_MS}ms ease; pointer-events: none;",
                div {
                    style: "width: 40px; height: 40px; border: 3px solid var(--border-color, #334155); border-top-color: var(--accent-bg, #3b82f6); border-radius: 50%; animation: spin 0.9s linear infinite;",
                }
                div { style: "font-size: 1.1rem; font-weight: 600;", "Preparing challenge" }
                div {
                    id: "loading-extra",
                    style: "font-size: 0.875rem; color: var(--text-secondary, #94a3b8); min-height: 1.25rem;",
                    {message().unwrap_or_default()}
                }
            }
        }

        if current.shows_prompt() {
            div {
                id: "fullscreen-prompt",
                class: "fullscreen-prompt",
                role: "button",
                tabindex: "0",
                style: "position: fixed; inset: 0; z-index: 19000; display: flex; align-items: center; justify-content: center; background: rgba(2, 6, 23, 0.85); color: var(--text-primary, #f8fafc); cursor: pointer; opacity: {prompt_opacity}; pointer-events: {prompt_events}; transition: opacity {FADE_MS}ms ease;",
                onclick: start,
                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 0.5rem; text-align: center;",
                    div { style: "font-size: 1.5rem; font-weight: 700;", "Click anywhere to begin" }
                    div { style: "font-size: 0.875rem; color: var(--text-secondary, #94a3b8);", "The challenge opens in fullscreen." }
                }
            }
        }
    }
}
