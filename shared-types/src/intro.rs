//! Loading screen, typewriter reveal and fullscreen gate timings.

pub const LOADING_MESSAGES: [&str; 4] = [
    "Loading modules...",
    "Fetching challenge data...",
    "Preparing your desktop...",
    "Almost ready...",
];
pub const MESSAGE_INTERVAL_MS: u32 = 800;
pub const LOADING_DURATION_MS: u32 = 4_000;
pub const FADE_MS: u32 = 500;
pub const TYPE_INTERVAL_MS: u32 = 15;
/// DOM event fired on `document` when the user clicks through the prompt.
pub const CHALLENGE_START_EVENT: &str = "challenge-start";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntroPhase {
    /// Overlay visible, messages cycling.
    #[default]
    Loading,
    /// Overlay fading out, editor text being typed.
    Fading,
    /// Overlay removed and the prompt is interactive.
    PromptReady,
    /// Prompt clicked and fading out.
    Starting,
    /// Prompt removed.
    Started,
}

impl IntroPhase {
    pub fn shows_loading(self) -> bool {
        matches!(self, Self::Loading | Self::Fading)
    }

    pub fn shows_prompt(self) -> bool {
        !matches!(self, Self::Started)
    }

    pub fn prompt_interactive(self) -> bool {
        self == Self::PromptReady
    }
}

/// Walks the fixed loading messages once and then stays on the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTicker {
    next: usize,
}

impl MessageTicker {
    pub fn tick(&mut self) -> Option<&'static str> {
        let message = LOADING_MESSAGES.get(self.next).copied()?;
        self.next += 1;
        Some(message)
    }
}

/// Character-by-character reveal of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Reveals one more character and returns the visible prefix.
    pub fn step(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_run_once_in_order() {
        let mut ticker = MessageTicker::default();
        let seen: Vec<_> = std::iter::from_fn(|| ticker.tick()).collect();
        assert_eq!(seen, LOADING_MESSAGES.to_vec());
        assert_eq!(ticker.tick(), None);
    }

    #[test]
    fn typewriter_reveals_every_character() {
        let mut typewriter = Typewriter::new("nc 10.0.0.1 ✓");
        let mut last = String::new();
        let mut steps = 0;
        while let Some(visible) = typewriter.step() {
            assert!(visible.starts_with(&last));
            last = visible;
            steps += 1;
        }
        assert_eq!(last, "nc 10.0.0.1 ✓");
        assert_eq!(steps, "nc 10.0.0.1 ✓".chars().count());
        assert!(typewriter.is_done());
    }

    #[test]
    fn empty_text_is_already_done() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.step(), None);
    }

    #[test]
    fn phase_visibility() {
        assert!(IntroPhase::Loading.shows_loading());
        assert!(IntroPhase::Fading.shows_loading());
        assert!(!IntroPhase::Fading.prompt_interactive());
        assert!(!IntroPhase::PromptReady.shows_loading());
        assert!(IntroPhase::PromptReady.prompt_interactive());
        assert!(IntroPhase::Starting.shows_prompt());
        assert!(!IntroPhase::Started.shows_prompt());
    }
}
