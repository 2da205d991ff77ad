use std::time::{Duration, Instant};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub category: String,
    pub text: String,
    pub shown_at: Instant,
}

/// Server flash messages that remove themselves after a fixed delay.
///
/// Time is passed in rather than read, so callers drive the board from
/// their own clock or tick.
#[derive(Debug, Clone)]
pub struct FlashBoard {
    dismiss_after: Duration,
    messages: Vec<FlashMessage>,
}

impl FlashBoard {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, category: &str, text: &str, now: Instant) {
        self.messages.push(FlashMessage {
            category: category.to_string(),
            text: text.to_string(),
            shown_at: now,
        });
    }

    /// Remove and return every message that has been up for the full delay.
    pub fn sweep(&mut self, now: Instant) -> Vec<FlashMessage> {
        let dismiss_after = self.dismiss_after;
        let (expired, kept): (Vec<_>, Vec<_>) = self
            .messages
            .drain(..)
            .partition(|m| now.saturating_duration_since(m.shown_at) >= dismiss_after);
        self.messages = kept;
        expired
    }

    pub fn visible(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// When the next message is due to disappear, if any are showing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.messages
            .iter()
            .map(|m| m.shown_at + self.dismiss_after)
            .min()
    }
}

impl Default for FlashBoard {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}
