// Diagnostics console state.
// In-app message log for fetch failures and structural defects, with an
// unread badge while the overlay is closed.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the diagnostics log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Diagnostics console: message log plus overlay view state.
#[derive(Debug, Default)]
pub struct Console {
    pub messages: Vec<ConsoleMessage>,
    pub unread: usize,
    pub visible: bool,
    pub list_state: ListState,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::info(message));
    }

    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::warn(message));
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.push(ConsoleMessage::error(message));
    }

    fn push(&mut self, message: ConsoleMessage) {
        self.messages.push(message);
        if self.visible {
            self.scroll_to_bottom();
        } else {
            self.unread += 1;
        }
    }

    /// Toggle the overlay; opening it clears the unread badge.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.unread = 0;
            self.scroll_to_bottom();
        }
    }

    fn scroll_to_bottom(&mut self) {
        if !self.messages.is_empty() {
            self.list_state.select(Some(self.messages.len() - 1));
        }
    }

    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => self.messages.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.messages.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_badge() {
        let mut console = Console::new();

        console.log_error("fetch failed");
        console.log_warn("no panel for tab");
        assert_eq!(console.unread, 2);

        console.toggle();
        assert!(console.visible);
        assert_eq!(console.unread, 0);

        // Messages while open do not accumulate unread.
        console.log_info("hydrated section");
        assert_eq!(console.unread, 0);
        assert_eq!(console.messages.len(), 3);
    }

    #[test]
    fn test_levels() {
        let mut console = Console::new();
        console.log_info("a");
        console.log_error("b");

        assert_eq!(console.messages[0].level, ConsoleLevel::Info);
        assert_eq!(console.messages[1].level, ConsoleLevel::Error);
    }
}
