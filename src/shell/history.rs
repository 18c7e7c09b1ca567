//! Command history
//!
//! Append-only log of submitted lines plus a cursor for up/down recall.
//! The cursor ranges over `[0, len]`; `len` is the "no selection" sentinel
//! meaning a fresh empty line. Entries keep submission order, oldest first.

/// Direction of one history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are not recorded. After an
    /// append the cursor points one past the newest entry.
    pub fn record(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        self.entries.push(input.to_string());
        self.cursor = self.entries.len();
    }

    /// Move the cursor one step and return the entry under it. `Up` floors
    /// at the oldest entry; `Down` caps at the past-the-end sentinel, where
    /// the returned line is empty.
    pub fn navigate(&mut self, direction: Direction) -> &str {
        self.cursor = match direction {
            Direction::Up => self.cursor.saturating_sub(1),
            Direction::Down => (self.cursor + 1).min(self.entries.len()),
        };
        if self.cursor == self.entries.len() {
            ""
        } else {
            &self.entries[self.cursor]
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_skips_blank_lines() {
        let mut history = History::new();
        history.record("about");
        history.record("xyz");
        history.record("");
        history.record("   ");
        assert_eq!(history.entries(), ["about", "xyz"]);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_up_returns_newest_first() {
        let mut history = History::new();
        history.record("first");
        history.record("second");
        assert_eq!(history.navigate(Direction::Up), "second");
        assert_eq!(history.navigate(Direction::Up), "first");
    }

    #[test]
    fn test_up_is_idempotent_at_oldest() {
        let mut history = History::new();
        history.record("only");
        assert_eq!(history.navigate(Direction::Up), "only");
        assert_eq!(history.navigate(Direction::Up), "only");
        assert_eq!(history.navigate(Direction::Up), "only");
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_down_past_end_returns_empty() {
        let mut history = History::new();
        history.record("cmd");
        history.navigate(Direction::Up);
        assert_eq!(history.navigate(Direction::Down), "");
        assert_eq!(history.navigate(Direction::Down), "");
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_up_then_down_round_trip() {
        let mut history = History::new();
        history.record("one");
        history.record("two");
        assert_eq!(history.navigate(Direction::Up), "two");
        assert_eq!(history.navigate(Direction::Up), "one");
        assert_eq!(history.navigate(Direction::Down), "two");
        assert_eq!(history.navigate(Direction::Down), "");
    }

    #[test]
    fn test_navigate_on_empty_history() {
        let mut history = History::new();
        assert_eq!(history.navigate(Direction::Up), "");
        assert_eq!(history.navigate(Direction::Down), "");
    }

    #[test]
    fn test_record_resets_cursor_past_end() {
        let mut history = History::new();
        history.record("one");
        history.record("two");
        history.navigate(Direction::Up);
        history.navigate(Direction::Up);
        history.record("three");
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.navigate(Direction::Up), "three");
    }
}
