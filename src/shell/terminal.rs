//! Line input
//!
//! The input controller: a single-line buffer plus the key-event state
//! machine over it. Keys arrive as the DOM reports them (`key` is the
//! logical value, `code` the physical key) and everything interesting is
//! delegated:
//! - Enter submits the buffer through [`Session::dispatch`], empty or not
//! - ArrowUp/ArrowDown recall history, cursor moving to the end
//! - Tab completes a unique prefix or lists the candidates
//! - '.' lists the candidates without touching the buffer
//!
//! The buffer and its cursor belong to this type alone; the output log and
//! the history cursor belong to the [`Session`].

use super::autocomplete::{self, Completion};
use super::history::Direction;
use super::session::{Effect, Session};

/// What a key event did, from the view's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Not a key we handle.
    Ignored,
    /// State changed; the view should repaint.
    Handled,
    /// State changed and the platform layer must run a side effect.
    Effect(Effect),
}

/// Terminal input state
pub struct Terminal {
    session: Session,
    input: String,
    cursor: usize,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            input: String::new(),
            cursor: 0,
        }
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            session: Session::with_prompt(prompt),
            input: String::new(),
            cursor: 0,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: &str, code: &str, ctrl: bool, _alt: bool) -> KeyResult {
        if ctrl {
            return match key {
                // Ctrl+L wipes the screen like `clear`, minus the dispatch.
                "l" => {
                    self.session.clear_output();
                    KeyResult::Handled
                }
                _ => KeyResult::Ignored,
            };
        }

        match code {
            "Enter" | "NumpadEnter" => self.submit(),
            "ArrowUp" => self.recall(Direction::Up),
            "ArrowDown" => self.recall(Direction::Down),
            "Tab" => self.autocomplete(),
            "Backspace" => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor);
                }
                KeyResult::Handled
            }
            "Delete" => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                }
                KeyResult::Handled
            }
            "ArrowLeft" => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                KeyResult::Handled
            }
            "ArrowRight" => {
                if self.cursor < self.input.len() {
                    self.cursor += 1;
                }
                KeyResult::Handled
            }
            "Home" => {
                self.cursor = 0;
                KeyResult::Handled
            }
            "End" => {
                self.cursor = self.input.len();
                KeyResult::Handled
            }
            _ => self.insert(key),
        }
    }

    /// Submit the buffer through the full dispatch path, empty or not.
    /// Empty input produces the error rebuke but never reaches history.
    fn submit(&mut self) -> KeyResult {
        let input = std::mem::take(&mut self.input);
        self.cursor = 0;
        match self.session.dispatch(&input) {
            Some(effect) => KeyResult::Effect(effect),
            None => KeyResult::Handled,
        }
    }

    fn recall(&mut self, direction: Direction) -> KeyResult {
        self.input = self.session.recall(direction).to_string();
        self.cursor = self.input.len();
        KeyResult::Handled
    }

    /// Tab: a unique match rewrites the buffer verbatim; otherwise the
    /// candidates are appended to the log and the buffer stays as typed.
    fn autocomplete(&mut self) -> KeyResult {
        match autocomplete::complete(&self.input) {
            Completion::Unique(name) => {
                self.input = name.to_string();
                self.cursor = self.input.len();
            }
            Completion::Ambiguous(candidates) => {
                self.session.list_candidates(&self.input, &candidates);
            }
        }
        KeyResult::Handled
    }

    /// '.' hint: the read-only variant of Tab. Always lists the candidate
    /// set for the current buffer, never rewrites it.
    fn hint(&mut self) -> KeyResult {
        let candidates = autocomplete::matches(&self.input);
        self.session.list_candidates(&self.input, &candidates);
        KeyResult::Handled
    }

    fn insert(&mut self, key: &str) -> KeyResult {
        if key == "." {
            return self.hint();
        }
        // The buffer is ASCII by construction, so the cursor can stay a
        // plain byte index.
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_graphic() || ch == ' ' => {
                self.input.insert(self.cursor, ch);
                self.cursor += 1;
                KeyResult::Handled
            }
            _ => KeyResult::Ignored,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
