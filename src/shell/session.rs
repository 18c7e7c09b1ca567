//! Output log and command dispatch
//!
//! [`Session`] is the single owner of everything a submitted line can
//! change: the ordered output log and the command history. [`Session::dispatch`]
//! is the only state-transition function; the input controller and the view
//! never touch the log directly. Side effects the engine cannot perform
//! itself (saving the CV) come back as [`Effect`] requests for the platform
//! layer to run.
//!
//! Dispatch is synchronous and deterministic: the same (log, history, input)
//! always produces the same resulting state.

use super::command::{ALL_SECTIONS, Command, UtilityCommand};
use super::content::{self, Payload};
use super::history::{Direction, History};

/// Glyph shown in place of the prompt before each section when `all`
/// composites the whole site.
const SECTION_GLYPH: &str = "--";

/// Joiner for autocomplete candidate listings.
const CANDIDATE_GAP: &str = "    ";

/// One entry in the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    /// Echo of a submitted line: prompt glyph plus raw input, casing kept.
    Command { prompt: String, input: String },
    /// A content block for an echo command.
    Rendered(Payload),
    /// The rebuke for input outside the vocabulary (lower-cased).
    Error(String),
    /// A plain line (autocomplete candidate listings).
    Text(String),
}

impl OutputEntry {
    /// Flatten to displayable lines. Payload text passes through untouched.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Command { prompt, input } => vec![format!("{} {}", prompt, input)],
            Self::Rendered(payload) => payload.lines().map(String::from).collect(),
            Self::Error(input) => content::error_message(input).lines().map(String::from).collect(),
            Self::Text(text) => vec![text.clone()],
        }
    }
}

/// A side effect a dispatch asks the platform layer to run. Fire-and-forget;
/// nothing comes back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Save a binary artifact under a suggested file name.
    Download {
        uri: &'static str,
        file_name: &'static str,
    },
}

/// One terminal session: the output log plus the command history.
#[derive(Debug)]
pub struct Session {
    prompt: String,
    output: Vec<OutputEntry>,
    history: History,
    /// Bumped on every log mutation so the view knows when to repaint the
    /// whole log rather than just the input line.
    revision: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_prompt(">>")
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            output: Vec::new(),
            history: History::new(),
            revision: 0,
        }
    }

    /// Dispatch one submitted line:
    /// 1. record it to history (blank lines are skipped there),
    /// 2. resolve it case-insensitively against the vocabulary,
    /// 3. append the echo and the outcome to the log; `clear` and `all`
    ///    replace the log wholesale instead.
    pub fn dispatch(&mut self, input: &str) -> Option<Effect> {
        self.revision += 1;
        let echo = self.echo(input);
        self.history.record(input);

        match Command::parse(input) {
            Err(unknown) => {
                self.output.push(echo);
                self.output.push(OutputEntry::Error(unknown.0));
                None
            }
            Ok(Command::Echo(cmd)) => {
                self.output.push(echo);
                self.output.push(OutputEntry::Rendered(content::payload(cmd)));
                None
            }
            Ok(Command::Utility(cmd)) => self.run_utility(cmd, echo),
        }
    }

    fn run_utility(&mut self, cmd: UtilityCommand, echo: OutputEntry) -> Option<Effect> {
        match cmd {
            UtilityCommand::Clear => {
                // The triggering echo is not retained.
                self.output.clear();
                None
            }
            UtilityCommand::All => {
                self.output.clear();
                self.output.push(echo);
                for section in ALL_SECTIONS {
                    self.output.push(OutputEntry::Command {
                        prompt: SECTION_GLYPH.to_string(),
                        input: section.name().to_string(),
                    });
                    self.output.push(OutputEntry::Rendered(content::payload(section)));
                }
                None
            }
            UtilityCommand::DownloadCv => {
                self.output.push(echo);
                Some(Effect::Download {
                    uri: content::CV_URI,
                    file_name: content::CV_FILE_NAME,
                })
            }
        }
    }

    /// Append a candidate listing: an echo of the partial input, then the
    /// candidates joined four-spaced. Direct append on behalf of Tab and the
    /// '.' hint; deliberately not a dispatch. Zero candidates append a blank
    /// listing line.
    pub fn list_candidates(&mut self, partial: &str, candidates: &[&str]) {
        self.revision += 1;
        let echo = self.echo(partial);
        self.output.push(echo);
        self.output.push(OutputEntry::Text(candidates.join(CANDIDATE_GAP)));
    }

    /// Empty the log without a dispatch. This is the Ctrl+L path; `clear`
    /// as a command goes through [`Session::dispatch`].
    pub fn clear_output(&mut self) {
        self.revision += 1;
        self.output.clear();
    }

    /// History navigation on behalf of the input controller.
    pub fn recall(&mut self, direction: Direction) -> &str {
        self.history.navigate(direction)
    }

    fn echo(&self, input: &str) -> OutputEntry {
        OutputEntry::Command {
            prompt: self.prompt.clone(),
            input: input.to_string(),
        }
    }

    pub fn entries(&self) -> &[OutputEntry] {
        &self.output
    }

    /// Flatten the whole log to displayable lines.
    pub fn lines(&self) -> Vec<String> {
        self.output.iter().flat_map(|entry| entry.lines()).collect()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::command::EchoCommand;

    fn session() -> Session {
        Session::with_prompt(">")
    }

    fn echo_entry(input: &str) -> OutputEntry {
        OutputEntry::Command {
            prompt: ">".to_string(),
            input: input.to_string(),
        }
    }

    // ============ Dispatch: unknown input ============

    #[test]
    fn test_unknown_input_appends_echo_and_error() {
        let mut s = session();
        s.dispatch("xyz");
        assert_eq!(s.entries(), [echo_entry("xyz"), OutputEntry::Error("xyz".to_string())]);
    }

    #[test]
    fn test_unknown_input_echo_keeps_casing_error_is_lowered() {
        let mut s = session();
        s.dispatch("SUDO su");
        assert_eq!(
            s.entries(),
            [echo_entry("SUDO su"), OutputEntry::Error("sudo su".to_string())]
        );
    }

    #[test]
    fn test_empty_input_runs_the_error_path() {
        let mut s = session();
        s.dispatch("");
        assert_eq!(s.entries(), [echo_entry(""), OutputEntry::Error(String::new())]);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_error_entry_renders_two_lines() {
        let mut s = session();
        s.dispatch("frobnicate now");
        let lines = s.entries()[1].lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"frobnicate\""));
    }

    // ============ Dispatch: echo commands ============

    #[test]
    fn test_echo_command_appends_echo_and_payload() {
        let mut s = session();
        s.dispatch("about");
        assert_eq!(
            s.entries(),
            [
                echo_entry("about"),
                OutputEntry::Rendered(content::payload(EchoCommand::About)),
            ]
        );
    }

    #[test]
    fn test_echo_command_is_case_insensitive_but_echo_is_verbatim() {
        let mut s = session();
        s.dispatch("About");
        assert_eq!(
            s.entries(),
            [
                echo_entry("About"),
                OutputEntry::Rendered(content::payload(EchoCommand::About)),
            ]
        );
    }

    #[test]
    fn test_dispatch_appends_to_existing_log() {
        let mut s = session();
        s.dispatch("help");
        s.dispatch("about");
        assert_eq!(s.entries().len(), 4);
    }

    // ============ Dispatch: utility commands ============

    #[test]
    fn test_clear_empties_the_log() {
        let mut s = session();
        s.dispatch("help");
        s.dispatch("xyz");
        s.dispatch("clear");
        assert!(s.entries().is_empty());
    }

    #[test]
    fn test_all_replaces_log_with_sections_in_fixed_order() {
        let mut s = session();
        s.dispatch("help");
        s.dispatch("all");

        let entries = s.entries();
        // Echo plus a header and a payload per section.
        assert_eq!(entries.len(), 1 + 2 * 7);
        assert_eq!(entries[0], echo_entry("all"));

        let headers: Vec<_> = entries
            .iter()
            .filter_map(|entry| match entry {
                OutputEntry::Command { prompt, input } if prompt == "--" => Some(input.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headers,
            vec!["about", "awards", "skills", "projects", "repo", "contact", "website"]
        );
    }

    #[test]
    fn test_all_sections_pair_headers_with_payloads() {
        let mut s = session();
        s.dispatch("all");
        let entries = s.entries();
        assert_eq!(
            entries[1],
            OutputEntry::Command {
                prompt: "--".to_string(),
                input: "about".to_string(),
            }
        );
        assert_eq!(entries[2], OutputEntry::Rendered(content::payload(EchoCommand::About)));
    }

    #[test]
    fn test_download_cv_appends_echo_only_and_requests_download() {
        let mut s = session();
        let effect = s.dispatch("download_cv");
        assert_eq!(s.entries(), [echo_entry("download_cv")]);
        assert_eq!(
            effect,
            Some(Effect::Download {
                uri: content::CV_URI,
                file_name: content::CV_FILE_NAME,
            })
        );
    }

    #[test]
    fn test_only_download_cv_produces_an_effect() {
        let mut s = session();
        assert_eq!(s.dispatch("help"), None);
        assert_eq!(s.dispatch("clear"), None);
        assert_eq!(s.dispatch("all"), None);
        assert_eq!(s.dispatch("nonsense"), None);
    }

    // ============ History interplay ============

    #[test]
    fn test_history_records_non_blank_submissions_only() {
        let mut s = session();
        s.dispatch("about");
        s.dispatch("xyz");
        s.dispatch("");
        assert_eq!(s.history().entries(), ["about", "xyz"]);
        assert_eq!(s.history().cursor(), 2);
    }

    #[test]
    fn test_recall_walks_history() {
        let mut s = session();
        s.dispatch("about");
        s.dispatch("xyz");
        assert_eq!(s.recall(Direction::Up), "xyz");
        assert_eq!(s.recall(Direction::Up), "about");
        assert_eq!(s.recall(Direction::Down), "xyz");
        assert_eq!(s.recall(Direction::Down), "");
    }

    // ============ Candidate listings ============

    #[test]
    fn test_list_candidates_appends_echo_and_joined_line() {
        let mut s = session();
        s.list_candidates("a", &["about", "awards", "all"]);
        assert_eq!(
            s.entries(),
            [
                echo_entry("a"),
                OutputEntry::Text("about    awards    all".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_candidates_with_no_matches_appends_blank_line() {
        let mut s = session();
        s.list_candidates("zzz", &[]);
        assert_eq!(s.entries()[1], OutputEntry::Text(String::new()));
        assert_eq!(s.entries()[1].lines(), vec![String::new()]);
    }

    // ============ Determinism ============

    #[test]
    fn test_dispatch_is_deterministic() {
        let script = ["help", "About", "xyz", "", "all", "download_cv", "skills"];
        let mut a = session();
        let mut b = session();
        for input in script {
            a.dispatch(input);
            b.dispatch(input);
        }
        assert_eq!(a.entries(), b.entries());
        assert_eq!(a.history().entries(), b.history().entries());
    }

    // ============ View plumbing ============

    #[test]
    fn test_revision_bumps_on_every_log_mutation() {
        let mut s = session();
        let r0 = s.revision();
        s.dispatch("help");
        let r1 = s.revision();
        assert!(r1 > r0);
        s.list_candidates("a", &["about"]);
        let r2 = s.revision();
        assert!(r2 > r1);
        s.clear_output();
        assert!(s.revision() > r2);
    }

    #[test]
    fn test_lines_flatten_the_log() {
        let mut s = session();
        s.dispatch("contact");
        let lines = s.lines();
        assert_eq!(lines[0], "> contact");
        assert!(lines.iter().any(|line| line.contains("ianpan870102@gmail.com")));
    }
}
