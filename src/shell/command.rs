//! Command vocabulary
//!
//! The closed set of commands the site understands, split into two kinds:
//! echo commands print a block of static content, utility commands change
//! terminal state or trigger a download. Submission is case-insensitive;
//! input is lower-cased before lookup, so `HELP` and `help` resolve to the
//! same command. Anything outside the vocabulary is [`UnknownCommand`].

/// A command whose only effect is printing a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoCommand {
    Help,
    About,
    Projects,
    Contact,
    Awards,
    Repo,
    Skills,
    Website,
}

impl EchoCommand {
    /// The name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Awards => "awards",
            Self::Repo => "repo",
            Self::Skills => "skills",
            Self::Website => "website",
        }
    }
}

/// A command with an effect beyond printing: clearing the screen,
/// compositing every section, or triggering the CV download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityCommand {
    Clear,
    All,
    DownloadCv,
}

impl UtilityCommand {
    /// The name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::All => "all",
            Self::DownloadCv => "download_cv",
        }
    }
}

/// Any member of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Echo(EchoCommand),
    Utility(UtilityCommand),
}

/// Input that is not in the vocabulary. Carries the lower-cased input so
/// the caller can echo it back in the rebuke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl std::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

/// Every command name in declaration order: echo commands first, then the
/// utilities. This is the universe the autocompleter matches against.
pub const VOCABULARY: [&str; 11] = [
    "help",
    "about",
    "projects",
    "contact",
    "awards",
    "repo",
    "skills",
    "website",
    "clear",
    "all",
    "download_cv",
];

/// The sections `all` composites, in its fixed display order. Intentionally
/// not the order the help listing uses.
pub const ALL_SECTIONS: [EchoCommand; 7] = [
    EchoCommand::About,
    EchoCommand::Awards,
    EchoCommand::Skills,
    EchoCommand::Projects,
    EchoCommand::Repo,
    EchoCommand::Contact,
    EchoCommand::Website,
];

impl Command {
    /// Resolve a raw input line against the vocabulary, ignoring case.
    pub fn parse(input: &str) -> Result<Self, UnknownCommand> {
        let lowered = input.to_lowercase();
        match lowered.as_str() {
            "help" => Ok(Self::Echo(EchoCommand::Help)),
            "about" => Ok(Self::Echo(EchoCommand::About)),
            "projects" => Ok(Self::Echo(EchoCommand::Projects)),
            "contact" => Ok(Self::Echo(EchoCommand::Contact)),
            "awards" => Ok(Self::Echo(EchoCommand::Awards)),
            "repo" => Ok(Self::Echo(EchoCommand::Repo)),
            "skills" => Ok(Self::Echo(EchoCommand::Skills)),
            "website" => Ok(Self::Echo(EchoCommand::Website)),
            "clear" => Ok(Self::Utility(UtilityCommand::Clear)),
            "all" => Ok(Self::Utility(UtilityCommand::All)),
            "download_cv" => Ok(Self::Utility(UtilityCommand::DownloadCv)),
            _ => Err(UnknownCommand(lowered)),
        }
    }

    /// The name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Echo(cmd) => cmd.name(),
            Self::Utility(cmd) => cmd.name(),
        }
    }
}
