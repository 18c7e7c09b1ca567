//! Shell - the command-line interaction engine
//!
//! Everything the site does when a key is pressed. Features:
//! - Closed command vocabulary (echo commands + utility commands)
//! - Output log of command echoes, rendered sections, and error rebukes
//! - History recall with up/down arrows
//! - Prefix autocompletion on Tab, command hints on '.'
//! - Single-line input with basic editing
//!
//! No rendering happens here: the output log is plain data, and the view
//! layer repaints from it after every change.

pub mod autocomplete;
pub mod command;
pub mod content;
pub mod history;
pub mod session;
pub mod terminal;

pub use autocomplete::{Completion, complete, matches};
pub use command::{Command, EchoCommand, UnknownCommand, UtilityCommand, VOCABULARY};
pub use content::Payload;
pub use history::{Direction, History};
pub use session::{Effect, OutputEntry, Session};
pub use terminal::{KeyResult, Terminal};
