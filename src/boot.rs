//! Boot sequence
//!
//! The site comes up in one synchronous pass: build the engine, bind
//! xterm.js, paint the banner, focus the prompt. There is nothing to load
//! and nothing to wait for.

use crate::terminal;

/// Boot the site
pub fn boot() {
    if let Err(e) = terminal::init() {
        web_sys::console::error_1(&format!("[boot] terminal init failed: {:?}", e).into());
    }
}
