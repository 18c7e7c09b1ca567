//! cyberspace - a personal site that boots into a terminal
//!
//! The whole site is one shell session: type a command, get a section of
//! the site back. Everything with real behavior lives in [`shell`] and is
//! plain Rust, compiled and tested natively. The browser only ever sees a
//! thin layer of glue:
//! - [`terminal`]: xterm.js bindings and key-event plumbing
//! - `boot`: banner, welcome message, wiring it all together
//!
//! Platform: wasm32-unknown-unknown in the browser; the `serve` binary is
//! a native static-file server for development.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod shell;

#[cfg(target_arch = "wasm32")]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
mod boot;

/// Initialize panic hook for better error messages in browser console
#[cfg(target_arch = "wasm32")]
fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Boot the site. This is the WASM entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    init_panic_hook();
    boot::boot();
}

/// Console logging helper
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Log to browser console (WASM)
#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log(&format!($($t)*))
    };
}

/// Log to stderr (native)
#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        eprintln!($($t)*)
    };
}
