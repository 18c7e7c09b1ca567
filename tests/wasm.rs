//! Smoke tests for the wasm32 build of the engine
//!
//! The engine is plain Rust and gets its real coverage natively; this just
//! confirms the same behavior under wasm-bindgen.

#![cfg(target_arch = "wasm32")]

use cyberspace::shell::{KeyResult, Terminal};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn dispatch_works_under_wasm() {
    let mut term = Terminal::new();
    for ch in ["h", "e", "l", "p"] {
        term.handle_key(ch, "", false, false);
    }
    let result = term.handle_key("Enter", "Enter", false, false);
    assert_eq!(result, KeyResult::Handled);
    assert_eq!(term.session().entries().len(), 2);
}

#[wasm_bindgen_test]
fn tab_completion_works_under_wasm() {
    let mut term = Terminal::new();
    term.handle_key("w", "", false, false);
    term.handle_key("Tab", "Tab", false, false);
    assert_eq!(term.input(), "website");
}
