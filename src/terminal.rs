//! Terminal view using xterm.js
//!
//! Direct wasm_bindgen bindings to xterm.js loaded via script tag.
//! This avoids the bundler requirement of xterm-js-rs.
//!
//! The view is deliberately dumb: key events go to [`shell::Terminal`],
//! and whenever the engine reports a change the screen is repainted from
//! the output log and scrolled to the newest entry. The engine's revision
//! counter tells us whether the log changed or only the input line did.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::shell::{self, Effect, KeyResult, content};

// Direct bindings to xterm.js globals (loaded via script tag)
#[wasm_bindgen]
extern "C" {
    /// The xterm.js Terminal class (global `Terminal`)
    #[wasm_bindgen(js_name = Terminal)]
    type XTerm;

    #[wasm_bindgen(constructor, js_class = "Terminal")]
    fn new(options: &JsValue) -> XTerm;

    #[wasm_bindgen(method)]
    fn open(this: &XTerm, element: &web_sys::HtmlElement);

    #[wasm_bindgen(method)]
    fn write(this: &XTerm, data: &str);

    #[wasm_bindgen(method)]
    fn writeln(this: &XTerm, data: &str);

    #[wasm_bindgen(method)]
    fn clear(this: &XTerm);

    #[wasm_bindgen(method)]
    fn focus(this: &XTerm);

    #[wasm_bindgen(method, js_name = loadAddon)]
    fn load_addon(this: &XTerm, addon: &JsValue);

    #[wasm_bindgen(method, js_name = onKey)]
    fn on_key(this: &XTerm, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = onData)]
    fn on_data(this: &XTerm, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = scrollToBottom)]
    fn scroll_to_bottom(this: &XTerm);

    /// The xterm-addon-fit FitAddon class (global `FitAddon`)
    #[wasm_bindgen(js_name = FitAddon)]
    type XTermFitAddon;

    #[wasm_bindgen(constructor, js_class = "FitAddon")]
    fn new_fit() -> XTermFitAddon;

    #[wasm_bindgen(method)]
    fn fit(this: &XTermFitAddon);
}

thread_local! {
    // The engine. All state transitions happen in here; the xterm handles
    // themselves live inside the forgotten event closures.
    static APP: RefCell<Option<shell::Terminal>> = RefCell::new(None);
    // Log revision the screen was last painted at.
    static PAINTED_REVISION: Cell<u64> = Cell::new(u64::MAX);
}

/// Initialize the xterm.js terminal and wire the engine to it
pub fn init() -> Result<(), JsValue> {
    // Create terminal options
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"cursorBlink".into(), &true.into())?;
    js_sys::Reflect::set(&options, &"cursorWidth".into(), &2.into())?;
    js_sys::Reflect::set(&options, &"fontSize".into(), &14.into())?;
    js_sys::Reflect::set(
        &options,
        &"fontFamily".into(),
        &"'JetBrains Mono', 'Fira Code', 'Cascadia Code', monospace".into(),
    )?;

    // Theme - green-on-black, like the old jQuery incarnation of the site
    let theme = js_sys::Object::new();
    js_sys::Reflect::set(&theme, &"foreground".into(), &"#e8e8e8".into())?;
    js_sys::Reflect::set(&theme, &"background".into(), &"#000000".into())?;
    js_sys::Reflect::set(&theme, &"cursor".into(), &"#00de12".into())?;
    js_sys::Reflect::set(&theme, &"cursorAccent".into(), &"#000000".into())?;
    js_sys::Reflect::set(&theme, &"green".into(), &"#00de12".into())?;
    js_sys::Reflect::set(&theme, &"selectionBackground".into(), &"#1d3d1d".into())?;
    js_sys::Reflect::set(&options, &"theme".into(), &theme)?;

    // Create terminal
    let terminal = XTerm::new(&options.into());

    // Create container div filling the page
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let container = document.create_element("div")?;
    container.set_id("terminal");

    let html_container: web_sys::HtmlElement = container.dyn_into()?;
    let style = html_container.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("background", "#000000")?;

    document
        .body()
        .ok_or("no body")?
        .append_child(&html_container)?;

    // Open terminal in container
    terminal.open(&html_container);

    // Add fit addon to auto-resize
    let fit_addon = XTermFitAddon::new_fit();
    terminal.load_addon(fit_addon.as_ref());
    fit_addon.fit();

    // Build the engine
    APP.with(|app| {
        *app.borrow_mut() = Some(shell::Terminal::with_prompt(content::PROMPT));
    });

    let term_rc = Rc::new(terminal);
    let fit_rc = Rc::new(fit_addon);

    // First paint: banner, welcome message, prompt
    refresh(&term_rc);

    // Set up keyboard handler (editing and navigation keys)
    setup_keyboard_handler(term_rc.clone());

    // Set up data handler (typed characters and paste)
    setup_data_handler(term_rc.clone());

    // Set up resize handler
    setup_resize_handler(fit_rc);

    // Clicking anywhere in the page puts the cursor back in the prompt
    setup_focus_handler(term_rc.clone());

    term_rc.focus();

    crate::console_log!("cyberspace terminal ready");

    Ok(())
}

/// Trigger a save of `uri` under `file_name` via a synthetic anchor click.
pub fn download(uri: &str, file_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_download(file_name);
    link.set_href(uri);
    link.click();
    link.remove();
    Ok(())
}

/// Repaint if the engine changed; a full repaint when the output log moved,
/// otherwise just the input line.
fn refresh(term: &XTerm) {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            let revision = app.session().revision();
            if PAINTED_REVISION.with(|r| r.get()) == revision {
                redraw_input_line(term, app);
            } else {
                repaint(term, app);
                PAINTED_REVISION.with(|r| r.set(revision));
            }
        }
    });
}

/// Full repaint: banner, welcome message, the whole output log, the input
/// line. Ends scrolled to the newest entry.
fn repaint(term: &XTerm, app: &shell::Terminal) {
    term.clear();
    term.write("\x1b[2J\x1b[H");

    for line in content::BANNER.lines() {
        term.writeln(line);
    }
    let year = js_sys::Date::new_0().get_full_year();
    term.writeln(&format!("  \u{a9} {} Ian Y.E. Pan", year));
    term.writeln("");
    for line in content::WELCOME.lines() {
        term.writeln(line);
    }
    term.writeln("");

    for line in app.session().lines() {
        term.writeln(&line);
    }

    write_input_line(term, app);
    term.scroll_to_bottom();
}

/// Clear the current line and rewrite prompt + buffer.
fn redraw_input_line(term: &XTerm, app: &shell::Terminal) {
    term.write("\x1b[2K\r");
    write_input_line(term, app);
}

fn write_input_line(term: &XTerm, app: &shell::Terminal) {
    term.write(&format!("{} {}", app.session().prompt(), app.input()));
    let move_back = app.input().len() - app.cursor();
    if move_back > 0 {
        term.write(&format!("\x1b[{}D", move_back));
    }
}

fn setup_keyboard_handler(term: Rc<XTerm>) {
    let term_for_closure = term.clone();

    let callback = Closure::wrap(Box::new(move |event: JsValue| {
        let dom_event: web_sys::KeyboardEvent =
            match js_sys::Reflect::get(&event, &"domEvent".into()) {
                Ok(value) => value.unchecked_into(),
                Err(_) => return,
            };

        let key = dom_event.key();
        let code = dom_event.code();
        let ctrl = dom_event.ctrl_key();
        let alt = dom_event.alt_key();

        // Printable characters arrive through onData; only editing and
        // navigation keys are handled here.
        let special = matches!(
            code.as_str(),
            "Enter"
                | "NumpadEnter"
                | "Backspace"
                | "Delete"
                | "Tab"
                | "ArrowUp"
                | "ArrowDown"
                | "ArrowLeft"
                | "ArrowRight"
                | "Home"
                | "End"
        );
        if !special && !ctrl {
            return;
        }
        if code == "Tab" {
            // Keep focus in the terminal instead of the browser chrome
            dom_event.prevent_default();
        }

        let result = APP.with(|app| {
            app.borrow_mut()
                .as_mut()
                .map(|app| app.handle_key(&key, &code, ctrl, alt))
        });

        match result {
            Some(KeyResult::Handled) => refresh(&term_for_closure),
            Some(KeyResult::Effect(Effect::Download { uri, file_name })) => {
                refresh(&term_for_closure);
                if let Err(e) = download(uri, file_name) {
                    web_sys::console::error_1(&e);
                }
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);

    term.on_key(callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Handle text data input (typed characters and paste)
fn setup_data_handler(term: Rc<XTerm>) {
    let term_for_closure = term.clone();

    let callback = Closure::wrap(Box::new(move |data: String| {
        if data.is_empty() {
            return;
        }

        // Control sequences (Enter, Tab, arrows, backspace) are handled by
        // the onKey handler.
        let first_byte = data.as_bytes()[0];
        if first_byte < 32 || first_byte == 127 {
            return;
        }

        let mut changed = false;
        APP.with(|app| {
            if let Some(app) = app.borrow_mut().as_mut() {
                for ch in data.chars() {
                    let result = app.handle_key(&ch.to_string(), "", false, false);
                    if result != KeyResult::Ignored {
                        changed = true;
                    }
                }
            }
        });

        if changed {
            refresh(&term_for_closure);
        }
    }) as Box<dyn FnMut(_)>);

    term.on_data(callback.as_ref().unchecked_ref());
    callback.forget();
}

fn setup_resize_handler(fit_addon: Rc<XTermFitAddon>) {
    let callback = Closure::wrap(Box::new(move || {
        fit_addon.fit();
    }) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    }
    callback.forget();
}

fn setup_focus_handler(term: Rc<XTerm>) {
    let callback = Closure::wrap(Box::new(move || {
        term.focus();
    }) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    }
    callback.forget();
}
