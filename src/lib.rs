//! portfolio-terminal: a terminal-style portfolio page with an animated,
//! pointer-reactive particle backdrop.
//!
//! Two Leptos components share the page: `BackdropCanvas` animates drifting
//! bubbles, dots, and twinkling stars on a fullscreen canvas, and
//! `TerminalWindow` simulates a command line on top of it, backed by a
//! static command table.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::backdrop::{BackdropCanvas, BackdropTheme};
pub use components::terminal::{CommandSet, TerminalWindow};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-terminal: logging initialized");
}

/// Load terminal content from a script element with id="terminal-data".
/// Expected format: JSON with { prompt, welcome, cleared, commands };
/// missing fields keep the built-in defaults.
fn load_commands() -> Option<CommandSet> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("terminal-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<CommandSet>(&json_text) {
		Ok(set) => {
			info!(
				"portfolio-terminal: loaded {} commands",
				set.commands.len()
			);
			Some(set)
		}
		Err(e) => {
			warn!("portfolio-terminal: failed to parse terminal data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the particle backdrop with the terminal window layered on top.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Page content comes from the DOM when present, defaults otherwise.
	let commands = load_commands().unwrap_or_default();
	let commands_signal = Signal::derive(move || commands.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio Terminal" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<BackdropCanvas />
		<TerminalWindow commands=commands_signal />
	}
}
