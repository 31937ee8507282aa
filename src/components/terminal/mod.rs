//! Simulated terminal component.
//!
//! A static command table mapped over a transcript view: fixed strings in,
//! fixed responses out, with `clear` resetting the transcript. The content
//! (prompt, banners, command table) can be supplied as JSON embedded in the
//! page; anything missing falls back to the built-in defaults.

mod commands;
mod component;

pub use commands::{CommandSet, Reply};
pub use component::TerminalWindow;
