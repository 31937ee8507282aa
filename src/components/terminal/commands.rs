//! The command table backing the simulated terminal.
//!
//! A fixed lookup from command name to response text, plus the `clear`
//! special case. Content is deserializable from JSON so the page can swap
//! the portfolio text without rebuilding the WASM bundle; every field falls
//! back to the built-in defaults.

use std::collections::HashMap;

use serde::Deserialize;

/// Result of interpreting one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
	/// A known command's response text.
	Output(String),
	/// `clear`: reset the transcript.
	Clear,
	/// Anything else, carrying the trimmed command name.
	Unknown(String),
}

/// Prompt, banner text, and the name -> response table.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CommandSet {
	/// Prompt shown before every input line.
	pub prompt: String,
	/// Banner printed when the terminal first opens.
	pub welcome: String,
	/// Banner printed after `clear` in place of the welcome text.
	pub cleared: String,
	pub commands: HashMap<String, String>,
}

impl Default for CommandSet {
	fn default() -> Self {
		let commands = [
			(
				"help",
				"Available commands:\nhelp, whois, work, projects, contact, cat, tip, clear",
			),
			(
				"whois",
				"Hi, I build things for the web.\nEngineer | Developer | Explorer",
			),
			("work", "Software engineer, currently deep in Rust and WASM."),
			(
				"projects",
				"This page is one of them! A terminal that floats on bubbles.",
			),
			("contact", "Email: hello@example.com"),
			("tip", "Try hovering over the bubbles, dots, and stars!"),
			("cat", " /\\_/\\\n( o.o )\n > ^ <"),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();

		Self {
			prompt: "guest@portfolio ~ %".to_string(),
			welcome: "Welcome! Type `help` to get started.".to_string(),
			cleared: "Type `help` to continue.".to_string(),
			commands,
		}
	}
}

impl CommandSet {
	/// Interpret one line of input. The line is trimmed first; `clear` is
	/// the only command with special handling.
	pub fn interpret(&self, line: &str) -> Reply {
		let name = line.trim();
		if name == "clear" {
			return Reply::Clear;
		}
		match self.commands.get(name) {
			Some(text) => Reply::Output(text.clone()),
			None => Reply::Unknown(name.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_commands_resolve_after_trimming() {
		let set = CommandSet::default();
		let Reply::Output(text) = set.interpret("  tip  ") else {
			panic!("expected output");
		};
		assert!(text.contains("bubbles"));
	}

	#[test]
	fn clear_is_special_cased() {
		let set = CommandSet::default();
		assert_eq!(set.interpret(" clear "), Reply::Clear);
	}

	#[test]
	fn unknown_commands_echo_the_trimmed_name() {
		let set = CommandSet::default();
		assert_eq!(
			set.interpret("  sudo rm  "),
			Reply::Unknown("sudo rm".to_string())
		);
	}

	#[test]
	fn json_overrides_merge_over_defaults() {
		let set: CommandSet =
			serde_json::from_str(r#"{ "prompt": "me ~ %" }"#).expect("valid json");
		assert_eq!(set.prompt, "me ~ %");
		// Untouched fields keep their defaults.
		assert_eq!(set.welcome, CommandSet::default().welcome);
		assert!(set.commands.contains_key("help"));
	}

	#[test]
	fn json_can_replace_the_whole_table() {
		let set: CommandSet =
			serde_json::from_str(r#"{ "commands": { "hi": "Hello there." } }"#)
				.expect("valid json");
		assert_eq!(
			set.interpret("hi"),
			Reply::Output("Hello there.".to_string())
		);
		assert_eq!(set.interpret("help"), Reply::Unknown("help".to_string()));
	}
}
