//! Leptos component for the simulated terminal window.
//!
//! A transcript of input/output lines above a prompt row. Enter submits the
//! current line to the command table; `clear` resets the transcript. The
//! window chrome is plain markup styled from CSS.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::commands::{CommandSet, Reply};

/// Input lines carry the prompt prefix; output lines do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
	Input,
	Output,
}

#[derive(Clone, Debug)]
struct Line {
	kind: LineKind,
	text: String,
}

impl Line {
	fn input(text: impl Into<String>) -> Self {
		Self {
			kind: LineKind::Input,
			text: text.into(),
		}
	}

	fn output(text: impl Into<String>) -> Self {
		Self {
			kind: LineKind::Output,
			text: text.into(),
		}
	}
}

/// Banner plus a blank spacer line underneath.
fn banner(text: &str) -> Vec<Line> {
	vec![Line::output(text), Line::output(" ")]
}

/// Renders the terminal window: traffic-light top bar, transcript, and the
/// prompt input row.
#[component]
pub fn TerminalWindow(#[prop(into)] commands: Signal<CommandSet>) -> impl IntoView {
	let lines = RwSignal::new(banner(&commands.get_untracked().welcome));
	let input = RwSignal::new(String::new());

	let submit = move |line: String| {
		let set = commands.get_untracked();
		match set.interpret(&line) {
			Reply::Clear => lines.set(banner(&set.cleared)),
			Reply::Output(text) => lines.update(|l| {
				l.push(Line::input(format!("> {}", line.trim())));
				l.push(Line::output(text));
			}),
			Reply::Unknown(name) => lines.update(|l| {
				l.push(Line::input(format!("> {name}")));
				l.push(Line::output(format!("Command not found: {name}")));
			}),
		}
	};

	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			let line = input.get_untracked();
			if !line.trim().is_empty() {
				submit(line);
				input.set(String::new());
			}
		}
	};

	view! {
		<div class="terminal-container">
			<div class="terminal-window">
				<div class="terminal-topbar">
					<div class="terminal-traffic-lights">
						<span class="traffic-light traffic-red" />
						<span class="traffic-light traffic-yellow" />
						<span class="traffic-light traffic-green" />
					</div>
				</div>
				<div class="terminal-content">
					{move || {
						let prompt = commands.get().prompt;
						lines
							.get()
							.into_iter()
							.map(|line| {
								let class = match line.kind {
									LineKind::Input => "terminal-line terminal-input",
									LineKind::Output => "terminal-line terminal-output",
								};
								let prefix = (line.kind == LineKind::Input)
									.then(|| {
										view! {
											<span class="terminal-prompt">{format!("{prompt} ")}</span>
										}
									});
								view! {
									<div class=class>
										{prefix}
										{line.text}
									</div>
								}
							})
							.collect_view()
					}}
					<div class="terminal-input-line">
						<span class="terminal-prompt">
							{move || format!("{} ", commands.get().prompt)}
						</span>
						<input
							class="terminal-input"
							prop:value=move || input.get()
							on:input=move |ev| input.set(event_target_value(&ev))
							on:keydown=on_keydown
							autofocus=true
						/>
					</div>
				</div>
			</div>
		</div>
	}
}
