//! confetti-fall: Falling confetti overlay for web pages.
//!
//! This crate provides a WASM-based confetti effect that can be used as a
//! Leptos component ([`ConfettiOverlay`]) or from plain JavaScript through the
//! exported [`Confetti`] class.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::confetti::{
	Confetti, ConfettiController, ConfettiOptions, ConfettiOverlay, Palette, Stacking,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("confetti-fall: logging initialized");
}

/// Load effect options from a script element with id="confetti-config".
/// Expected format: JSON such as { "count": 120, "colors": ["#fff", "gold"] }
fn load_options() -> Option<ConfettiOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("confetti-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match ConfettiOptions::from_json(&json_text) {
		Ok(options) => {
			info!("confetti-fall: loaded page options");
			Some(options)
		}
		Err(e) => {
			warn!("confetti-fall: failed to parse options: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads options from the DOM and renders the overlay with start/stop/clear controls.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_options().unwrap_or_default();
	let (running, set_running) = signal(true);
	let (cleared, set_cleared) = signal(0u32);

	let on_clear = move |_| {
		set_running.set(false);
		set_cleared.update(|n| *n += 1);
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Confetti" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ConfettiOverlay options=options running=running clear=cleared />
		<div class="confetti-controls">
			<button on:click=move |_| set_running.set(true)>"Start"</button>
			<button on:click=move |_| set_running.set(false)>"Stop"</button>
			<button on:click=on_clear>"Clear"</button>
		</div>
	}
}
