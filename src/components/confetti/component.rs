//! Leptos component hosting the confetti effect.
//!
//! The component renders a full-viewport, click-through container and mounts
//! the effect onto it once the element exists. Two reactive inputs control the
//! lifecycle: `running` starts and stops the animation, and every change of
//! `clear` stops it and removes all pieces.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::Element;

use super::browser::{SharedLoop, mount};
use super::types::ConfettiOptions;

/// Falling confetti over the whole viewport.
///
/// If `options.container` names an element id, pieces are attached there
/// instead of the component's own overlay div.
#[component]
pub fn ConfettiOverlay(
	#[prop(optional)] options: ConfettiOptions,
	#[prop(into)] running: Signal<bool>,
	#[prop(into, default = Signal::stored(0))] clear: Signal<u32>,
) -> impl IntoView {
	let overlay_ref = NodeRef::<leptos::html::Div>::new();
	let frame_loop: Rc<RefCell<Option<SharedLoop>>> = Rc::new(RefCell::new(None));
	let use_overlay = options.container.is_none();
	let (frame_loop_run, frame_loop_clear) = (frame_loop.clone(), frame_loop);

	Effect::new(move |_| {
		let Some(overlay) = overlay_ref.get() else {
			return;
		};
		let should_run = running.get();

		let mut slot = frame_loop_run.borrow_mut();
		if slot.is_none() {
			let container: Option<Element> = use_overlay.then(|| overlay.into());
			match mount(&options, container) {
				Ok(shared) => *slot = Some(shared),
				Err(err) => {
					warn!("confetti: failed to mount: {}", err);
					return;
				}
			}
		}

		if let Some(ref shared) = *slot {
			let mut l = shared.borrow_mut();
			if should_run {
				l.start();
			} else {
				l.stop();
			}
		}
	});

	Effect::new(move |previous: Option<u32>| {
		let generation = clear.get();
		if previous.is_some_and(|p| p != generation) {
			if let Some(ref shared) = *frame_loop_clear.borrow() {
				shared.borrow_mut().clear();
			}
		}
		generation
	});

	view! {
		<div
			node_ref=overlay_ref
			class="confetti-overlay"
			style="position: fixed; inset: 0; overflow: hidden; pointer-events: none;"
		/>
	}
}
