//! Browser implementations of the surface and the frame clock.
//!
//! Pieces are plain `div.confetti-piece` elements positioned with CSS
//! transforms; frames come from `requestAnimationFrame`, each callback
//! carrying the generation it was requested for.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Performance, Window};

use super::clock::{FrameClock, FrameLoop};
use super::controller::ConfettiController;
use super::error::MountError;
use super::particles::Transform;
use super::surface::{Surface, Viewport};
use super::types::{ConfettiOptions, Stacking};

/// Class set on every piece so pages can restyle them.
pub const PIECE_CLASS: &str = "confetti-piece";

/// Inline defaults; a page stylesheet targeting [`PIECE_CLASS`] can override
/// anything except the transform.
const PIECE_STYLE: &[(&str, &str)] = &[
	("position", "fixed"),
	("top", "0"),
	("left", "0"),
	("width", "8px"),
	("height", "12px"),
	("pointer-events", "none"),
	("will-change", "transform"),
	("z-index", "1000"),
];

/// A DOM element hosting confetti pieces.
pub struct DomSurface {
	document: Document,
	container: Element,
}

impl DomSurface {
	pub fn new(document: Document, container: Element) -> Self {
		Self {
			document,
			container,
		}
	}
}

impl Surface for DomSurface {
	type Node = HtmlElement;

	fn create_node(&mut self) -> HtmlElement {
		let node: HtmlElement = self
			.document
			.create_element("div")
			.expect_throw("confetti: failed to create piece element")
			.unchecked_into();
		node.set_class_name(PIECE_CLASS);
		let style = node.style();
		for (name, value) in PIECE_STYLE {
			let _ = style.set_property(name, value);
		}
		node
	}

	fn set_background(&mut self, node: &HtmlElement, color: &str) {
		let _ = node.style().set_property("background-color", color);
	}

	fn insert(&mut self, node: &HtmlElement, stacking: Stacking) {
		let _ = match stacking {
			Stacking::NewestOnTop => self.container.append_child(node),
			Stacking::NewestBelow => {
				let first = self.container.first_child();
				self.container.insert_before(node, first.as_ref())
			}
		};
	}

	fn set_transform(&mut self, node: &HtmlElement, transform: &Transform) {
		let _ = node.style().set_property("transform", &transform.to_css());
	}

	fn remove(&mut self, node: HtmlElement) {
		node.remove();
	}
}

/// `requestAnimationFrame`-backed clock.
pub struct BrowserClock {
	window: Window,
	performance: Option<Performance>,
	target: Weak<RefCell<BrowserLoop>>,
}

impl BrowserClock {
	fn new(window: Window, target: Weak<RefCell<BrowserLoop>>) -> Self {
		let performance = window.performance();
		Self {
			window,
			performance,
			target,
		}
	}
}

impl FrameClock for BrowserClock {
	type Handle = i32;

	fn request_frame(&mut self, generation: u64) -> Option<i32> {
		let target = self.target.clone();
		// Freed by wasm-bindgen once it runs; a cancelled one is never freed.
		let callback = Closure::once_into_js(move |timestamp: f64| {
			if let Some(frame_loop) = target.upgrade() {
				frame_loop.borrow_mut().on_frame(generation, timestamp);
			}
		});
		match self.window.request_animation_frame(callback.unchecked_ref()) {
			Ok(handle) => Some(handle),
			Err(err) => {
				warn!("confetti: requestAnimationFrame failed: {:?}", err);
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn now(&self) -> f64 {
		self.performance
			.as_ref()
			.map(Performance::now)
			.unwrap_or_else(js_sys::Date::now)
	}

	fn viewport(&self) -> Viewport {
		let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		Viewport::new(
			dimension(self.window.inner_width()),
			dimension(self.window.inner_height()),
		)
	}
}

/// The effect as wired up in a browser.
pub type BrowserLoop = FrameLoop<BrowserClock, DomSurface, SmallRng>;

/// Shared handle to a running browser loop.
pub type SharedLoop = Rc<RefCell<BrowserLoop>>;

/// Build the effect for the current page.
///
/// `container` overrides `options.container`; with neither, pieces go to
/// `<body>`. Frame callbacks only hold a weak reference, so dropping every
/// [`SharedLoop`] cancels the pending frame and detaches every piece.
pub fn mount(options: &ConfettiOptions, container: Option<Element>) -> Result<SharedLoop, MountError> {
	let config = options.to_config()?;
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let container = match (container, options.container.as_deref()) {
		(Some(element), _) => element,
		(None, Some(id)) => document
			.get_element_by_id(id)
			.ok_or_else(|| MountError::ContainerNotFound { id: id.to_string() })?,
		(None, None) => document.body().ok_or(MountError::NoDocument)?.into(),
	};

	let seed = options.seed.unwrap_or_else(entropy_seed);
	info!(
		"confetti: mounted (capacity {}, {} colors, seed {})",
		config.capacity(),
		config.palette().len(),
		seed
	);

	let controller = ConfettiController::new(
		config,
		DomSurface::new(document, container),
		SmallRng::seed_from_u64(seed),
	);
	let shared = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserLoop>>| {
		RefCell::new(FrameLoop::new(controller, BrowserClock::new(window, weak.clone())))
	});

	Ok(shared)
}

fn entropy_seed() -> u64 {
	let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
	(high << 32) | low
}
