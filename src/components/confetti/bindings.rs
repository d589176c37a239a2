//! `Confetti` class for pages that use the effect from plain JavaScript.
//!
//! ```js
//! const confetti = new Confetti({ count: 150, colors: ["#fff", "gold"] });
//! confetti.start();
//! // later
//! confetti.clear();
//! ```

use js_sys::{JSON, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::browser::{SharedLoop, mount};
use super::types::ConfettiOptions;

#[wasm_bindgen]
pub struct Confetti {
	inner: SharedLoop,
}

#[wasm_bindgen]
impl Confetti {
	/// Create a stopped effect. `options` may be omitted; `options.container`
	/// may be an element or an element id.
	#[wasm_bindgen(constructor)]
	pub fn new(options: JsValue) -> Result<Confetti, JsError> {
		crate::init_logging();
		let (options, container) = read_options(&options)?;
		let inner = mount(&options, container)?;
		Ok(Self { inner })
	}

	pub fn start(&self) {
		self.inner.borrow_mut().start();
	}

	pub fn stop(&self) {
		self.inner.borrow_mut().stop();
	}

	pub fn clear(&self) {
		self.inner.borrow_mut().clear();
	}

	/// Number of pieces currently on screen.
	#[wasm_bindgen(getter)]
	pub fn count(&self) -> usize {
		self.inner.borrow().controller().count()
	}

	#[wasm_bindgen(getter)]
	pub fn running(&self) -> bool {
		self.inner.borrow().controller().is_running()
	}
}

/// Split a JS options object into its JSON-representable part and an
/// optional container element.
fn read_options(value: &JsValue) -> Result<(ConfettiOptions, Option<Element>), JsError> {
	if value.is_undefined() || value.is_null() {
		return Ok((ConfettiOptions::default(), None));
	}
	let key = JsValue::from_str("container");
	let container = Reflect::get(value, &key)
		.ok()
		.and_then(|c| c.dyn_into::<Element>().ok());

	let plain = Object::assign(&Object::new(), value.unchecked_ref());
	if container.is_some() {
		let _ = Reflect::delete_property(&plain, &key);
	}
	let json: String = JSON::stringify(&plain)
		.map_err(|_| JsError::new("confetti: options are not serializable"))?
		.into();
	Ok((ConfettiOptions::from_json(&json)?, container))
}
