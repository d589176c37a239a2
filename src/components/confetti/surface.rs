//! Rendering surface abstraction the controller draws through.
//!
//! The controller never touches a host API directly. It creates, styles,
//! positions and removes nodes through [`Surface`], and receives the viewport
//! size as a plain [`Viewport`] value each frame, so it can run headless.

use super::particles::Transform;
use super::types::Stacking;

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// A container that hosts confetti nodes alongside any unrelated children.
pub trait Surface {
	/// Handle to one visual node. Owned by exactly one particle.
	type Node;

	/// Allocate a detached node.
	fn create_node(&mut self) -> Self::Node;

	/// Set the node's background fill to a CSS color.
	fn set_background(&mut self, node: &Self::Node, color: &str);

	/// Attach the node as a child, first or last according to `stacking`.
	fn insert(&mut self, node: &Self::Node, stacking: Stacking);

	/// Apply the combined translate/rotate/scale transform.
	fn set_transform(&mut self, node: &Self::Node, transform: &Transform);

	/// Detach the node from its parent and release it.
	fn remove(&mut self, node: Self::Node);
}

#[cfg(test)]
pub(crate) mod testing {
	//! In-memory surface that records every call for assertions.

	use std::cell::RefCell;
	use std::collections::HashMap;
	use std::rc::Rc;

	use super::*;

	/// Node handle of [`RecordingSurface`]. Deliberately not `Clone`.
	#[derive(Debug, PartialEq, Eq)]
	pub struct NodeId(pub u32);

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		next_id: u32,
		/// Attached children in document order.
		pub children: Vec<u32>,
		pub backgrounds: HashMap<u32, String>,
		pub transforms: HashMap<u32, Transform>,
		pub removed: Vec<u32>,
	}

	impl RecordingSurface {
		/// Attach a node that does not belong to the effect.
		pub fn add_foreign_child(&mut self) -> u32 {
			let id = self.next_id;
			self.next_id += 1;
			self.children.push(id);
			id
		}

		pub fn is_attached(&self, id: u32) -> bool {
			self.children.contains(&id)
		}
	}

	impl Surface for RecordingSurface {
		type Node = NodeId;

		fn create_node(&mut self) -> NodeId {
			let id = self.next_id;
			self.next_id += 1;
			NodeId(id)
		}

		fn set_background(&mut self, node: &NodeId, color: &str) {
			self.backgrounds.insert(node.0, color.to_string());
		}

		fn insert(&mut self, node: &NodeId, stacking: Stacking) {
			match stacking {
				Stacking::NewestOnTop => self.children.push(node.0),
				Stacking::NewestBelow => self.children.insert(0, node.0),
			}
		}

		fn set_transform(&mut self, node: &NodeId, transform: &Transform) {
			self.transforms.insert(node.0, *transform);
		}

		fn remove(&mut self, node: NodeId) {
			self.children.retain(|&id| id != node.0);
			self.transforms.remove(&node.0);
			self.removed.push(node.0);
		}
	}

	/// Forwards to a [`RecordingSurface`] that stays inspectable after the
	/// owner of this surface is dropped.
	pub struct SharedSurface(pub Rc<RefCell<RecordingSurface>>);

	impl Surface for SharedSurface {
		type Node = NodeId;

		fn create_node(&mut self) -> NodeId {
			self.0.borrow_mut().create_node()
		}

		fn set_background(&mut self, node: &NodeId, color: &str) {
			self.0.borrow_mut().set_background(node, color);
		}

		fn insert(&mut self, node: &NodeId, stacking: Stacking) {
			self.0.borrow_mut().insert(node, stacking);
		}

		fn set_transform(&mut self, node: &NodeId, transform: &Transform) {
			self.0.borrow_mut().set_transform(node, transform);
		}

		fn remove(&mut self, node: NodeId) {
			self.0.borrow_mut().remove(node);
		}
	}
}
