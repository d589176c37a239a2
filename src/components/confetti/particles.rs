//! Falling confetti pieces and their per-frame motion.

use rand::Rng;

/// Vertical position a new piece starts at, just above the top edge.
pub const SPAWN_Y: f64 = -20.0;
/// Horizontal position a piece wraps to after leaving the right edge.
pub const WRAP_X: f64 = -15.0;
/// Phase advance per elapsed millisecond.
pub const PHASE_RATE: f64 = 0.005;
/// Constant rightward drift per frame.
pub const DRIFT: f64 = 2.0;
/// Amplitude of the sine wobble added to the drift.
pub const WOBBLE: f64 = 1.0;
/// Degrees of rotation per unit of phase.
pub const DEGREES_PER_PHASE: f64 = 20.0;

const MAX_INITIAL_PHASE: f64 = 100.0;
const MIN_SPEED: f64 = 2.0;
const MAX_SPEED: f64 = 4.0;

/// 2D transform applied to a piece's visual node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
	pub x: f64,
	pub y: f64,
	pub rotate_deg: f64,
	/// Vertical scale in `[-1, 1]`; the sign flip gives the tumbling look.
	pub scale_y: f64,
}

impl Transform {
	pub fn to_css(&self) -> String {
		format!(
			"translate3d({}px, {}px, 0) rotate({}deg) scaleY({})",
			self.x, self.y, self.rotate_deg, self.scale_y
		)
	}
}

/// A single confetti piece: an exclusively owned visual node plus kinematic state.
#[derive(Debug)]
pub struct Particle<N> {
	node: N,
	pub x: f64,
	pub y: f64,
	/// Drives rotation and vertical squash.
	pub phase: f64,
	speed: f64,
}

impl<N> Particle<N> {
	/// Place a new piece at a random column just above the viewport.
	pub fn spawn<R: Rng>(node: N, viewport_width: f64, rng: &mut R) -> Self {
		Self {
			node,
			x: rng.gen_range(0.0..1.0) * viewport_width,
			y: SPAWN_Y,
			phase: rng.gen_range(0.0..MAX_INITIAL_PHASE),
			speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
		}
	}

	#[cfg(test)]
	pub(crate) fn with_state(node: N, x: f64, y: f64, phase: f64, speed: f64) -> Self {
		Self {
			node,
			x,
			y,
			phase,
			speed,
		}
	}

	/// Advance one frame; `elapsed` is milliseconds since the previous frame.
	pub fn advance(&mut self, elapsed: f64) {
		self.phase += elapsed * PHASE_RATE;
		self.y += self.speed;
		self.x += DRIFT + self.phase.sin() * WOBBLE;
	}

	pub fn is_below(&self, viewport_height: f64) -> bool {
		self.y > viewport_height
	}

	/// Pieces only drift rightward, so only the right edge wraps.
	pub fn wrap(&mut self, viewport_width: f64) {
		if self.x > viewport_width {
			self.x = WRAP_X;
		}
	}

	pub fn transform(&self) -> Transform {
		Transform {
			x: self.x,
			y: self.y,
			rotate_deg: self.phase * DEGREES_PER_PHASE,
			scale_y: self.phase.sin(),
		}
	}

	pub fn speed(&self) -> f64 {
		self.speed
	}

	pub fn node(&self) -> &N {
		&self.node
	}

	pub fn into_node(self) -> N {
		self.node
	}
}
