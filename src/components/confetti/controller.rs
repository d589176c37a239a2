//! The confetti effect controller.
//!
//! Owns the live particles and advances them one frame at a time. Scheduling
//! is not its concern: a host loop (see [`super::clock::FrameLoop`]) calls
//! [`ConfettiController::update`] once per display refresh while
//! [`ConfettiController::is_running`] holds, passing the frame timestamp and the
//! current viewport explicitly.

use log::info;
use rand::Rng;

use super::particles::Particle;
use super::surface::{Surface, Viewport};
use super::theme::Palette;
use super::types::{ConfettiConfig, Stacking};

/// Probability that a frame with spare capacity spawns one new particle.
pub const SPAWN_PROBABILITY: f64 = 0.6;

/// Effect controller: particle list, lifecycle flag and per-frame update.
pub struct ConfettiController<S: Surface, R: Rng> {
	capacity: usize,
	palette: Palette,
	stacking: Stacking,
	surface: S,
	rng: R,
	/// Insertion order; the last entry is the newest.
	particles: Vec<Particle<S::Node>>,
	running: bool,
	last_tick: f64,
}

impl<S: Surface, R: Rng> ConfettiController<S, R> {
	/// Create an empty, stopped controller.
	pub fn new(config: ConfettiConfig, surface: S, rng: R) -> Self {
		Self {
			capacity: config.capacity(),
			stacking: config.stacking(),
			palette: config.palette().clone(),
			surface,
			rng,
			particles: Vec::with_capacity(config.capacity()),
			running: false,
			last_tick: 0.0,
		}
	}

	/// Begin animating. `now` is the clock's current timestamp in milliseconds;
	/// it becomes the reference for the first frame's elapsed time so a long
	/// pause does not produce one huge phase jump.
	pub fn start(&mut self, now: f64) {
		if self.running {
			return;
		}
		self.running = true;
		self.last_tick = now;
		info!(
			"confetti: started (capacity {}, {} live)",
			self.capacity,
			self.particles.len()
		);
	}

	/// Stop animating. Particles stay where they are.
	pub fn stop(&mut self) {
		if self.running {
			info!("confetti: stopped with {} live", self.particles.len());
		}
		self.running = false;
	}

	/// Stop and remove every particle from the surface.
	pub fn clear(&mut self) {
		self.stop();
		let count = self.particles.len();
		for particle in self.particles.drain(..) {
			self.surface.remove(particle.into_node());
		}
		if count > 0 {
			info!("confetti: cleared {count} particles");
		}
	}

	/// Advance one frame. Does nothing unless running, so a frame that was
	/// already dispatched when [`stop`](Self::stop) ran is harmless.
	pub fn update(&mut self, timestamp: f64, viewport: Viewport) {
		if !self.running {
			return;
		}
		let elapsed = timestamp - self.last_tick;
		self.last_tick = timestamp;

		if self.particles.len() < self.capacity && self.rng.gen_bool(SPAWN_PROBABILITY) {
			let particle = self.create_particle(viewport);
			self.particles.push(particle);
		}

		// Reverse so removals do not shift entries still to be visited.
		for i in (0..self.particles.len()).rev() {
			let particle = &mut self.particles[i];
			particle.advance(elapsed);

			if particle.is_below(viewport.height) {
				let gone = self.particles.remove(i);
				self.surface.remove(gone.into_node());
				continue;
			}

			particle.wrap(viewport.width);
			self.surface.set_transform(particle.node(), &particle.transform());
		}
	}

	fn create_particle(&mut self, viewport: Viewport) -> Particle<S::Node> {
		let node = self.surface.create_node();
		let color = self.palette.pick(&mut self.rng);
		self.surface.set_background(&node, color);
		self.surface.insert(&node, self.stacking);
		Particle::spawn(node, viewport.width, &mut self.rng)
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of pieces currently on the surface.
	pub fn count(&self) -> usize {
		self.particles.len()
	}

	pub fn particles(&self) -> &[Particle<S::Node>] {
		&self.particles
	}

	pub fn last_tick(&self) -> f64 {
		self.last_tick
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}
}

/// Pieces never outlive their controller.
impl<S: Surface, R: Rng> Drop for ConfettiController<S, R> {
	fn drop(&mut self) {
		self.clear();
	}
}
