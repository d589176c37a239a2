//! Frame scheduling around the controller.
//!
//! [`FrameLoop`] is the only place that talks to a [`FrameClock`]. It keeps
//! the pending frame handle, so a frame is outstanding exactly while the
//! controller is running, and re-requests a frame after every update.
//!
//! Every request carries a generation number that the clock hands back to
//! [`FrameLoop::on_frame`]. Only the frame of the current generation runs an
//! update, so a callback that escaped cancellation can never start a second
//! frame chain.

use log::{debug, warn};
use rand::Rng;

use super::controller::ConfettiController;
use super::surface::{Surface, Viewport};

/// Host facility that fires a callback once per display refresh.
pub trait FrameClock {
	/// Identifies a requested frame so it can be cancelled.
	type Handle;

	/// Ask for one callback before the next repaint. The callback must deliver
	/// `generation` back to [`FrameLoop::on_frame`]. `None` if the host refused.
	fn request_frame(&mut self, generation: u64) -> Option<Self::Handle>;

	/// Cancel a previously requested frame. Best effort.
	fn cancel_frame(&mut self, handle: Self::Handle);

	/// Current high-resolution timestamp in milliseconds.
	fn now(&self) -> f64;

	fn viewport(&self) -> Viewport;
}

/// Drives a [`ConfettiController`] from a [`FrameClock`].
pub struct FrameLoop<C: FrameClock, S: Surface, R: Rng> {
	controller: ConfettiController<S, R>,
	clock: C,
	scheduled: Option<C::Handle>,
	/// Generation of the most recent request.
	generation: u64,
}

impl<C: FrameClock, S: Surface, R: Rng> FrameLoop<C, S, R> {
	pub fn new(controller: ConfettiController<S, R>, clock: C) -> Self {
		Self {
			controller,
			clock,
			scheduled: None,
			generation: 0,
		}
	}

	pub fn start(&mut self) {
		if self.controller.is_running() {
			return;
		}
		self.controller.start(self.clock.now());
		self.schedule();
	}

	pub fn stop(&mut self) {
		self.controller.stop();
		if let Some(handle) = self.scheduled.take() {
			debug!("confetti: cancelling pending frame");
			self.clock.cancel_frame(handle);
		}
	}

	pub fn clear(&mut self) {
		self.stop();
		self.controller.clear();
	}

	/// Entry point for the clock's callback.
	///
	/// Frames from an older generation, or arriving while nothing is pending,
	/// were cancelled too late to stop their dispatch; they are ignored.
	pub fn on_frame(&mut self, generation: u64, timestamp: f64) {
		if generation != self.generation || self.scheduled.is_none() {
			debug!("confetti: ignoring stale frame {generation}");
			return;
		}
		self.scheduled = None;
		self.controller.update(timestamp, self.clock.viewport());
		if self.controller.is_running() {
			self.schedule();
		}
	}

	fn schedule(&mut self) {
		self.generation += 1;
		self.scheduled = self.clock.request_frame(self.generation);
		if self.scheduled.is_none() {
			warn!("confetti: frame request refused, animation paused");
			self.controller.stop();
		}
	}

	pub fn is_scheduled(&self) -> bool {
		self.scheduled.is_some()
	}

	pub fn controller(&self) -> &ConfettiController<S, R> {
		&self.controller
	}

	pub fn clock(&self) -> &C {
		&self.clock
	}
}

/// Cancels the pending frame; the controller then detaches its pieces as it drops.
impl<C: FrameClock, S: Surface, R: Rng> Drop for FrameLoop<C, S, R> {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
pub(crate) mod testing {
	//! Hand-cranked clock for driving a [`FrameLoop`] in tests.

	use super::*;

	#[derive(Debug, Default)]
	pub struct ManualClock {
		pub now: f64,
		pub viewport: Viewport,
		/// Generations of outstanding requests, oldest first.
		pub pending: Vec<u64>,
		pub cancelled: Vec<u64>,
		pub refuse: bool,
	}

	impl ManualClock {
		pub fn new(viewport: Viewport) -> Self {
			Self {
				viewport,
				..Self::default()
			}
		}
	}

	impl FrameClock for ManualClock {
		type Handle = u64;

		fn request_frame(&mut self, generation: u64) -> Option<u64> {
			if self.refuse {
				return None;
			}
			self.pending.push(generation);
			Some(generation)
		}

		fn cancel_frame(&mut self, handle: u64) {
			self.pending.retain(|&h| h != handle);
			self.cancelled.push(handle);
		}

		fn now(&self) -> f64 {
			self.now
		}

		fn viewport(&self) -> Viewport {
			self.viewport
		}
	}
}
