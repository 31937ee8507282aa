//! Animation state for the backdrop.
//!
//! Bundles the particle field and pointer tracker with the viewport size and
//! the running flag, so the frame loop takes one borrow per frame. Created
//! when the component mounts, ticked every animation frame, stopped once on
//! cleanup.

use super::field::{ParticleField, Viewport};
use super::pointer::PointerTracker;
use super::theme::BackdropTheme;

/// Everything the animation loop mutates.
pub struct BackdropState {
	pub field: ParticleField,
	pub pointer: PointerTracker,
	pub width: f64,
	pub height: f64,
	/// Cleared on teardown; checked before every frame and reschedule.
	pub running: bool,
}

impl BackdropState {
	/// Seed a freshly running state for the given viewport.
	pub fn new(theme: &BackdropTheme, width: f64, height: f64) -> Self {
		Self {
			field: ParticleField::new(theme, Viewport { width, height }),
			pointer: PointerTracker::new(width, height),
			width,
			height,
			running: true,
		}
	}

	pub fn viewport(&self) -> Viewport {
		Viewport {
			width: self.width,
			height: self.height,
		}
	}

	/// Advance one frame: pointer decay first, then the particle step.
	/// Does nothing once the loop has been stopped.
	pub fn tick(&mut self, now_ms: f64) {
		if !self.running {
			return;
		}
		self.pointer.decay(now_ms);
		let sample = self.pointer.sample();
		let viewport = self.viewport();
		self.field.step(sample, viewport);
	}

	/// Viewport changed. Particles are left in place; the wrap rule pulls
	/// any now-out-of-bounds particles back on later frames.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Stop the loop. Idempotent.
	pub fn stop(&mut self) {
		self.running = false;
	}
}
