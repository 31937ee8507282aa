//! Pointer tracking with an activity-driven velocity boost.
//!
//! The boost snaps to 2 the instant the pointer moves and decays back to 1
//! once the pointer has been idle past a threshold. The particle field reads
//! one [`PointerSample`] per frame; nothing here touches the DOM.

/// Boost applied the instant the pointer moves.
const BOOST_PEAK: f64 = 2.0;
/// Per-frame boost falloff once the pointer has gone idle.
const BOOST_DECAY: f64 = 0.05;
/// Idle time (ms) before the boost starts to fall off.
const IDLE_MS: f64 = 300.0;

/// Read-only per-frame view of the pointer, consumed by the particle field.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
	/// Viewport x coordinate.
	pub x: f64,
	/// Viewport y coordinate.
	pub y: f64,
	/// Velocity/repulsion multiplier, always >= 1.
	pub boost: f64,
}

/// Last known pointer position plus the decaying activity boost.
#[derive(Clone, Debug)]
pub struct PointerTracker {
	x: f64,
	y: f64,
	boost: f64,
	last_move_ms: f64,
}

impl PointerTracker {
	/// Create a tracker resting at the viewport center with no active boost.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			boost: 1.0,
			last_move_ms: f64::NEG_INFINITY,
		}
	}

	/// Record a pointer-move event at viewport coordinates.
	pub fn record_move(&mut self, x: f64, y: f64, now_ms: f64) {
		self.x = x;
		self.y = y;
		self.boost = BOOST_PEAK;
		self.last_move_ms = now_ms;
	}

	/// Let the boost fall toward 1 if the pointer has been idle long enough.
	/// Called once per frame, before the particle field steps.
	pub fn decay(&mut self, now_ms: f64) {
		if self.boost > 1.0 && now_ms - self.last_move_ms > IDLE_MS {
			self.boost = (self.boost - BOOST_DECAY).max(1.0);
		}
	}

	/// Snapshot the current position and boost for this frame.
	pub fn sample(&self) -> PointerSample {
		PointerSample {
			x: self.x,
			y: self.y,
			boost: self.boost,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_centered_and_at_rest() {
		let tracker = PointerTracker::new(800.0, 600.0);
		let sample = tracker.sample();
		assert_eq!(sample.x, 400.0);
		assert_eq!(sample.y, 300.0);
		assert_eq!(sample.boost, 1.0);
	}

	#[test]
	fn movement_snaps_boost_to_peak() {
		let mut tracker = PointerTracker::new(800.0, 600.0);
		tracker.record_move(120.0, 40.0, 1_000.0);
		let sample = tracker.sample();
		assert_eq!((sample.x, sample.y), (120.0, 40.0));
		assert_eq!(sample.boost, 2.0);
	}

	#[test]
	fn boost_holds_while_pointer_is_fresh() {
		let mut tracker = PointerTracker::new(800.0, 600.0);
		tracker.record_move(0.0, 0.0, 1_000.0);
		tracker.decay(1_200.0);
		assert_eq!(tracker.sample().boost, 2.0);
		// Exactly at the threshold still counts as fresh.
		tracker.decay(1_300.0);
		assert_eq!(tracker.sample().boost, 2.0);
	}

	#[test]
	fn idle_boost_decays_strictly_to_one_and_stays() {
		let mut tracker = PointerTracker::new(800.0, 600.0);
		tracker.record_move(0.0, 0.0, 0.0);

		let mut previous = tracker.sample().boost;
		for frame in 0..40 {
			tracker.decay(400.0 + frame as f64 * 16.0);
			let boost = tracker.sample().boost;
			assert!(boost >= 1.0);
			if previous > 1.0 {
				assert!(boost < previous);
			}
			previous = boost;
		}
		assert_eq!(tracker.sample().boost, 1.0);

		tracker.decay(1_000_000.0);
		assert_eq!(tracker.sample().boost, 1.0);
	}
}
