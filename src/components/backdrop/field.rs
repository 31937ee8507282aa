//! The particle field: drifting bubbles, small dots, and twinkling stars.
//!
//! All particles are seeded once when the backdrop mounts and mutated in
//! place every frame. Bubbles and dots drift and are repelled by the
//! pointer; stars sit still and pulse, faster when the pointer is close.
//! Particles that fully leave the viewport re-enter from the opposite edge.

use std::f64::consts::PI;

use super::pointer::PointerSample;
use super::theme::{BackdropTheme, VariantStyle};

/// Strength of the pointer push, before the activity boost is applied.
const REPEL_PUSH: f64 = 0.7;
/// How strongly the pointer's offset from screen center biases drift.
/// Aesthetic constant carried over from the original tuning.
const DRIFT_BIAS: f64 = 0.2;
/// Base twinkle phase advance per frame.
const TWINKLE_STEP: f64 = 0.03;
/// Randomized extra phase advance per frame, in `[0, TWINKLE_JITTER)`.
const TWINKLE_JITTER: f64 = 0.01;
/// Pointer distance under which stars twinkle faster.
const TWINKLE_NEAR: f64 = 100.0;
/// Twinkle-rate multiplier for stars near the pointer.
const TWINKLE_NEAR_RATE: f64 = 1.5;

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// The three particle classes. Behavior differences (repulsion reach,
/// drift, twinkle) dispatch over this; cosmetic ranges live in the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
	Bubble,
	Dot,
	Star,
}

impl Variant {
	/// Pointer distance within which this variant is pushed away, if any.
	fn repel_radius(self) -> Option<f64> {
		match self {
			Variant::Bubble => Some(120.0),
			Variant::Dot => Some(80.0),
			Variant::Star => None,
		}
	}

	/// Whether this variant carries intrinsic velocity.
	fn drifts(self) -> bool {
		!matches!(self, Variant::Star)
	}

	fn twinkles(self) -> bool {
		matches!(self, Variant::Star)
	}
}

/// A single particle. All variants share this shape; stars leave the
/// velocity at zero and drive `twinkle` instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Fixed at creation; also the wrap margin around the viewport.
	pub radius: f64,
	pub vx: f64,
	pub vy: f64,
	/// Monotonically increasing phase driving the star pulse.
	pub twinkle: f64,
}

/// Deterministic sin-hash noise stream, used for seeding and for the
/// per-frame twinkle jitter.
#[derive(Clone, Debug)]
struct Noise {
	cursor: f64,
}

impl Noise {
	fn new(seed: f64) -> Self {
		Self { cursor: seed }
	}

	/// Next pseudo-random value in `[0, 1)`.
	fn next(&mut self) -> f64 {
		self.cursor += 1.0;
		let x = (self.cursor * 12.9898 + 78.233).sin() * 43758.5453;
		x - x.floor()
	}
}

/// Owns the three particle collections and advances them one step per frame.
pub struct ParticleField {
	pub bubbles: Vec<Particle>,
	pub dots: Vec<Particle>,
	pub stars: Vec<Particle>,
	noise: Noise,
}

impl ParticleField {
	/// Seed every particle with randomized position, size, and velocity
	/// inside the viewport, drawn from the theme's per-variant ranges.
	pub fn new(theme: &BackdropTheme, viewport: Viewport) -> Self {
		let mut noise = Noise::new(0.0);
		let bubbles = Self::seed(&theme.bubbles, Variant::Bubble, viewport, &mut noise);
		let dots = Self::seed(&theme.dots, Variant::Dot, viewport, &mut noise);
		let stars = Self::seed(&theme.stars, Variant::Star, viewport, &mut noise);
		Self {
			bubbles,
			dots,
			stars,
			noise,
		}
	}

	fn seed(
		style: &VariantStyle,
		variant: Variant,
		viewport: Viewport,
		noise: &mut Noise,
	) -> Vec<Particle> {
		(0..style.count)
			.map(|_| Particle {
				x: noise.next() * viewport.width,
				y: noise.next() * viewport.height,
				radius: style.radius_min + noise.next() * (style.radius_max - style.radius_min),
				vx: if variant.drifts() {
					(noise.next() - 0.5) * style.speed
				} else {
					0.0
				},
				vy: if variant.drifts() {
					(noise.next() - 0.5) * style.speed
				} else {
					0.0
				},
				twinkle: if variant.twinkles() {
					noise.next() * 3.0 * PI
				} else {
					0.0
				},
			})
			.collect()
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self, pointer: PointerSample, viewport: Viewport) {
		Self::step_variant(
			&mut self.bubbles,
			Variant::Bubble,
			pointer,
			viewport,
			&mut self.noise,
		);
		Self::step_variant(
			&mut self.dots,
			Variant::Dot,
			pointer,
			viewport,
			&mut self.noise,
		);
		Self::step_variant(
			&mut self.stars,
			Variant::Star,
			pointer,
			viewport,
			&mut self.noise,
		);
	}

	fn step_variant(
		particles: &mut [Particle],
		variant: Variant,
		pointer: PointerSample,
		viewport: Viewport,
		noise: &mut Noise,
	) {
		for p in particles {
			if let Some(reach) = variant.repel_radius() {
				let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
				let dist = (dx * dx + dy * dy).sqrt();
				// dist == 0 would divide by zero; suppress the push instead.
				if dist > 0.0 && dist < reach {
					p.x += dx / dist * REPEL_PUSH * pointer.boost;
					p.y += dy / dist * REPEL_PUSH * pointer.boost;
				}
			}

			if variant.drifts() {
				let bias_x =
					1.0 + (pointer.x - viewport.width / 2.0) / viewport.width * DRIFT_BIAS;
				let bias_y =
					1.0 + (pointer.y - viewport.height / 2.0) / viewport.height * DRIFT_BIAS;
				p.x += p.vx * bias_x * pointer.boost;
				p.y += p.vy * bias_y * pointer.boost;
			}

			if variant.twinkles() {
				p.twinkle += TWINKLE_STEP + noise.next() * TWINKLE_JITTER;
			}

			wrap(p, viewport);
		}
	}
}

/// Re-enter from the opposite edge once a particle has fully left the
/// viewport. Evaluated independently per axis; never clamps.
fn wrap(p: &mut Particle, viewport: Viewport) {
	if p.x < -p.radius {
		p.x = viewport.width + p.radius;
	} else if p.x > viewport.width + p.radius {
		p.x = -p.radius;
	}
	if p.y < -p.radius {
		p.y = viewport.height + p.radius;
	} else if p.y > viewport.height + p.radius {
		p.y = -p.radius;
	}
}

/// Twinkle level in `[0.7, 1.0]`, shared by star radius and opacity.
/// Stars near the pointer pulse half again as fast.
pub fn twinkle_level(star: &Particle, pointer: PointerSample) -> f64 {
	let (dx, dy) = (star.x - pointer.x, star.y - pointer.y);
	let rate = if (dx * dx + dy * dy).sqrt() < TWINKLE_NEAR {
		TWINKLE_NEAR_RATE
	} else {
		1.0
	};
	0.7 + 0.3 * (star.twinkle * rate).sin().abs()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::theme::BackdropTheme;

	fn viewport() -> Viewport {
		Viewport {
			width: 800.0,
			height: 600.0,
		}
	}

	fn centered_pointer(boost: f64) -> PointerSample {
		PointerSample {
			x: 400.0,
			y: 300.0,
			boost,
		}
	}

	fn field() -> ParticleField {
		ParticleField::new(&BackdropTheme::default(), viewport())
	}

	#[test]
	fn seeds_the_configured_counts_inside_the_viewport() {
		let field = field();
		assert_eq!(field.bubbles.len(), 18);
		assert_eq!(field.dots.len(), 32);
		assert_eq!(field.stars.len(), 30);

		for p in field
			.bubbles
			.iter()
			.chain(&field.dots)
			.chain(&field.stars)
		{
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
		}
	}

	#[test]
	fn bubble_crossing_the_right_margin_wraps_to_the_left() {
		let mut field = field();
		field.bubbles = vec![Particle {
			x: 799.0,
			y: 300.0,
			radius: 20.0,
			vx: 22.0,
			vy: 0.0,
			twinkle: 0.0,
		}];
		field.dots.clear();
		field.stars.clear();

		// Pointer at center: drift bias is exactly 1, and the bubble is
		// well outside the repulsion reach.
		field.step(centered_pointer(1.0), viewport());

		let b = &field.bubbles[0];
		assert!((b.x - -20.0).abs() < 1e-9, "x = {}", b.x);
		assert_eq!(b.y, 300.0);
	}

	#[test]
	fn dot_near_pointer_is_pushed_away() {
		let mut field = field();
		field.bubbles.clear();
		field.stars.clear();
		field.dots = vec![Particle {
			x: 410.0,
			y: 300.0,
			radius: 3.0,
			vx: 0.0,
			vy: 0.0,
			twinkle: 0.0,
		}];

		field.step(centered_pointer(1.0), viewport());

		// distance 10 < 80: pushed in +x, away from the pointer.
		let d = &field.dots[0];
		assert!((d.x - 410.7).abs() < 1e-9, "x = {}", d.x);
		assert_eq!(d.y, 300.0);
	}

	#[test]
	fn repulsion_scales_with_boost() {
		let mut field = field();
		field.bubbles.clear();
		field.stars.clear();
		field.dots = vec![Particle {
			x: 410.0,
			y: 300.0,
			radius: 3.0,
			vx: 0.0,
			vy: 0.0,
			twinkle: 0.0,
		}];

		// Same setup as above but with the boost at its peak: push doubles.
		field.step(centered_pointer(2.0), viewport());
		assert!((field.dots[0].x - 411.4).abs() < 1e-9);
	}

	#[test]
	fn zero_distance_repulsion_is_a_no_op() {
		let mut field = field();
		field.bubbles.clear();
		field.stars.clear();
		field.dots = vec![Particle {
			x: 400.0,
			y: 300.0,
			radius: 3.0,
			vx: 0.0,
			vy: 0.0,
			twinkle: 0.0,
		}];

		field.step(centered_pointer(2.0), viewport());

		let d = &field.dots[0];
		assert_eq!((d.x, d.y), (400.0, 300.0));
		assert!(d.x.is_finite() && d.y.is_finite());
	}

	#[test]
	fn beyond_the_reach_no_repulsion_applies() {
		let mut field = field();
		field.bubbles.clear();
		field.stars.clear();
		// distance 81 >= 80 for dots
		field.dots = vec![Particle {
			x: 481.0,
			y: 300.0,
			radius: 3.0,
			vx: 0.0,
			vy: 0.0,
			twinkle: 0.0,
		}];

		field.step(centered_pointer(2.0), viewport());
		assert_eq!(field.dots[0].x, 481.0);
	}

	#[test]
	fn stars_hold_position_but_advance_their_phase() {
		let mut field = field();
		field.bubbles.clear();
		field.dots.clear();
		field.stars = vec![Particle {
			x: 405.0,
			y: 300.0,
			radius: 2.0,
			vx: 0.0,
			vy: 0.0,
			twinkle: 1.0,
		}];

		field.step(centered_pointer(2.0), viewport());

		let s = &field.stars[0];
		assert_eq!((s.x, s.y), (405.0, 300.0));
		let advance = s.twinkle - 1.0;
		assert!((0.03..0.04).contains(&advance), "advance = {advance}");
	}

	#[test]
	fn positions_stay_within_the_wrap_margin_over_many_steps() {
		let mut field = field();
		let pointer = PointerSample {
			x: 120.0,
			y: 80.0,
			boost: 2.0,
		};
		for _ in 0..1_000 {
			field.step(pointer, viewport());
		}

		for p in field
			.bubbles
			.iter()
			.chain(&field.dots)
			.chain(&field.stars)
		{
			assert!(p.x >= -p.radius && p.x <= 800.0 + p.radius, "x = {}", p.x);
			assert!(p.y >= -p.radius && p.y <= 600.0 + p.radius, "y = {}", p.y);
		}
	}

	#[test]
	fn drift_bias_amplifies_motion_toward_the_pointer_side() {
		let mut field = field();
		field.dots.clear();
		field.stars.clear();
		field.bubbles = vec![Particle {
			x: 400.0,
			y: 300.0,
			radius: 20.0,
			vx: 1.0,
			vy: 0.0,
			twinkle: 0.0,
		}];

		// Pointer on the far right edge: bias_x = 1 + (800-400)/800 * 0.2 = 1.1
		let pointer = PointerSample {
			x: 800.0,
			y: 300.0,
			boost: 1.0,
		};
		field.step(pointer, viewport());
		assert!((field.bubbles[0].x - 401.1).abs() < 1e-9);
	}

	#[test]
	fn twinkle_level_stays_in_band_and_speeds_up_near_the_pointer() {
		let far = PointerSample {
			x: 0.0,
			y: 0.0,
			boost: 1.0,
		};
		let mut star = Particle {
			x: 700.0,
			y: 500.0,
			radius: 2.0,
			vx: 0.0,
			vy: 0.0,
			twinkle: 0.0,
		};

		for i in 0..500 {
			star.twinkle = i as f64 * 0.037;
			let level = twinkle_level(&star, far);
			assert!((0.7..=1.0).contains(&level), "level = {level}");
		}

		// Near the pointer the phase is effectively multiplied by 1.5.
		star.twinkle = 1.0;
		let near = PointerSample {
			x: 705.0,
			y: 500.0,
			boost: 1.0,
		};
		let expected = 0.7 + 0.3 * (1.5_f64).sin().abs();
		assert!((twinkle_level(&star, near) - expected).abs() < 1e-12);
	}
}
