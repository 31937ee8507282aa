//! Visual theming for the backdrop.
//!
//! Colors, per-variant particle ranges, and named presets.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background gradient endpoints. The gradient runs diagonally from the
/// top-left corner to the bottom-right corner of the viewport.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Color at the top-left corner.
	pub start: Color,
	/// Color at the bottom-right corner.
	pub end: Color,
}

/// Creation-time ranges for one particle variant.
#[derive(Clone, Debug)]
pub struct VariantStyle {
	/// How many particles of this variant to seed.
	pub count: usize,
	/// Minimum radius.
	pub radius_min: f64,
	/// Maximum radius.
	pub radius_max: f64,
	/// Velocity span; each axis draws from `(-speed/2, speed/2)`.
	/// Zero for variants with no intrinsic motion.
	pub speed: f64,
	/// Fill color.
	pub color: Color,
}

/// Complete visual theme for the backdrop.
#[derive(Clone, Debug)]
pub struct BackdropTheme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub bubbles: VariantStyle,
	pub dots: VariantStyle,
	pub stars: VariantStyle,
	/// Blur filter radius (px) applied to bubble fills.
	pub bubble_blur: f64,
	/// Shadow-blur radius (px) behind each star.
	pub star_glow: f64,
}

impl BackdropTheme {
	/// Lavender-to-violet evening sky (default).
	pub fn twilight() -> Self {
		Self {
			name: "twilight",
			background: BackgroundStyle {
				start: Color::rgb(192, 192, 249),
				end: Color::rgb(73, 54, 135),
			},
			bubbles: VariantStyle {
				count: 18,
				radius_min: 18.0,
				radius_max: 40.0,
				speed: 1.2,
				color: Color::rgba(173, 148, 255, 0.13),
			},
			dots: VariantStyle {
				count: 32,
				radius_min: 2.0,
				radius_max: 4.0,
				speed: 1.2,
				color: Color::rgba(255, 255, 255, 0.18),
			},
			stars: VariantStyle {
				count: 30,
				radius_min: 1.5,
				radius_max: 4.0,
				speed: 0.0,
				color: Color::rgb(255, 255, 255),
			},
			bubble_blur: 2.0,
			star_glow: 8.0,
		}
	}

	/// Deep blue night sky with cooler, dimmer bubbles.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				start: Color::rgb(36, 44, 76),
				end: Color::rgb(10, 12, 26),
			},
			bubbles: VariantStyle {
				count: 18,
				radius_min: 18.0,
				radius_max: 40.0,
				speed: 1.2,
				color: Color::rgba(96, 128, 220, 0.11),
			},
			dots: VariantStyle {
				count: 32,
				radius_min: 2.0,
				radius_max: 4.0,
				speed: 1.2,
				color: Color::rgba(200, 212, 255, 0.16),
			},
			stars: VariantStyle {
				count: 30,
				radius_min: 1.5,
				radius_max: 4.0,
				speed: 0.0,
				color: Color::rgb(255, 255, 255),
			},
			bubble_blur: 2.0,
			star_glow: 8.0,
		}
	}

	/// Warm peach-to-purple sunrise.
	pub fn dawn() -> Self {
		Self {
			name: "dawn",
			background: BackgroundStyle {
				start: Color::rgb(250, 214, 195),
				end: Color::rgb(132, 94, 194),
			},
			bubbles: VariantStyle {
				count: 18,
				radius_min: 18.0,
				radius_max: 40.0,
				speed: 1.2,
				color: Color::rgba(255, 198, 170, 0.14),
			},
			dots: VariantStyle {
				count: 32,
				radius_min: 2.0,
				radius_max: 4.0,
				speed: 1.2,
				color: Color::rgba(255, 255, 255, 0.2),
			},
			stars: VariantStyle {
				count: 30,
				radius_min: 1.5,
				radius_max: 4.0,
				speed: 0.0,
				color: Color::rgb(255, 250, 235),
			},
			bubble_blur: 2.0,
			star_glow: 8.0,
		}
	}
}

impl Default for BackdropTheme {
	fn default() -> Self {
		Self::twilight()
	}
}
