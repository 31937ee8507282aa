//! Canvas rendering for the backdrop.
//!
//! One pass per layer, back to front: background gradient, bubbles, dots,
//! stars. Bubbles get a soft blur filter; stars get a shadow-blur glow with
//! radius and opacity modulated by their twinkle phase.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field;
use super::state::BackdropState;
use super::theme::BackdropTheme;

/// Paint one frame.
pub fn render(state: &BackdropState, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_background(state, ctx, theme);
	draw_bubbles(state, ctx, theme);
	draw_dots(state, ctx, theme);
	draw_stars(state, ctx, theme);
}

fn draw_background(state: &BackdropState, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	let gradient = ctx.create_linear_gradient(0.0, 0.0, state.width, state.height);
	let _ = gradient.add_color_stop(0.0, &theme.background.start.to_css());
	let _ = gradient.add_color_stop(1.0, &theme.background.end.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_bubbles(state: &BackdropState, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	ctx.set_fill_style_str(&theme.bubbles.color.to_css());
	ctx.set_filter(&format!("blur({}px)", theme.bubble_blur));

	for b in &state.field.bubbles {
		ctx.begin_path();
		let _ = ctx.arc(b.x, b.y, b.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}

	ctx.set_filter("none");
}

fn draw_dots(state: &BackdropState, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	ctx.set_fill_style_str(&theme.dots.color.to_css());

	for d in &state.field.dots {
		ctx.begin_path();
		let _ = ctx.arc(d.x, d.y, d.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_stars(state: &BackdropState, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	let pointer = state.pointer.sample();
	let fill = theme.stars.color.to_css();

	ctx.save();
	ctx.set_shadow_color(&fill);
	ctx.set_shadow_blur(theme.star_glow);
	ctx.set_fill_style_str(&fill);

	for s in &state.field.stars {
		// Shared level for radius and opacity, always within [0.7, 1.0].
		let level = field::twinkle_level(s, pointer);
		ctx.set_global_alpha(level);
		ctx.begin_path();
		let _ = ctx.arc(s.x, s.y, s.radius * level, 0.0, 2.0 * PI);
		ctx.fill();
	}

	ctx.set_global_alpha(1.0);
	ctx.restore();
}
