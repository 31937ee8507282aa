//! Leptos component wrapping the backdrop canvas.
//!
//! The component creates a fullscreen canvas, wires window-level mousemove
//! and resize listeners, and runs the animation loop via
//! `requestAnimationFrame`. Each frame: pointer decay, particle step,
//! render, reschedule. The `running` flag is checked before the frame body
//! and before every reschedule, so no frame executes after cleanup begins.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::BackdropState;
use super::theme::BackdropTheme;

/// Bundles animation state with the visual theme.
struct BackdropContext {
	state: BackdropState,
	theme: BackdropTheme,
}

/// Acquire the canvas 2d context. `None` means the drawing surface is
/// unavailable and the whole animation is skipped.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(600.0),
	)
}

/// Renders the animated particle backdrop on a fullscreen canvas.
///
/// The canvas sizes itself to the window and follows window resizes.
/// Pointer movement anywhere on the page drives the repulsion and the
/// transient velocity boost. Pass `theme` to override the default look.
#[component]
pub fn BackdropCanvas(#[prop(optional)] theme: Option<BackdropTheme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, pointer_cb_init, resize_cb_init) = (
		context.clone(),
		animate.clone(),
		pointer_cb.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("portfolio-terminal: 2d context unavailable, backdrop disabled");
			return;
		};

		let theme = theme.clone().unwrap_or_default();
		*context_init.borrow_mut() = Some(BackdropContext {
			state: BackdropState::new(&theme, w, h),
			theme,
		});

		let context_move = context_init.clone();
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.state.pointer.record_move(
					ev.client_x() as f64,
					ev.client_y() as f64,
					js_sys::Date::now(),
				);
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = window_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let mut guard = context_anim.borrow_mut();
				let Some(ref mut c) = *guard else {
					return;
				};
				if !c.state.running {
					// Torn down: drop out without rescheduling.
					return;
				}
				c.state.tick(js_sys::Date::now());
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let (context_cleanup, pointer_cleanup, resize_cleanup) = (
		send_wrapper::SendWrapper::new(context.clone()),
		send_wrapper::SendWrapper::new(pointer_cb.clone()),
		send_wrapper::SendWrapper::new(resize_cb.clone()),
	);
	on_cleanup(move || {
		if let Some(ref mut c) = *context_cleanup.borrow_mut() {
			c.state.stop();
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		// The animate closure stays alive: one frame callback may still be
		// pending, and it bails on the cleared running flag.
		if let Some(cb) = pointer_cleanup.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = resize_cleanup.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="backdrop-canvas"
			style="position: fixed; inset: 0; display: block; z-index: 0;"
		/>
	}
}
