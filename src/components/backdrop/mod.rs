//! Pointer-reactive particle backdrop component.
//!
//! Renders three particle classes on a fullscreen HTML canvas behind the
//! page content:
//! - soft drifting bubbles, blurred and translucent
//! - small semi-opaque dots
//! - twinkling stars that pulse faster near the pointer
//!
//! Bubbles and dots are repelled by the pointer and wrap around the
//! viewport edges; recent pointer activity briefly doubles all motion.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_terminal::{BackdropCanvas, BackdropTheme};
//!
//! view! { <BackdropCanvas theme=BackdropTheme::midnight() /> }
//! ```

mod component;
pub mod field;
pub mod pointer;
mod render;
pub mod state;
pub mod theme;

pub use component::BackdropCanvas;
pub use theme::BackdropTheme;
