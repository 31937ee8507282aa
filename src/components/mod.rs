//! Page components: the particle backdrop and the simulated terminal.

pub mod backdrop;
pub mod terminal;
