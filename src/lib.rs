// lib.rs

/*
Mapping tables between on-screen keyboard input and browser KeyboardEvent
values.

Everything in here is a pure lookup over static tables: no state, no I/O,
nothing to initialize. The tables are a compatibility contract with legacy
KeyboardEvent.keyCode semantics, so their values are not negotiable.
*/

pub mod altgraph;
pub mod error;
pub mod keycode;
pub mod label;
pub mod layout;
pub mod layouts;
pub mod shift;

pub use crate::{
	altgraph::is_alt_graph_pressed,
	error::KeymapError,
	keycode::find_key_code,
	label::find_key_value,
	layout::{KeyboardLayout, layout_for_language, layout_for_language_checked},
	layouts::{Uk105Key, Us104Key},
	shift::shift_value
};
