//!
//! keycode.rs
//!
//! Characters and key names shared by every supported layout, mapped to the
//! legacy keycode the browser reports for them.
//!

use hashbrown::HashMap;

use crate::layout::layout_for_language;

/// Keycode entries common to every layout.
///
/// Colliding values are intentional: the unshifted and shifted forms of one
/// physical key share a keycode, shift state travels as a separate flag.
/// The `"undefined"` entry is a legacy quirk kept for compatibility; it is a
/// real entry with value 0, not a lookup miss.
#[rustfmt::skip]
pub(crate) const COMMON_KEY_CODES: &[(&str, u16)] = &[
	("\t", 9),
	("\n", 13),
	(" ", 32),
	("0", 48), (")", 48),
	("1", 49),
	("2", 50),
	("3", 51),
	("4", 52), ("$", 52),
	("5", 53), ("%", 53),
	("6", 54), ("^", 54),
	("7", 55), ("&", 55),
	("8", 56), ("*", 56),
	("9", 57), ("(", 57),
	(":", 59), (";", 59),
	("a", 65),
	("b", 66),
	("c", 67),
	("d", 68),
	("e", 69),
	("f", 70),
	("g", 71),
	("h", 72),
	("i", 73),
	("j", 74),
	("k", 75),
	("l", 76),
	("m", 77),
	("n", 78),
	("o", 79),
	("p", 80),
	("q", 81),
	("r", 82),
	("s", 83),
	("t", 84),
	("u", 85),
	("v", 86),
	("w", 87),
	("x", 88),
	("y", 89),
	("z", 90),
	(",", 188), ("<", 188),
	(".", 190), (">", 190),
	("/", 191), ("?", 191),
	("[", 219), ("{", 219),
	("|", 220),
	("]", 221), ("}", 221),
	("'", 222),
	("Escape", 27),
	("PrintScreen", 44),
	("ScrollLock", 145),
	("Pause", 19),
	("Backspace", 8),
	("Insert", 45),
	("GoHome", 36),
	("PageUp", 33),
	("Tab", 9),
	("Enter", 13),
	("Delete", 46),
	("End", 35),
	("PageDown", 34),
	("CapsLock", 20),
	("Shift", 16),
	("Control", 17),
	("Meta", 102),
	("Alt", 18),
	("ContextMenu", 93),
	("ArrowUp", 38),
	("ArrowLeft", 37),
	("ArrowDown", 40),
	("ArrowRight", 39),
	("f1", 112),
	("f2", 113),
	("f3", 114),
	("f4", 115),
	("f5", 116),
	("f6", 117),
	("f7", 118),
	("f8", 119),
	("f9", 120),
	("f10", 121),
	("f11", 122),
	("f12", 123),
	("undefined", 0),
];

/// Builds a layout's lookup table: common entries first, then the overlay,
/// so the overlay wins whenever both define a key.
pub(crate) fn merge_key_codes(overlay: &[(&'static str, u16)]) -> HashMap<&'static str, u16> {
	let mut table = HashMap::with_capacity(COMMON_KEY_CODES.len() + overlay.len());
	table.extend(COMMON_KEY_CODES.iter().copied());
	table.extend(overlay.iter().copied());
	table
}

/// Finds the legacy keycode for `character` under the layout implied by
/// `browser_language`.
///
/// Matching is exact and case sensitive: the tables carry lowercase letters
/// only, so an uppercase letter is a miss. A miss returns `None`; the
/// literal `"undefined"` entry returns `Some(0)` and the two are never
/// conflated.
pub fn find_key_code(character: &str, browser_language: &str) -> Option<u16> {
	layout_for_language(browser_language).find_key_code(character)
}
