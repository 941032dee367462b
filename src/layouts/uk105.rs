//!
//! layouts/uk105.rs
//!
//! UK 105-key layout. Several keycodes here differ from what the same
//! character reports on a US board, and a few characters only exist on the
//! UK board at all.
//!

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::{keycode::merge_key_codes, layout::KeyboardLayout};

#[rustfmt::skip]
pub(crate) const UK_OVERLAY: &[(&str, u16)] = &[
	("\"", 50),
	("£", 51),
	("<", 60),
	("+", 61), ("=", 61),
	("\\", 94),
	("!", 161),
	("~", 163), ("#", 163),
	("-", 173), ("_", 173),
	("¬", 192),
	("@", 222),
	("`", 223),
	("ç", 231),
];

lazy_static! {
	static ref UK_KEY_CODES: HashMap<&'static str, u16> = merge_key_codes(UK_OVERLAY);
}

pub struct Uk105Key;

impl KeyboardLayout for Uk105Key {
	fn key_codes(&self) -> &'static HashMap<&'static str, u16> {
		&UK_KEY_CODES
	}
}
