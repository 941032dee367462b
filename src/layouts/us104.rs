//!
//! layouts/us104.rs
//!
//! US 104-key layout: punctuation that sits on layout-specific physical
//! keys, layered over the common table.
//!

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::{keycode::merge_key_codes, layout::KeyboardLayout};

#[rustfmt::skip]
pub(crate) const US_OVERLAY: &[(&str, u16)] = &[
	("!", 49),
	("@", 50),
	("#", 51),
	("+", 187), ("=", 187),
	("<", 188),
	("-", 189), ("_", 189),
	("~", 192), ("`", 192),
	("\\", 220),
	("\"", 222),
];

lazy_static! {
	static ref US_KEY_CODES: HashMap<&'static str, u16> = merge_key_codes(US_OVERLAY);
}

pub struct Us104Key;

impl KeyboardLayout for Us104Key {
	fn key_codes(&self) -> &'static HashMap<&'static str, u16> {
		&US_KEY_CODES
	}
}
