//!
//! layout.rs
//!
//! Layout selection. The browser only reports a language tag, so the tag is
//! what picks the table; this is the best signal available even though a
//! user's language does not have to match their physical keyboard.
//!

use hashbrown::HashMap;

use crate::{
	error::KeymapError,
	layouts::{Uk105Key, Us104Key}
};

pub trait KeyboardLayout {
	/// Merged character to keycode table for this layout.
	fn key_codes(&self) -> &'static HashMap<&'static str, u16>;

	/// Looks up `character` in this layout's table. Exact match, no
	/// normalization.
	fn find_key_code(&self, character: &str) -> Option<u16> {
		self.key_codes().get(character).copied()
	}
}

/// Picks the layout for a browser language tag.
///
/// Only `"en-GB"` has a table of its own; every other tag, the empty string
/// included, gets the en-US table.
pub fn layout_for_language(browser_language: &str) -> &'static dyn KeyboardLayout {
	match layout_for_language_checked(browser_language) {
		Ok(layout) => layout,
		Err(_) => {
			log::trace!("no layout for language {browser_language:?}, using en-US");
			&Us104Key
		}
	}
}

/// Strict variant of [`layout_for_language`]: an unrecognized tag is an
/// error instead of a silent en-US fallback.
pub fn layout_for_language_checked(
	browser_language: &str
) -> Result<&'static dyn KeyboardLayout, KeymapError> {
	match browser_language {
		"en-US" => Ok(&Us104Key),
		"en-GB" => Ok(&Uk105Key),
		other => Err(KeymapError::UnsupportedLanguage(other.into()))
	}
}
