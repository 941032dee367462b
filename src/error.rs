//!
//! error.rs
//!
//! Error type for the crate. A lookup miss is an expected outcome, not an
//! error; only the strict layout selection can fail.
//!

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
	/// The browser language tag has no keycode table of its own.
	#[error("no keyboard layout for language `{0}`")]
	UnsupportedLanguage(String)
}
