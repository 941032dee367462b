//!
//! label.rs
//!
//! On-screen keyboard labels for special keys, mapped to the KeyboardEvent
//! key value they stand for. Labels for literal characters are not listed
//! and pass through untouched.
//!

/// Canonical `key` value for an on-screen keyboard label.
///
/// `"home"` maps to the legacy `"GoHome"` name, which is also the name the
/// keycode table carries for that key.
#[rustfmt::skip]
pub fn find_key_value(label: &str) -> &str {
	match label {
		"esc"        => "Escape",
		"print"      => "PrintScreen",
		"scrolllock" => "ScrollLock",
		"pause"      => "Pause",
		"backspace"  => "Backspace",
		"insert"     => "Insert",
		"home"       => "GoHome",
		"pageup"     => "PageUp",
		"tab"        => "Tab",
		"enter"      => "Enter",
		"delete"     => "Delete",
		"end"        => "End",
		"pagedown"   => "PageDown",
		"capslock"   => "CapsLock",
		"shift"      => "Shift",
		"ctrl"       => "Control",
		"meta"       => "Meta",
		"alt"        => "Alt",
		"space"      => " ",
		"menu"       => "ContextMenu",
		"up"         => "ArrowUp",
		"left"       => "ArrowLeft",
		"down"       => "ArrowDown",
		"right"      => "ArrowRight",
		other        => other
	}
}
