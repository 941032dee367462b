//!
//! shift.rs
//!
//! Shifted counterparts for keys whose value changes while shift is held:
//! the digit row and common punctuation. Anything else passes through.
//!

#[rustfmt::skip]
pub fn shift_value(key: &str) -> &str {
	match key {
		"`"  => "~",
		"1"  => "!",
		"2"  => "@",
		"3"  => "#",
		"4"  => "$",
		"5"  => "%",
		"6"  => "^",
		"7"  => "&",
		"8"  => "*",
		"9"  => "(",
		"0"  => ")",
		"-"  => "_",
		"="  => "+",
		"["  => "{",
		"]"  => "}",
		"\\" => "|",
		";"  => ":",
		"'"  => "\"",
		","  => "<",
		"."  => ">",
		"/"  => "?",
		other => other
	}
}
