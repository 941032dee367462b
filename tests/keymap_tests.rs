//!
//! keymap_tests.rs
//!
//! End-to-end checks of the public lookup API, including the properties the
//! calling UI depends on for interoperability.
//!

use webkeymap::{
	KeymapError,
	find_key_code,
	find_key_value,
	is_alt_graph_pressed,
	layout_for_language_checked,
	shift_value
};

#[test]
fn letters_resolve_identically_under_both_layouts() {
	assert_eq!(find_key_code("a", "en-US"), Some(65));
	assert_eq!(find_key_code("a", "en-GB"), Some(65));
	assert_eq!(find_key_code("z", "en-US"), Some(90));
	assert_eq!(find_key_code("z", "en-GB"), Some(90));
}

#[test]
fn layouts_diverge_on_moved_punctuation() {
	assert_eq!(find_key_code("@", "en-US"), Some(50));
	assert_eq!(find_key_code("@", "en-GB"), Some(222));
	assert_eq!(find_key_code("\"", "en-US"), Some(222));
	assert_eq!(find_key_code("\"", "en-GB"), Some(50));
	assert_eq!(find_key_code("<", "en-US"), Some(188));
	assert_eq!(find_key_code("<", "en-GB"), Some(60));
}

#[test]
fn uk_only_characters_miss_on_us() {
	assert_eq!(find_key_code("£", "en-GB"), Some(51));
	assert_eq!(find_key_code("£", "en-US"), None);
	assert_eq!(find_key_code("ç", "en-GB"), Some(231));
	assert_eq!(find_key_code("ç", "en-US"), None);
}

#[test]
fn undefined_literal_is_distinguishable_from_a_miss() {
	assert_eq!(find_key_code("undefined", "en-US"), Some(0));
	assert_eq!(find_key_code("\u{1F702}", "en-US"), None);
}

#[test]
fn unknown_languages_fall_back_to_us() {
	assert_eq!(find_key_code("@", ""), Some(50));
	assert_eq!(find_key_code("@", "de-DE"), Some(50));
}

#[test]
fn strict_selection_surfaces_what_the_fallback_hides() {
	assert_eq!(
		layout_for_language_checked("fr-FR").err(),
		Some(KeymapError::UnsupportedLanguage("fr-FR".into()))
	);
	// the lookup itself still resolves through the en-US table
	assert_eq!(find_key_code("a", "fr-FR"), Some(65));
}

#[test]
fn labels_translate_or_pass_through() {
	assert_eq!(find_key_value("esc"), "Escape");
	assert_eq!(find_key_value("pageup"), "PageUp");
	assert_eq!(find_key_value("q"), "q");
}

#[test]
fn label_resolution_is_idempotent_on_its_outputs() {
	let labels = [
		"esc",
		"print",
		"scrolllock",
		"pause",
		"backspace",
		"insert",
		"home",
		"pageup",
		"tab",
		"enter",
		"delete",
		"end",
		"pagedown",
		"capslock",
		"shift",
		"ctrl",
		"meta",
		"alt",
		"space",
		"menu",
		"up",
		"left",
		"down",
		"right"
	];
	for label in labels {
		let value = find_key_value(label);
		assert_eq!(find_key_value(value), value);
	}
}

#[test]
fn shift_values_resolve_or_pass_through() {
	assert_eq!(shift_value("1"), "!");
	assert_eq!(shift_value("a"), "a");
}

#[test]
fn alt_graph_is_gated_on_language_and_signature() {
	assert!(is_alt_graph_pressed("fr-FR", 48, "@"));
	assert!(!is_alt_graph_pressed("en-US", 48, "@"));
	assert!(!is_alt_graph_pressed("fr-FR", 48, "x"));
}
