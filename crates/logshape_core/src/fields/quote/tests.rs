use crate::fields::{LogError, quote, render_key, unquote, unquote_key};

#[test]
fn quote_escapes_control_and_invisible_characters() {
	assert_eq!(quote("plain"), "\"plain\"");
	assert_eq!(quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
	assert_eq!(quote("tab\tback\\"), r#""tab\tback\\""#);
	assert_eq!(quote("\u{1}"), r#""\x01""#);
	assert_eq!(quote("a\u{a0}b"), r#""a\u00a0b""#);
	assert_eq!(quote("\u{feff}"), r#""\ufeff""#);
	assert_eq!(quote("héllo ✓"), "\"héllo ✓\"");
}

#[test]
fn format_characters_are_escaped() {
	assert_eq!(quote("soft\u{ad}hyphen"), r#""soft\u00adhyphen""#);
	assert_eq!(quote("a\u{2060}\u{2064}b"), r#""a\u2060\u2064b""#);
	assert_eq!(quote("\u{e0041}"), r#""\U000e0041""#);
	assert_eq!(render_key("user\u{ad}id"), r#""user\u00adid""#);
	assert_ne!(render_key("user\u{ad}id"), render_key("userid"));
}

#[test]
fn unquote_inverts_quote() {
	for input in ["", "plain", "two words", "line\nbreak", "\u{7}\u{b}\u{1b}", "nbsp\u{a0}", "emoji 🎉"] {
		assert_eq!(unquote(&quote(input)).expect("valid literal"), input);
	}
	assert_eq!(unquote(r#""\U0001f389""#).expect("valid literal"), "🎉");
}

#[test]
fn unquote_reports_offset_of_bad_escape() {
	let err = unquote(r#""ab\q""#).expect_err("unknown escape");
	assert!(matches!(err, LogError::InvalidQuoted { at: 3, .. }), "{err:?}");

	assert!(matches!(unquote("bare"), Err(LogError::InvalidQuoted { at: 0, .. })));
	assert!(unquote(r#""\x4""#).is_err());
	assert!(unquote(r#""a"b""#).is_err());
}

#[test]
fn keys_stay_bare_unless_they_need_escaping() {
	assert_eq!(render_key("name"), "name");
	assert_eq!(render_key("Keep Case"), "Keep_Case");
	assert_eq!(render_key("a:b"), "a:b");
	assert_eq!(render_key("line\nbreak"), r#""line\nbreak""#);
	assert_eq!(render_key("quote\"d"), r#""quote\"d""#);
}

#[test]
fn empty_key_renders_as_empty_literal() {
	assert_eq!(render_key(""), "\"\"");
	assert_eq!(unquote_key("\"\"").expect("valid key"), "");
}

#[test]
fn rendered_keys_round_trip_modulo_spaces() {
	for key in ["name", "", "tab\there", "x\u{200b}y", "back\\slash"] {
		assert_eq!(unquote_key(&render_key(key)).expect("valid key"), key);
	}
	assert_eq!(unquote_key(&render_key("two words")).expect("valid key"), "two_words");
}
