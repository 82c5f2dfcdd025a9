use crate::fields::{Field, HumanOptions, Value, format_float, render_fields, render_fields_with, render_human, render_human_with};

#[test]
fn flat_map_renders_one_entry_per_line() {
	let value = Value::map([("name", Value::from("svc")), ("retries", Value::Int64(3))]);
	assert_eq!(render_human(&value), "name: svc\nretries: 3");
}

#[test]
fn empty_map_child_renders_bare_key() {
	let value = Value::map([("a", Value::Map(Vec::new())), ("b", Value::Bool(false))]);
	assert_eq!(render_human(&value), "a:\nb: false");
}

#[test]
fn nested_maps_indent_two_spaces_per_level() {
	let value = Value::map([("outer", Value::map([("inner", Value::map([("leaf", 1_i64)]))]))]);
	assert_eq!(render_human(&value), "outer:\n  inner:\n    leaf: 1");
}

#[test]
fn lists_under_keys_are_dashed_and_indented() {
	let value = Value::map([("tags", Value::List(vec!["x".into(), "y".into()])), ("count", Value::Uint64(2))]);
	assert_eq!(render_human(&value), "tags:\n  - x\n  - y\ncount: 2");
}

#[test]
fn top_level_list_mixes_nested_shapes() {
	let value = Value::List(vec![
		Value::Int64(1),
		Value::List(vec![Value::Int64(2), Value::Int64(3)]),
		Value::map([("k", "v"), ("j", "w")]),
		Value::Map(Vec::new()),
	]);
	assert_eq!(render_human(&value), "- 1\n-\n  - 2\n  - 3\n- k: v\n  j: w\n-");
}

#[test]
fn multi_line_strings_stay_aligned() {
	let value = Value::map([("outer", Value::map([("note", "first\nsecond")]))]);
	assert_eq!(render_human(&value), "outer:\n  note: first\n  second");

	let list = Value::List(vec!["first\nsecond".into()]);
	assert_eq!(render_human(&list), "- first\n  second");
}

#[test]
fn null_renders_canonical_literal() {
	let value = Value::map([("gone", Value::Null)]);
	assert_eq!(render_human(&value), "gone: null");
	assert_eq!(render_human(&Value::List(vec![Value::Null])), "- null");
}

#[test]
fn keys_are_quoted_only_when_needed() {
	let value = Value::map([("two words", 1_i64), ("", 2), ("tab\tkey", 3)]);
	assert_eq!(render_human(&value), "two_words: 1\n\"\": 2\n\"tab\\tkey\": 3");
}

#[test]
fn scalars_render_alone() {
	assert_eq!(render_human(&Value::from("svc")), "svc");
	assert_eq!(render_human(&Value::Bool(true)), "true");
	assert_eq!(render_human(&Value::Int64(-4)), "-4");
	assert_eq!(render_human(&Value::Uint64(u64::MAX)), u64::MAX.to_string());
	assert_eq!(render_human(&Value::Map(Vec::new())), "");
}

#[test]
fn floats_use_shortest_decimal_form() {
	assert_eq!(format_float(1.5), "1.5");
	assert_eq!(format_float(100.0), "100");
	assert_eq!(format_float(0.0), "0");
	assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
	assert_eq!(format_float(1e21), "1e21");
	assert_eq!(format_float(-2.5e-7), "-2.5e-7");
	assert_eq!(format_float(f64::NAN), "NaN");
	assert_eq!(format_float(f64::INFINITY), "+Inf");
	assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
}

#[test]
fn output_has_no_trailing_newline() {
	let fields = vec![Field::new("a", 1_i64), Field::new("b", Value::List(vec![Value::Null]))];
	let text = render_fields(&fields);
	assert_eq!(text, "a: 1\nb:\n  - null");
	assert!(!text.ends_with('\n'));
}

#[test]
fn base_indent_prefixes_every_line() {
	let fields = vec![Field::new("a", 1_i64), Field::new("b", Value::map([("c", 2_i64)]))];
	assert_eq!(render_fields_with(&fields, HumanOptions::nested(1)), "  a: 1\n  b:\n    c: 2");

	let list = Value::List(vec!["x".into(), "y".into()]);
	assert_eq!(render_human_with(&list, HumanOptions::nested(2)), "    - x\n    - y");
}

#[test]
fn duplicate_keys_are_rendered_in_order() {
	let fields = vec![Field::new("k", 1_i64), Field::new("k", 2_i64)];
	assert_eq!(render_fields(&fields), "k: 1\nk: 2");
}
