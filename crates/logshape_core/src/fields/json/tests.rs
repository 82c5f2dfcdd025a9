use std::collections::HashMap;

use crate::fields::{Field, Value, encode, render_json, render_json_fields, render_json_to};

fn json(value: &Value) -> String {
	String::from_utf8(render_json(value).expect("render")).expect("utf-8")
}

#[test]
fn map_renders_as_object_in_tree_order() {
	let value = Value::map([("name", Value::from("svc")), ("retries", Value::Int64(3))]);
	assert_eq!(json(&value), r#"{"name":"svc","retries":3}"#);

	let reversed = Value::map([("retries", Value::Int64(3)), ("name", Value::from("svc"))]);
	assert_eq!(json(&reversed), r#"{"retries":3,"name":"svc"}"#);
}

#[test]
fn nulls_and_duplicates_are_kept() {
	let value = Value::Map(vec![Field::new("k", Value::Null), Field::new("k", 2_i64)]);
	assert_eq!(json(&value), r#"{"k":null,"k":2}"#);
}

#[test]
fn nested_values_use_standard_syntax() {
	let value = Value::map([
		("list", Value::List(vec![Value::Bool(true), Value::Float64(0.5), Value::Uint64(u64::MAX)])),
		("empty", Value::Map(Vec::new())),
		("text", Value::from("line\n\"quoted\"")),
	]);
	assert_eq!(json(&value), r#"{"list":[true,0.5,18446744073709551615],"empty":{},"text":"line\n\"quoted\""}"#);
}

#[test]
fn non_finite_floats_become_null() {
	assert_eq!(json(&Value::Float64(f64::NAN)), "null");
	assert_eq!(json(&Value::List(vec![Value::Float64(f64::INFINITY)])), "[null]");
}

#[test]
fn entry_fields_render_as_one_object() {
	let fields = vec![Field::new("msg", "started"), Field::new("port", 8080_u32)];
	let bytes = render_json_fields(&fields).expect("render");
	assert_eq!(bytes, br#"{"msg":"started","port":8080}"#);
	assert_eq!(render_json_fields(&[]).expect("render"), b"{}");
}

#[test]
fn streaming_matches_buffered_output() {
	let value = Value::map([("a", Value::List(vec![Value::Null]))]);
	let mut out = Vec::new();
	render_json_to(&mut out, &value).expect("render");
	assert_eq!(out, render_json(&value).expect("render"));
}

#[test]
fn encoded_native_maps_keep_their_sorted_order() {
	let mut map = HashMap::new();
	map.insert("zulu", 1_u8);
	map.insert("alpha", 2);
	assert_eq!(json(&encode(&map)), r#"{"alpha":2,"zulu":1}"#);
}

#[test]
fn parsed_documents_encode_like_native_values() {
	let doc: serde_json::Value = serde_json::from_str(r#"{"b":[1,-2,2.5],"a":null}"#).expect("parse");
	let value = encode(&doc);
	assert_eq!(
		value,
		Value::map([
			("a", Value::Null),
			("b", Value::List(vec![Value::Int64(1), Value::Int64(-2), Value::Float64(2.5)])),
		])
	);
	assert_eq!(json(&value), r#"{"a":null,"b":[1,-2,2.5]}"#);
}
