use std::borrow::Cow;
use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::fields::loggable::{Loggable, Shape};
use crate::fields::value::{Field, Value};
use crate::fields::Result;

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::Int64(v) => serializer.serialize_i64(*v),
			Self::Uint64(v) => serializer.serialize_u64(*v),
			Self::Float64(v) => serializer.serialize_f64(*v),
			Self::String(text) => serializer.serialize_str(text),
			Self::Map(fields) => FieldsRef(fields).serialize(serializer),
			Self::List(items) => serializer.collect_seq(items),
		}
	}
}

/// Serializes entries as a map in their stored order, duplicates included.
struct FieldsRef<'a>(&'a [Field]);

impl Serialize for FieldsRef<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for field in self.0 {
			map.serialize_entry(&*field.name, &field.value)?;
		}
		map.end()
	}
}

/// Render a value as compact JSON, keeping map entries in tree order.
pub fn render_json(value: &Value) -> Result<Vec<u8>> {
	Ok(serde_json::to_vec(value)?)
}

/// Render the fields of one entry as a compact JSON object.
pub fn render_json_fields(fields: &[Field]) -> Result<Vec<u8>> {
	Ok(serde_json::to_vec(&FieldsRef(fields))?)
}

/// Stream a value as compact JSON into `writer`.
pub fn render_json_to<W: Write>(writer: W, value: &Value) -> Result<()> {
	serde_json::to_writer(writer, value)?;
	Ok(())
}

/// Parsed JSON documents encode like native values; objects are associative
/// containers, so their entries come out sorted by key.
impl Loggable for serde_json::Value {
	fn shape(&self) -> Shape<'_> {
		match self {
			Self::Null => Shape::Null,
			Self::Bool(v) => Shape::Bool(*v),
			Self::Number(number) => {
				if let Some(v) = number.as_i64() {
					Shape::Int(v)
				} else if let Some(v) = number.as_u64() {
					Shape::Uint(v)
				} else {
					number.as_f64().map_or(Shape::Opaque(number), Shape::Float)
				}
			}
			Self::String(text) => Shape::Str(Cow::Borrowed(text)),
			Self::Array(items) => Shape::Seq(items.iter().map(|item| item as &dyn Loggable).collect()),
			Self::Object(map) => Shape::Assoc(map.iter().map(|(key, item)| (key.clone(), item as &dyn Loggable)).collect()),
		}
	}
}

#[cfg(test)]
mod tests;
