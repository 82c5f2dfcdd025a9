use std::fmt::Write as _;

use crate::fields::quote::render_key;
use crate::fields::value::{Field, Value};

/// One indentation step.
const INDENT: &str = "  ";
/// Text of [`Value::Null`].
pub const NULL_LITERAL: &str = "null";

/// Layout options for human-readable output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanOptions {
	/// Indentation levels applied to every line of the block.
	pub base_indent: usize,
}

impl HumanOptions {
	/// Preset for a block nested `levels` deep, e.g. under a header line.
	pub fn nested(levels: usize) -> Self {
		Self { base_indent: levels }
	}
}

/// Render a value as an indented, YAML-like block without a trailing newline.
pub fn render_human(value: &Value) -> String {
	render_human_with(value, HumanOptions::default())
}

/// Render a value with explicit layout options.
pub fn render_human_with(value: &Value, options: HumanOptions) -> String {
	let mut renderer = Renderer::new(options);
	renderer.value(value);
	renderer.out
}

/// Render the fields of one entry as a map block.
pub fn render_fields(fields: &[Field]) -> String {
	render_fields_with(fields, HumanOptions::default())
}

/// Render entry fields with explicit layout options.
pub fn render_fields_with(fields: &[Field], options: HumanOptions) -> String {
	let mut renderer = Renderer::new(options);
	renderer.map(fields);
	renderer.out
}

struct Renderer {
	out: String,
	indent: usize,
	origin: usize,
}

impl Renderer {
	fn new(options: HumanOptions) -> Self {
		let out = INDENT.repeat(options.base_indent);
		Self {
			origin: out.len(),
			out,
			indent: options.base_indent,
		}
	}

	fn newline(&mut self) {
		self.out.push('\n');
		for _ in 0..self.indent {
			self.out.push_str(INDENT);
		}
	}

	fn nested(&mut self, render: impl FnOnce(&mut Self)) {
		self.indent += 1;
		render(self);
		self.indent -= 1;
	}

	fn value(&mut self, value: &Value) {
		match value {
			Value::Null => self.out.push_str(NULL_LITERAL),
			Value::Bool(v) => {
				let _ = write!(self.out, "{v}");
			}
			Value::Int64(v) => {
				let _ = write!(self.out, "{v}");
			}
			Value::Uint64(v) => {
				let _ = write!(self.out, "{v}");
			}
			Value::Float64(v) => self.out.push_str(&format_float(*v)),
			Value::String(text) => self.text(text),
			Value::Map(fields) => self.map(fields),
			Value::List(items) => self.list(items),
		}
	}

	fn text(&mut self, text: &str) {
		for (idx, line) in text.split('\n').enumerate() {
			if idx > 0 {
				self.newline();
			}
			self.out.push_str(line);
		}
	}

	fn map(&mut self, fields: &[Field]) {
		for (idx, field) in fields.iter().enumerate() {
			if idx > 0 {
				self.newline();
			}
			self.out.push_str(&render_key(&field.name));
			self.out.push(':');

			if field.value.is_scalar() {
				self.out.push(' ');
				self.value(&field.value);
				continue;
			}
			match &field.value {
				Value::Map(inner) if inner.is_empty() => {}
				Value::Map(inner) => self.nested(|r| {
					r.newline();
					r.map(inner);
				}),
				Value::List(items) => self.nested(|r| r.list(items)),
				other => self.value(other),
			}
		}
	}

	fn list(&mut self, items: &[Value]) {
		for item in items {
			if self.out.len() > self.origin {
				self.newline();
			}
			self.out.push('-');

			match item {
				Value::List(inner) => self.nested(|r| r.list(inner)),
				Value::Map(inner) if inner.is_empty() => {}
				other => {
					self.out.push(' ');
					self.nested(|r| r.value(other));
				}
			}
		}
	}
}

/// Shortest round-trip decimal form; exponent only for very large or small magnitudes.
pub fn format_float(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
	}

	let magnitude = value.abs();
	if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
		format!("{value:e}")
	} else {
		format!("{value}")
	}
}

#[cfg(test)]
mod tests;
