use crate::fields::loggable::{Loggable, Shape};
use crate::fields::record::Record;
use crate::fields::value::{Field, Value};

/// Substituted for a shared value reached again while it is still being encoded.
pub const CYCLE_MARKER: &str = "<cycle>";
/// Substituted for values nested deeper than [`EncodeOptions::max_depth`].
pub const MAX_DEPTH_MARKER: &str = "<max depth>";
/// Field prefix generated protocol messages reserve for internal bookkeeping.
pub const GENERATED_INTERNAL_PREFIX: &str = "XXX_";

/// Limits applied while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Maximum nesting of maps and lists, and maximum number of error-chain frames.
	///
	/// Indirections (`Option`, `Rc`, lock guards, overrides) do not nest; a run of
	/// them between two levels is cut off at the same bound.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

impl EncodeOptions {
	/// Preset for compact single-line consumers.
	pub fn shallow() -> Self {
		Self { max_depth: 8 }
	}
}

type Capability = fn(&mut Encoder, &dyn Loggable) -> Option<Value>;

/// Capability checks in priority order; the first that applies wins.
const CAPABILITIES: [(&str, Capability); 4] = [
	("represent", Encoder::via_override),
	("chain", Encoder::via_chain),
	("error", Encoder::via_error),
	("display", Encoder::via_display),
];

/// Encode one value with default options.
pub fn encode(value: &dyn Loggable) -> Value {
	Encoder::new(EncodeOptions::default()).encode(value)
}

/// Encode one value with explicit options.
pub fn encode_with(value: &dyn Loggable, options: &EncodeOptions) -> Value {
	Encoder::new(*options).encode(value)
}

/// Encode the named fields of one log call, keeping their order.
pub fn encode_fields(fields: &[(&str, &dyn Loggable)]) -> Vec<Field> {
	let mut encoder = Encoder::new(EncodeOptions::default());
	fields.iter().map(|(name, value)| Field::new(*name, encoder.encode(*value))).collect()
}

/// Stateful encoder tracking nesting depth and shared values in progress.
///
/// An encoder may be reused across values; its state unwinds after each call.
#[derive(Debug, Clone)]
pub struct Encoder {
	options: EncodeOptions,
	depth: u32,
	hops: u32,
	active: Vec<usize>,
}

impl Encoder {
	/// Create an encoder.
	pub fn new(options: EncodeOptions) -> Self {
		Self {
			options,
			depth: 0,
			hops: 0,
			active: Vec::new(),
		}
	}

	/// Options this encoder applies.
	pub fn options(&self) -> &EncodeOptions {
		&self.options
	}

	/// Encode a value into a fresh tree.
	pub fn encode(&mut self, value: &dyn Loggable) -> Value {
		if self.hops >= self.options.max_depth {
			tracing::trace!(max_depth = self.options.max_depth, "indirection limit reached");
			return Value::String(MAX_DEPTH_MARKER.into());
		}

		self.hops += 1;
		let out = self.encode_value(value);
		self.hops -= 1;
		out
	}

	/// Run `build` one map or list level deeper, or substitute the depth marker.
	fn nested(&mut self, build: impl FnOnce(&mut Self) -> Value) -> Value {
		if self.depth >= self.options.max_depth {
			tracing::trace!(max_depth = self.options.max_depth, "encode depth limit reached");
			return Value::String(MAX_DEPTH_MARKER.into());
		}

		let hops = std::mem::take(&mut self.hops);
		self.depth += 1;
		let out = build(self);
		self.depth -= 1;
		self.hops = hops;
		out
	}

	fn encode_value(&mut self, value: &dyn Loggable) -> Value {
		let shape = value.shape();
		if matches!(shape, Shape::Null) {
			return Value::Null;
		}

		for (name, capability) in CAPABILITIES {
			if let Some(out) = capability(self, value) {
				tracing::trace!(capability = name, shape = shape.kind(), "capability applied");
				return out;
			}
		}

		self.encode_shape(value, shape)
	}

	fn via_override(&mut self, value: &dyn Loggable) -> Option<Value> {
		let replacement = value.represent()?;
		Some(match replacement {
			Ok(inner) => self.encode(&*inner),
			Err(err) => {
				tracing::debug!(error = %err, "representation override failed");
				Value::Map(vec![Field::new("error", err.to_string())])
			}
		})
	}

	fn via_chain(&mut self, value: &dyn Loggable) -> Option<Value> {
		let chain = value.as_chain()?;
		Some(self.nested(|encoder| encoder.encode_chain(chain)))
	}

	fn via_error(&mut self, value: &dyn Loggable) -> Option<Value> {
		value.as_error().map(|err| Value::String(err.to_string().into()))
	}

	fn via_display(&mut self, value: &dyn Loggable) -> Option<Value> {
		if value.is_generated_message() {
			return None;
		}
		value.as_display().map(|display| Value::String(display.to_string().into()))
	}

	fn encode_shape(&mut self, value: &dyn Loggable, shape: Shape<'_>) -> Value {
		match shape {
			Shape::Null => Value::Null,
			Shape::Bool(v) => Value::Bool(v),
			Shape::Int(v) => Value::Int64(v),
			Shape::Uint(v) => Value::Uint64(v),
			Shape::Float(v) => Value::Float64(v),
			Shape::Str(text) => Value::String(text.into()),
			Shape::Ref(target) => self.encode(target),
			Shape::Shared { id, target } => self.encode_shared(id, target),
			Shape::Seq(items) => self.nested(|encoder| Value::List(items.into_iter().map(|item| encoder.encode(item)).collect())),
			Shape::Assoc(entries) => self.nested(|encoder| encoder.encode_assoc(entries)),
			Shape::Record(record) => {
				let generated = value.is_generated_message();
				self.nested(|encoder| encoder.encode_record(generated, record))
			}
			Shape::Value(tree) => tree.clone(),
			Shape::Opaque(item) => Value::String(format!("{item:?}").into()),
		}
	}

	fn encode_shared(&mut self, id: usize, target: &dyn Loggable) -> Value {
		if self.active.contains(&id) {
			tracing::trace!(id, "reference cycle");
			return Value::String(CYCLE_MARKER.into());
		}

		self.active.push(id);
		let out = self.encode(target);
		self.active.pop();
		out
	}

	fn encode_assoc(&mut self, entries: Vec<(String, &dyn Loggable)>) -> Value {
		let mut fields: Vec<Field> = entries
			.into_iter()
			.map(|(key, item)| Field {
				name: key.into_boxed_str(),
				value: self.encode(item),
			})
			.collect();
		// Keys with the same text fall back to the encoded value so hash order never leaks.
		fields.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| format!("{:?}", a.value).cmp(&format!("{:?}", b.value))));
		Value::Map(fields)
	}

	fn encode_record(&mut self, generated: bool, record: Record<'_>) -> Value {
		tracing::trace!(record = record.type_name(), fields = record.len(), "encoding record");
		let mut out = Vec::with_capacity(record.len());
		for field in record.into_fields() {
			if field.attrs.excluded {
				continue;
			}
			if generated && field.ident.starts_with(GENERATED_INTERNAL_PREFIX) {
				continue;
			}

			let value = self.encode(field.value);
			match value {
				Value::Map(inner) if field.attrs.embedded => out.extend(inner),
				value => out.push(Field::new(field.output_name(), value)),
			}
		}
		Value::Map(out)
	}
}
