use std::borrow::Cow;
use std::fmt::{Debug, Display};

use crate::fields::chain::ChainFormatter;
use crate::fields::error::BoxError;
use crate::fields::record::Record;
use crate::fields::value::Value;

/// Outcome of a representation override: a stand-in value, or the reason it could not be produced.
pub type Replacement<'a> = Result<Box<dyn Loggable + 'a>, BoxError>;

/// A value that can be encoded into a [`Value`] tree.
///
/// Implementations describe their structure through [`Loggable::shape`] and may
/// opt into capabilities that take priority over it, checked in this order:
///
/// 1. [`Loggable::represent`]: encode a replacement value instead.
/// 2. [`Loggable::as_chain`]: encode a wrapped-error chain frame by frame.
/// 3. [`Loggable::as_error`]: encode the error message.
/// 4. [`Loggable::as_display`]: encode the display string, unless the value is a
///    generated message.
///
/// An implementation lives next to the type and may read private fields; that
/// access is the intended way to log state the type does not otherwise expose.
pub trait Loggable {
	/// Structural view used when no capability applies.
	fn shape(&self) -> Shape<'_>;

	/// Custom representation override.
	fn represent(&self) -> Option<Replacement<'_>> {
		None
	}

	/// Multi-frame wrapped error protocol.
	fn as_chain(&self) -> Option<&dyn ChainFormatter> {
		None
	}

	/// Plain error capability.
	fn as_error(&self) -> Option<&dyn std::error::Error> {
		None
	}

	/// String-conversion capability.
	fn as_display(&self) -> Option<&dyn Display> {
		None
	}

	/// Whether this is a generated protocol message; such values keep their
	/// field structure even when they can display themselves.
	fn is_generated_message(&self) -> bool {
		false
	}
}

/// Runtime shape a [`Loggable`] exposes to the encoder.
pub enum Shape<'a> {
	/// Absent reference.
	Null,
	/// Boolean primitive.
	Bool(bool),
	/// Signed integer primitive.
	Int(i64),
	/// Unsigned integer primitive.
	Uint(u64),
	/// Floating point primitive.
	Float(f64),
	/// Text primitive.
	Str(Cow<'a, str>),
	/// Plain indirection to another value.
	Ref(&'a dyn Loggable),
	/// Indirection through shared ownership; `id` identifies the allocation.
	Shared {
		/// Address of the shared allocation.
		id: usize,
		/// Pointee.
		target: &'a dyn Loggable,
	},
	/// Ordered sequence.
	Seq(Vec<&'a dyn Loggable>),
	/// Associative container with string-formatted keys, in native iteration order.
	Assoc(Vec<(String, &'a dyn Loggable)>),
	/// Aggregate with named fields.
	Record(Record<'a>),
	/// Already encoded tree, copied verbatim.
	Value(&'a Value),
	/// Anything else; encoded with its `Debug` formatting.
	Opaque(&'a dyn Debug),
}

impl Shape<'_> {
	/// Stable label for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Uint(_) => "uint",
			Self::Float(_) => "float",
			Self::Str(_) => "str",
			Self::Ref(_) => "ref",
			Self::Shared { .. } => "shared",
			Self::Seq(_) => "seq",
			Self::Assoc(_) => "assoc",
			Self::Record(_) => "record",
			Self::Value(_) => "value",
			Self::Opaque(_) => "opaque",
		}
	}
}
