/// Canonical encoded value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int64(i64),
	/// Unsigned integer scalar.
	Uint64(u64),
	/// Floating point scalar.
	Float64(f64),
	/// Text scalar.
	String(Box<str>),
	/// Ordered named entries; names may repeat.
	Map(Vec<Field>),
	/// Ordered elements.
	List(Vec<Value>),
}

/// One named entry of a [`Value::Map`] or of a log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	/// Entry name.
	pub name: Box<str>,
	/// Entry value.
	pub value: Value,
}

impl Field {
	/// Build a field from any name and value.
	pub fn new(name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

impl Value {
	/// Build a map from `(name, value)` pairs, keeping their order.
	pub fn map<N, V>(entries: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<Box<str>>,
		V: Into<Value>,
	{
		Self::Map(entries.into_iter().map(|(name, value)| Field::new(name, value)).collect())
	}

	/// Stable lowercase label of the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int64(_) => "int64",
			Self::Uint64(_) => "uint64",
			Self::Float64(_) => "float64",
			Self::String(_) => "string",
			Self::Map(_) => "map",
			Self::List(_) => "list",
		}
	}

	/// Whether the value renders on a single line.
	pub fn is_scalar(&self) -> bool {
		!matches!(self, Self::Map(_) | Self::List(_))
	}

	/// Map entries, when this is a map.
	pub fn as_map(&self) -> Option<&[Field]> {
		match self {
			Self::Map(fields) => Some(fields),
			_ => None,
		}
	}

	/// List elements, when this is a list.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Text, when this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// First map entry named `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.as_map()?.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int64(i64::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::Uint64(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Uint64(u64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::List(value)
	}
}

impl From<Vec<Field>> for Value {
	fn from(value: Vec<Field>) -> Self {
		Self::Map(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
