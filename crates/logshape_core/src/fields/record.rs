use crate::fields::loggable::Loggable;

/// Per-field metadata for aggregate encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAttrs {
	/// Output name used instead of the derived one.
	pub name: Option<&'static str>,
	/// Leave the field out of the encoded map.
	pub excluded: bool,
	/// Splice the field's own entries into the parent map.
	pub embedded: bool,
}

impl FieldAttrs {
	/// Attributes overriding the output name.
	pub fn rename(name: &'static str) -> Self {
		Self {
			name: Some(name),
			..Self::default()
		}
	}

	/// Attributes excluding the field.
	pub fn excluded() -> Self {
		Self {
			excluded: true,
			..Self::default()
		}
	}

	/// Attributes flattening the field into its parent.
	pub fn embedded() -> Self {
		Self {
			embedded: true,
			..Self::default()
		}
	}
}

/// One declared field of a [`Record`].
pub struct RecordField<'a> {
	/// Field identifier as declared.
	pub ident: &'static str,
	/// Field value.
	pub value: &'a dyn Loggable,
	/// Naming and exclusion metadata.
	pub attrs: FieldAttrs,
}

impl RecordField<'_> {
	/// Name the field is emitted under.
	pub fn output_name(&self) -> String {
		match self.attrs.name {
			Some(name) => name.to_owned(),
			None => field_name(self.ident),
		}
	}
}

/// Aggregate description built by a [`Loggable::shape`] implementation.
///
/// Fields are encoded in the order they are added.
pub struct Record<'a> {
	type_name: &'static str,
	fields: Vec<RecordField<'a>>,
}

impl<'a> Record<'a> {
	/// Start an empty record for `type_name`.
	pub fn new(type_name: &'static str) -> Self {
		Self {
			type_name,
			fields: Vec::new(),
		}
	}

	/// Add a field with derived naming.
	pub fn field(self, ident: &'static str, value: &'a dyn Loggable) -> Self {
		self.field_with(ident, value, FieldAttrs::default())
	}

	/// Add a field with explicit attributes.
	pub fn field_with(mut self, ident: &'static str, value: &'a dyn Loggable, attrs: FieldAttrs) -> Self {
		self.fields.push(RecordField { ident, value, attrs });
		self
	}

	/// Add an embedded field whose entries are spliced into this record.
	pub fn embed(self, ident: &'static str, value: &'a dyn Loggable) -> Self {
		self.field_with(ident, value, FieldAttrs::embedded())
	}

	/// Declared type name.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Declared fields in order.
	pub fn fields(&self) -> &[RecordField<'a>] {
		&self.fields
	}

	/// Number of declared fields, excluded ones included.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether no fields were declared.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub(crate) fn into_fields(self) -> Vec<RecordField<'a>> {
		self.fields
	}
}

/// Derive an output name from a field identifier.
///
/// The identifier is split on underscores and on case transitions
/// (`myFieldName` → `my`, `Field`, `Name`; `HTTPServer` → `HTTP`, `Server`);
/// the pieces are lowercased and joined with `_`. Digits stay with the
/// preceding piece.
pub fn field_name(ident: &str) -> String {
	let chars: Vec<char> = ident.chars().collect();
	let mut pieces: Vec<String> = Vec::new();
	let mut current = String::new();

	for (idx, &ch) in chars.iter().enumerate() {
		if ch == '_' {
			flush_piece(&mut pieces, &mut current);
			continue;
		}

		if ch.is_uppercase() && idx > 0 {
			let prev = chars[idx - 1];
			let next_is_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
			if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
				flush_piece(&mut pieces, &mut current);
			}
		}

		current.extend(ch.to_lowercase());
	}
	flush_piece(&mut pieces, &mut current);

	pieces.join("_")
}

fn flush_piece(pieces: &mut Vec<String>, current: &mut String) {
	if !current.is_empty() {
		pieces.push(std::mem::take(current));
	}
}
