/// Runtime value tree paired with a [`Descriptor`](super::Descriptor).
///
/// On encode, `Record` descriptors pair with [`Value::Record`] (name-keyed
/// lookup) and `List` descriptors with [`Value::Array`]. Decode produces the
/// same enum, except record output is positional (see the decoder docs).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean leaf.
	Bool(bool),
	/// Signed integer leaf.
	I64(i64),
	/// Unsigned integer leaf.
	U64(u64),
	/// Single-precision float leaf.
	F32(f32),
	/// Double-precision float leaf.
	F64(f64),
	/// Text leaf.
	String(Box<str>),
	/// Raw byte leaf.
	Bytes(Vec<u8>),
	/// Ordered sequence of child values.
	Array(Vec<Value>),
	/// Named-field container.
	Record(RecordValue),
	/// Host-specific datum no document capability recognizes. Encodable only
	/// by a permissive leaf writer.
	Opaque(Vec<u8>),
}

/// Field container backing [`Value::Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Fields in insertion order.
	pub fields: Vec<FieldValue>,
}

/// One named field of a [`RecordValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

impl RecordValue {
	/// Record from `(name, value)` pairs.
	pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
		Self {
			fields: pairs
				.into_iter()
				.map(|(name, value)| FieldValue {
					name: name.into(),
					value,
				})
				.collect(),
		}
	}

	/// Look up a field value by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}
}

impl Value {
	/// Record value from `(name, value)` pairs.
	pub fn record<'a>(pairs: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
		Self::Record(RecordValue::from_pairs(pairs))
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Short name of the value kind, for diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::String(_) => "string",
			Self::Bytes(_) => "bytes",
			Self::Array(_) => "array",
			Self::Record(_) => "record",
			Self::Opaque(_) => "opaque",
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::I64(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}
