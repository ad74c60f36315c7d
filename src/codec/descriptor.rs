use serde::{Deserialize, Serialize};

/// Leaf type tag carried by scalar descriptors.
///
/// The codec never coerces leaves by tag; the tag travels with the schema so
/// external collaborators (schema supply, document materialization) can agree
/// on leaf representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
	/// True/false.
	Bool,
	/// Whole numbers, signed or unsigned.
	Integer,
	/// Floating-point numbers.
	Float,
	/// Unicode text.
	Text,
	/// Raw bytes.
	Binary,
	/// Host-specific leaf with no document-native representation.
	Opaque,
}

/// Recursive description of a value's shape.
///
/// Immutable once constructed; shared read-only across any number of
/// concurrent encode/decode calls. Carries no references to actual data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Descriptor {
	/// A single leaf value.
	Scalar(ScalarKind),
	/// Ordered sequence of homogeneous elements.
	List(Box<Descriptor>),
	/// Ordered, uniquely named fields; declaration order is significant.
	Record(Vec<FieldDescriptor>),
	/// Tagged union of variants. Not convertible in this version: any
	/// encode/decode touching one fails with `UnsupportedShape`.
	Union(Vec<Descriptor>),
}

/// One named field inside a `Record` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	/// Canonical field name.
	pub name: Box<str>,
	/// Shape of the field's value.
	pub descriptor: Descriptor,
}

impl Descriptor {
	/// List descriptor over `element`.
	pub fn list(element: Descriptor) -> Self {
		Self::List(Box::new(element))
	}

	/// Record descriptor from `(name, descriptor)` pairs in declaration order.
	pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, Descriptor)>) -> Self {
		Self::Record(
			fields
				.into_iter()
				.map(|(name, descriptor)| FieldDescriptor {
					name: name.into(),
					descriptor,
				})
				.collect(),
		)
	}

	/// Short name of the descriptor kind, for diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::List(_) => "list",
			Self::Record(_) => "record",
			Self::Union(_) => "union",
		}
	}
}
