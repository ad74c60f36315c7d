use std::sync::Arc;

use crate::codec::path::FieldPath;
use crate::codec::{CodecError, Descriptor, FieldAlias, Result, Value};

/// Recursive, descriptor-driven value decoder.
///
/// Walks a `(descriptor, document)` pair, where the document side is the
/// already-materialized name-keyed representation of one record produced by
/// an external deserialization collaborator, and reconstructs an ordered
/// value tree matching the descriptor. Like the encoder, one decoder serves
/// one session and must not be shared across threads.
pub struct Decoder {
	alias: Arc<FieldAlias>,
	path: FieldPath,
}

impl Decoder {
	/// Decoder translating field names through `alias`.
	pub fn new(alias: Arc<FieldAlias>) -> Self {
		Self {
			alias,
			path: FieldPath::new(),
		}
	}

	/// Decode one document value shaped by `descriptor`.
	///
	/// A null document decodes to [`Value::Null`] at any level, for every
	/// descriptor kind. Scalars pass through unchanged (no leaf coercion
	/// happens here). Record output is **positional**: a [`Value::Array`]
	/// ordered by the descriptor's declared fields, with nulls for fields
	/// absent from the document; callers bind position to descriptor field
	/// order when rebuilding their native record type. Field lookup uses the
	/// external name, so a record that was encoded through the same alias
	/// table comes back under its canonical field order. Fails with
	/// [`CodecError::UnsupportedShape`] on any `Union` descriptor and
	/// [`CodecError::MalformedInput`] when the document's shape does not
	/// match the descriptor.
	pub fn decode(&mut self, descriptor: &Descriptor, document: &Value) -> Result<Value> {
		self.path.clear();
		self.decode_value(descriptor, document)
	}

	fn decode_value(&mut self, descriptor: &Descriptor, document: &Value) -> Result<Value> {
		if document.is_null() {
			return Ok(Value::Null);
		}

		match descriptor {
			Descriptor::Scalar(_) => Ok(document.clone()),
			Descriptor::List(element) => {
				let Value::Array(items) = document else {
					return Err(CodecError::MalformedInput {
						path: self.path.render(),
						expected: "array",
						got: document.kind_name(),
					});
				};
				let mut out = Vec::with_capacity(items.len());
				for (index, item) in items.iter().enumerate() {
					self.path.push_index(index);
					out.push(self.decode_value(element, item)?);
					self.path.pop();
				}
				Ok(Value::Array(out))
			}
			Descriptor::Record(fields) => {
				let Value::Record(record) = document else {
					return Err(CodecError::MalformedInput {
						path: self.path.render(),
						expected: "record",
						got: document.kind_name(),
					});
				};
				let mut out = Vec::with_capacity(fields.len());
				for field in fields {
					let key = self.alias.external_name(&field.name);
					let child = record.get(key);

					self.path.push_field(&field.name);
					out.push(match child {
						Some(value) => self.decode_value(&field.descriptor, value)?,
						None => Value::Null,
					});
					self.path.pop();
				}
				Ok(Value::Array(out))
			}
			Descriptor::Union(_) => Err(CodecError::UnsupportedShape { path: self.path.render() }),
		}
	}
}
