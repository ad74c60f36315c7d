use std::sync::Arc;

use crate::codec::path::FieldPath;
use crate::codec::{CodecError, Descriptor, DocValueWriter, FieldAlias, FieldDescriptor, Generator, RecordValue, Result, Value, ValueWriter};

/// Recursive, descriptor-driven value encoder.
///
/// Walks a `(descriptor, value)` pair and emits document events, delegating
/// scalar leaves to the configured [`ValueWriter`] and translating record
/// field names through the shared [`FieldAlias`]. One encoder serves one
/// session; its path scratch is reset at the top of every call, so the same
/// instance can encode any number of records sequentially but must not be
/// shared across threads.
pub struct Encoder<W = DocValueWriter> {
	alias: Arc<FieldAlias>,
	leaf: W,
	path: FieldPath,
}

impl Encoder<DocValueWriter> {
	/// Encoder with the strict built-in leaf writer.
	pub fn strict(alias: Arc<FieldAlias>) -> Self {
		Self::new(alias, DocValueWriter::new())
	}
}

impl<W: ValueWriter<Value = Value>> Encoder<W> {
	/// Encoder delegating leaves to `leaf`.
	pub fn new(alias: Arc<FieldAlias>, leaf: W) -> Self {
		Self {
			alias,
			leaf,
			path: FieldPath::new(),
		}
	}

	/// Encode one value shaped by `descriptor` into `generator`.
	///
	/// A null value writes a null document at any level. Record fields are
	/// emitted in descriptor order; a field missing from the value container
	/// is written as null, never skipped. Fails with
	/// [`CodecError::UnsupportedShape`] on any `Union` descriptor,
	/// [`CodecError::EncodeFailure`] when the leaf writer cannot handle a
	/// scalar, and [`CodecError::MalformedInput`] when the value's runtime
	/// shape does not match the descriptor. Containers opened before a
	/// failure are closed on the way out, so the event stream stays balanced;
	/// the caller must still discard the partial output.
	pub fn encode(&mut self, descriptor: &Descriptor, value: &Value, generator: &mut dyn Generator) -> Result<()> {
		self.path.clear();
		self.encode_value(descriptor, value, generator)
	}

	fn encode_value(&mut self, descriptor: &Descriptor, value: &Value, generator: &mut dyn Generator) -> Result<()> {
		if value.is_null() {
			return generator.write_null();
		}

		match descriptor {
			Descriptor::Scalar(_) => {
				if self.leaf.write(value, generator)? {
					Ok(())
				} else {
					Err(CodecError::EncodeFailure {
						path: self.path.render(),
						kind: value.kind_name(),
					})
				}
			}
			Descriptor::List(element) => {
				let Value::Array(items) = value else {
					return Err(CodecError::MalformedInput {
						path: self.path.render(),
						expected: "array",
						got: value.kind_name(),
					});
				};
				generator.begin_array()?;
				let result = self.encode_elements(element, items, generator);
				generator.end_array()?;
				result
			}
			Descriptor::Record(fields) => {
				let Value::Record(record) = value else {
					return Err(CodecError::MalformedInput {
						path: self.path.render(),
						expected: "record",
						got: value.kind_name(),
					});
				};
				generator.begin_object()?;
				let result = self.encode_fields(fields, record, generator);
				generator.end_object()?;
				result
			}
			Descriptor::Union(_) => Err(CodecError::UnsupportedShape { path: self.path.render() }),
		}
	}

	fn encode_elements(&mut self, element: &Descriptor, items: &[Value], generator: &mut dyn Generator) -> Result<()> {
		for (index, item) in items.iter().enumerate() {
			self.path.push_index(index);
			self.encode_value(element, item, generator)?;
			self.path.pop();
		}
		Ok(())
	}

	fn encode_fields(&mut self, fields: &[FieldDescriptor], record: &RecordValue, generator: &mut dyn Generator) -> Result<()> {
		for field in fields {
			let name = self.alias.external_name(&field.name);
			generator.write_field_name(name)?;

			self.path.push_field(&field.name);
			match record.get(&field.name) {
				Some(child) => self.encode_value(&field.descriptor, child, generator)?,
				// declared but absent: one null entry, never an omitted key
				None => generator.write_null()?,
			}
			self.path.pop();
		}
		Ok(())
	}
}
