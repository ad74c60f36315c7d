use std::sync::Arc;

use crate::codec::{Decoder, Descriptor, DocValueWriter, Encoder, FieldAlias, JsonGenerator, Result, Value, ValueWriter};

/// One read/write session over a fixed schema.
///
/// Built once from a [`Descriptor`] and a [`FieldAlias`], then used to
/// convert any number of records. Owns the per-session scratch: the JSON
/// output buffer is cleared, not reallocated, before each record. Not
/// shareable across threads; give each worker its own codec.
pub struct RecordCodec<W = DocValueWriter> {
	descriptor: Descriptor,
	encoder: Encoder<W>,
	decoder: Decoder,
	scratch: Vec<u8>,
}

impl RecordCodec<DocValueWriter> {
	/// Codec with the strict built-in leaf writer.
	pub fn new(descriptor: Descriptor, alias: FieldAlias) -> Self {
		Self::with_writer(descriptor, alias, DocValueWriter::new())
	}
}

impl<W: ValueWriter<Value = Value>> RecordCodec<W> {
	/// Codec delegating scalar leaves to `leaf`.
	pub fn with_writer(descriptor: Descriptor, alias: FieldAlias, leaf: W) -> Self {
		let alias = Arc::new(alias);
		Self {
			descriptor,
			encoder: Encoder::new(Arc::clone(&alias), leaf),
			decoder: Decoder::new(alias),
			scratch: Vec::with_capacity(512),
		}
	}

	/// Schema this session converts against.
	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	/// Encode one record to JSON document bytes.
	///
	/// The returned slice borrows the session scratch buffer and is valid
	/// until the next call. On failure the partial buffer content is not a
	/// valid document and must not be persisted.
	pub fn serialize(&mut self, value: &Value) -> Result<&[u8]> {
		self.scratch.clear();
		let mut generator = JsonGenerator::new(&mut self.scratch);
		self.encoder.encode(&self.descriptor, value, &mut generator)?;
		generator.finish()?;
		Ok(&self.scratch)
	}

	/// Decode one materialized document value back into the host shape.
	///
	/// A null document decodes to [`Value::Null`] (an absent record decodes
	/// to absence, not an empty structure).
	pub fn deserialize(&mut self, document: &Value) -> Result<Value> {
		if document.is_null() {
			return Ok(Value::Null);
		}
		self.decoder.decode(&self.descriptor, document)
	}
}

#[cfg(test)]
mod tests {
	use super::RecordCodec;
	use crate::codec::{Descriptor, FieldAlias, ScalarKind, Value};

	fn person_codec() -> RecordCodec {
		let descriptor = Descriptor::record([
			("name", Descriptor::Scalar(ScalarKind::Text)),
			("age", Descriptor::Scalar(ScalarKind::Integer)),
		]);
		RecordCodec::new(descriptor, FieldAlias::new())
	}

	#[test]
	fn serialize_reuses_the_scratch_buffer() {
		let mut codec = person_codec();
		let first = codec
			.serialize(&Value::record([("name", Value::from("Ann")), ("age", Value::I64(1))]))
			.expect("serializes")
			.to_vec();
		assert_eq!(first, br#"{"name":"Ann","age":1}"#);

		// second record must fully replace the first
		let second = codec
			.serialize(&Value::record([("name", Value::from("B")), ("age", Value::I64(2))]))
			.expect("serializes");
		assert_eq!(second, br#"{"name":"B","age":2}"#);
	}

	#[test]
	fn deserialize_null_document_is_null() {
		let mut codec = person_codec();
		assert_eq!(codec.deserialize(&Value::Null).expect("null decodes"), Value::Null);
	}

	#[test]
	fn deserialize_returns_positional_fields() {
		let mut codec = person_codec();
		let document = Value::record([("age", Value::I64(7)), ("name", Value::from("Ann"))]);
		let decoded = codec.deserialize(&document).expect("decodes");
		assert_eq!(decoded, Value::Array(vec![Value::from("Ann"), Value::I64(7)]));
	}
}
