use crate::codec::{Generator, Result, Value};

/// Leaf-level encoder for host-native values.
///
/// This is the one seam where host-specific type knowledge enters the codec:
/// the host supplies an implementation that classifies its own leaf and
/// collection values and emits the matching document events. `Ok(false)`
/// means "could not encode" and lets the containing traversal decide whether
/// to abort; it is the only non-error failure signal in the codec.
pub trait ValueWriter {
	/// Host-native value type this writer classifies.
	type Value;

	/// Attempt to emit `value`; `Ok(false)` when the value kind is not
	/// recognized.
	fn write(&self, value: &Self::Value, generator: &mut dyn Generator) -> Result<bool>;
}

/// [`ValueWriter`] over the crate's own [`Value`] tree.
///
/// Strict by default: [`Value::Opaque`] is unhandled. The permissive variant
/// writes opaque data as a binary blob instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocValueWriter {
	write_unknown_types: bool,
}

impl DocValueWriter {
	/// Strict writer; opaque values are reported as unhandled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Permissive writer; opaque values are written as binary blobs.
	pub fn permissive() -> Self {
		Self { write_unknown_types: true }
	}
}

impl ValueWriter for DocValueWriter {
	type Value = Value;

	fn write(&self, value: &Value, generator: &mut dyn Generator) -> Result<bool> {
		match value {
			Value::Null => generator.write_null()?,
			Value::Bool(v) => generator.write_bool(*v)?,
			Value::I64(v) => generator.write_i64(*v)?,
			Value::U64(v) => generator.write_u64(*v)?,
			Value::F32(v) => generator.write_f32(*v)?,
			Value::F64(v) => generator.write_f64(*v)?,
			Value::String(v) => generator.write_string(v)?,
			Value::Bytes(v) => generator.write_binary(v)?,
			Value::Array(items) => {
				generator.begin_array()?;
				for item in items {
					if !self.write(item, generator)? {
						// keep the stream balanced on the bail-out path
						generator.end_array()?;
						return Ok(false);
					}
				}
				generator.end_array()?;
			}
			Value::Record(record) => {
				generator.begin_object()?;
				for field in &record.fields {
					generator.write_field_name(&field.name)?;
					if !self.write(&field.value, generator)? {
						generator.end_object()?;
						return Ok(false);
					}
				}
				generator.end_object()?;
			}
			Value::Opaque(bytes) => {
				if !self.write_unknown_types {
					return Ok(false);
				}
				generator.write_binary(bytes)?;
			}
		}
		Ok(true)
	}
}
