use crate::codec::Result;

/// Ordered sink of self-describing document events.
///
/// Callers must drive the grammar strictly: every `begin_*` is matched by
/// exactly one `end_*` at the same nesting level, and [`write_field_name`]
/// appears only directly inside an open object, immediately before exactly
/// one value-producing call. Implementations advance the underlying stream
/// and do nothing else; there is no implicit flush.
///
/// [`write_field_name`]: Generator::write_field_name
pub trait Generator {
	/// Emit a null value.
	fn write_null(&mut self) -> Result<()>;
	/// Emit a boolean value.
	fn write_bool(&mut self, value: bool) -> Result<()>;
	/// Emit a signed integer value.
	fn write_i64(&mut self, value: i64) -> Result<()>;
	/// Emit an unsigned integer value.
	fn write_u64(&mut self, value: u64) -> Result<()>;
	/// Emit a single-precision float value.
	fn write_f32(&mut self, value: f32) -> Result<()>;
	/// Emit a double-precision float value.
	fn write_f64(&mut self, value: f64) -> Result<()>;
	/// Emit a text value.
	fn write_string(&mut self, value: &str) -> Result<()>;
	/// Emit a text value already held as UTF-8 bytes, avoiding an
	/// intermediate string allocation.
	fn write_utf8(&mut self, bytes: &[u8]) -> Result<()>;
	/// Emit a binary value.
	fn write_binary(&mut self, bytes: &[u8]) -> Result<()>;
	/// Emit the name of the next object field.
	fn write_field_name(&mut self, name: &str) -> Result<()>;
	/// Open an array container.
	fn begin_array(&mut self) -> Result<()>;
	/// Close the innermost array container.
	fn end_array(&mut self) -> Result<()>;
	/// Open an object container.
	fn begin_object(&mut self) -> Result<()>;
	/// Close the innermost object container.
	fn end_object(&mut self) -> Result<()>;
}
