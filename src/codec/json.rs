use std::io::Write;

use crate::codec::{Generator, Result};

#[derive(Debug, Clone, Copy)]
enum Frame {
	Array { first: bool },
	Object { first: bool },
}

/// Compact JSON materialization of the [`Generator`] grammar.
///
/// Tracks one comma flag per open container. String escaping and float
/// rendering are delegated to `serde_json`; binary is rendered as a JSON
/// array of byte values since the wire carries no binary-native form. The
/// caller finalizes the stream with [`finish`](Self::finish) once the full
/// value has been written.
pub struct JsonGenerator<W: Write> {
	out: W,
	stack: Vec<Frame>,
}

impl<W: Write> JsonGenerator<W> {
	/// Generator writing compact JSON into `out`.
	pub fn new(out: W) -> Self {
		Self { out, stack: Vec::new() }
	}

	/// Current container nesting depth.
	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	/// Flush and release the underlying writer.
	pub fn finish(mut self) -> Result<W> {
		self.out.flush()?;
		Ok(self.out)
	}

	fn before_value(&mut self) -> Result<()> {
		if let Some(Frame::Array { first }) = self.stack.last_mut() {
			if *first {
				*first = false;
			} else {
				self.out.write_all(b",")?;
			}
		}
		Ok(())
	}
}

impl<W: Write> Generator for JsonGenerator<W> {
	fn write_null(&mut self) -> Result<()> {
		self.before_value()?;
		self.out.write_all(b"null")?;
		Ok(())
	}

	fn write_bool(&mut self, value: bool) -> Result<()> {
		self.before_value()?;
		self.out.write_all(if value { b"true" } else { b"false" })?;
		Ok(())
	}

	fn write_i64(&mut self, value: i64) -> Result<()> {
		self.before_value()?;
		write!(self.out, "{value}")?;
		Ok(())
	}

	fn write_u64(&mut self, value: u64) -> Result<()> {
		self.before_value()?;
		write!(self.out, "{value}")?;
		Ok(())
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		self.before_value()?;
		serde_json::to_writer(&mut self.out, &value)?;
		Ok(())
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		self.before_value()?;
		serde_json::to_writer(&mut self.out, &value)?;
		Ok(())
	}

	fn write_string(&mut self, value: &str) -> Result<()> {
		self.before_value()?;
		serde_json::to_writer(&mut self.out, value)?;
		Ok(())
	}

	fn write_utf8(&mut self, bytes: &[u8]) -> Result<()> {
		let text = String::from_utf8_lossy(bytes);
		self.write_string(&text)
	}

	fn write_binary(&mut self, bytes: &[u8]) -> Result<()> {
		self.before_value()?;
		serde_json::to_writer(&mut self.out, bytes)?;
		Ok(())
	}

	fn write_field_name(&mut self, name: &str) -> Result<()> {
		if let Some(Frame::Object { first }) = self.stack.last_mut() {
			if *first {
				*first = false;
			} else {
				self.out.write_all(b",")?;
			}
		}
		serde_json::to_writer(&mut self.out, name)?;
		self.out.write_all(b":")?;
		Ok(())
	}

	fn begin_array(&mut self) -> Result<()> {
		self.before_value()?;
		self.out.write_all(b"[")?;
		self.stack.push(Frame::Array { first: true });
		Ok(())
	}

	fn end_array(&mut self) -> Result<()> {
		self.stack.pop();
		self.out.write_all(b"]")?;
		Ok(())
	}

	fn begin_object(&mut self) -> Result<()> {
		self.before_value()?;
		self.out.write_all(b"{")?;
		self.stack.push(Frame::Object { first: true });
		Ok(())
	}

	fn end_object(&mut self) -> Result<()> {
		self.stack.pop();
		self.out.write_all(b"}")?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::JsonGenerator;
	use crate::codec::Generator;

	fn render(drive: impl FnOnce(&mut JsonGenerator<&mut Vec<u8>>)) -> String {
		let mut buf = Vec::new();
		let mut generator = JsonGenerator::new(&mut buf);
		drive(&mut generator);
		generator.finish().expect("finish flushes");
		String::from_utf8(buf).expect("output is utf-8")
	}

	#[test]
	fn object_fields_are_comma_separated() {
		let json = render(|g| {
			g.begin_object().unwrap();
			g.write_field_name("a").unwrap();
			g.write_i64(1).unwrap();
			g.write_field_name("b").unwrap();
			g.write_null().unwrap();
			g.end_object().unwrap();
		});
		assert_eq!(json, r#"{"a":1,"b":null}"#);
	}

	#[test]
	fn nested_arrays_track_commas_per_frame() {
		let json = render(|g| {
			g.begin_array().unwrap();
			g.write_i64(1).unwrap();
			g.begin_array().unwrap();
			g.write_i64(2).unwrap();
			g.write_i64(3).unwrap();
			g.end_array().unwrap();
			g.write_i64(4).unwrap();
			g.end_array().unwrap();
		});
		assert_eq!(json, "[1,[2,3],4]");
	}

	#[test]
	fn strings_are_escaped() {
		let json = render(|g| g.write_string("a\"b\\c").unwrap());
		assert_eq!(json, r#""a\"b\\c""#);
	}

	#[test]
	fn utf8_byte_text_is_written_as_string() {
		let json = render(|g| g.write_utf8("héllo".as_bytes()).unwrap());
		assert_eq!(json, r#""héllo""#);
	}

	#[test]
	fn binary_renders_as_byte_array() {
		let json = render(|g| g.write_binary(&[0, 127, 255]).unwrap());
		assert_eq!(json, "[0,127,255]");
	}

	#[test]
	fn nonfinite_floats_render_as_null() {
		let json = render(|g| g.write_f64(f64::NAN).unwrap());
		assert_eq!(json, "null");
	}

	#[test]
	fn depth_follows_open_containers() {
		let mut buf = Vec::new();
		let mut generator = JsonGenerator::new(&mut buf);
		assert_eq!(generator.depth(), 0);
		generator.begin_object().unwrap();
		generator.write_field_name("x").unwrap();
		generator.begin_array().unwrap();
		assert_eq!(generator.depth(), 2);
		generator.end_array().unwrap();
		generator.end_object().unwrap();
		assert_eq!(generator.depth(), 0);
	}
}
