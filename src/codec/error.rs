use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while encoding and decoding typed records.
#[derive(Debug, Error)]
pub enum CodecError {
	/// A `Union` descriptor was encountered; unions are not convertible.
	#[error("unsupported union descriptor at {path}")]
	UnsupportedShape {
		/// Field path from the record root to the union.
		path: String,
	},
	/// The leaf writer could not classify a scalar value in strict mode.
	#[error("unencodable {kind} value at {path}")]
	EncodeFailure {
		/// Field path from the record root to the leaf.
		path: String,
		/// Logical kind of the offending value.
		kind: &'static str,
	},
	/// A value's runtime shape does not match its paired descriptor.
	#[error("shape mismatch at {path}: expected {expected}, got {got}")]
	MalformedInput {
		/// Field path from the record root to the mismatch.
		path: String,
		/// Shape required by the descriptor.
		expected: &'static str,
		/// Logical kind of the value actually found.
		got: &'static str,
	},
	/// Underlying byte sink failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON rendering failure in the document materializer.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
