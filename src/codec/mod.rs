mod alias;
mod decode;
mod descriptor;
mod encode;
mod error;
mod generator;
mod json;
mod path;
mod session;
mod value;
mod writer;

/// Canonical↔external field-name translation table.
pub use alias::FieldAlias;
/// Recursive descriptor-driven decoder.
pub use decode::Decoder;
/// Type descriptor tree.
pub use descriptor::{Descriptor, FieldDescriptor, ScalarKind};
/// Recursive descriptor-driven encoder.
pub use encode::Encoder;
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Document event sink abstraction.
pub use generator::Generator;
/// JSON materialization of the document stream.
pub use json::JsonGenerator;
/// Field path rendering for error reports.
pub use path::{FieldPath, PathStep};
/// Per-session record codec owning the scratch buffers.
pub use session::RecordCodec;
/// Runtime value tree types.
pub use value::{FieldValue, RecordValue, Value};
/// Leaf value encoding seam and the built-in writer.
pub use writer::{DocValueWriter, ValueWriter};
