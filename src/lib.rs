//! Schema-driven codec between a host engine's typed records and
//! self-describing JSON-like documents.

/// Type descriptors, value trees, field aliasing, and the recursive
/// encode/decode machinery.
pub mod codec;
