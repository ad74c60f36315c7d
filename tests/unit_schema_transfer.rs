#![allow(missing_docs)]

use docbridge::codec::{Descriptor, FieldAlias, RecordCodec, ScalarKind, Value};

// Schema metadata gets handed to back-end tasks in serialized form; the
// descriptor and alias table must survive that trip intact.

#[test]
fn descriptor_survives_serialization() {
	let descriptor = Descriptor::record([
		("id", Descriptor::Scalar(ScalarKind::Integer)),
		("tags", Descriptor::list(Descriptor::Scalar(ScalarKind::Text))),
		(
			"payload",
			Descriptor::record([("bytes", Descriptor::Scalar(ScalarKind::Binary))]),
		),
	]);

	let blob = serde_json::to_string(&descriptor).expect("descriptor serializes");
	let restored: Descriptor = serde_json::from_str(&blob).expect("descriptor deserializes");
	assert_eq!(restored, descriptor);
}

#[test]
fn union_descriptors_transfer_but_still_refuse_conversion() {
	let descriptor = Descriptor::Union(vec![Descriptor::Scalar(ScalarKind::Integer)]);
	let blob = serde_json::to_string(&descriptor).expect("serializes");
	let restored: Descriptor = serde_json::from_str(&blob).expect("deserializes");

	let mut codec = RecordCodec::new(restored, FieldAlias::new());
	assert!(codec.serialize(&Value::I64(1)).is_err());
}

#[test]
fn alias_table_survives_serialization() {
	let alias = FieldAlias::from_pairs([("user_name", "userName"), ("zip_code", "zip")]);
	let blob = serde_json::to_string(&alias).expect("alias serializes");
	let restored: FieldAlias = serde_json::from_str(&blob).expect("alias deserializes");

	assert_eq!(restored.external_name("user_name"), "userName");
	assert_eq!(restored.canonical_name("zip"), "zip_code");
	assert_eq!(restored.external_name("untouched"), "untouched");
}

#[test]
fn restored_schema_produces_identical_documents() {
	let descriptor = Descriptor::record([
		("user_name", Descriptor::Scalar(ScalarKind::Text)),
		("age", Descriptor::Scalar(ScalarKind::Integer)),
	]);
	let alias = FieldAlias::from_pairs([("user_name", "userName")]);

	let blob = serde_json::to_string(&(&descriptor, &alias)).expect("schema pair serializes");
	let (restored_descriptor, restored_alias): (Descriptor, FieldAlias) =
		serde_json::from_str(&blob).expect("schema pair deserializes");

	let value = Value::record([("user_name", Value::from("Ann")), ("age", Value::I64(4))]);
	let mut original = RecordCodec::new(descriptor, alias);
	let mut restored = RecordCodec::new(restored_descriptor, restored_alias);

	let left = original.serialize(&value).expect("serializes").to_vec();
	let right = restored.serialize(&value).expect("serializes").to_vec();
	assert_eq!(left, right);
}
