use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bidirectional canonical↔external field-name table.
///
/// Both lookups are total: an unmapped name maps to itself. The table is built
/// once per session and is read-only afterwards, so it can be shared across
/// concurrent traversals. The same table serves encode and decode, which is
/// what keeps a round trip through an external store from renaming fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldAlias {
	forward: HashMap<String, String>,
	reverse: HashMap<String, String>,
}

impl FieldAlias {
	/// Empty table; every lookup is identity.
	pub fn new() -> Self {
		Self::default()
	}

	/// Table from `(canonical, external)` pairs.
	pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
		let mut alias = Self::new();
		for (canonical, external) in pairs {
			alias.insert(canonical, external);
		}
		alias
	}

	/// Map `canonical` to `external` in both directions.
	pub fn insert(&mut self, canonical: &str, external: &str) {
		self.forward.insert(canonical.to_owned(), external.to_owned());
		self.reverse.insert(external.to_owned(), canonical.to_owned());
	}

	/// External (document-side) name for a canonical field name.
	pub fn external_name<'a>(&'a self, canonical: &'a str) -> &'a str {
		self.forward.get(canonical).map(String::as_str).unwrap_or(canonical)
	}

	/// Canonical (host-side) name for an external field name.
	pub fn canonical_name<'a>(&'a self, external: &'a str) -> &'a str {
		self.reverse.get(external).map(String::as_str).unwrap_or(external)
	}
}

#[cfg(test)]
mod tests {
	use super::FieldAlias;

	#[test]
	fn unmapped_names_fall_back_to_identity() {
		let alias = FieldAlias::new();
		assert_eq!(alias.external_name("user_name"), "user_name");
		assert_eq!(alias.canonical_name("userName"), "userName");
	}

	#[test]
	fn mapped_names_translate_both_ways() {
		let alias = FieldAlias::from_pairs([("user_name", "userName")]);
		assert_eq!(alias.external_name("user_name"), "userName");
		assert_eq!(alias.canonical_name("userName"), "user_name");
	}

	#[test]
	fn translation_is_not_transitive() {
		// a→b alongside b→c must not turn a into c.
		let alias = FieldAlias::from_pairs([("a", "b"), ("b", "c")]);
		assert_eq!(alias.external_name("a"), "b");
		assert_eq!(alias.canonical_name("b"), "a");
	}
}
