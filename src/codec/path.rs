use std::fmt;

/// One step in a field path from the record root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// A named record field.
	Field(Box<str>),
	/// A zero-based list element index.
	Index(usize),
}

/// Traversal-scoped stack of path steps, rendered for error reports.
///
/// Cleared at the start of each top-level encode/decode call and pushed/popped
/// as the traversal descends, so a failure deep inside a nested structure can
/// report where it happened.
#[derive(Debug, Clone, Default)]
pub struct FieldPath {
	/// Ordered steps from the record root.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Empty path positioned at the record root.
	pub fn new() -> Self {
		Self::default()
	}

	/// Descend into a named field.
	pub fn push_field(&mut self, name: &str) {
		self.steps.push(PathStep::Field(name.into()));
	}

	/// Descend into a list element.
	pub fn push_index(&mut self, index: usize) {
		self.steps.push(PathStep::Index(index));
	}

	/// Ascend one level.
	pub fn pop(&mut self) {
		self.steps.pop();
	}

	/// Reset to the record root, keeping the allocation.
	pub fn clear(&mut self) {
		self.steps.clear();
	}

	/// Render the path as `a.b[2].c`; the bare root renders as `$`.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.steps.is_empty() {
			return f.write_str("$");
		}

		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) => {
					if idx > 0 {
						f.write_str(".")?;
					}
					f.write_str(name)?;
				}
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}
