use crate::settings::SettingValue;

/// Ordered, append-only sequence of owned values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsList {
	items: Vec<SettingValue>,
}

impl SettingsList {
	/// Create an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty list with room for `capacity` items.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
		}
	}

	/// Number of items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list holds no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Item at position `index`.
	pub fn get(&self, index: usize) -> Option<&SettingValue> {
		self.items.get(index)
	}

	/// Append an item, taking ownership of `value`.
	pub fn push(&mut self, value: SettingValue) {
		self.items.push(value);
	}

	/// Iterate items in order.
	pub fn iter(&self) -> std::slice::Iter<'_, SettingValue> {
		self.items.iter()
	}

	/// Item-wise [`SettingValue::structurally_eq`].
	pub fn structurally_eq(&self, other: &Self) -> bool {
		self.items.len() == other.items.len() && self.items.iter().zip(&other.items).all(|(a, b)| a.structurally_eq(b))
	}
}

impl IntoIterator for SettingsList {
	type Item = SettingValue;
	type IntoIter = std::vec::IntoIter<SettingValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a SettingsList {
	type Item = &'a SettingValue;
	type IntoIter = std::slice::Iter<'a, SettingValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl FromIterator<SettingValue> for SettingsList {
	fn from_iter<I: IntoIterator<Item = SettingValue>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}
