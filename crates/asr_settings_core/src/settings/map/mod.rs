use crate::settings::SettingValue;

/// Ordered `(key, value)` pairs owned by the map.
///
/// Insertion order is the iteration and serialization order. Keys may repeat;
/// [`SettingsMap::get_by_key`] sees only the first entry for a key and later ones
/// stay in place, shadowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsMap {
	entries: Vec<(Box<str>, SettingValue)>,
}

impl SettingsMap {
	/// Create an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty map with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Number of entries, shadowed duplicates included.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entry at insertion position `index`.
	pub fn get(&self, index: usize) -> Option<(&str, &SettingValue)> {
		self.entries.get(index).map(|(key, value)| (key.as_ref(), value))
	}

	/// First value stored under `key`.
	pub fn get_by_key(&self, key: &str) -> Option<&SettingValue> {
		self.entries.iter().find(|(candidate, _)| candidate.as_ref() == key).map(|(_, value)| value)
	}

	/// Append an entry, taking ownership of `value`.
	pub fn insert(&mut self, key: impl Into<Box<str>>, value: SettingValue) {
		self.entries.push((key.into(), value));
	}

	/// Rebuild the map with the first entry for `key` replaced by `value`.
	///
	/// Appends when `key` is absent. Shadowed duplicates are carried over untouched.
	pub fn with_entry(self, key: &str, value: SettingValue) -> Self {
		let mut out = Self::with_capacity(self.len() + 1);
		let mut pending = Some(value);
		for (candidate, existing) in self {
			if candidate.as_ref() == key
				&& let Some(replacement) = pending.take()
			{
				out.insert(candidate, replacement);
			} else {
				out.insert(candidate, existing);
			}
		}
		if let Some(value) = pending {
			out.insert(key, value);
		}
		out
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
		self.entries.iter().map(|(key, value)| (key.as_ref(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_ref())
	}

	/// Entry-wise [`SettingValue::structurally_eq`], keys and order included.
	pub fn structurally_eq(&self, other: &Self) -> bool {
		self.entries.len() == other.entries.len()
			&& self
				.entries
				.iter()
				.zip(&other.entries)
				.all(|((key, value), (other_key, other_value))| key == other_key && value.structurally_eq(other_value))
	}
}

impl IntoIterator for SettingsMap {
	type Item = (Box<str>, SettingValue);
	type IntoIter = std::vec::IntoIter<(Box<str>, SettingValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<K: Into<Box<str>>> FromIterator<(K, SettingValue)> for SettingsMap {
	fn from_iter<I: IntoIterator<Item = (K, SettingValue)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
		}
	}
}
