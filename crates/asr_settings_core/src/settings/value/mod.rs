use std::fmt;

use crate::settings::{SettingsList, SettingsMap};

/// Closed set of setting value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
	/// Boolean flag.
	Bool,
	/// 64-bit signed integer.
	I64,
	/// 64-bit float.
	F64,
	/// UTF-8 text.
	String,
	/// Nested ordered map.
	Map,
	/// Nested ordered list.
	List,
}

impl SettingKind {
	/// Type name used by the persisted `type` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::I64 => "i64",
			Self::F64 => "f64",
			Self::String => "string",
			Self::Map => "map",
			Self::List => "list",
		}
	}

	/// Parse a persisted `type` attribute value.
	pub fn from_type_name(name: &str) -> Option<Self> {
		match name {
			"bool" => Some(Self::Bool),
			"i64" => Some(Self::I64),
			"f64" => Some(Self::F64),
			"string" => Some(Self::String),
			"map" => Some(Self::Map),
			"list" => Some(Self::List),
			_ => None,
		}
	}
}

impl fmt::Display for SettingKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One node of a settings tree.
///
/// The kind is fixed by the variant; there is no way to retag a value in place.
/// `Map` and `List` own their container, so building one consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
	/// Boolean flag.
	Bool(bool),
	/// 64-bit signed integer.
	I64(i64),
	/// 64-bit float.
	F64(f64),
	/// UTF-8 text.
	String(Box<str>),
	/// Nested ordered map.
	Map(SettingsMap),
	/// Nested ordered list.
	List(SettingsList),
}

impl SettingValue {
	/// Build a boolean value.
	pub fn bool(value: bool) -> Self {
		Self::Bool(value)
	}

	/// Build an integer value.
	pub fn i64(value: i64) -> Self {
		Self::I64(value)
	}

	/// Build a float value.
	pub fn f64(value: f64) -> Self {
		Self::F64(value)
	}

	/// Build a string value.
	pub fn string(value: impl Into<Box<str>>) -> Self {
		Self::String(value.into())
	}

	/// Build a map value, taking ownership of `map`.
	pub fn map(map: SettingsMap) -> Self {
		Self::Map(map)
	}

	/// Build a list value, taking ownership of `list`.
	pub fn list(list: SettingsList) -> Self {
		Self::List(list)
	}

	/// Kind tag of this value.
	pub fn kind(&self) -> SettingKind {
		match self {
			Self::Bool(_) => SettingKind::Bool,
			Self::I64(_) => SettingKind::I64,
			Self::F64(_) => SettingKind::F64,
			Self::String(_) => SettingKind::String,
			Self::Map(_) => SettingKind::Map,
			Self::List(_) => SettingKind::List,
		}
	}

	/// Equality that compares floats bit for bit.
	///
	/// Unlike `==`, a `NaN` equals an identically encoded `NaN` and `-0.0`
	/// differs from `0.0`, so a value tree always equals a faithful copy of itself.
	pub fn structurally_eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::I64(a), Self::I64(b)) => a == b,
			(Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
			(Self::String(a), Self::String(b)) => a == b,
			(Self::Map(a), Self::Map(b)) => a.structurally_eq(b),
			(Self::List(a), Self::List(b)) => a.structurally_eq(b),
			_ => false,
		}
	}

	/// Boolean payload, if this is a `Bool`.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Integer payload, if this is an `I64`.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::I64(value) => Some(*value),
			_ => None,
		}
	}

	/// Float payload, if this is an `F64`.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::F64(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload, if this is a `String`.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(&**value),
			_ => None,
		}
	}

	/// Borrowed map payload, if this is a `Map`.
	pub fn as_map(&self) -> Option<&SettingsMap> {
		match self {
			Self::Map(value) => Some(value),
			_ => None,
		}
	}

	/// Borrowed list payload, if this is a `List`.
	pub fn as_list(&self) -> Option<&SettingsList> {
		match self {
			Self::List(value) => Some(value),
			_ => None,
		}
	}

	/// Move the map payload out, or hand the value back unchanged.
	pub fn into_map(self) -> std::result::Result<SettingsMap, Self> {
		match self {
			Self::Map(value) => Ok(value),
			other => Err(other),
		}
	}

	/// Move the list payload out, or hand the value back unchanged.
	pub fn into_list(self) -> std::result::Result<SettingsList, Self> {
		match self {
			Self::List(value) => Ok(value),
			other => Err(other),
		}
	}
}

impl From<bool> for SettingValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for SettingValue {
	fn from(value: i64) -> Self {
		Self::I64(value)
	}
}

impl From<f64> for SettingValue {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}

impl From<&str> for SettingValue {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for SettingValue {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<SettingsMap> for SettingValue {
	fn from(value: SettingsMap) -> Self {
		Self::Map(value)
	}
}

impl From<SettingsList> for SettingValue {
	fn from(value: SettingsList) -> Self {
		Self::List(value)
	}
}
