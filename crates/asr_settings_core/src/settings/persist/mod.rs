use std::path::Path;

use tracing::{debug, warn};

use crate::settings::{Element, Result, SettingKind, SettingValue, SettingsError, SettingsList, SettingsMap, XmlWriteOptions};

const SETTING_TAG: &str = "Setting";
const ID_ATTR: &str = "id";
const TYPE_ATTR: &str = "type";
const VALUE_ATTR: &str = "value";

const ROOT_TAG: &str = "Settings";
const VERSION_TAG: &str = "Version";
const SCRIPT_PATH_TAG: &str = "ScriptPath";
const CUSTOM_SETTINGS_TAG: &str = "CustomSettings";
const DOCUMENT_VERSION: &str = "1.0";

/// Deepest `<Setting>` nesting the decoders accept.
pub const MAX_SETTING_DEPTH: usize = 128;

/// Encode one value as a `<Setting>` element, with `id` when it is a map entry.
pub fn encode_value(id: Option<&str>, value: &SettingValue) -> Element {
	let mut element = Element::new(SETTING_TAG);
	if let Some(id) = id {
		element = element.with_attribute(ID_ATTR, id);
	}
	element = element.with_attribute(TYPE_ATTR, value.kind().as_str());

	match value {
		SettingValue::Bool(value) => element.with_text(if *value { "1" } else { "0" }),
		SettingValue::I64(value) => element.with_text(value.to_string()),
		SettingValue::F64(value) => element.with_text(value.to_string()),
		// Strings live in an attribute, unlike every other scalar.
		SettingValue::String(value) => element.with_attribute(VALUE_ATTR, value.as_ref()),
		SettingValue::Map(map) => {
			element.children = encode_map_entries(map);
			element
		}
		SettingValue::List(list) => {
			element.children = encode_list_items(list);
			element
		}
	}
}

/// Encode a map as an element named `name` whose children carry `id` attributes.
pub fn encode_map(name: &str, map: &SettingsMap) -> Element {
	let mut element = Element::new(name);
	element.children = encode_map_entries(map);
	element
}

/// Encode a list as an element named `name` whose children carry no `id`.
pub fn encode_list(name: &str, list: &SettingsList) -> Element {
	let mut element = Element::new(name);
	element.children = encode_list_items(list);
	element
}

fn encode_map_entries(map: &SettingsMap) -> Vec<Element> {
	map.iter().map(|(key, value)| encode_value(Some(key), value)).collect()
}

fn encode_list_items(list: &SettingsList) -> Vec<Element> {
	list.iter().map(|value| encode_value(None, value)).collect()
}

/// Decode one `<Setting>` element.
pub fn decode_value(element: &Element) -> Result<SettingValue> {
	decode_value_at(element, 1)
}

/// Decode the children of `element` as map entries.
///
/// Fails as a whole on the first malformed descendant, or when settings nest
/// deeper than [`MAX_SETTING_DEPTH`].
pub fn decode_map(element: &Element) -> Result<SettingsMap> {
	decode_map_at(element, 1)
}

/// Decode the children of `element` as list items.
pub fn decode_list(element: &Element) -> Result<SettingsList> {
	decode_list_at(element, 1)
}

fn decode_value_at(element: &Element, depth: usize) -> Result<SettingValue> {
	if depth > MAX_SETTING_DEPTH {
		return Err(SettingsError::TooDeep { limit: MAX_SETTING_DEPTH });
	}
	if element.name != SETTING_TAG {
		return Err(SettingsError::UnexpectedElement {
			expected: SETTING_TAG,
			got: element.name.clone(),
		});
	}

	let ty = element.attribute(TYPE_ATTR).ok_or_else(|| SettingsError::MissingAttribute {
		element: element.name.clone(),
		attribute: TYPE_ATTR,
	})?;
	let kind = SettingKind::from_type_name(ty).ok_or_else(|| SettingsError::UnknownType { ty: ty.to_owned() })?;

	let value = match kind {
		SettingKind::Bool => SettingValue::Bool(parse_bool(element.text())?),
		SettingKind::I64 => SettingValue::I64(parse_number(kind, element.text())?),
		SettingKind::F64 => SettingValue::F64(parse_number(kind, element.text())?),
		SettingKind::String => {
			let value = element.attribute(VALUE_ATTR).ok_or_else(|| SettingsError::MissingAttribute {
				element: element.name.clone(),
				attribute: VALUE_ATTR,
			})?;
			SettingValue::string(value)
		}
		SettingKind::Map => SettingValue::Map(decode_map_at(element, depth + 1)?),
		SettingKind::List => SettingValue::List(decode_list_at(element, depth + 1)?),
	};
	Ok(value)
}

fn decode_map_at(element: &Element, depth: usize) -> Result<SettingsMap> {
	let mut map = SettingsMap::with_capacity(element.children.len());
	for child in &element.children {
		let key = child.attribute(ID_ATTR).ok_or_else(|| SettingsError::MissingAttribute {
			element: child.name.clone(),
			attribute: ID_ATTR,
		})?;
		map.insert(key, decode_value_at(child, depth)?);
	}
	Ok(map)
}

fn decode_list_at(element: &Element, depth: usize) -> Result<SettingsList> {
	let mut list = SettingsList::with_capacity(element.children.len());
	for child in &element.children {
		list.push(decode_value_at(child, depth)?);
	}
	Ok(list)
}

/// Strictly decode the custom settings tree of a `<Settings>` document element.
///
/// Unlike [`SettingsDocument::from_element`], a missing or malformed tree is an error.
pub fn decode_custom_settings(root: &Element) -> Result<SettingsMap> {
	if root.name != ROOT_TAG {
		return Err(SettingsError::UnexpectedElement {
			expected: ROOT_TAG,
			got: root.name.clone(),
		});
	}
	let custom = root.child(CUSTOM_SETTINGS_TAG).ok_or(SettingsError::MissingElement { name: CUSTOM_SETTINGS_TAG })?;
	decode_map(custom)
}

/// Decode a custom settings element, substituting an empty map when any part is malformed.
pub fn decode_custom_settings_or_empty(element: &Element) -> SettingsMap {
	match decode_map(element) {
		Ok(map) => map,
		Err(err) => {
			warn!(error = %err, "discarding malformed custom settings");
			SettingsMap::new()
		}
	}
}

fn parse_bool(text: &str) -> Result<bool> {
	match text {
		"1" => Ok(true),
		"0" => Ok(false),
		_ if text.eq_ignore_ascii_case("true") => Ok(true),
		_ if text.eq_ignore_ascii_case("false") => Ok(false),
		_ => Err(SettingsError::InvalidBool { text: text.to_owned() }),
	}
}

fn parse_number<T: std::str::FromStr>(kind: SettingKind, text: &str) -> Result<T> {
	text.parse().map_err(|_| SettingsError::InvalidNumber {
		kind,
		text: text.to_owned(),
	})
}

/// Start/Reset/Split toggles the host shows outside the script's own widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicSettings {
	/// Automatic start enabled.
	pub start: Option<bool>,
	/// Automatic reset enabled.
	pub reset: Option<bool>,
	/// Automatic split enabled.
	pub split: Option<bool>,
}

impl BasicSettings {
	const TAGS: [&'static str; 3] = ["Start", "Reset", "Split"];

	fn slots(&self) -> [Option<bool>; 3] {
		[self.start, self.reset, self.split]
	}

	fn from_slots([start, reset, split]: [Option<bool>; 3]) -> Self {
		Self { start, reset, split }
	}
}

/// Whole persisted component document.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
	/// Document format version.
	pub version: String,
	/// Path of the script module the settings belong to.
	pub script_path: String,
	/// Host-level toggles.
	pub basic: BasicSettings,
	/// Script-defined settings tree.
	pub custom_settings: SettingsMap,
}

impl Default for SettingsDocument {
	fn default() -> Self {
		Self {
			version: DOCUMENT_VERSION.to_owned(),
			script_path: String::new(),
			basic: BasicSettings::default(),
			custom_settings: SettingsMap::new(),
		}
	}
}

impl SettingsDocument {
	/// Create a current-version document for `script_path`.
	pub fn new(script_path: impl Into<String>, custom_settings: SettingsMap) -> Self {
		Self {
			script_path: script_path.into(),
			custom_settings,
			..Self::default()
		}
	}

	/// Encode as a `<Settings>` element.
	pub fn to_element(&self) -> Element {
		let mut root = Element::new(ROOT_TAG)
			.with_child(Element::new(VERSION_TAG).with_text(self.version.as_str()))
			.with_child(Element::new(SCRIPT_PATH_TAG).with_text(self.script_path.as_str()));
		for (tag, value) in BasicSettings::TAGS.into_iter().zip(self.basic.slots()) {
			if let Some(value) = value {
				root.push_child(Element::new(tag).with_text(if value { "True" } else { "False" }));
			}
		}
		root.push_child(encode_map(CUSTOM_SETTINGS_TAG, &self.custom_settings));
		root
	}

	/// Decode a `<Settings>` element.
	///
	/// Only the root tag and the basic toggles are strict. A missing or malformed
	/// custom settings tree yields an empty map.
	pub fn from_element(element: &Element) -> Result<Self> {
		if element.name != ROOT_TAG {
			return Err(SettingsError::UnexpectedElement {
				expected: ROOT_TAG,
				got: element.name.clone(),
			});
		}

		let version = element.child(VERSION_TAG).map(Element::text).unwrap_or(DOCUMENT_VERSION).to_owned();
		let script_path = element.child(SCRIPT_PATH_TAG).map(Element::text).unwrap_or_default().to_owned();

		let mut slots = [None; 3];
		for (slot, tag) in slots.iter_mut().zip(BasicSettings::TAGS) {
			if let Some(child) = element.child(tag) {
				*slot = Some(parse_bool(child.text())?);
			}
		}

		let custom_settings = match element.child(CUSTOM_SETTINGS_TAG) {
			Some(custom) => decode_custom_settings_or_empty(custom),
			None => {
				debug!("document has no custom settings");
				SettingsMap::new()
			}
		};

		Ok(Self {
			version,
			script_path,
			basic: BasicSettings::from_slots(slots),
			custom_settings,
		})
	}

	/// Render as XML text.
	pub fn to_xml_string(&self, options: &XmlWriteOptions) -> Result<String> {
		self.to_element().to_xml_string(options)
	}

	/// Parse XML text.
	pub fn from_xml_str(input: &str) -> Result<Self> {
		Self::from_element(&Element::parse_str(input)?)
	}

	/// Read and parse a document file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let input = std::fs::read_to_string(path)?;
		Self::from_xml_str(&input)
	}

	/// Render and write a document file.
	pub fn save(&self, path: impl AsRef<Path>, options: &XmlWriteOptions) -> Result<()> {
		std::fs::write(path, self.to_xml_string(options)?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests;
