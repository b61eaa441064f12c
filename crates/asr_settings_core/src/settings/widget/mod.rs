use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::settings::{Result, SettingValue, SettingsError, SettingsMap};

/// One selectable option of a choice widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
	/// Value stored in the settings map when selected.
	pub key: Box<str>,
	/// Human-readable label.
	pub description: Box<str>,
}

impl ChoiceOption {
	/// Create a choice option.
	pub fn new(key: impl Into<Box<str>>, description: impl Into<Box<str>>) -> Self {
		Self {
			key: key.into(),
			description: description.into(),
		}
	}
}

/// Kind-specific widget payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetKind {
	/// Section heading; drives nesting only.
	Title {
		/// Nesting level, `0` is outermost.
		heading_level: u32,
	},
	/// Checkbox.
	Bool {
		/// Value used while the map has no `Bool` under the widget key.
		default_value: bool,
	},
	/// Single choice out of a fixed option list.
	Choice {
		/// Option key used while the map has no matching string.
		default_option_key: Box<str>,
		/// Options in display order.
		options: Vec<ChoiceOption>,
	},
	/// File picker.
	FileSelect {
		/// Filter string handed to the host file dialog.
		filter: Box<str>,
	},
}

/// Read-only widget descriptor produced by a script.
///
/// Descriptors never store a current value: bool state, selected choice and
/// picked file are resolved against a [`SettingsMap`] snapshot on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
	/// Settings map key written by edits. Titles carry one but never read it,
	/// so only titles may leave it out of a JSON stream.
	#[serde(default)]
	pub key: Box<str>,
	/// Label shown for the widget.
	pub description: Box<str>,
	/// Optional hover text.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tooltip: Option<Box<str>>,
	/// Kind-specific payload.
	#[serde(flatten)]
	pub kind: WidgetKind,
}

/// Value of a widget resolved against one settings map snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetValue<'a> {
	/// Titles have no value.
	Title,
	/// Effective checkbox state.
	Bool(bool),
	/// Effective selected option index.
	Choice(usize),
	/// Stored file path, if one was picked.
	FileSelect(Option<&'a str>),
}

impl Widget {
	/// Create a title widget.
	pub fn title(key: impl Into<Box<str>>, description: impl Into<Box<str>>, heading_level: u32) -> Self {
		Self::with_kind(key, description, WidgetKind::Title { heading_level })
	}

	/// Create a checkbox widget.
	pub fn bool(key: impl Into<Box<str>>, description: impl Into<Box<str>>, default_value: bool) -> Self {
		Self::with_kind(key, description, WidgetKind::Bool { default_value })
	}

	/// Create a choice widget.
	pub fn choice(key: impl Into<Box<str>>, description: impl Into<Box<str>>, default_option_key: impl Into<Box<str>>, options: Vec<ChoiceOption>) -> Self {
		Self::with_kind(
			key,
			description,
			WidgetKind::Choice {
				default_option_key: default_option_key.into(),
				options,
			},
		)
	}

	/// Create a file selection widget.
	pub fn file_select(key: impl Into<Box<str>>, description: impl Into<Box<str>>, filter: impl Into<Box<str>>) -> Self {
		Self::with_kind(key, description, WidgetKind::FileSelect { filter: filter.into() })
	}

	fn with_kind(key: impl Into<Box<str>>, description: impl Into<Box<str>>, kind: WidgetKind) -> Self {
		Self {
			key: key.into(),
			description: description.into(),
			tooltip: None,
			kind,
		}
	}

	/// Attach hover text.
	pub fn with_tooltip(mut self, tooltip: impl Into<Box<str>>) -> Self {
		self.tooltip = Some(tooltip.into());
		self
	}

	/// Stable lowercase kind label.
	pub fn kind_name(&self) -> &'static str {
		match self.kind {
			WidgetKind::Title { .. } => "title",
			WidgetKind::Bool { .. } => "bool",
			WidgetKind::Choice { .. } => "choice",
			WidgetKind::FileSelect { .. } => "file_select",
		}
	}

	/// Whether this widget is a title.
	pub fn is_title(&self) -> bool {
		matches!(self.kind, WidgetKind::Title { .. })
	}

	/// Heading level of a title, `0` for every other kind.
	pub fn heading_level(&self) -> u32 {
		match self.kind {
			WidgetKind::Title { heading_level } => heading_level,
			_ => 0,
		}
	}

	/// Choice options, empty for other kinds.
	pub fn choice_options(&self) -> &[ChoiceOption] {
		match &self.kind {
			WidgetKind::Choice { options, .. } => options,
			_ => &[],
		}
	}

	/// File dialog filter of a file selection widget.
	pub fn file_filter(&self) -> Option<&str> {
		match &self.kind {
			WidgetKind::FileSelect { filter } => Some(&**filter),
			_ => None,
		}
	}

	/// Effective checkbox state: the stored `Bool`, else the default.
	pub fn resolve_bool(&self, settings: &SettingsMap) -> Option<bool> {
		let WidgetKind::Bool { default_value } = self.kind else {
			return None;
		};
		match settings.get_by_key(&self.key) {
			Some(SettingValue::Bool(stored)) => Some(*stored),
			_ => Some(default_value),
		}
	}

	/// Effective option index of a choice widget.
	///
	/// Matches the stored string against option keys, then the default key, then
	/// falls back to the first option.
	pub fn resolve_choice_index(&self, settings: &SettingsMap) -> Option<usize> {
		let WidgetKind::Choice { default_option_key, options } = &self.kind else {
			return None;
		};
		let key = match settings.get_by_key(&self.key) {
			Some(SettingValue::String(stored)) => stored,
			_ => default_option_key,
		};
		let index = options
			.iter()
			.position(|option| option.key == *key)
			.or_else(|| options.iter().position(|option| option.key == *default_option_key))
			.unwrap_or_default();
		Some(index)
	}

	/// Stored path of a file selection widget.
	pub fn resolve_file_path<'a>(&self, settings: &'a SettingsMap) -> Option<&'a str> {
		if !matches!(self.kind, WidgetKind::FileSelect { .. }) {
			return None;
		}
		settings.get_by_key(&self.key).and_then(SettingValue::as_str)
	}

	/// Resolve whichever value this widget kind has.
	pub fn resolve<'a>(&self, settings: &'a SettingsMap) -> WidgetValue<'a> {
		match &self.kind {
			WidgetKind::Title { .. } => WidgetValue::Title,
			WidgetKind::Bool { .. } => WidgetValue::Bool(self.resolve_bool(settings).unwrap_or_default()),
			WidgetKind::Choice { .. } => WidgetValue::Choice(self.resolve_choice_index(settings).unwrap_or_default()),
			WidgetKind::FileSelect { .. } => WidgetValue::FileSelect(self.resolve_file_path(settings)),
		}
	}
}

/// Flat, ordered widget descriptor stream.
///
/// Immutable once produced and cheap to clone; a reloaded script produces a new stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Widgets {
	inner: Arc<[Widget]>,
}

impl Widgets {
	/// Parse a JSON array of widget descriptors.
	///
	/// Every widget except a title must carry a non-empty key.
	pub fn from_json_str(input: &str) -> Result<Self> {
		let items: Vec<Widget> = serde_json::from_str(input)?;
		if let Some((index, widget)) = items.iter().enumerate().find(|(_, widget)| !widget.is_title() && widget.key.is_empty()) {
			return Err(SettingsError::MissingWidgetKey {
				index,
				kind: widget.kind_name(),
			});
		}
		Ok(Self::from(items))
	}

	/// Render the stream as a JSON array.
	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self.as_slice())?)
	}

	/// Number of descriptors.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Whether the stream is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Descriptor at `index`.
	pub fn get(&self, index: usize) -> Option<&Widget> {
		self.inner.get(index)
	}

	/// Iterate descriptors in stream order.
	pub fn iter(&self) -> std::slice::Iter<'_, Widget> {
		self.inner.iter()
	}

	/// Borrow the descriptors as a slice.
	pub fn as_slice(&self) -> &[Widget] {
		&self.inner
	}

	/// Whether both handles share one allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl From<Vec<Widget>> for Widgets {
	fn from(items: Vec<Widget>) -> Self {
		Self { inner: items.into() }
	}
}

impl FromIterator<Widget> for Widgets {
	fn from_iter<I: IntoIterator<Item = Widget>>(iter: I) -> Self {
		Self { inner: iter.into_iter().collect() }
	}
}

impl<'a> IntoIterator for &'a Widgets {
	type Item = &'a Widget;
	type IntoIter = std::slice::Iter<'a, Widget>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}
