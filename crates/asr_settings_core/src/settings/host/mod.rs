use crate::settings::{SettingValue, SettingsMap, Widgets, settings_changed};

/// Script runtime side of the settings data flow.
///
/// The host owns the live map and the widget stream a script registered.
/// Readers get snapshots; writers go through keyed setters.
pub trait SettingsHost {
	/// Current widget descriptor stream.
	fn widgets(&self) -> Widgets;

	/// Snapshot of the live settings map.
	fn settings_map(&self) -> SettingsMap;

	/// Replace the live settings map.
	fn set_settings_map(&mut self, map: SettingsMap);

	/// Store a bool under `key`.
	fn set_bool(&mut self, key: &str, value: bool);

	/// Store a string under `key`.
	fn set_string(&mut self, key: &str, value: &str);

	/// Whether a view built from the given snapshot is stale.
	fn are_settings_changed(&self, prev_settings: &SettingsMap, prev_widgets: &Widgets) -> bool {
		settings_changed(prev_settings, prev_widgets, &self.settings_map(), &self.widgets())
	}
}

/// In-memory host holding one widget stream and one live map.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
	widgets: Widgets,
	settings: SettingsMap,
}

impl SettingsStore {
	/// Create a store from a widget stream and an initial map.
	pub fn new(widgets: Widgets, settings: SettingsMap) -> Self {
		Self { widgets, settings }
	}

	/// Replace the widget stream, as a script reload would.
	pub fn set_widgets(&mut self, widgets: Widgets) {
		self.widgets = widgets;
	}

	/// Borrow the live map without cloning.
	pub fn settings(&self) -> &SettingsMap {
		&self.settings
	}

	fn store(&mut self, key: &str, value: SettingValue) {
		self.settings = std::mem::take(&mut self.settings).with_entry(key, value);
	}
}

impl SettingsHost for SettingsStore {
	fn widgets(&self) -> Widgets {
		self.widgets.clone()
	}

	fn settings_map(&self) -> SettingsMap {
		self.settings.clone()
	}

	fn set_settings_map(&mut self, map: SettingsMap) {
		self.settings = map;
	}

	fn set_bool(&mut self, key: &str, value: bool) {
		self.store(key, SettingValue::bool(value));
	}

	fn set_string(&mut self, key: &str, value: &str) {
		self.store(key, SettingValue::string(value));
	}
}
