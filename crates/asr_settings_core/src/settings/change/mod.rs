use crate::settings::{SettingsMap, Widgets};

/// Decide whether a widget tree rendered from the previous snapshot is stale.
///
/// Any difference in the descriptor stream counts, as does any widget whose
/// resolved value differs between the two maps. Map entries that no widget
/// reads are ignored.
pub fn settings_changed(prev_settings: &SettingsMap, prev_widgets: &Widgets, settings: &SettingsMap, widgets: &Widgets) -> bool {
	if !prev_widgets.ptr_eq(widgets) && prev_widgets != widgets {
		return true;
	}

	widgets.iter().any(|widget| widget.resolve(prev_settings) != widget.resolve(settings))
}
