use tracing::debug;

use crate::settings::{
	BasicSettings, LogLevel, LogSink, Result, SettingsDocument, SettingsError, SettingsHost, SettingsMap, Widget, WidgetTree,
	WidgetValue, Widgets, reconcile_widgets,
};

/// Keeps a rendered widget tree in step with a [`SettingsHost`].
///
/// The session remembers the snapshot (map and widget stream) its tree was
/// built from. [`SettingsSession::refresh`] rebuilds only when the host reports
/// that snapshot stale. Edits address widgets by their position in the rendered
/// stream and write through the host by key.
pub struct SettingsSession<H, S> {
	host: H,
	sink: S,
	basic: BasicSettings,
	rendered_settings: SettingsMap,
	rendered_widgets: Widgets,
	tree: WidgetTree,
	rebuilds: usize,
}

impl<H: SettingsHost, S: LogSink> SettingsSession<H, S> {
	/// Build the initial tree from the host's current state.
	pub fn new(host: H, sink: S) -> Self {
		let mut session = Self {
			host,
			sink,
			basic: BasicSettings::default(),
			rendered_settings: SettingsMap::new(),
			rendered_widgets: Widgets::default(),
			tree: WidgetTree::default(),
			rebuilds: 0,
		};
		session.rebuild();
		session
	}

	/// Borrow the host.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Mutably borrow the host, e.g. to swap in a reloaded widget stream.
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	/// Borrow the log sink.
	pub fn sink(&self) -> &S {
		&self.sink
	}

	/// Give back the host and sink.
	pub fn into_parts(self) -> (H, S) {
		(self.host, self.sink)
	}

	/// Tree built from the rendered snapshot.
	pub fn tree(&self) -> &WidgetTree {
		&self.tree
	}

	/// Widget stream the tree was built from.
	pub fn widgets(&self) -> &Widgets {
		&self.rendered_widgets
	}

	/// Settings map the tree was built from.
	pub fn settings(&self) -> &SettingsMap {
		&self.rendered_settings
	}

	/// Host-level toggles saved next to the custom settings.
	pub fn basic(&self) -> BasicSettings {
		self.basic
	}

	/// Replace the host-level toggles.
	pub fn set_basic(&mut self, basic: BasicSettings) {
		self.basic = basic;
	}

	/// How many times the tree has been built, the initial build included.
	pub fn rebuild_count(&self) -> usize {
		self.rebuilds
	}

	/// Resolved value of a rendered widget.
	pub fn value(&self, widget_index: usize) -> Option<WidgetValue<'_>> {
		self.rendered_widgets.get(widget_index).map(|widget| widget.resolve(&self.rendered_settings))
	}

	/// Rebuild the tree if the host state moved on. Returns whether it did.
	pub fn refresh(&mut self) -> bool {
		if !self.host.are_settings_changed(&self.rendered_settings, &self.rendered_widgets) {
			return false;
		}
		self.rebuild();
		true
	}

	fn rebuild(&mut self) {
		self.rendered_settings = self.host.settings_map();
		self.rendered_widgets = self.host.widgets();
		self.tree = reconcile_widgets(self.rendered_widgets.as_slice());
		self.rebuilds += 1;
		debug!(
			widgets = self.rendered_widgets.len(),
			settings = self.rendered_settings.len(),
			roots = self.tree.roots().len(),
			"rebuilt settings tree"
		);
	}

	/// Set the state of a bool widget.
	pub fn toggle(&mut self, widget_index: usize, value: bool) -> Result<()> {
		let widget = self.widget_of_kind(widget_index, "bool")?;
		let key = widget.key.clone();
		self.host.set_bool(&key, value);
		Ok(())
	}

	/// Select an option of a choice widget by its position.
	pub fn select_choice(&mut self, widget_index: usize, option_index: usize) -> Result<()> {
		let widget = self.widget_of_kind(widget_index, "choice")?;
		let options = widget.choice_options();
		let option = options.get(option_index).ok_or_else(|| SettingsError::ChoiceOptionOutOfRange {
			key: widget.key.to_string(),
			index: option_index,
			len: options.len(),
		})?;
		let (key, option_key) = (widget.key.clone(), option.key.clone());
		self.host.set_string(&key, &option_key);
		Ok(())
	}

	/// Store a picked path for a file selection widget.
	pub fn select_file(&mut self, widget_index: usize, path: &str) -> Result<()> {
		let widget = self.widget_of_kind(widget_index, "file_select")?;
		let key = widget.key.clone();
		self.host.set_string(&key, path);
		Ok(())
	}

	fn widget_of_kind(&self, widget_index: usize, expected: &'static str) -> Result<&Widget> {
		let widget = self.rendered_widgets.get(widget_index).ok_or(SettingsError::WidgetIndexOutOfRange {
			index: widget_index,
			len: self.rendered_widgets.len(),
		})?;
		if widget.kind_name() != expected {
			return Err(SettingsError::WidgetKindMismatch {
				key: widget.key.to_string(),
				expected,
				got: widget.kind_name(),
			});
		}
		Ok(widget)
	}

	/// Capture the host's live map as a document for `script_path`.
	pub fn save(&mut self, script_path: &str) -> SettingsDocument {
		let mut document = SettingsDocument::new(script_path, self.host.settings_map());
		document.basic = self.basic;
		self.sink
			.log(LogLevel::Info, &format!("saved {} custom settings for {script_path}", document.custom_settings.len()));
		document
	}

	/// Replace the host's live map with a loaded document and refresh.
	pub fn load(&mut self, document: SettingsDocument) {
		let count = document.custom_settings.len();
		self.basic = document.basic;
		self.host.set_settings_map(document.custom_settings);
		if count == 0 {
			self.sink.log(LogLevel::Warning, &format!("no custom settings loaded for {}", document.script_path));
		} else {
			self.sink.log(LogLevel::Info, &format!("loaded {count} custom settings for {}", document.script_path));
		}
		self.refresh();
	}
}

#[cfg(test)]
mod tests;
