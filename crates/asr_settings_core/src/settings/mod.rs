mod change;
mod element;
mod error;
mod host;
mod list;
mod log;
mod map;
mod persist;
mod session;
mod tree;
mod value;
mod widget;

/// Snapshot comparison used to decide when a widget tree must be rebuilt.
pub use change::settings_changed;
/// Generic element tree and its XML text form.
pub use element::{Element, XmlWriteOptions};
/// Error and result aliases.
pub use error::{Result, SettingsError};
/// Collaborator interface and in-memory implementation.
pub use host::{SettingsHost, SettingsStore};
/// Ordered list container.
pub use list::SettingsList;
/// Leveled log sinks.
pub use log::{LogLevel, LogSink, MemorySink, NullSink, TracingSink};
/// Ordered key/value container.
pub use map::SettingsMap;
/// Persistence of setting trees and whole settings documents.
pub use persist::{
	BasicSettings, MAX_SETTING_DEPTH, SettingsDocument, decode_custom_settings, decode_custom_settings_or_empty, decode_list, decode_map, decode_value, encode_list, encode_map, encode_value,
};
/// Edit/rebuild/save loop over a settings host.
pub use session::SettingsSession;
/// Heading-level tree reconciliation.
pub use tree::{NodeId, TreeNode, Walk, WidgetTree, reconcile_widgets};
/// Tagged setting values.
pub use value::{SettingKind, SettingValue};
/// Widget descriptors and their evaluation against a settings map.
pub use widget::{ChoiceOption, Widget, WidgetKind, WidgetValue, Widgets};
