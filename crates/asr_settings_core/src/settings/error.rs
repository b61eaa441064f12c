use thiserror::Error;

use crate::settings::SettingKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors produced while reading, decoding, and editing settings data.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Low-level XML syntax or encoding failure.
	#[error("xml: {0}")]
	Xml(#[from] quick_xml::Error),
	/// Widget descriptor stream was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Element name did not match the expected tag.
	#[error("unexpected element <{got}>, expected <{expected}>")]
	UnexpectedElement {
		/// Tag required at this position.
		expected: &'static str,
		/// Tag actually found.
		got: String,
	},
	/// Required child element was absent.
	#[error("missing <{name}> element")]
	MissingElement {
		/// Missing element tag.
		name: &'static str,
	},
	/// Required attribute was absent.
	#[error("<{element}> is missing attribute {attribute:?}")]
	MissingAttribute {
		/// Element carrying the attribute.
		element: String,
		/// Missing attribute name.
		attribute: &'static str,
	},
	/// `type` attribute named no known setting kind.
	#[error("unknown setting type {ty:?}")]
	UnknownType {
		/// Raw `type` attribute value.
		ty: String,
	},
	/// Boolean element text was not a recognized literal.
	#[error("invalid bool literal {text:?}")]
	InvalidBool {
		/// Raw element text.
		text: String,
	},
	/// Numeric element text failed to parse.
	#[error("invalid {kind} literal {text:?}")]
	InvalidNumber {
		/// Numeric kind being parsed.
		kind: SettingKind,
		/// Raw element text.
		text: String,
	},
	/// Document ended before the root element closed.
	#[error("unexpected end of document")]
	UnexpectedEof,
	/// Content followed the root element, or no root element was present.
	#[error("document must contain exactly one root element")]
	TrailingContent,
	/// Settings nest deeper than the decoder accepts.
	#[error("settings nest deeper than {limit} levels")]
	TooDeep {
		/// Maximum accepted nesting depth.
		limit: usize,
	},
	/// Interactive widget descriptor has no settings key.
	#[error("widget {index} ({kind}) has no key")]
	MissingWidgetKey {
		/// Position in the descriptor stream.
		index: usize,
		/// Widget kind label.
		kind: &'static str,
	},
	/// Widget index was outside the descriptor stream.
	#[error("widget index {index} out of range (len={len})")]
	WidgetIndexOutOfRange {
		/// Requested widget index.
		index: usize,
		/// Descriptor stream length.
		len: usize,
	},
	/// Widget exists but is not of the kind an edit requires.
	#[error("widget {key:?} is a {got}, expected {expected}")]
	WidgetKindMismatch {
		/// Widget key.
		key: String,
		/// Kind the edit applies to.
		expected: &'static str,
		/// Kind of the widget.
		got: &'static str,
	},
	/// Choice option index was outside the option list.
	#[error("choice {key:?} has no option {index} (options={len})")]
	ChoiceOptionOutOfRange {
		/// Choice widget key.
		key: String,
		/// Requested option index.
		index: usize,
		/// Number of options.
		len: usize,
	},
}
