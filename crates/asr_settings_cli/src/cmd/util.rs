use std::path::Path;

use asr_settings::settings::{SettingValue, SettingsDocument, SettingsError, Widgets};

/// Print a serializable payload as pretty JSON on stdout.
pub fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}

/// Read a JSON widget descriptor stream from disk.
pub fn load_widgets(path: &Path) -> asr_settings::settings::Result<Widgets> {
	let input = std::fs::read_to_string(path)?;
	Widgets::from_json_str(&input)
}

/// Read a settings document, or an empty one when no path is given.
pub fn load_document_or_default(path: Option<&Path>) -> asr_settings::settings::Result<SettingsDocument> {
	match path {
		Some(path) => SettingsDocument::load(path),
		None => Ok(SettingsDocument::default()),
	}
}

/// Keep at most `max_len` characters, marking the cut with `...`.
pub fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

/// Parse one command-line scalar into a setting value.
pub fn parse_setting_value(kind: &str, raw: &str) -> asr_settings::settings::Result<SettingValue> {
	let invalid = |kind| SettingsError::InvalidNumber {
		kind,
		text: raw.to_owned(),
	};
	match kind {
		"bool" => match raw.to_ascii_lowercase().as_str() {
			"true" | "1" => Ok(SettingValue::bool(true)),
			"false" | "0" => Ok(SettingValue::bool(false)),
			_ => Err(SettingsError::InvalidBool { text: raw.to_owned() }),
		},
		"i64" => raw.parse().map(SettingValue::i64).map_err(|_| invalid(asr_settings::settings::SettingKind::I64)),
		"f64" => raw.parse().map(SettingValue::f64).map_err(|_| invalid(asr_settings::settings::SettingKind::F64)),
		"string" => Ok(SettingValue::string(raw)),
		other => Err(SettingsError::UnknownType { ty: other.to_owned() }),
	}
}
