use asr_settings::settings::{SettingValue, SettingsDocument, SettingsMap};

use crate::cmd::print::{PrintOptions, render_map};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: std::path::PathBuf,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Print a settings document header and custom settings tree.
pub fn run(args: Args) -> asr_settings::settings::Result<()> {
	let Args { file: path, max_depth, json } = args;

	let document = SettingsDocument::load(&path)?;

	if json {
		emit_json(&ShowJson {
			path: path.display().to_string(),
			version: document.version.clone(),
			script_path: document.script_path.clone(),
			start: document.basic.start,
			reset: document.basic.reset,
			split: document.basic.split,
			custom_settings: map_json(&document.custom_settings),
		});
		return Ok(());
	}

	let mut options = PrintOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_print_depth = max_depth;
	}

	println!("path: {}", path.display());
	println!("version: {}", document.version);
	println!("script_path: {}", document.script_path);
	println!("start: {}", toggle_label(document.basic.start));
	println!("reset: {}", toggle_label(document.basic.reset));
	println!("split: {}", toggle_label(document.basic.split));
	println!("custom_settings: {}", document.custom_settings.len());

	let mut out = String::new();
	render_map(&mut out, &document.custom_settings, 2, 0, options);
	print!("{out}");

	Ok(())
}

fn toggle_label(value: Option<bool>) -> &'static str {
	match value {
		Some(true) => "on",
		Some(false) => "off",
		None => "-",
	}
}

pub(crate) fn map_json(map: &SettingsMap) -> Vec<EntryJson> {
	map.iter()
		.map(|(key, value)| EntryJson {
			id: Some(key.to_owned()),
			value: value_json(value),
		})
		.collect()
}

fn value_json(value: &SettingValue) -> ValueJson {
	match value {
		SettingValue::Bool(v) => ValueJson::Bool(*v),
		SettingValue::I64(v) => ValueJson::I64(*v),
		SettingValue::F64(v) => ValueJson::F64(*v),
		SettingValue::String(v) => ValueJson::String(v.to_string()),
		SettingValue::Map(map) => ValueJson::Map(map_json(map)),
		SettingValue::List(list) => ValueJson::List(
			list.iter()
				.map(|item| EntryJson {
					id: None,
					value: value_json(item),
				})
				.collect(),
		),
	}
}

#[derive(serde::Serialize)]
pub(crate) struct EntryJson {
	#[serde(skip_serializing_if = "Option::is_none")]
	id: Option<String>,
	#[serde(flatten)]
	value: ValueJson,
}

#[derive(serde::Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
enum ValueJson {
	Bool(bool),
	I64(i64),
	F64(f64),
	String(String),
	Map(Vec<EntryJson>),
	List(Vec<EntryJson>),
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	version: String,
	script_path: String,
	start: Option<bool>,
	reset: Option<bool>,
	split: Option<bool>,
	custom_settings: Vec<EntryJson>,
}
