use asr_settings::settings::{SettingsDocument, XmlWriteOptions};

use crate::cmd::util::{emit_json, parse_setting_value};

#[derive(clap::Args)]
pub struct Args {
	pub file: std::path::PathBuf,
	#[arg(long)]
	pub key: String,
	#[command(flatten)]
	pub value: NewValue,
	#[arg(long)]
	pub output: Option<std::path::PathBuf>,
	#[arg(long)]
	pub compact: bool,
	#[arg(long)]
	pub json: bool,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct NewValue {
	#[arg(long = "bool")]
	pub bool_value: Option<String>,
	#[arg(long = "string", allow_hyphen_values = true)]
	pub string_value: Option<String>,
	#[arg(long = "i64", allow_hyphen_values = true)]
	pub i64_value: Option<String>,
	#[arg(long = "f64", allow_hyphen_values = true)]
	pub f64_value: Option<String>,
}

impl NewValue {
	fn kind_and_raw(&self) -> Option<(&'static str, &str)> {
		[
			("bool", &self.bool_value),
			("string", &self.string_value),
			("i64", &self.i64_value),
			("f64", &self.f64_value),
		]
		.into_iter()
		.find_map(|(kind, raw)| raw.as_deref().map(|raw| (kind, raw)))
	}
}

/// Replace the first custom setting under a key, or append it.
pub fn run(args: Args) -> asr_settings::settings::Result<()> {
	let Args {
		file: path,
		key,
		value,
		output,
		compact,
		json,
	} = args;

	let (kind, raw) = value.kind_and_raw().unwrap_or(("string", ""));
	let value = parse_setting_value(kind, raw)?;

	let mut document = SettingsDocument::load(&path)?;
	let replaced = document.custom_settings.get_by_key(&key).is_some();
	document.custom_settings = std::mem::take(&mut document.custom_settings).with_entry(&key, value);

	let target = output.unwrap_or_else(|| path.clone());
	let options = if compact { XmlWriteOptions::compact() } else { XmlWriteOptions::default() };
	document.save(&target, &options)?;
	tracing::debug!(key = %key, kind, replaced, target = %target.display(), "wrote setting");

	if json {
		emit_json(&SetJson {
			path: target.display().to_string(),
			key,
			kind,
			replaced,
			entries: document.custom_settings.len(),
		});
		return Ok(());
	}

	println!("path: {}", target.display());
	println!("key: {key}");
	println!("type: {kind}");
	println!("action: {}", if replaced { "replaced" } else { "appended" });
	Ok(())
}

#[derive(serde::Serialize)]
struct SetJson {
	path: String,
	key: String,
	#[serde(rename = "type")]
	kind: &'static str,
	replaced: bool,
	entries: usize,
}
