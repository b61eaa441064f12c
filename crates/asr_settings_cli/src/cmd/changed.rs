use std::path::PathBuf;

use asr_settings::settings::settings_changed;

use crate::cmd::util::{emit_json, load_document_or_default, load_widgets};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long = "prev-widgets")]
	pub prev_widgets: PathBuf,
	#[arg(long = "prev-settings")]
	pub prev_settings: Option<PathBuf>,
	#[arg(long)]
	pub widgets: PathBuf,
	#[arg(long)]
	pub settings: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
}

/// Compare two widget/settings snapshots the way a settings view refresh does.
pub fn run(args: Args) -> asr_settings::settings::Result<()> {
	let prev_widgets = load_widgets(&args.prev_widgets)?;
	let widgets = load_widgets(&args.widgets)?;
	let prev_settings = load_document_or_default(args.prev_settings.as_deref())?.custom_settings;
	let settings = load_document_or_default(args.settings.as_deref())?.custom_settings;

	let changed = settings_changed(&prev_settings, &prev_widgets, &settings, &widgets);

	if args.json {
		emit_json(&ChangedJson {
			changed,
			prev_widgets: prev_widgets.len(),
			widgets: widgets.len(),
		});
		return Ok(());
	}

	println!("{}", if changed { "changed" } else { "unchanged" });
	Ok(())
}

#[derive(serde::Serialize)]
struct ChangedJson {
	changed: bool,
	prev_widgets: usize,
	widgets: usize,
}
