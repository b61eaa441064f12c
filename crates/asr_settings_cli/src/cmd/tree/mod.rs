use asr_settings::settings::{SettingsSession, SettingsStore, TracingSink, WidgetValue};

use crate::cmd::print::{PrintOptions, widget_value_label};
use crate::cmd::util::{emit_json, load_document_or_default, load_widgets};

#[derive(clap::Args)]
pub struct Args {
	pub widgets: std::path::PathBuf,
	#[arg(long)]
	pub settings: Option<std::path::PathBuf>,
	#[arg(long)]
	pub json: bool,
}

/// Print the widget tree reconciled from a descriptor stream.
pub fn run(args: Args) -> asr_settings::settings::Result<()> {
	let Args { widgets: widgets_path, settings, json } = args;

	let widgets = load_widgets(&widgets_path)?;
	let mut session = SettingsSession::new(SettingsStore::new(widgets, Default::default()), TracingSink);
	if let Some(path) = settings.as_deref() {
		session.load(load_document_or_default(Some(path))?);
	}

	let options = PrintOptions::for_summary();
	let widgets = session.widgets();
	let rows: Vec<NodeJson> = session
		.tree()
		.walk()
		.map(|(depth, node)| {
			let widget = &widgets.as_slice()[node.widget];
			let value = widget.resolve(session.settings());
			NodeJson {
				depth,
				index: node.widget,
				kind: widget.kind_name(),
				key: widget.key.to_string(),
				description: widget.description.to_string(),
				heading_level: node.heading_level,
				children: node.children.len(),
				value: value_json(value),
				label: widget_value_label(widget, value, options),
			}
		})
		.collect();

	if json {
		emit_json(&TreeJson {
			widgets: widgets.len(),
			roots: session.tree().roots().len(),
			nodes: rows,
		});
		return Ok(());
	}

	println!("widgets: {}", widgets.len());
	println!("roots: {}", session.tree().roots().len());
	for row in &rows {
		let pad = "  ".repeat(row.depth);
		if row.kind == "title" {
			println!("{pad}# {}", row.description);
		} else {
			println!("{pad}{} {} ({})", row.label, row.description, row.key);
		}
	}

	Ok(())
}

fn value_json(value: WidgetValue<'_>) -> serde_json::Value {
	match value {
		WidgetValue::Title => serde_json::Value::Null,
		WidgetValue::Bool(checked) => checked.into(),
		WidgetValue::Choice(index) => index.into(),
		WidgetValue::FileSelect(path) => path.map_or(serde_json::Value::Null, Into::into),
	}
}

#[derive(serde::Serialize)]
struct NodeJson {
	depth: usize,
	index: usize,
	kind: &'static str,
	key: String,
	description: String,
	heading_level: Option<u32>,
	children: usize,
	value: serde_json::Value,
	#[serde(skip)]
	label: String,
}

#[derive(serde::Serialize)]
struct TreeJson {
	widgets: usize,
	roots: usize,
	nodes: Vec<NodeJson>,
}
