use std::fmt::Write as _;

use asr_settings::settings::{SettingValue, SettingsList, SettingsMap, Widget, WidgetValue};

use crate::cmd::util::truncate;

/// Output truncation and formatting limits for settings trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of entries printed for a single map or list.
	pub max_list_items: usize,
	/// Maximum recursive print depth for nested maps/lists.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_list_items: 64,
			max_print_depth: 8,
		}
	}
}

impl PrintOptions {
	/// Preset for one-screen summaries.
	pub fn for_summary() -> Self {
		Self {
			max_string_len: 60,
			max_list_items: 16,
			max_print_depth: 3,
		}
	}
}

/// Render map entries as indented `key: type = value` lines.
pub fn render_map(out: &mut String, map: &SettingsMap, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	for (key, value) in map.iter().take(options.max_list_items) {
		let _ = write!(out, "{pad}{key}: ");
		render_value(out, value, indent, depth, options);
	}
	if map.len() > options.max_list_items {
		let _ = writeln!(out, "{pad}... {} more", map.len() - options.max_list_items);
	}
}

fn render_list(out: &mut String, list: &SettingsList, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	for (index, value) in list.iter().enumerate().take(options.max_list_items) {
		let _ = write!(out, "{pad}[{index}]: ");
		render_value(out, value, indent, depth, options);
	}
	if list.len() > options.max_list_items {
		let _ = writeln!(out, "{pad}... {} more", list.len() - options.max_list_items);
	}
}

fn render_value(out: &mut String, value: &SettingValue, indent: usize, depth: u32, options: PrintOptions) {
	let kind = value.kind();
	match value {
		SettingValue::Bool(v) => {
			let _ = writeln!(out, "{kind} = {v}");
		}
		SettingValue::I64(v) => {
			let _ = writeln!(out, "{kind} = {v}");
		}
		SettingValue::F64(v) => {
			let _ = writeln!(out, "{kind} = {v}");
		}
		SettingValue::String(v) => {
			let _ = writeln!(out, "{kind} = \"{}\"", truncate(v, options.max_string_len));
		}
		SettingValue::Map(map) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{kind} {{ ... {} entries }}", map.len());
				return;
			}
			let _ = writeln!(out, "{kind}");
			render_map(out, map, indent + 2, depth + 1, options);
		}
		SettingValue::List(list) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{kind} [ ... {} items ]", list.len());
				return;
			}
			let _ = writeln!(out, "{kind}");
			render_list(out, list, indent + 2, depth + 1, options);
		}
	}
}

/// Short text form of a resolved widget value.
pub fn widget_value_label(widget: &Widget, value: WidgetValue<'_>, options: PrintOptions) -> String {
	match value {
		WidgetValue::Title => String::new(),
		WidgetValue::Bool(checked) => String::from(if checked { "[x]" } else { "[ ]" }),
		WidgetValue::Choice(index) => match widget.choice_options().get(index) {
			Some(option) => format!("({}) {}", option.key, truncate(&option.description, options.max_string_len)),
			None => "(no options)".to_owned(),
		},
		WidgetValue::FileSelect(Some(path)) => truncate(path, options.max_string_len),
		WidgetValue::FileSelect(None) => "<none>".to_owned(),
	}
}
