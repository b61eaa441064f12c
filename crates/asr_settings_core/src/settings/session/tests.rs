use crate::settings::{
	BasicSettings, ChoiceOption, LogLevel, MemorySink, SettingValue, SettingsDocument, SettingsError, SettingsMap, SettingsSession, SettingsStore,
	Widget, WidgetValue, Widgets,
};

fn demo_widgets() -> Widgets {
	Widgets::from(vec![
		Widget::title("general", "General", 0),
		Widget::bool("start", "Auto start", true),
		Widget::title("route", "Route", 1),
		Widget::choice("category", "Category", "any", vec![ChoiceOption::new("any", "Any%"), ChoiceOption::new("hundo", "100%")]),
		Widget::file_select("splits", "Split file", "*.lss"),
	])
}

fn session() -> SettingsSession<SettingsStore, MemorySink> {
	SettingsSession::new(SettingsStore::new(demo_widgets(), SettingsMap::new()), MemorySink::default())
}

#[test]
fn initial_tree_reflects_stream() {
	let session = session();
	assert_eq!(session.rebuild_count(), 1);
	assert_eq!(session.tree().len(), 5);
	assert_eq!(session.tree().roots().len(), 1);
	assert_eq!(session.value(1), Some(WidgetValue::Bool(true)));
	assert_eq!(session.value(3), Some(WidgetValue::Choice(0)));
	assert_eq!(session.value(4), Some(WidgetValue::FileSelect(None)));
	assert_eq!(session.value(9), None);
}

#[test]
fn refresh_rebuilds_only_after_a_change() {
	let mut session = session();
	assert!(!session.refresh());

	session.toggle(1, false).expect("bool widget");
	assert_eq!(session.value(1), Some(WidgetValue::Bool(true)));
	assert!(session.refresh());
	assert_eq!(session.value(1), Some(WidgetValue::Bool(false)));
	assert!(!session.refresh());
	assert_eq!(session.rebuild_count(), 2);
}

#[test]
fn setting_a_default_explicitly_does_not_rebuild() {
	let mut session = session();
	session.toggle(1, true).expect("bool widget");
	session.select_choice(3, 0).expect("choice widget");
	assert!(!session.refresh());
	assert_eq!(session.host().settings().len(), 2);
}

#[test]
fn choice_and_file_edits_write_strings() {
	let mut session = session();
	session.select_choice(3, 1).expect("choice widget");
	session.select_file(4, "/runs/any.lss").expect("file widget");
	assert!(session.refresh());

	assert_eq!(session.value(3), Some(WidgetValue::Choice(1)));
	assert_eq!(session.value(4), Some(WidgetValue::FileSelect(Some("/runs/any.lss"))));
	assert_eq!(session.settings().get_by_key("category"), Some(&SettingValue::string("hundo")));
}

#[test]
fn invalid_edits_are_rejected() {
	let mut session = session();

	let err = session.toggle(7, true).expect_err("out of range");
	assert!(matches!(err, SettingsError::WidgetIndexOutOfRange { index: 7, len: 5 }));

	let err = session.toggle(0, true).expect_err("title is not a bool");
	assert!(matches!(err, SettingsError::WidgetKindMismatch { expected: "bool", got: "title", .. }));

	let err = session.select_choice(3, 2).expect_err("no third option");
	assert!(matches!(err, SettingsError::ChoiceOptionOutOfRange { index: 2, len: 2, .. }));

	let err = session.select_file(1, "x").expect_err("bool is not a file picker");
	assert!(matches!(err, SettingsError::WidgetKindMismatch { expected: "file_select", got: "bool", .. }));

	assert!(session.host().settings().is_empty());
}

#[test]
fn stream_reload_rebuilds() {
	let mut session = session();
	session.host_mut().set_widgets(Widgets::from(vec![Widget::bool("start", "Auto start", false)]));
	assert!(session.refresh());
	assert_eq!(session.tree().len(), 1);
	assert_eq!(session.value(0), Some(WidgetValue::Bool(false)));
}

#[test]
fn save_then_load_restores_state() {
	let mut session = session();
	session.toggle(1, false).expect("bool widget");
	session.set_basic(BasicSettings {
		start: Some(true),
		..BasicSettings::default()
	});
	let document = session.save("game.wasm");
	assert_eq!(document.script_path, "game.wasm");

	let xml = document.to_xml_string(&Default::default()).expect("renders");
	let mut fresh = self::session();
	fresh.load(SettingsDocument::from_xml_str(&xml).expect("parses"));

	assert_eq!(fresh.value(1), Some(WidgetValue::Bool(false)));
	assert_eq!(fresh.basic().start, Some(true));
	assert_eq!(fresh.rebuild_count(), 2);

	let (_, sink) = fresh.into_parts();
	assert_eq!(sink.messages(LogLevel::Info).collect::<Vec<_>>(), ["loaded 1 custom settings for game.wasm"]);
	assert_eq!(session.sink().messages(LogLevel::Info).count(), 1);
}

#[test]
fn loading_empty_settings_warns() {
	let mut session = session();
	session.load(SettingsDocument::new("game.wasm", SettingsMap::new()));
	assert!(!session.refresh());
	assert_eq!(session.sink().messages(LogLevel::Warning).count(), 1);
}
