use crate::settings::{
	BasicSettings, Element, MAX_SETTING_DEPTH, SettingKind, SettingValue, SettingsDocument, SettingsError, SettingsList, SettingsMap, XmlWriteOptions,
	decode_custom_settings, decode_custom_settings_or_empty, decode_map, decode_value, encode_map, encode_value,
};

fn sample_tree(depth: usize) -> SettingsMap {
	let mut map = SettingsMap::new();
	map.insert("flag", SettingValue::bool(true));
	map.insert("count", SettingValue::i64(-42));
	map.insert("ratio", SettingValue::f64(0.1));
	map.insert("label", SettingValue::string("a & <b> \"c\""));
	map.insert("empty", SettingValue::string(""));
	map.insert("flag", SettingValue::bool(false));

	let mut list = SettingsList::new();
	list.push(SettingValue::i64(i64::MAX));
	list.push(SettingValue::f64(-1.5e-300));
	list.push(SettingValue::string("item"));
	if depth > 0 {
		list.push(SettingValue::map(sample_tree(depth - 1)));
		map.insert("nested", SettingValue::map(sample_tree(depth - 1)));
	}
	map.insert("items", SettingValue::list(list));
	map
}

#[test]
fn every_kind_round_trips() {
	let values = [
		SettingValue::bool(true),
		SettingValue::bool(false),
		SettingValue::i64(i64::MIN),
		SettingValue::f64(1.0 / 3.0),
		SettingValue::f64(1e300),
		SettingValue::string("text"),
		SettingValue::map(SettingsMap::new()),
		SettingValue::list(SettingsList::new()),
	];
	for value in values {
		let element = encode_value(None, &value);
		assert_eq!(element.attribute("type"), Some(value.kind().as_str()));
		assert_eq!(decode_value(&element).expect("value decodes"), value);
	}
}

#[test]
fn deep_tree_round_trips_through_xml_text() {
	let map = sample_tree(3);
	let xml = encode_map("CustomSettings", &map).to_xml_string(&XmlWriteOptions::default()).expect("renders");
	let element = Element::parse_str(&xml).expect("parses");
	let decoded = decode_map(&element).expect("decodes");

	assert_eq!(decoded, map);
	assert_eq!(encode_map("CustomSettings", &decoded), element);
}

#[test]
fn encoding_follows_wire_layout() {
	let mut inner = SettingsMap::new();
	inner.insert("nested", SettingValue::string("text"));
	let mut list = SettingsList::new();
	list.push(SettingValue::i64(42));
	let mut map = SettingsMap::new();
	map.insert("key1", SettingValue::bool(true));
	map.insert("key2", SettingValue::map(inner));
	map.insert("key3", SettingValue::list(list));

	let xml = encode_map("CustomSettings", &map).to_xml_string(&XmlWriteOptions::compact()).expect("renders");
	assert_eq!(
		xml,
		concat!(
			r#"<CustomSettings>"#,
			r#"<Setting id="key1" type="bool">1</Setting>"#,
			r#"<Setting id="key2" type="map"><Setting id="nested" type="string" value="text"/></Setting>"#,
			r#"<Setting id="key3" type="list"><Setting type="i64">42</Setting></Setting>"#,
			r#"</CustomSettings>"#,
		)
	);
}

#[test]
fn map_child_without_id_fails_whole_parse() {
	let xml = r#"<CustomSettings>
		<Setting id="ok" type="bool">1</Setting>
		<Setting id="outer" type="map">
			<Setting type="i64">5</Setting>
		</Setting>
	</CustomSettings>"#;
	let element = Element::parse_str(xml).expect("parses");

	let err = decode_map(&element).expect_err("missing id");
	assert!(matches!(err, SettingsError::MissingAttribute { attribute: "id", .. }));
	assert!(decode_custom_settings_or_empty(&element).is_empty());
}

#[test]
fn malformed_values_are_rejected() {
	let cases = [
		(r#"<Setting type="i64">4.5</Setting>"#, "i64 text"),
		(r#"<Setting type="f64">fast</Setting>"#, "f64 text"),
		(r#"<Setting type="bool">yes</Setting>"#, "bool text"),
		(r#"<Setting type="u8">1</Setting>"#, "unknown type"),
		(r#"<Setting>1</Setting>"#, "missing type"),
		(r#"<Setting type="string"/>"#, "string without value"),
		(r#"<Entry type="bool">1</Entry>"#, "wrong tag"),
		(r#"<Setting type="list"><Setting type="bool">2</Setting></Setting>"#, "bad list item"),
	];
	for (xml, label) in cases {
		let element = Element::parse_str(xml).expect("parses");
		assert!(decode_value(&element).is_err(), "{label} should fail");
	}
}

#[test]
fn specific_errors_name_the_problem() {
	let element = Element::parse_str(r#"<Setting type="f64">fast</Setting>"#).expect("parses");
	let err = decode_value(&element).expect_err("bad float");
	assert!(matches!(err, SettingsError::InvalidNumber { kind: SettingKind::F64, ref text } if text == "fast"));

	let element = Element::parse_str(r#"<Setting type="decimal">1</Setting>"#).expect("parses");
	let err = decode_value(&element).expect_err("bad type");
	assert!(matches!(err, SettingsError::UnknownType { ref ty } if ty == "decimal"));
}

#[test]
fn bool_text_accepts_word_literals() {
	for (text, expected) in [("True", true), ("false", false), ("1", true), ("0", false)] {
		let element = Element::new("Setting").with_attribute("type", "bool").with_text(text);
		assert_eq!(decode_value(&element).expect("bool decodes"), SettingValue::Bool(expected));
	}
}

#[test]
fn document_round_trips_with_basic_toggles() {
	let mut custom = SettingsMap::new();
	custom.insert("x", SettingValue::bool(false));
	let mut document = SettingsDocument::new("/splitters/game.wasm", custom);
	document.basic = BasicSettings {
		start: Some(true),
		reset: None,
		split: Some(false),
	};

	let xml = document.to_xml_string(&XmlWriteOptions::default()).expect("renders");
	assert!(xml.contains("<Start>True</Start>"));
	assert!(xml.contains("<Split>False</Split>"));
	assert!(!xml.contains("<Reset>"));

	let loaded = SettingsDocument::from_xml_str(&xml).expect("document parses");
	assert_eq!(loaded, document);
}

#[test]
fn document_with_malformed_custom_settings_keeps_header() {
	let xml = r#"<Settings>
		<Version>1.0</Version>
		<ScriptPath>game.wasm</ScriptPath>
		<CustomSettings>
			<Setting id="good" type="bool">1</Setting>
			<Setting id="bad" type="i64">NaN</Setting>
		</CustomSettings>
	</Settings>"#;

	let document = SettingsDocument::from_xml_str(xml).expect("document parses");
	assert_eq!(document.script_path, "game.wasm");
	assert!(document.custom_settings.is_empty());
}

#[test]
fn document_defaults_missing_parts() {
	let document = SettingsDocument::from_xml_str("<Settings/>").expect("document parses");
	assert_eq!(document, SettingsDocument::default());

	let err = SettingsDocument::from_xml_str("<Layout/>").expect_err("wrong root");
	assert!(matches!(err, SettingsError::UnexpectedElement { expected: "Settings", .. }));
}

#[test]
fn strict_custom_settings_decode_reports_problems() {
	let root = Element::parse_str("<Settings><Version>1.0</Version></Settings>").expect("parses");
	let err = decode_custom_settings(&root).expect_err("no custom settings");
	assert!(matches!(err, SettingsError::MissingElement { name: "CustomSettings" }));

	let root = Element::parse_str(r#"<Settings><CustomSettings><Setting type="bool">1</Setting></CustomSettings></Settings>"#).expect("parses");
	assert!(matches!(decode_custom_settings(&root), Err(SettingsError::MissingAttribute { .. })));

	let root = Element::parse_str(r#"<Settings><CustomSettings><Setting id="a" type="i64">7</Setting></CustomSettings></Settings>"#).expect("parses");
	let map = decode_custom_settings(&root).expect("decodes");
	assert_eq!(map.get_by_key("a"), Some(&SettingValue::i64(7)));
}

fn nested_maps_document(depth: usize) -> String {
	let mut xml = String::from("<Settings><ScriptPath>deep.wasm</ScriptPath><CustomSettings>");
	for level in 0..depth {
		xml.push_str(&format!(r#"<Setting id="level{level}" type="map">"#));
	}
	xml.push_str(&"</Setting>".repeat(depth));
	xml.push_str("</CustomSettings></Settings>");
	xml
}

#[test]
fn nesting_at_depth_limit_decodes_and_reencodes() {
	let root = Element::parse_str(&nested_maps_document(MAX_SETTING_DEPTH)).expect("parses");
	let map = decode_custom_settings(&root).expect("limit depth decodes");

	let mut depth = 0;
	let mut current = &map;
	while let Some((_, SettingValue::Map(inner))) = current.get(0) {
		depth += 1;
		current = inner;
	}
	assert_eq!(depth, MAX_SETTING_DEPTH);

	let xml = encode_map("CustomSettings", &map).to_xml_string(&XmlWriteOptions::compact()).expect("renders");
	let again = decode_map(&Element::parse_str(&xml).expect("reparses")).expect("decodes again");
	assert_eq!(again, map);
}

#[test]
fn nesting_past_depth_limit_degrades_to_empty_settings() {
	let xml = nested_maps_document(20_000);
	let root = Element::parse_str(&xml).expect("deep xml still parses");

	let err = decode_custom_settings(&root).expect_err("too deep");
	assert!(matches!(err, SettingsError::TooDeep { limit: MAX_SETTING_DEPTH }));

	let rendered = root.to_xml_string(&XmlWriteOptions::compact()).expect("deep element renders");
	assert_eq!(rendered.len(), xml.len());

	let document = SettingsDocument::from_xml_str(&xml).expect("header still parses");
	assert_eq!(document.script_path, "deep.wasm");
	assert!(document.custom_settings.is_empty());

	let one_past = SettingsDocument::from_xml_str(&nested_maps_document(MAX_SETTING_DEPTH + 1)).expect("parses");
	assert!(one_past.custom_settings.is_empty());
}

#[test]
fn non_finite_and_signed_zero_floats_survive_reencoding() {
	let map: SettingsMap = [
		("nan", SettingValue::f64(f64::NAN)),
		("inf", SettingValue::f64(f64::INFINITY)),
		("neg_inf", SettingValue::f64(f64::NEG_INFINITY)),
		("neg_zero", SettingValue::f64(-0.0)),
	]
	.into_iter()
	.collect();

	let xml = encode_map("CustomSettings", &map).to_xml_string(&XmlWriteOptions::compact()).expect("renders");
	let again = decode_map(&Element::parse_str(&xml).expect("reparses")).expect("decodes");
	assert!(again.structurally_eq(&map));
	assert_ne!(again, map);
	assert_eq!(again.get_by_key("neg_zero").and_then(SettingValue::as_f64).map(f64::is_sign_negative), Some(true));
}
