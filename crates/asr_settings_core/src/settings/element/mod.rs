use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::settings::{Result, SettingsError};

/// Formatting switches for [`Element::to_xml_string`].
#[derive(Debug, Clone, Copy)]
pub struct XmlWriteOptions {
	/// Spaces per nesting level, `None` writes everything on one line.
	pub indent: Option<usize>,
	/// Emit a leading `<?xml ...?>` declaration.
	pub declaration: bool,
}

impl Default for XmlWriteOptions {
	fn default() -> Self {
		Self {
			indent: Some(2),
			declaration: true,
		}
	}
}

impl XmlWriteOptions {
	/// Single-line output without declaration, for embedding.
	pub fn compact() -> Self {
		Self {
			indent: None,
			declaration: false,
		}
	}
}

/// Generic XML element: name, ordered attributes, text, and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
	/// Tag name.
	pub name: String,
	/// Attributes in document order.
	pub attributes: Vec<(String, String)>,
	/// Unescaped text content, if any.
	pub text: Option<String>,
	/// Child elements in document order.
	pub children: Vec<Element>,
}

impl Element {
	/// Create an element with no attributes, text, or children.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: Vec::new(),
			text: None,
			children: Vec::new(),
		}
	}

	/// Append an attribute.
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.push((name.into(), value.into()));
		self
	}

	/// Set text content.
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// Append a child element.
	pub fn with_child(mut self, child: Element) -> Self {
		self.children.push(child);
		self
	}

	/// Append a child element in place.
	pub fn push_child(&mut self, child: Element) {
		self.children.push(child);
	}

	/// First attribute value named `name`.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// First child element named `name`.
	pub fn child(&self, name: &str) -> Option<&Element> {
		self.children.iter().find(|child| child.name == name)
	}

	/// Text content, empty when absent.
	pub fn text(&self) -> &str {
		self.text.as_deref().unwrap_or_default()
	}

	/// Parse a document holding exactly one root element.
	///
	/// Surrounding whitespace of text nodes is trimmed; comments, processing
	/// instructions and the declaration are skipped.
	pub fn parse_str(input: &str) -> Result<Self> {
		let mut reader = Reader::from_str(input);
		reader.config_mut().trim_text(true);

		let mut open: Vec<Element> = Vec::new();
		let mut root = None;

		loop {
			match reader.read_event()? {
				Event::Start(start) => {
					if root.is_some() {
						return Err(SettingsError::TrailingContent);
					}
					open.push(element_from_start(&start)?);
				}
				Event::Empty(start) => {
					let element = element_from_start(&start)?;
					close_element(&mut open, &mut root, element)?;
				}
				Event::End(_) => {
					let element = open.pop().ok_or(SettingsError::UnexpectedEof)?;
					close_element(&mut open, &mut root, element)?;
				}
				Event::Text(text) => {
					let text = text.unescape().map_err(quick_xml::Error::from)?;
					append_text(&mut open, &text)?;
				}
				Event::CData(data) => {
					let text = reader.decoder().decode(&data).map_err(quick_xml::Error::from)?;
					append_text(&mut open, &text)?;
				}
				Event::Eof => break,
				_ => {}
			}
		}

		if !open.is_empty() {
			return Err(SettingsError::UnexpectedEof);
		}
		root.ok_or(SettingsError::TrailingContent)
	}

	/// Render this element as an XML document.
	pub fn to_xml_string(&self, options: &XmlWriteOptions) -> Result<String> {
		let mut writer = match options.indent {
			Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
			None => Writer::new(Vec::new()),
		};
		if options.declaration {
			writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
		}
		write_element(&mut writer, self)?;

		String::from_utf8(writer.into_inner()).map_err(|err| SettingsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
	}
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
	let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
	for attr in start.attributes() {
		let attr = attr.map_err(quick_xml::Error::from)?;
		let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
		let value = attr.unescape_value().map_err(quick_xml::Error::from)?.into_owned();
		element.attributes.push((key, value));
	}
	Ok(element)
}

fn close_element(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
	if let Some(parent) = open.last_mut() {
		parent.children.push(element);
		return Ok(());
	}
	if root.is_some() {
		return Err(SettingsError::TrailingContent);
	}
	*root = Some(element);
	Ok(())
}

fn append_text(open: &mut [Element], text: &str) -> Result<()> {
	let Some(current) = open.last_mut() else {
		return Err(SettingsError::TrailingContent);
	};
	current.text.get_or_insert_with(String::new).push_str(text);
	Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, root: &Element) -> Result<()> {
	// (element, opened): an opened element only needs its end tag.
	let mut stack = vec![(root, false)];
	while let Some((element, opened)) = stack.pop() {
		if opened {
			writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
			continue;
		}

		let mut start = BytesStart::new(element.name.as_str());
		for (key, value) in &element.attributes {
			start.push_attribute((key.as_str(), value.as_str()));
		}

		if element.text.is_none() && element.children.is_empty() {
			writer.write_event(Event::Empty(start))?;
			continue;
		}

		writer.write_event(Event::Start(start))?;
		if let Some(text) = &element.text {
			writer.write_event(Event::Text(BytesText::new(text)))?;
		}
		stack.push((element, true));
		stack.extend(element.children.iter().rev().map(|child| (child, false)));
	}
	Ok(())
}

impl Drop for Element {
	fn drop(&mut self) {
		// Flatten descendants so dropping a deep tree never recurses.
		let mut pending = std::mem::take(&mut self.children);
		while let Some(mut child) = pending.pop() {
			pending.append(&mut child.children);
		}
	}
}
