//! Owned SVG element tree
//!
//! quick-xml does the tokenizing and escaping; this module keeps a small
//! mutable tree on top of it. Names are kept exactly as written
//! (`inkscape:version`, `svg:g`) and attribute order is preserved, so a
//! parse/write cycle only changes what the transforms touch.

use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

use crate::error::{AssetError, Result};

/// SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Prefixes every written document may rely on
pub const NAMESPACES: &[(&str, &str)] = &[
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("cc", "http://creativecommons.org/ns#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("xlink", "http://www.w3.org/1999/xlink"),
    ("sodipodi", "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"),
    ("inkscape", "http://www.inkscape.org/namespaces/inkscape"),
    ("svg", SVG_NAMESPACE),
];

/// XML-level failure while reading or writing a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct XmlError(pub String);

impl XmlError {
    fn from_display(err: impl std::fmt::Display) -> Self {
        XmlError(err.to_string())
    }
}

/// A node in the tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
}

/// An element with its attributes in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// SVG element test: `g` matches both `<g>` and `<svg:g>`
    pub fn is_svg(&self, local: &str) -> bool {
        self.local_name() == local && matches!(self.prefix(), None | Some("svg"))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute in place, or append it when new
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Child elements, skipping text and comments
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// First child SVG element with the given local name
    pub fn first_child(&self, local: &str) -> Option<&Element> {
        self.elements().find(|el| el.is_svg(local))
    }

    pub fn first_child_mut(&mut self, local: &str) -> Option<&mut Element> {
        self.elements_mut().find(|el| el.is_svg(local))
    }

    /// Calls `f` on this element and every descendant element
    pub fn visit(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        for child in self.elements() {
            child.visit(f);
        }
    }
}

/// A parsed SVG file
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub root: Element,
}

impl SvgDocument {
    /// Parse SVG text into a tree.
    ///
    /// Declarations, doctypes and processing instructions are dropped;
    /// whitespace text is kept.
    pub fn parse(text: &str) -> std::result::Result<Self, XmlError> {
        let mut reader = Reader::from_str(text);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event().map_err(XmlError::from_display)? {
                Event::Start(start) => stack.push(element_from_start(&start)?),
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError("unexpected closing tag".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        let value = text.unescape().map_err(XmlError::from_display)?;
                        parent.children.push(Node::Text(value.into_owned()));
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        let value = String::from_utf8_lossy(&data).into_owned();
                        parent.children.push(Node::CData(value));
                    }
                }
                Event::Comment(comment) => {
                    if let Some(parent) = stack.last_mut() {
                        let value = String::from_utf8_lossy(&comment).into_owned();
                        parent.children.push(Node::Comment(value));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(XmlError("unexpected end of document".to_string()));
        }
        let root = root.ok_or_else(|| XmlError("document has no root element".to_string()))?;
        if !root.is_svg("svg") {
            return Err(XmlError(format!("root element is <{}>, not <svg>", root.name)));
        }
        Ok(Self { root })
    }

    /// Read and parse an SVG file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        Self::parse(&text).map_err(|e| AssetError::SvgParse {
            path: path.to_path_buf(),
            message: e.0,
        })
    }

    /// Serialize the tree, declaring any known prefix the tree uses but the
    /// root does not declare
    pub fn to_xml_string(&self) -> std::result::Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(XmlError::from_display)?;
        writer
            .write_event(Event::Text(BytesText::new("\n")))
            .map_err(XmlError::from_display)?;

        let mut root = self.root.clone();
        for (name, uri) in self.missing_namespace_declarations() {
            root.attributes.push((name, uri.to_string()));
        }
        write_element(&mut writer, &root)?;
        writer
            .write_event(Event::Text(BytesText::new("\n")))
            .map_err(XmlError::from_display)?;

        String::from_utf8(writer.into_inner()).map_err(XmlError::from_display)
    }

    /// Serialize and write to `path`
    pub fn write(&self, path: &Path) -> Result<()> {
        let text = self.to_xml_string().map_err(|e| AssetError::SvgParse {
            path: path.to_path_buf(),
            message: e.0,
        })?;
        std::fs::write(path, text).map_err(|e| AssetError::io(path, e))
    }

    /// Top-level `<g>` elements in document order
    pub fn top_level_groups(&self) -> impl Iterator<Item = &Element> {
        self.root.elements().filter(|el| el.is_svg("g"))
    }

    /// `xmlns` attributes needed for prefixes used anywhere in the tree
    fn missing_namespace_declarations(&self) -> Vec<(String, &'static str)> {
        let mut used: Vec<String> = Vec::new();
        self.root.visit(&mut |el| {
            let names = std::iter::once(el.name.as_str())
                .chain(el.attributes.iter().map(|(key, _)| key.as_str()));
            for name in names {
                if let Some((prefix, _)) = name.split_once(':') {
                    if !used.iter().any(|u| u == prefix) {
                        used.push(prefix.to_string());
                    }
                }
            }
        });

        let mut missing = Vec::new();
        if self.root.prefix().is_none() && self.root.attr("xmlns").is_none() {
            missing.push(("xmlns".to_string(), SVG_NAMESPACE));
        }
        for (prefix, uri) in NAMESPACES {
            let declaration = format!("xmlns:{}", prefix);
            if used.iter().any(|u| u == prefix) && self.root.attr(&declaration).is_none() {
                missing.push((declaration, *uri));
            }
        }
        missing
    }
}

fn element_from_start(start: &BytesStart<'_>) -> std::result::Result<Element, XmlError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(XmlError::from_display)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(XmlError::from_display)?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> std::result::Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(XmlError("multiple root elements".to_string())),
    }
    Ok(())
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> std::result::Result<(), XmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(XmlError::from_display);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(XmlError::from_display)?;
    for child in &element.children {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(XmlError::from_display)?,
            Node::Comment(text) => writer
                .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))
                .map_err(XmlError::from_display)?,
            Node::CData(text) => writer
                .write_event(Event::CData(BytesCData::new(text.as_str())))
                .map_err(XmlError::from_display)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(XmlError::from_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Created with Inkscape -->
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="256" height="256" inkscape:version="0.48">
  <defs id="defs4"><linearGradient id="grad"/></defs>
  <g id="layer1" transform="translate(0,-796)"><rect width="10" height="10" title="a &amp; b"/></g>
  <g><path d="M 0,0 L 1,1"/></g>
</svg>"#;

    #[test]
    fn test_parse_structure() {
        let doc = SvgDocument::parse(SAMPLE).unwrap();
        assert_eq!(doc.root.attr("width"), Some("256"));
        assert_eq!(doc.root.attr("inkscape:version"), Some("0.48"));
        assert_eq!(doc.top_level_groups().count(), 2);
        assert!(doc.root.first_child("defs").is_some());

        let rect = doc.top_level_groups().next().unwrap().elements().next().unwrap();
        assert_eq!(rect.attr("title"), Some("a & b"));
    }

    #[test]
    fn test_prefixed_svg_names_match() {
        let doc = SvgDocument::parse(
            r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:g id="a"/></svg:svg>"#,
        )
        .unwrap();
        assert_eq!(doc.top_level_groups().count(), 1);
        assert_eq!(doc.root.local_name(), "svg");
    }

    #[test]
    fn test_write_round_trip_preserves_content() {
        let doc = SvgDocument::parse(SAMPLE).unwrap();
        let text = doc.to_xml_string().unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("a &amp; b"));
        assert!(text.contains("<linearGradient id=\"grad\"/>"));
        let reparsed = SvgDocument::parse(&text).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_write_declares_used_prefixes() {
        let mut doc = SvgDocument::parse(r#"<svg width="1" height="1"><g/></svg>"#).unwrap();
        doc.root.set_attr("inkscape:version", "0.92");
        let text = doc.to_xml_string().unwrap();
        assert!(text.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(text.contains("xmlns:inkscape=\"http://www.inkscape.org/namespaces/inkscape\""));
        assert!(!text.contains("xmlns:xlink"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(SvgDocument::parse("<svg><g></svg>").is_err());
        assert!(SvgDocument::parse("").is_err());
        assert!(SvgDocument::parse("<html/>").is_err());
    }

    #[test]
    fn test_load_and_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        std::fs::write(&path, SAMPLE).unwrap();

        let doc = SvgDocument::load(&path).unwrap();
        let out = dir.path().join("out.svg");
        doc.write(&out).unwrap();
        assert_eq!(SvgDocument::load(&out).unwrap(), doc);

        let err = SvgDocument::load(&dir.path().join("missing.svg")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_attribute_editing() {
        let mut el = Element::new("g");
        el.set_attr("id", "a");
        el.set_attr("transform", "translate(1,2)");
        el.set_attr("id", "b");
        assert_eq!(el.attributes.len(), 2);
        assert_eq!(el.attributes[0], ("id".to_string(), "b".to_string()));
        assert_eq!(el.attr("transform"), Some("translate(1,2)"));
        assert_eq!(el.attr("style"), None);
    }
}
