// libtool-rs: Library Descriptor Resolution Tool
//
// SPDX-FileCopyrightText: 2026 LibTool Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor document loading.
//!
//! ```text
//! path --> read_to_string --> quick_xml events --> XmlElement tree
//!                                                      |
//!                                          root_markers(): <LibTool>
//! ```
//!
//! Only content inside `LibTool` elements is ever processed; a well-formed
//! document without that marker is valid input with zero effect.

pub mod directive;

use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::DocumentError;
use crate::utility::parse::tags_equal;

/// The element name identifying a document as tool input.
pub const ROOT_MARKER: &str = "LibTool";

/// One parsed XML element.
///
/// Attribute and child lookups are case-insensitive, matching how the
/// descriptor format treats names everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name, as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's direct text content, trimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// The element's child elements, in document order.
    #[must_use]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Looks up an attribute by case-insensitive name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| tags_equal(key, name))
            .map(|(_, value)| value.as_str())
    }

    /// Finds the first child element with a case-insensitive name match.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| tags_equal(c.name(), name))
    }

    /// Collects every descendant (including self) with the given name.
    ///
    /// Matched elements are not descended into, so nesting a marker inside
    /// another marker does not yield it twice.
    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlElement>) {
        if tags_equal(self.name(), name) {
            out.push(self);
            return;
        }
        for child in &self.children {
            child.collect_named(name, out);
        }
    }
}

/// A loaded descriptor document.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    root: XmlElement,
}

impl Document {
    /// Loads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::FileNotFound`] if the path does not exist,
    /// [`DocumentError::ReadFailed`] if it cannot be read, and
    /// [`DocumentError::Malformed`] if it is not well-formed XML.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if !path.is_file() {
            return Err(DocumentError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| DocumentError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        Self::parse(&content, path)
    }

    /// Parses document content, recording `path` for error context.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] if the content is not
    /// well-formed XML.
    pub fn parse(content: &str, path: &Path) -> Result<Self, DocumentError> {
        let root = parse_tree(content).map_err(|message| DocumentError::Malformed {
            path: path.display().to_string(),
            message,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// The path this document was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All `LibTool` marker elements in the document, in document order.
    #[must_use]
    pub fn root_markers(&self) -> Vec<&XmlElement> {
        let mut markers = Vec::new();
        self.root.collect_named(ROOT_MARKER, &mut markers);
        markers
    }
}

/// Folds the quick-xml event stream into an element tree.
///
/// The returned element is a synthetic document node holding the
/// top-level elements as children.
fn parse_tree(content: &str) -> Result<XmlElement, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack = vec![XmlElement::new(String::new())];

    loop {
        match reader.read_event() {
            Err(e) => {
                return Err(format!("{e} at byte {}", reader.buffer_position()));
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach_to_parent(&mut stack, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or("unbalanced closing tag")?;
                attach_to_parent(&mut stack, element)?;
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            // declarations, comments, processing instructions, doctypes
            Ok(_) => {}
        }
    }

    if stack.len() != 1 {
        return Err("unclosed element".to_string());
    }
    stack.pop().ok_or_else(|| "empty document".to_string())
}

fn attach_to_parent(stack: &mut Vec<XmlElement>, element: XmlElement) -> Result<(), String> {
    let parent = stack.last_mut().ok_or("unbalanced closing tag")?;
    parent.children.push(element);
    Ok(())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| e.to_string())?
            .into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}
