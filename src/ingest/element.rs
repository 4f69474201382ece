//! Namespaced element subtrees captured from a streaming reader
//!
//! The document is read event by event; only the root-level elements of
//! interest are materialized, one subtree at a time, so memory stays
//! proportional to a single record rather than the whole dataset.

use super::parser::{IngestError, IngestResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Text(String),
    Element(XmlElement),
}

/// An element with its namespace, local name and mixed content.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// Resolved namespace URI, `None` when unbound
    pub namespace: Option<String>,
    /// Local name (prefix stripped)
    pub name: String,
    content: Vec<Content>,
}

impl XmlElement {
    pub fn new(namespace: Option<String>, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
            content: Vec::new(),
        }
    }

    fn from_start(ns: &ResolveResult<'_>, start: &BytesStart<'_>) -> Self {
        let namespace = match ns {
            ResolveResult::Bound(Namespace(uri)) => Some(String::from_utf8_lossy(uri).into_owned()),
            _ => None,
        };
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        Self::new(namespace, name)
    }

    /// True if this element has the given namespace URI and local name
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.name == name
    }

    fn push_text(&mut self, text: &str) {
        match self.content.last_mut() {
            Some(Content::Text(existing)) => existing.push_str(text),
            _ => self.content.push(Content::Text(text.to_string())),
        }
    }

    fn push_child(&mut self, child: XmlElement) {
        self.content.push(Content::Element(child));
    }

    /// Direct children with the given local name in this element's namespace
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.content
            .iter()
            .filter_map(move |c| self.as_named_child(c, name))
    }

    /// First direct child with the given local name in this element's namespace
    pub fn child<'a>(&'a self, name: &str) -> Option<&'a XmlElement> {
        self.content.iter().find_map(|c| self.as_named_child(c, name))
    }

    fn as_named_child<'a>(&self, content: &'a Content, name: &str) -> Option<&'a XmlElement> {
        match content {
            Content::Element(e) if e.name == name && e.namespace == self.namespace => Some(e),
            _ => None,
        }
    }

    /// Concatenated text of all descendants, in document order
    pub fn value(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for c in &self.content {
            match c {
                Content::Text(t) => out.push_str(t),
                Content::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Stream `source` and call `visit` with every direct child of the document
/// root matching `namespace` and `name`.
///
/// Matching elements nested deeper in the tree are captured as part of
/// their enclosing subtree, never visited on their own. Reading stops at
/// the first error from the reader or from `visit`.
pub fn for_each_root_child<R, F>(
    source: R,
    namespace: &str,
    name: &str,
    mut visit: F,
) -> IngestResult<()>
where
    R: BufRead,
    F: FnMut(XmlElement) -> IngestResult<()>,
{
    let mut reader = NsReader::from_reader(source);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    // Open elements of the subtree being captured, innermost last
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        match event {
            Event::Start(start) => {
                seen_root = true;
                depth += 1;
                let element = XmlElement::from_start(&ns, &start);
                if !stack.is_empty() || (depth == 2 && element.is(namespace, name)) {
                    stack.push(element);
                }
            }
            Event::Empty(start) => {
                seen_root = true;
                let element = XmlElement::from_start(&ns, &start);
                if let Some(parent) = stack.last_mut() {
                    parent.push_child(element);
                } else if depth == 1 && element.is(namespace, name) {
                    visit(element)?;
                }
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(element),
                        None => visit(element)?,
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.push_text(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.push_text(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(IngestError::MissingRoot);
    }
    if depth != 0 {
        return Err(IngestError::UnexpectedEof { open_elements: depth });
    }
    Ok(())
}
