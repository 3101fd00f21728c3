//! Compact XML tree.
//!
//! Every element becomes a [`CompactNode`] holding its attributes, its text
//! content and its child elements grouped by tag name. The tree carries no
//! schema: callers look fields up by name and decide themselves what a
//! missing element means.
//!
//! ```rust
//! use contracts::shared::xml_compact::parse_compact;
//!
//! let doc = parse_compact("<a><b>1</b><b>2</b></a>").unwrap();
//! let a = doc.child("a").unwrap();
//! assert_eq!(a.children("b").len(), 2);
//! assert_eq!(a.child("b").and_then(|b| b.text()), Some("1"));
//! ```

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),
    #[error("name is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("element <{0}> is never closed")]
    Unclosed(String),
    #[error("closing tag without a matching opening tag")]
    UnexpectedEnd,
}

/// One element of the compact tree (or the document itself, which has no
/// text and holds the root element as its only child).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactNode {
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<(String, Vec<CompactNode>)>,
}

impl CompactNode {
    /// Text content of the element (the `_text` leaf), if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&CompactNode> {
        self.children(name).first()
    }

    /// All child elements with the given name, in document order.
    pub fn children(&self, name: &str) -> &[CompactNode] {
        self.children
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, nodes)| nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Walks `path` taking the first matching child at every step.
    pub fn path(&self, path: &[&str]) -> Option<&CompactNode> {
        path.iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Names of the child elements in order of first appearance.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.text.is_none() && self.children.is_empty()
    }

    fn push_child(&mut self, name: String, node: CompactNode) {
        match self.children.iter_mut().find(|(key, _)| *key == name) {
            Some((_, nodes)) => nodes.push(node),
            None => self.children.push((name, vec![node])),
        }
    }

    fn push_text(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        match &mut self.text {
            Some(text) => text.push_str(value),
            None => self.text = Some(value.to_string()),
        }
    }
}

/// Parses `xml` into a compact tree rooted at a document node.
///
/// Text is kept as written, surrounding whitespace included. Runs of
/// whitespace alone (indentation between elements) produce no text.
///
/// An empty input is an empty document, not an error: the page renders
/// against it before the fetch has completed.
pub fn parse_compact(xml: &str) -> Result<CompactNode, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut document = CompactNode::default();
    let mut open: Vec<(String, CompactNode)> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(open_element(&start)?),
            Event::Empty(start) => {
                let (name, node) = open_element(&start)?;
                parent(&mut open, &mut document).push_child(name, node);
            }
            Event::End(_) => {
                let (name, node) = open.pop().ok_or(XmlError::UnexpectedEnd)?;
                parent(&mut open, &mut document).push_child(name, node);
            }
            Event::Text(text) => {
                let value = text.unescape()?;
                // пробелы между элементами не являются текстом
                if value.trim().is_empty() {
                    continue;
                }
                if let Some((_, node)) = open.last_mut() {
                    node.push_text(&value);
                }
            }
            Event::CData(cdata) => {
                let bytes = cdata.into_inner();
                let value = std::str::from_utf8(&bytes)?;
                if let Some((_, node)) = open.last_mut() {
                    node.push_text(value);
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    match open.pop() {
        Some((name, _)) => Err(XmlError::Unclosed(name)),
        None => Ok(document),
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<(String, CompactNode), XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut node = CompactNode::default();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = attribute.unescape_value()?.into_owned();
        node.attributes.push((key, value));
    }
    Ok((name, node))
}

fn parent<'a>(
    open: &'a mut [(String, CompactNode)],
    document: &'a mut CompactNode,
) -> &'a mut CompactNode {
    match open.last_mut() {
        Some((_, node)) => node,
        None => document,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_repeated_children_in_order() {
        let doc = parse_compact(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <list>
                <item>first</item>
                <other>x</other>
                <item>second</item>
            </list>"#,
        )
        .unwrap();

        let list = doc.child("list").unwrap();
        let items: Vec<_> = list.children("item").iter().map(|n| n.text()).collect();
        assert_eq!(items, vec![Some("first"), Some("second")]);
        assert_eq!(list.child_names().collect::<Vec<_>>(), vec!["item", "other"]);
        assert!(list.text().is_none());
    }

    #[test]
    fn test_path_lookup() {
        let doc = parse_compact("<a><b><c>deep</c></b></a>").unwrap();
        assert_eq!(doc.path(&["a", "b", "c"]).and_then(|n| n.text()), Some("deep"));
        assert!(doc.path(&["a", "x", "c"]).is_none());
        assert_eq!(doc.path(&[]), Some(&doc));
    }

    #[test]
    fn test_attributes_entities_and_cdata() {
        let doc = parse_compact(
            r#"<firm kind="ООД &amp; с-ие"><name>A &lt;B&gt;</name><note><![CDATA[1 < 2]]></note><empty/></firm>"#,
        )
        .unwrap();

        let firm = doc.child("firm").unwrap();
        assert_eq!(firm.attribute("kind"), Some("ООД & с-ие"));
        assert_eq!(firm.child("name").and_then(|n| n.text()), Some("A <B>"));
        assert_eq!(firm.child("note").and_then(|n| n.text()), Some("1 < 2"));

        let empty = firm.child("empty").unwrap();
        assert!(empty.is_empty());
        assert!(empty.text().is_none());
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        let doc = parse_compact(
            "<row>\n  <name>  ALFA  </name>\n  <partners>   </partners>\n</row>",
        )
        .unwrap();

        let row = doc.child("row").unwrap();
        assert_eq!(row.child("name").and_then(|n| n.text()), Some("  ALFA  "));
        assert!(row.child("partners").unwrap().text().is_none());
        assert!(row.text().is_none());
    }

    #[test]
    fn test_empty_input_is_empty_document() {
        let doc = parse_compact("").unwrap();
        assert!(doc.is_empty());
        assert!(doc.child("registries").is_none());
    }

    #[test]
    fn test_malformed_input_is_error() {
        assert!(parse_compact("<a><b></a>").is_err());
        assert!(parse_compact("<a><b>text</b>").is_err());
    }
}
