//! Folding of an XML tree into a [`StructuredNode`].

use indexmap::map::Entry;
use roxmltree::{Document, ParsingOptions};

use crate::error::Result;
use crate::types::{Fields, StructuredNode};
use crate::xml::tree::{NodeKind, XmlNode};

/// Parse response text into a document.
///
/// A leading byte-order mark is dropped and DTDs are accepted.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml.trim_start_matches('\u{feff}'), options)?;
    Ok(doc)
}

/// Parse response text and fold the whole document.
///
/// The result has a single top-level key, the root element's name.
///
/// # Examples
/// ```
/// use elaws_client::xml::structure_xml;
///
/// let node = structure_xml("<DataRoot><Item>a</Item><Item>b</Item></DataRoot>").unwrap();
/// let items = node.get_path(&["DataRoot", "Item"]).unwrap();
/// assert_eq!(items.items().len(), 2);
/// ```
pub fn structure_xml(xml: &str) -> Result<StructuredNode> {
    let doc = parse_document(xml)?;
    Ok(fold(&doc.root()))
}

/// Recursively fold a node into a [`StructuredNode`].
///
/// - A text node yields its text unchanged.
/// - An element yields an object keyed by child element names. Whitespace-only
///   text children are ignored; two or more same-named children become a
///   list in document order; no children at all gives an empty object.
/// - The first text child with non-blank content replaces the whole element
///   with that trimmed text, dropping any element children.
///
/// Known limitation: because of the last rule, mixed content such as
/// `<p>text <b>bold</b></p>` folds to just `"text"`.
pub fn fold<N: XmlNode>(node: &N) -> StructuredNode {
    if node.kind() == NodeKind::Text {
        return StructuredNode::Text(node.text().to_string());
    }

    let mut fields = Fields::new();

    for child in node.children() {
        match child.kind() {
            NodeKind::Text => {
                let trimmed = child.text().trim();
                if !trimmed.is_empty() {
                    return StructuredNode::Text(trimmed.to_string());
                }
            }
            NodeKind::Element => {
                let item = fold(&child);
                insert_child(&mut fields, child.name().into_owned(), item);
            }
            NodeKind::Other => {}
        }
    }

    StructuredNode::Object(fields)
}

/// Add a folded child, promoting repeated names to a list.
fn insert_child(fields: &mut Fields, name: String, item: StructuredNode) {
    match fields.entry(name) {
        Entry::Vacant(entry) => {
            entry.insert(item);
        }
        Entry::Occupied(mut entry) => match entry.get_mut() {
            StructuredNode::List(items) => items.push(item),
            existing => {
                let first = std::mem::take(existing);
                *existing = StructuredNode::List(vec![first, item]);
            }
        },
    }
}
