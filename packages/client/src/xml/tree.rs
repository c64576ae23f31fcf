//! Minimal view of a parsed XML tree, so any DOM can feed the folder.

use std::borrow::Cow;

use roxmltree::NodeType;

/// What a tree node is, as far as folding cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element, or the document node itself.
    Element,
    /// Character data (including CDATA).
    Text,
    /// Comments, processing instructions and anything else folding skips.
    Other,
}

/// A node in a parsed XML document.
pub trait XmlNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Element name; only meaningful for [`NodeKind::Element`].
    fn name(&self) -> Cow<'_, str>;

    /// Character data; only meaningful for [`NodeKind::Text`].
    fn text(&self) -> &str;

    /// Child nodes in document order.
    fn children(&self) -> impl Iterator<Item = Self>;
}

impl<'a, 'input: 'a> XmlNode for roxmltree::Node<'a, 'input> {
    fn kind(&self) -> NodeKind {
        match self.node_type() {
            NodeType::Root | NodeType::Element => NodeKind::Element,
            NodeType::Text => NodeKind::Text,
            NodeType::Comment | NodeType::PI => NodeKind::Other,
        }
    }

    /// Qualified name (`prefix:local`) when the element's namespace has a
    /// prefix, otherwise the local name. The document node is `#document`.
    fn name(&self) -> Cow<'_, str> {
        if self.is_root() {
            return Cow::Borrowed("#document");
        }
        let tag = self.tag_name();
        match tag.namespace().and_then(|ns| self.lookup_prefix(ns)) {
            Some(prefix) if !prefix.is_empty() => Cow::Owned(format!("{prefix}:{}", tag.name())),
            _ => Cow::Borrowed(tag.name()),
        }
    }

    fn text(&self) -> &str {
        roxmltree::Node::text(self).unwrap_or_default()
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        roxmltree::Node::children(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_kinds() {
        let doc = Document::parse("<root><!-- note -->text<child/></root>").unwrap();
        assert_eq!(XmlNode::kind(&doc.root()), NodeKind::Element);

        let kinds: Vec<_> = XmlNode::children(&doc.root_element())
            .map(|n| n.kind())
            .collect();
        assert_eq!(kinds, vec![NodeKind::Other, NodeKind::Text, NodeKind::Element]);
    }

    #[test]
    fn test_name_local() {
        let doc = Document::parse("<DataRoot/>").unwrap();
        assert_eq!(XmlNode::name(&doc.root_element()), "DataRoot");
        assert_eq!(XmlNode::name(&doc.root()), "#document");
    }

    #[test]
    fn test_name_with_prefix() {
        let doc = Document::parse(r#"<ns:root xmlns:ns="http://example.com"/>"#).unwrap();
        assert_eq!(XmlNode::name(&doc.root_element()), "ns:root");
    }

    #[test]
    fn test_name_default_namespace() {
        let doc = Document::parse(r#"<root xmlns="http://example.com"/>"#).unwrap();
        assert_eq!(XmlNode::name(&doc.root_element()), "root");
    }

    #[test]
    fn test_text() {
        let doc = Document::parse("<a>  hi  </a>").unwrap();
        let text = XmlNode::children(&doc.root_element()).next().unwrap();
        assert_eq!(XmlNode::text(&text), "  hi  ");
    }
}
