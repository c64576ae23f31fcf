//! XML parsing and folding into [`StructuredNode`](crate::types::StructuredNode).

mod fold;
mod tree;

pub use fold::{fold, parse_document, structure_xml};
pub use tree::{NodeKind, XmlNode};
