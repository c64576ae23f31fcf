//! Core data types: the structured response tree and request parameters.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::result_codes;

/// Ordered element-name to value mapping.
pub type Fields = IndexMap<String, StructuredNode>;

/// Generic value produced by folding an XML response.
///
/// The shape is driven entirely by the document: leaf elements become
/// [`Text`](Self::Text), containers become [`Object`](Self::Object), and
/// same-named siblings are gathered into a [`List`](Self::List).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StructuredNode {
    /// Trimmed, non-empty text content.
    Text(String),
    /// Element children keyed by element name, in document order.
    Object(Fields),
    /// Two or more same-named siblings, in document order.
    List(Vec<StructuredNode>),
}

impl Default for StructuredNode {
    fn default() -> Self {
        Self::Object(Fields::new())
    }
}

impl StructuredNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Fields> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[StructuredNode]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// True for an element that had no element or text children.
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(fields) if fields.is_empty())
    }

    /// Look up a direct child by element name.
    pub fn get(&self, key: &str) -> Option<&StructuredNode> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Follow a chain of element names through nested objects.
    ///
    /// # Examples
    /// ```
    /// use elaws_client::xml::structure_xml;
    ///
    /// let node = structure_xml("<DataRoot><Result><Code>0</Code></Result></DataRoot>").unwrap();
    /// let code = node.get_path(&["DataRoot", "Result", "Code"]);
    /// assert_eq!(code.and_then(|c| c.as_text()), Some("0"));
    /// ```
    pub fn get_path(&self, path: &[&str]) -> Option<&StructuredNode> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// View this value as a slice of items.
    ///
    /// A list yields its items; anything else yields itself. Useful for
    /// elements that may occur once or many times, such as `LawNameListInfo`.
    pub fn items(&self) -> &[StructuredNode] {
        match self {
            Self::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

/// Category filter for the law name list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LawType {
    /// Every law and regulation.
    #[default]
    All,
    /// Constitution and acts.
    ConstitutionLaw,
    /// Cabinet orders and imperial ordinances.
    CabinetOrder,
    /// Ministerial ordinances and rules.
    MinistryOrder,
}

impl LawType {
    /// Path code used by the API.
    pub fn code(self) -> &'static str {
        match self {
            Self::All => "1",
            Self::ConstitutionLaw => "2",
            Self::CabinetOrder => "3",
            Self::MinistryOrder => "4",
        }
    }
}

/// Parameters for the article contents endpoint.
///
/// At least one of `law_id` or `law_num` is required. Empty strings count as
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlesQuery {
    pub law_id: Option<String>,
    pub law_num: Option<String>,
    pub article: Option<String>,
    pub paragraph: Option<String>,
    pub appdx_table: Option<String>,
}

impl ArticlesQuery {
    pub fn by_law_id(law_id: impl Into<String>) -> Self {
        Self {
            law_id: Some(law_id.into()),
            ..Self::default()
        }
    }

    pub fn by_law_num(law_num: impl Into<String>) -> Self {
        Self {
            law_num: Some(law_num.into()),
            ..Self::default()
        }
    }

    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }

    pub fn with_paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.paragraph = Some(paragraph.into());
        self
    }

    pub fn with_appdx_table(mut self, appdx_table: impl Into<String>) -> Self {
        self.appdx_table = Some(appdx_table.into());
        self
    }

    /// Whether the query identifies a law.
    pub fn has_law_reference(&self) -> bool {
        non_empty(&self.law_id).is_some() || non_empty(&self.law_num).is_some()
    }

    /// Set parameters as `(api name, value)` pairs, in API order.
    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("lawId", &self.law_id),
            ("lawNum", &self.law_num),
            ("article", &self.article),
            ("paragraph", &self.paragraph),
            ("appdxTable", &self.appdx_table),
        ]
        .into_iter()
        .filter_map(|(name, value)| non_empty(value).map(|v| (name, v)))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Embedded application-level result code (`DataRoot/Result/Code`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Error,
    /// The query matched several laws; candidates are listed in the body.
    MultipleChoices,
    Other(String),
}

impl ResultCode {
    pub fn parse(code: &str) -> Self {
        match code {
            result_codes::SUCCESS => Self::Success,
            result_codes::ERROR => Self::Error,
            result_codes::MULTIPLE_CHOICES => Self::MultipleChoices,
            other => Self::Other(other.to_string()),
        }
    }
}
