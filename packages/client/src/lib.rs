//! Client for the e-Gov law API - Fetch Japanese legislation as structured data.
//!
//! The API answers with XML. This crate checks the HTTP status, parses the
//! body, folds the XML tree into a generic [`StructuredNode`] and checks the
//! result code the API embeds in `DataRoot/Result/Code`.
//!
//! # Example
//!
//! ```
//! use elaws_client::response::interpret_response;
//!
//! let xml = "<DataRoot><Result><Code>0</Code><Message></Message></Result>\
//!            <ApplData><Category>1</Category></ApplData></DataRoot>";
//! let node = interpret_response(200, xml).unwrap();
//! let category = node.get_path(&["DataRoot", "ApplData", "Category"]);
//! assert_eq!(category.and_then(|c| c.as_text()), Some("1"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, runtime settings, date validation and endpoint paths
//! - [`types`]: Structured response tree and request parameters
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML parsing and folding
//! - [`response`]: HTTP status and embedded result code interpretation
//! - [`http`]: HTTP transport
//! - [`client`]: The API client service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use client::LawApiClient;
pub use config::{validate_date, ClientConfig};
pub use error::{ErrorKind, LawApiError, Result};
pub use http::RequestOptions;
pub use types::{ArticlesQuery, LawType, ResultCode, StructuredNode};
