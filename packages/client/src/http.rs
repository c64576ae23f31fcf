//! HTTP transport for the law API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{LawApiError, Result};
use crate::response::{interpret_result_code, interpret_status};
use crate::types::StructuredNode;
use crate::xml::structure_xml;

/// Media type requested from the API.
const ACCEPT_XML: &str = "application/xml";

/// Extra request options. Headers set here override the defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Create an HTTP client with the configured timeout and user agent.
pub fn create_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Issue a GET request and turn the response into a structured tree.
///
/// The status is checked before the body is read; a failing status never
/// reaches the XML parser. No retries are attempted.
pub async fn fetch_and_structure(
    client: &Client,
    url: &str,
    options: &RequestOptions,
) -> Result<StructuredNode> {
    tracing::debug!(url, "Requesting");

    let response = client
        .get(url)
        .header(ACCEPT, ACCEPT_XML)
        .headers(options.headers.clone())
        .send()
        .await
        .inspect_err(|e| tracing::warn!(url, error = %e, "Request failed"))?;

    let status = response.status().as_u16();
    tracing::debug!(url, status, "Received response");

    if let Err(e) = interpret_status(status) {
        tracing::warn!(url, status, kind = %e.kind(), "Request rejected");
        return Err(e);
    }

    let body = response.text().await.map_err(LawApiError::Http)?;
    let node = structure_xml(&body)?;
    interpret_result_code(&node)?;

    Ok(node)
}
