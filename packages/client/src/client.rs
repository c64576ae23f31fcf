//! Law API client service that ties the endpoint layer to the response pipeline.

use reqwest::Client;

use crate::config::{
    articles_endpoint, law_data_endpoint, law_lists_endpoint, update_law_lists_endpoint,
    validate_date, ClientConfig,
};
use crate::error::Result;
use crate::http::{create_client, fetch_and_structure, RequestOptions};
use crate::types::{ArticlesQuery, LawType, StructuredNode};

/// Client for the e-Gov law API.
///
/// Holds no per-request state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct LawApiClient {
    http: Client,
    config: ClientConfig,
}

impl LawApiClient {
    /// Create a client against the public API with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = create_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch an endpoint (path relative to the base URL) as structured data.
    pub async fn fetch_and_structure(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<StructuredNode> {
        let url = self.config.url_for(endpoint);
        fetch_and_structure(&self.http, &url, options).await
    }

    /// Law name list, optionally restricted to one category.
    pub async fn get_law_list(&self, law_type: LawType) -> Result<StructuredNode> {
        self.fetch(&law_lists_endpoint(law_type)).await
    }

    /// Full text of a law, by law ID or law number.
    pub async fn get_law(&self, law_id_or_num: &str) -> Result<StructuredNode> {
        self.fetch(&law_data_endpoint(law_id_or_num)).await
    }

    /// Contents of an article, paragraph or appendix table.
    ///
    /// Fails with `BadRequest` without sending anything when the query names
    /// neither a law ID nor a law number.
    pub async fn get_articles(&self, query: &ArticlesQuery) -> Result<StructuredNode> {
        let endpoint = articles_endpoint(query)?;
        self.fetch(&endpoint).await
    }

    /// Laws updated on `date` (YYYY-MM-DD, 2020-11-24 or later).
    pub async fn get_update_law_list(&self, date: &str) -> Result<StructuredNode> {
        let date = validate_date(date)?;
        self.fetch(&update_law_lists_endpoint(date)).await
    }

    async fn fetch(&self, endpoint: &str) -> Result<StructuredNode> {
        self.fetch_and_structure(endpoint, &RequestOptions::default())
            .await
    }
}
