//! Configuration constants, runtime settings and input validation.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use url::form_urlencoded;

use crate::error::{LawApiError, Result};
use crate::types::{ArticlesQuery, LawType};

/// Base URL of the e-Gov law API (version 1).
pub const BASE_URL: &str = "https://laws.e-gov.go.jp/api/1";

/// Law name list endpoint.
pub const LAW_LISTS_ENDPOINT: &str = "/lawlists";

/// Full law text endpoint.
pub const LAW_DATA_ENDPOINT: &str = "/lawdata";

/// Article contents endpoint.
pub const ARTICLES_ENDPOINT: &str = "/articles";

/// Updated law list endpoint.
pub const UPDATE_LAW_LISTS_ENDPOINT: &str = "/updatelawlists";

/// HTTP timeout in seconds.
///
/// Full law texts can be several megabytes, so this is generous.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// User agent string identifying this client.
pub const USER_AGENT: &str = concat!("elaws-client/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding [`BASE_URL`].
pub const BASE_URL_ENV: &str = "ELAWS_BASE_URL";

/// Environment variable overriding [`HTTP_TIMEOUT_SECS`].
pub const TIMEOUT_ENV: &str = "ELAWS_TIMEOUT_SECS";

/// HTTP status codes the API documents.
pub mod http_status {
    pub const OK: u16 = 200;
    pub const MULTIPLE_CHOICES: u16 = 300;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const NOT_ACCEPTABLE: u16 = 406;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Values of the embedded `DataRoot/Result/Code` element.
pub mod result_codes {
    pub const SUCCESS: &str = "0";
    pub const ERROR: &str = "1";
    pub const MULTIPLE_CHOICES: &str = "2";
}

/// Default human-readable messages for each failure.
pub mod messages {
    pub const INVALID_DATE: &str = "Invalid date format";
    pub const NOT_FOUND: &str = "No matching data exists";
    pub const SERVER_ERROR: &str = "An error occurred during server-side processing";
    pub const NETWORK_ERROR: &str = "A network error occurred";
    pub const BAD_REQUEST: &str = "Request parameters are invalid";
    pub const NOT_ACCEPTABLE: &str =
        "The response exceeds the size the law API can return, or multiple laws match";
    pub const MULTIPLE_CHOICES: &str = "Multiple candidates exist";
}

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Earliest date the updated law list endpoint has data for.
#[allow(clippy::expect_used)] // Static date that is guaranteed to be valid
pub static UPDATE_LIST_FLOOR: LazyLock<NaiveDate> =
    LazyLock::new(|| NaiveDate::from_ymd_opt(2020, 11, 24).expect("valid date"));

/// Runtime settings for [`LawApiClient`](crate::client::LawApiClient).
///
/// Built once and owned by the client; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: HTTP_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config from `ELAWS_BASE_URL` and `ELAWS_TIMEOUT_SECS`.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let timeout_secs = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            user_agent: defaults.user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Join an endpoint path (starting with `/`) onto the base URL.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

/// Validate a date for the updated law list (YYYY-MM-DD, not before 2020-11-24).
///
/// # Examples
/// ```
/// use elaws_client::config::validate_date;
///
/// assert!(validate_date("2020-11-24").is_ok());
/// assert!(validate_date("2020-11-23").is_err());
/// assert!(validate_date("not a date").is_err());
/// ```
pub fn validate_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(LawApiError::InvalidDate(date_str.to_string()));
    }

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| LawApiError::InvalidDate(date_str.to_string()))?;

    if date < *UPDATE_LIST_FLOOR {
        return Err(LawApiError::InvalidDate(date_str.to_string()));
    }

    Ok(date)
}

/// Format a date the way the API expects it in paths (YYYYMMDD).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Percent-encode a single path segment like `encodeURIComponent`.
///
/// `form_urlencoded` only ever emits `+` for a space (a literal `+` becomes
/// `%2B`), so swapping it for `%20` is exact.
pub fn encode_path_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Endpoint path for the law name list.
pub fn law_lists_endpoint(law_type: LawType) -> String {
    format!("{LAW_LISTS_ENDPOINT}/{}", law_type.code())
}

/// Endpoint path for a full law, by law ID or law number.
pub fn law_data_endpoint(law_id_or_num: &str) -> String {
    format!("{LAW_DATA_ENDPOINT}/{}", encode_path_segment(law_id_or_num))
}

/// Endpoint path for article contents.
///
/// Fails with `BadRequest` when neither a law ID nor a law number is given.
pub fn articles_endpoint(query: &ArticlesQuery) -> Result<String> {
    if !query.has_law_reference() {
        return Err(LawApiError::BadRequest(messages::BAD_REQUEST.to_string()));
    }

    let mut params = form_urlencoded::Serializer::new(String::new());
    for (name, value) in query.params() {
        params.append_pair(name, value);
    }

    Ok(format!("{ARTICLES_ENDPOINT};{}", params.finish()))
}

/// Endpoint path for the updated law list on a given date.
pub fn update_law_lists_endpoint(date: NaiveDate) -> String {
    format!("{UPDATE_LAW_LISTS_ENDPOINT}/{}", format_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_floor() {
        assert!(validate_date("2020-11-24").is_ok());
        assert!(validate_date("2024-01-01").is_ok());

        let err = validate_date("2020-11-23").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidDate);
    }

    #[test]
    fn test_validate_date_invalid_format() {
        assert!(validate_date("").is_err());
        assert!(validate_date("invalid").is_err());
        assert!(validate_date("2024/01/01").is_err());
        assert!(validate_date("2024-1-1").is_err());
    }

    #[test]
    fn test_validate_date_invalid_date() {
        assert!(validate_date("2024-13-01").is_err()); // Invalid month
        assert!(validate_date("2023-02-29").is_err()); // Not a leap year
        assert!(validate_date("2024-00-10").is_err()); // Zero month
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "20240105");
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("123"), "123");
        assert_eq!(encode_path_segment("a b+c"), "a%20b%2Bc");
        assert_eq!(encode_path_segment("法"), "%E6%B3%95");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_law_lists_endpoint() {
        assert_eq!(law_lists_endpoint(LawType::All), "/lawlists/1");
        assert_eq!(law_lists_endpoint(LawType::MinistryOrder), "/lawlists/4");
    }

    #[test]
    fn test_law_data_endpoint() {
        assert_eq!(law_data_endpoint("415AC0000000057"), "/lawdata/415AC0000000057");
        assert_eq!(
            law_data_endpoint("平成十五年法律第五十七号"),
            format!("/lawdata/{}", encode_path_segment("平成十五年法律第五十七号"))
        );
    }

    #[test]
    fn test_articles_endpoint() {
        let query = ArticlesQuery::by_law_id("123")
            .with_article("第一条")
            .with_paragraph("1");
        assert_eq!(
            articles_endpoint(&query).unwrap(),
            format!(
                "/articles;lawId=123&article={}&paragraph=1",
                encode_path_segment("第一条")
            )
        );
    }

    #[test]
    fn test_articles_endpoint_requires_law_reference() {
        let query = ArticlesQuery::default().with_article("第一条");
        let err = articles_endpoint(&query).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::BadRequest);
        assert_eq!(err.to_string(), messages::BAD_REQUEST);
    }

    #[test]
    fn test_update_law_lists_endpoint() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(update_law_lists_endpoint(date), "/updatelawlists/20240101");
    }

    #[test]
    fn test_client_config_builder_trims_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/api/1/")
            .with_timeout_secs(5);
        assert_eq!(config.base_url, "http://localhost:8080/api/1");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(
            config.url_for("/lawlists/1"),
            "http://localhost:8080/api/1/lawlists/1"
        );
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout_secs, HTTP_TIMEOUT_SECS);
        assert!(config.user_agent.starts_with("elaws-client/"));
    }
}
