use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

/// Placeholder title the API reports for the project's front page.
/// Only this literal is filtered; a wiki's localized front page title
/// (`עמוד_ראשי` on he.wikipedia) is ranked like any other article.
pub const MAIN_PAGE_TITLE: &str = "Main_Page";
/// Namespace of administrative pages such as `Special:Search`
pub const SPECIAL_NAMESPACE_PREFIX: &str = "Special:";

/// One ranked entry of a day's most viewed pages.
/// Only the title is required. Rank and views are informational and come
/// through as `None` when missing, null or not a number.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArticleEntry {
    #[serde(rename = "article")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rank: Option<u64>,
    #[serde(rename = "views", default, deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
    }))
}

#[derive(Debug, Deserialize)]
struct TopPagesResponse {
    items: Vec<TopPagesItem>,
}

#[derive(Debug, Deserialize)]
struct TopPagesItem {
    articles: Vec<ArticleEntry>,
}

/// Why a single day could not be used. Every variant is recoverable: the
/// day is skipped and the run carries on with the next one.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{code} {reason}")]
    Status { code: u16, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("error decoding JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unexpected data structure: {0}")]
    UnexpectedShape(String),
}

/// Anything that can produce the filtered ranking for one date
pub trait TopPagesSource {
    fn top_pages(&self, date: NaiveDate) -> Result<Vec<ArticleEntry>, FetchError>;
}

pub fn is_content_title(title: &str) -> bool {
    title != MAIN_PAGE_TITLE && !title.starts_with(SPECIAL_NAMESPACE_PREFIX)
}

pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        return Ok(());
    }
    Err(FetchError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

/// Parse a top pages response body and drop non-content pages, keeping rank order
pub fn parse_top_pages(body: &str) -> Result<Vec<ArticleEntry>, FetchError> {
    // Invalid JSON and a missing `items[0].articles` are reported differently
    let value: Value = serde_json::from_str(body).map_err(FetchError::Decode)?;
    let response: TopPagesResponse = serde_json::from_value(value)
        .map_err(|e| FetchError::UnexpectedShape(e.to_string()))?;

    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::UnexpectedShape("items is empty".to_string()))?;

    Ok(item
        .articles
        .into_iter()
        .filter(|article| is_content_title(&article.title))
        .collect())
}

/// Blocking client for the Wikimedia pageviews "top" endpoint.
/// The API returns at most 1000 articles per day.
pub struct PageviewsClient {
    client: Client,
    api_base: String,
    project: String,
    access: String,
    user_agent: String,
}

impl PageviewsClient {
    pub fn new(config: &Config) -> Self {
        PageviewsClient {
            client: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            project: config.project.clone(),
            access: config.access.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn top_pages_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/api/rest_v1/metrics/pageviews/top/{}/{}/{}/{:02}/{:02}",
            self.api_base,
            self.project,
            self.access,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

impl TopPagesSource for PageviewsClient {
    fn top_pages(&self, date: NaiveDate) -> Result<Vec<ArticleEntry>, FetchError> {
        let url = self.top_pages_url(date);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()?;

        check_status(response.status())?;
        let body = response.text()?;
        parse_top_pages(&body)
    }
}
