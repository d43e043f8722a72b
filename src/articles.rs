//! Health article search against the Wikimedia REST API.
//!
//! Queries are suffixed with "health medical" to keep results on-topic.
//! Failures propagate to the caller; there is no retry.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

const DEFAULT_BASE_URL: &str = "https://api.wikimedia.org/core/v1/wikipedia/en";
const SEARCH_LIMIT: u32 = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Article search request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One search hit, as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSummary {
    pub id: u64,
    pub key: String,
    pub title: String,
    pub excerpt: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pages: Vec<ArticleSummary>,
}

pub struct WikipediaClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new() -> Result<Self, ArticleError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: &str) -> Result<Self, ArticleError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for health articles matching the query.
    pub fn search(&self, query: &str) -> Result<Vec<ArticleSummary>, ArticleError> {
        let url = format!("{}/search/page", self.base_url);
        let terms = search_terms(query);
        let limit = SEARCH_LIMIT.to_string();

        let response: SearchResponse = self
            .http
            .get(url)
            .query(&[("q", terms.as_str()), ("limit", limit.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        tracing::debug!(query, results = response.pages.len(), "Article search complete");
        Ok(response.pages)
    }
}

/// Canonical article URL for a search hit's key.
pub fn article_url(key: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{key}")
}

fn search_terms(query: &str) -> String {
    format!("{query} health medical")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_scope_to_health() {
        assert_eq!(search_terms("diabetes"), "diabetes health medical");
    }

    #[test]
    fn article_url_from_key() {
        assert_eq!(
            article_url("Blood_pressure"),
            "https://en.wikipedia.org/wiki/Blood_pressure"
        );
    }

    #[test]
    fn search_response_deserializes() {
        let json = r#"{
            "pages": [
                {
                    "id": 3997,
                    "key": "Blood_pressure",
                    "title": "Blood pressure",
                    "excerpt": "Blood pressure is the pressure of circulating blood...",
                    "description": "Pressure exerted by circulating blood"
                }
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.pages.len(), 1);
        assert_eq!(parsed.pages[0].key, "Blood_pressure");
    }

    #[test]
    fn missing_pages_field_is_empty() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.pages.is_empty());
    }
}
