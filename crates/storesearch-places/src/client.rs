//! HTTP client for the Google Places `textsearch` and `details` endpoints.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. Both endpoints answer HTTP 200 even on failure and report
//! the outcome in the JSON `"status"` field; anything other than a success
//! status surfaces as [`PlacesError::Api`]. Nothing is retried.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{PlaceDetails, PlaceDetailsResponse, SearchPage, TextSearchResponse};

/// Client for the Google Places web service.
///
/// Built with [`PlacesClient::with_base_url`]; the API root comes from
/// configuration, so tests point it at a mock server.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    text_search_url: Url,
    details_url: Url,
}

impl PlacesClient {
    /// Creates a client rooted at `base_url`, e.g.
    /// `https://maps.googleapis.com/maps/api/place/`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends below the root
        // instead of replacing its last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let root = Url::parse(&normalised).map_err(|e| invalid_base_url(base_url, &e))?;
        if root.cannot_be_a_base() {
            return Err(invalid_base_url(base_url, &"URL cannot be used as a base"));
        }
        let text_search_url = root
            .join("textsearch/json")
            .map_err(|e| invalid_base_url(base_url, &e))?;
        let details_url = root
            .join("details/json")
            .map_err(|e| invalid_base_url(base_url, &e))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            text_search_url,
            details_url,
        })
    }

    /// Fetches one page of text-search results.
    ///
    /// Pass an empty `page_token` for the first page. The returned
    /// [`SearchPage::next_page_token`] is empty when no further pages exist.
    /// `ZERO_RESULTS` is not an error; it yields an empty last page.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(
        &self,
        query: &str,
        page_token: &str,
        language: &str,
    ) -> Result<SearchPage, PlacesError> {
        let mut params = vec![("query", query), ("language", language)];
        if !page_token.is_empty() {
            params.push(("pagetoken", page_token));
        }

        let context = format!("textsearch(query={query})");
        let url = self.build_url(&self.text_search_url, &params);
        let body = self.request_json(&url, &context).await?;
        Self::check_api_error(&body, &["OK", "ZERO_RESULTS"], &context)?;

        let response: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context,
                source: e,
            })?;

        Ok(SearchPage {
            results: response.results,
            next_page_token: response.next_page_token.unwrap_or_default(),
        })
    }

    /// Fetches the detailed record for a single place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns any status other than `OK`
    ///   (including `NOT_FOUND` and `ZERO_RESULTS`).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        language: &str,
    ) -> Result<PlaceDetails, PlacesError> {
        let context = format!("details(place_id={place_id})");
        let url = self.build_url(
            &self.details_url,
            &[("place_id", place_id), ("language", language)],
        );
        let body = self.request_json(&url, &context).await?;
        Self::check_api_error(&body, &["OK"], &context)?;

        let response: PlaceDetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context,
                source: e,
            })?;

        Ok(response.result)
    }

    /// Builds the request URL with percent-encoded query parameters. The API
    /// key is appended last.
    fn build_url(&self, endpoint: &Url, params: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    ///
    /// The URL carries the API key, so it is stripped from transport errors
    /// and `context` names the call in error messages instead.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field against the statuses the
    /// endpoint treats as success.
    fn check_api_error(
        body: &serde_json::Value,
        accepted: &[&str],
        context: &str,
    ) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        if accepted.contains(&status) {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        Err(PlacesError::Api {
            context: context.to_owned(),
            status: status.to_string(),
            message,
        })
    }
}

fn invalid_base_url(base_url: &str, reason: &impl std::fmt::Display) -> PlacesError {
    PlacesError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
