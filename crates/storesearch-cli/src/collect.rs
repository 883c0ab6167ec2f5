//! Search-and-fetch loop that turns a text query into store records.
//!
//! The run is all-or-nothing: the first failed search or details call aborts
//! collection and the records gathered so far are dropped.

use std::time::Duration;

use anyhow::Context;
use storesearch_core::StoreRecord;
use storesearch_places::{normalize_place, PlacesClient};

/// Upper bound on search pages followed for one query. The Places API stops
/// at three; this only trips on a token that keeps coming back.
pub(crate) const MAX_PAGES: usize = 10;

/// Builds the free-text query sent to the search endpoint.
pub(crate) fn search_query(store_name: &str, city_name: &str) -> String {
    format!("{store_name} in {city_name}")
}

/// Walks every search page for `query` and fetches details for each hit, in
/// the order the API returns them.
///
/// `page_token_delay_ms` is waited before each page after the first; a fresh
/// `next_page_token` is rejected by the API until it has propagated.
///
/// # Errors
///
/// Returns an error on the first failed search or details request, or when
/// more than [`MAX_PAGES`] pages are returned.
pub(crate) async fn collect_stores(
    client: &PlacesClient,
    query: &str,
    language: &str,
    page_token_delay_ms: u64,
) -> anyhow::Result<Vec<StoreRecord>> {
    let mut stores: Vec<StoreRecord> = Vec::new();
    let mut page_token = String::new();
    let mut page_count = 0usize;

    loop {
        page_count += 1;
        if page_count > MAX_PAGES {
            anyhow::bail!("search for \"{query}\" exceeded {MAX_PAGES} result pages");
        }

        if page_count > 1 && page_token_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(page_token_delay_ms)).await;
        }

        let page = client
            .text_search(query, &page_token, language)
            .await
            .with_context(|| format!("search page {page_count} for \"{query}\" failed"))?;

        tracing::info!(
            page = page_count,
            results = page.results.len(),
            has_next = !page.is_last(),
            "fetched search page"
        );

        for summary in &page.results {
            let details = client
                .place_details(&summary.place_id, language)
                .await
                .with_context(|| format!("details for place {} failed", summary.place_id))?;

            let record = normalize_place(&details);
            tracing::debug!(place_id = %record.place_id, name = %record.name, "fetched place");
            stores.push(record);
        }

        if page.is_last() {
            break;
        }
        page_token = page.next_page_token;
    }

    Ok(stores)
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
