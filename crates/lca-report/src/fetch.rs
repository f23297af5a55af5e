//! Web excerpt from a search results page
//!
//! One GET per report, no retry and no explicit timeout. The result
//! selector targets one particular rendering of the results page; when that
//! markup changes the selector simply stops matching and the excerpt falls
//! back to the "no public data" text.

use once_cell::sync::Lazy;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::error::FetchError;

/// Browser-identifying header sent with the search request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Appended to every query
pub const QUERY_SUFFIX: &str = "environmental+impact";

/// Result snippet containers on the basic-HTML results page
pub const RESULT_SELECTOR: &str = "div.BNeawe.s3v9rd.AP7Wnd";

/// At most this many snippets end up in the excerpt
pub const MAX_FRAGMENTS: usize = 5;

static RESULT_BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(RESULT_SELECTOR).expect("result selector is valid CSS"));

/// Query string value: escaped product words and the suffix, joined by `+`
pub fn build_query(product: &str) -> String {
    product
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .chain(std::iter::once(QUERY_SUFFIX.to_string()))
        .collect::<Vec<_>>()
        .join("+")
}

/// Full search URL for a product
pub fn search_url(base: &str, product: &str) -> String {
    format!("{}?q={}", base, build_query(product))
}

pub fn no_data_text(product: &str) -> String {
    format!("No public data found for {}.", product)
}

/// Join the visible text of the first [`MAX_FRAGMENTS`] result snippets.
///
/// Returns [`no_data_text`] when nothing matched or the text is blank.
pub fn extract_excerpt(html: &str, product: &str) -> String {
    let document = Html::parse_document(html);

    let fragments: Vec<String> = document
        .select(&RESULT_BLOCKS)
        .take(MAX_FRAGMENTS)
        .map(|element| element.text().collect::<String>())
        .collect();

    debug!("Matched {} result fragments", fragments.len());

    let combined = fragments.join(" ");
    if combined.trim().is_empty() {
        no_data_text(product)
    } else {
        combined
    }
}

/// Fetches the web excerpt for a product
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
    search_url: String,
}

impl WebFetcher {
    pub fn new(search_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            search_url: search_url.into(),
        })
    }

    /// Issue the search request and extract the excerpt.
    ///
    /// Transport failures propagate. A non-success status is only logged:
    /// the body is parsed regardless and usually yields the fallback text.
    pub async fn fetch_excerpt(&self, product: &str) -> Result<String, FetchError> {
        let url = search_url(&self.search_url, product);
        info!("Fetching web excerpt for '{}'", product);
        debug!("Search URL: {}", url);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search returned status {} for '{}'", status, product);
        }

        let body = response.text().await?;
        Ok(extract_excerpt(&body, product))
    }
}
