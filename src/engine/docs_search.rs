// ── Digest Engine: Docs Search Adapters ────────────────────────────────────
// Production implementations of the resolver's collaborator traits, built
// on reqwest + scraper. The docs site has no public search API, so the
// search tier scrapes the HTML search endpoint the same way a browser
// would. Every call is bounded by HTTP_TIMEOUT_SECS; callers treat any
// error as "tier unresolved", never as a run failure.

use std::time::Duration;

use async_trait::async_trait;
use log::info;
use scraper::{Html, Selector};

use crate::atoms::constants::{BROWSER_USER_AGENT, DOCS_BASE_URL, HTTP_TIMEOUT_SECS};
use crate::atoms::error::DigestResult;
use crate::engine::resolver::{DocsPageFetcher, DocsSearch};

/// Result hrefs that are navigation chrome, not documentation articles.
const EXCLUDED_PATHS: &[&str] = &[
    "/search",
    "/site-policy",
    "/get-started/learning-about-github",
];

fn build_client() -> DigestResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(BROWSER_USER_AGENT)
        .build()?)
}

/// First article link in a docs search result page: an `/en/...` href that
/// is not chrome. The search page lists results in relevance order, so the
/// first qualifying anchor is the top candidate.
fn first_result_link(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("a[href]").unwrap();
    doc.select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| {
            href.starts_with("/en/") && !EXCLUDED_PATHS.iter().any(|x| href.contains(x))
        })
        .map(|href| href.to_string())
}

// ── Search endpoint ────────────────────────────────────────────────────────

/// Scrapes `{base}/search?query=...` for the top in-domain article.
pub struct HttpDocsSearch {
    client: reqwest::Client,
    base: String,
}

impl HttpDocsSearch {
    pub fn new() -> DigestResult<Self> {
        Self::with_base(DOCS_BASE_URL)
    }

    pub fn with_base(base: &str) -> DigestResult<Self> {
        Ok(Self {
            client: build_client()?,
            base: base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DocsSearch for HttpDocsSearch {
    async fn search(&self, keywords: &[String]) -> DigestResult<Option<String>> {
        if keywords.is_empty() {
            return Ok(None);
        }
        let query = keywords.join(" ");
        let url = format!("{}/search?query={}", self.base, urlencoding::encode(&query));
        info!("[docs-search] querying: {}", query);

        let resp = self
            .client
            .get(&url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(format!("docs search returned HTTP {}", resp.status()).into());
        }

        let body = resp.text().await?;
        Ok(first_result_link(&body).map(|href| format!("{}{}", self.base, href)))
    }
}

// ── Page fetch ─────────────────────────────────────────────────────────────

/// Fetches a resolved docs page so the resolver can mine it for navigation
/// steps.
pub struct HttpDocsPage {
    client: reqwest::Client,
}

impl HttpDocsPage {
    pub fn new() -> DigestResult<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

#[async_trait]
impl DocsPageFetcher for HttpDocsPage {
    async fn fetch(&self, url: &str) -> DigestResult<String> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(format!("docs page returned HTTP {}", resp.status()).into());
        }
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_article_link() {
        let html = r#"
            <a href="/search?query=copilot">refine search</a>
            <a href="/en/site-policy/terms">terms</a>
            <a href="/en/copilot/memory">Copilot memory</a>
            <a href="/en/copilot">Copilot</a>
        "#;
        assert_eq!(first_result_link(html).as_deref(), Some("/en/copilot/memory"));
    }

    #[test]
    fn no_article_links_is_none() {
        let html = r#"<a href="/search">search</a><a href="https://github.com/">home</a>"#;
        assert!(first_result_link(html).is_none());
    }
}
