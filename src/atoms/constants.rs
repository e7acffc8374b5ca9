// ── Digest Atoms: Constants ────────────────────────────────────────────────
// All named constants for the crate live here.

// ── Source feed & documentation site ───────────────────────────────────────
// The feed URL is published for orchestrators; the engine itself never
// fetches it. DOCS_DOMAIN is the substring test used to recognize an
// authoritative documentation link inside entry HTML.
pub const CHANGELOG_FEED_URL: &str = "https://github.blog/changelog/feed/";
pub const DOCS_BASE_URL: &str = "https://docs.github.com";
pub const DOCS_DOMAIN: &str = "docs.github.com";

// ── Outbound HTTP budget ───────────────────────────────────────────────────
// Every network call in the resolver (docs search, page fetch) is optional:
// a timeout degrades that tier to "unresolved", it never aborts the run.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// The docs search endpoint serves a consent page to unknown clients, so the
// search tier presents a browser-style user agent like any other scraper.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

// ── Feed window ────────────────────────────────────────────────────────────
// Contract with the external fetcher: entries older than this are not
// expected to reach the engine. Dedup still protects against stragglers.
pub const MAX_FEED_AGE_DAYS: i64 = 7;
