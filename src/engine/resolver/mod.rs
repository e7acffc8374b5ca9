// ── Digest Engine: Docs Resolver ───────────────────────────────────────────
// Attach a documentation reference and navigation outline to a Release
// entry via an ordered fallback chain, first match wins:
//
//   embedded docs link → docs search → keyword mapping → embedded fallback
//                                                      → template (always)
//
// The chain is a flat list of tiers, not nested conditionals: inserting a
// new tier means adding a variant and an arm, nothing else moves. A tier
// that errors (network, parse) is logged and treated as "did not resolve";
// no retry, no run-level failure. With fixed inputs and a fixed keyword
// map the whole resolution is deterministic — no model in the loop.

pub mod embedded;
pub mod mapping;
pub mod navigation;

pub use mapping::KeywordMap;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::atoms::error::DigestResult;
use crate::atoms::types::{ChangelogEntry, DocsReference, NavigationOutline, ResolutionTier};
use crate::engine::keywords;

// ── Collaborator traits ────────────────────────────────────────────────────
// The search endpoint and the page fetch are the only network calls in the
// core, so both sit behind traits: production uses the reqwest adapters in
// engine::docs_search, tests use in-process stubs.

#[async_trait]
pub trait DocsSearch: Send + Sync {
    /// Top in-domain documentation URL for the given keywords, if any.
    async fn search(&self, keywords: &[String]) -> DigestResult<Option<String>>;
}

#[async_trait]
pub trait DocsPageFetcher: Send + Sync {
    /// Raw HTML of a documentation page.
    async fn fetch(&self, url: &str) -> DigestResult<String>;
}

// ── Resolver ───────────────────────────────────────────────────────────────

/// Link-producing tiers in resolution order; the template tier is not
/// listed because it cannot fail and terminates the chain unconditionally.
const LINK_TIERS: &[ResolutionTier] = &[
    ResolutionTier::EmbeddedLink,
    ResolutionTier::DocsSearch,
    ResolutionTier::KeywordMapping,
    ResolutionTier::EmbeddedFallback,
];

pub struct DocsResolver {
    search: Arc<dyn DocsSearch>,
    pages: Arc<dyn DocsPageFetcher>,
    map: KeywordMap,
}

impl DocsResolver {
    pub fn new(search: Arc<dyn DocsSearch>, pages: Arc<dyn DocsPageFetcher>) -> Self {
        Self::with_map(search, pages, KeywordMap::default())
    }

    pub fn with_map(
        search: Arc<dyn DocsSearch>,
        pages: Arc<dyn DocsPageFetcher>,
        map: KeywordMap,
    ) -> Self {
        Self { search, pages, map }
    }

    /// Resolve a documentation reference for one Release entry. Never fails
    /// and never returns nothing: the template tier guarantees an outline
    /// even when every link tier misses.
    pub async fn resolve(&self, entry: &ChangelogEntry) -> DocsReference {
        let title_keywords = keywords::extract_keywords(&entry.title);

        let mut resolved = None;
        for tier in LINK_TIERS {
            match self.try_tier(*tier, entry, &title_keywords).await {
                Ok(Some(url)) => {
                    debug!("[resolver] '{}' resolved via {:?}: {}", entry.title, tier, url);
                    resolved = Some((url, *tier));
                    break;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("[resolver] {:?} tier failed for '{}': {}", tier, entry.title, e);
                }
            }
        }

        match resolved {
            Some((url, tier)) => {
                let navigation = self.navigation_for(&url, &entry.title).await;
                DocsReference {
                    url: Some(url),
                    tier,
                    navigation,
                }
            }
            None => DocsReference {
                url: None,
                tier: ResolutionTier::Template,
                navigation: navigation::template_outline(&entry.title),
            },
        }
    }

    async fn try_tier(
        &self,
        tier: ResolutionTier,
        entry: &ChangelogEntry,
        title_keywords: &[String],
    ) -> DigestResult<Option<String>> {
        match tier {
            ResolutionTier::EmbeddedLink => Ok(embedded::extract_docs_link(&entry.content_html)),
            ResolutionTier::DocsSearch => self.search.search(title_keywords).await,
            ResolutionTier::KeywordMapping => {
                Ok(self.map.lookup(title_keywords).map(str::to_string))
            }
            ResolutionTier::EmbeddedFallback => {
                Ok(embedded::extract_fallback_link(&entry.content_html))
            }
            // not in LINK_TIERS; handled after the loop
            ResolutionTier::Template => Ok(None),
        }
    }

    /// Steps off the resolved page when it describes access, otherwise the
    /// template. A dead or unhelpful page keeps the link but downgrades the
    /// outline to unverified.
    async fn navigation_for(&self, url: &str, title: &str) -> NavigationOutline {
        match self.pages.fetch(url).await {
            Ok(page) => match navigation::extract_outline(&page) {
                Some(steps) => NavigationOutline {
                    steps,
                    verified: true,
                },
                None => navigation::template_outline(title),
            },
            Err(e) => {
                warn!("[resolver] page fetch failed for {}: {}", url, e);
                navigation::template_outline(title)
            }
        }
    }
}
