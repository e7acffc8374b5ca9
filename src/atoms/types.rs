// ── Digest Atoms: Pure Data Types ──────────────────────────────────────────
// All plain struct/enum definitions with no logic beyond tiny accessors.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ── Feed input ─────────────────────────────────────────────────────────────

/// One item as handed over by the external feed collaborator.
/// `url` is the canonical link and doubles as the dedup identifier; it must
/// be stable across fetches of the same item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    pub url: String,
    pub title: String,
    /// RFC 2822 date string as it appears in the feed.
    pub published: String,
    /// Short HTML blurb from the feed's summary field.
    pub summary_html: String,
    /// Full HTML body of the entry.
    pub content_html: String,
    /// Source taxonomy term (the feed's "changelog-type" tag), may be empty.
    pub category_tag: String,
    /// Feed label terms ("changelog-label" tags).
    pub labels: Vec<String>,
}

// ── Categorization ─────────────────────────────────────────────────────────

/// Closed category taxonomy. Unrecognized source tags map to `Improvement`
/// (documented default, not a failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Release,
    Improvement,
    Retirement,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Release => "Release",
            Category::Improvement => "Improvement",
            Category::Retirement => "Retirement",
        };
        f.write_str(s)
    }
}

// ── Documentation resolution ───────────────────────────────────────────────

/// Which strategy in the ordered fallback chain produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    /// Anchor to the docs domain embedded in the entry HTML (authoritative).
    EmbeddedLink,
    /// Top in-domain hit from the docs site's search endpoint.
    DocsSearch,
    /// Static keyword-to-URL mapping table.
    KeywordMapping,
    /// Best non-docs anchor from the entry HTML ("learn more", blog, ...).
    EmbeddedFallback,
    /// No link resolved; navigation-only template guidance.
    Template,
}

/// Ordered UI-navigation steps shown to the reader, e.g.
/// `["Settings", "Copilot", "Memory"]` rendered as "Settings → Copilot → Memory".
/// `verified == false` means the steps are template-derived best-effort
/// guidance, so the presentation layer can style them distinctly from steps
/// extracted off an actual docs page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationOutline {
    pub steps: Vec<String>,
    pub verified: bool,
}

impl NavigationOutline {
    pub fn render(&self) -> String {
        self.steps.join(" → ")
    }
}

/// Resolved documentation reference for a Release entry.
/// `url` is `None` only for the pure template tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsReference {
    pub url: Option<String>,
    pub tier: ResolutionTier,
    pub navigation: NavigationOutline,
}

// ── Enriched entry ─────────────────────────────────────────────────────────

/// One changelog item after filtering, categorization, and enrichment.
/// Constructed fresh each run and discarded afterwards; only the snapshot's
/// identifier set survives across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub url: String,
    pub title: String,
    /// Parse result of the feed date; `None` when the feed string was bad.
    pub published_at: Option<DateTime<FixedOffset>>,
    /// Human display form in Pacific Time ("Jan 15, 2026 at 1:57 PM PT"),
    /// or the raw feed string when parsing failed.
    pub published_display: String,
    /// Plain-text summary with feed boilerplate stripped.
    pub summary: String,
    pub content_html: String,
    pub category: Category,
    pub labels: Vec<String>,
    /// Up to four capability strings pulled from the entry body.
    pub key_features: Vec<String>,
    /// Populated for Release entries only.
    pub docs: Option<DocsReference>,
}

// ── Identifier access ──────────────────────────────────────────────────────

/// Anything carrying a stable canonical-URL identifier. Lets the state
/// tracker filter raw entries and commit enriched ones with one code path.
pub trait Identified {
    fn identifier(&self) -> &str;
    fn label(&self) -> &str;
}

impl Identified for RawEntry {
    fn identifier(&self) -> &str {
        &self.url
    }
    fn label(&self) -> &str {
        &self.title
    }
}

impl Identified for ChangelogEntry {
    fn identifier(&self) -> &str {
        &self.url
    }
    fn label(&self) -> &str {
        &self.title
    }
}

// ── Data-quality reporting ─────────────────────────────────────────────────

/// An entry excluded from processing because its identifier is unusable.
/// Surfaced to the caller as a warning-level report; never treated as
/// silently "new" or silently "seen".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidEntry {
    pub title: String,
    pub url: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_render() {
        let nav = NavigationOutline {
            steps: vec!["Settings".into(), "Copilot".into(), "Memory".into()],
            verified: true,
        };
        assert_eq!(nav.render(), "Settings → Copilot → Memory");
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Release.to_string(), "Release");
        assert_eq!(Category::Retirement.to_string(), "Retirement");
    }

    #[test]
    fn tier_serializes_snake_case() {
        let s = serde_json::to_string(&ResolutionTier::EmbeddedLink).unwrap();
        assert_eq!(s, "\"embedded_link\"");
    }
}
