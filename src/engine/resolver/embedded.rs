// ── Docs Resolver: Embedded Links ──────────────────────────────────────────
// Tier 1 and the embedded-fallback tier both read anchors straight out of
// the entry HTML. A docs-domain link in the body is authoritative: the
// changelog author placed it there, so no further tier runs.

use scraper::{Html, Selector};

use crate::atoms::constants::DOCS_DOMAIN;

/// Link-text phrases that usually point at the main documentation even when
/// the href is not on the docs domain.
const LEARN_MORE_PHRASES: &[&str] = &[
    "learn more",
    "documentation",
    "read more",
    "see the docs",
    "view docs",
];

fn anchors(html: &str) -> Vec<(String, String)> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("a[href]").unwrap();
    doc.select(&sel)
        .filter_map(|a| {
            let href = a.value().attr("href")?.trim();
            if href.is_empty() || href.starts_with('#') {
                return None;
            }
            let text = a
                .text()
                .collect::<String>()
                .to_lowercase()
                .trim()
                .to_string();
            Some((href.to_string(), text))
        })
        .collect()
}

/// First anchor pointing at the canonical docs domain, if any.
pub fn extract_docs_link(html: &str) -> Option<String> {
    anchors(html)
        .into_iter()
        .map(|(href, _)| href)
        .find(|href| href.contains(DOCS_DOMAIN))
}

/// Best non-docs anchor, ranked: "learn more"-style link text, then blog
/// posts about the feature, then any other github.com link. Changelog
/// self-links are excluded at every rank.
pub fn extract_fallback_link(html: &str) -> Option<String> {
    let mut learn_more = None;
    let mut blog = None;
    let mut other = None;

    for (href, text) in anchors(html) {
        if href.contains(DOCS_DOMAIN) {
            continue; // tier 1 territory
        }
        if learn_more.is_none() && LEARN_MORE_PHRASES.iter().any(|p| text.contains(p)) {
            learn_more = Some(href);
        } else if blog.is_none() && href.contains("github.blog") && !href.contains("/changelog/") {
            blog = Some(href);
        } else if other.is_none() && href.contains("github.com") && !href.contains("/changelog/") {
            other = Some(href);
        }
    }

    learn_more.or(blog).or(other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_link_wins() {
        let html = r#"
            <p>See <a href="https://github.blog/2026/copilot-memory/">the announcement</a>
            and <a href="https://docs.github.com/copilot/memory">the docs</a>.</p>
        "#;
        assert_eq!(
            extract_docs_link(html).as_deref(),
            Some("https://docs.github.com/copilot/memory")
        );
    }

    #[test]
    fn anchor_only_links_are_skipped() {
        let html = r##"<a href="#section">jump</a><a href="">void</a>"##;
        assert!(extract_docs_link(html).is_none());
        assert!(extract_fallback_link(html).is_none());
    }

    #[test]
    fn fallback_prefers_learn_more_text() {
        let html = r#"
            <a href="https://github.com/features/copilot">feature page</a>
            <a href="https://github.blog/2026/deep-dive/">Learn more</a>
        "#;
        assert_eq!(
            extract_fallback_link(html).as_deref(),
            Some("https://github.blog/2026/deep-dive/")
        );
    }

    #[test]
    fn fallback_ranks_blog_over_other_github() {
        let html = r#"
            <a href="https://github.com/orgs/community/discussions/1">discussion</a>
            <a href="https://github.blog/2026/deep-dive/">deep dive</a>
        "#;
        assert_eq!(
            extract_fallback_link(html).as_deref(),
            Some("https://github.blog/2026/deep-dive/")
        );
    }

    #[test]
    fn changelog_self_links_are_excluded() {
        let html = r#"<a href="https://github.blog/changelog/2026-01-15-copilot/">permalink</a>"#;
        assert!(extract_fallback_link(html).is_none());
    }
}
