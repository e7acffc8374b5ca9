// ── Docs Resolver: Navigation Outlines ─────────────────────────────────────
// Derive the "how do I get to this feature" steps for a Release entry.
// Two sources, in order of trust:
//   1. extraction off the resolved docs page (breadcrumb phrases, then
//      short ordered lists of UI actions) → verified steps
//   2. a synthesized template from the entry title → unverified guidance
// Extraction is deterministic string work; nothing is generated.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node, Selector};

use crate::atoms::types::NavigationOutline;

/// "navigate to Settings > Copilot > Memory", "click Code › Codespaces", ...
static NAV_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:navigate to|go to|click|select|open)\s+["']?([^"'\n]+(?:>|→|›)[^"'\n]+)["']?"#)
        .unwrap()
});

/// Bare breadcrumb runs anchored on a well-known UI root.
static BREADCRUMB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Settings|Repository|Organization|Profile)\s*(?:>|→|›)\s*[^\n]+").unwrap()
});

static ARROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*(?:>|→|›)\s*").unwrap());

/// Words that mark an ordered list as UI steps rather than prose.
const ACTION_WORDS: &[&str] = &["click", "select", "navigate"];

// ── Template fallback ──────────────────────────────────────────────────────

/// Synthesize "Settings → [feature area] → [feature name]" from the title.
/// Area is every title word but the last, name is the last word. Always
/// unverified: the presentation layer must not dress this up as a fact.
pub fn template_outline(title: &str) -> NavigationOutline {
    let words: Vec<&str> = title.split_whitespace().collect();
    let steps = match words.len() {
        0 => vec!["Settings".to_string()],
        1 => vec!["Settings".to_string(), words[0].to_string()],
        n => vec![
            "Settings".to_string(),
            words[..n - 1].join(" "),
            words[n - 1].to_string(),
        ],
    };
    NavigationOutline {
        steps,
        verified: false,
    }
}

// ── Extraction off a docs page ─────────────────────────────────────────────

/// Page text with one text node per line, so breadcrumb regexes stop at
/// layout boundaries instead of swallowing the whole page.
fn page_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut lines: Vec<String> = Vec::new();
    for node in doc.tree.nodes() {
        if let Node::Text(text) = node.value() {
            let skipped = node.ancestors().any(|a| {
                matches!(a.value(), Node::Element(el) if el.name() == "script" || el.name() == "style")
            });
            if !skipped {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.split_whitespace().collect::<Vec<_>>().join(" "));
                }
            }
        }
    }
    lines.join("\n")
}

fn breadcrumb_to_steps(path: &str) -> Option<Vec<String>> {
    let normalized = ARROW.replace_all(path.trim(), " → ").into_owned();
    let steps: Vec<String> = normalized
        .split(" → ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    // one segment is not a path
    if steps.len() >= 2 {
        Some(steps)
    } else {
        None
    }
}

/// Extract navigation steps from a docs page, or `None` when the page has
/// no recognizable access instructions.
pub fn extract_outline(page_html: &str) -> Option<Vec<String>> {
    let text = page_text(page_html);

    if let Some(caps) = NAV_PHRASE.captures(&text) {
        if let Some(steps) = breadcrumb_to_steps(&caps[1]) {
            return Some(steps);
        }
    }

    if let Some(m) = BREADCRUMB.find(&text) {
        if let Some(steps) = breadcrumb_to_steps(m.as_str()) {
            return Some(steps);
        }
    }

    // Ordered lists of 2..=6 items where at least one item reads like a UI
    // action; longer lists are prose, not click paths.
    let doc = Html::parse_document(page_html);
    let ol_sel = Selector::parse("ol").unwrap();
    let li_sel = Selector::parse("li").unwrap();
    for ol in doc.select(&ol_sel) {
        let items: Vec<String> = ol
            .select(&li_sel)
            .map(|li| {
                li.text()
                    .collect::<String>()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|s| !s.is_empty())
            .collect();
        if (2..=6).contains(&items.len()) {
            let looks_actionable = items.iter().any(|s| {
                let lower = s.to_lowercase();
                ACTION_WORDS.iter().any(|w| lower.contains(w))
            });
            if looks_actionable {
                return Some(items.into_iter().take(5).collect());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_from_multi_word_title() {
        let nav = template_outline("Foo Bar Widget");
        assert_eq!(nav.steps, vec!["Settings", "Foo Bar", "Widget"]);
        assert!(!nav.verified);
        assert_eq!(nav.render(), "Settings → Foo Bar → Widget");
    }

    #[test]
    fn template_from_single_word_title() {
        let nav = template_outline("Codespaces");
        assert_eq!(nav.steps, vec!["Settings", "Codespaces"]);
    }

    #[test]
    fn extracts_breadcrumb_phrase() {
        let html = r#"<p>To enable it, navigate to Settings > Copilot > Memory and flip the toggle.</p>"#;
        let steps = extract_outline(html).unwrap();
        assert_eq!(steps[0], "Settings");
        assert_eq!(steps[1], "Copilot");
        assert!(steps[2].starts_with("Memory"));
    }

    #[test]
    fn extracts_bare_breadcrumb() {
        let html = r#"<div>Path</div><div>Repository › Settings › Rules</div>"#;
        let steps = extract_outline(html).unwrap();
        assert_eq!(steps, vec!["Repository", "Settings", "Rules"]);
    }

    #[test]
    fn extracts_ordered_action_list() {
        let html = r#"
            <ol>
              <li>Open your repository</li>
              <li>Click the Security tab</li>
              <li>Select Dependabot alerts</li>
            </ol>
        "#;
        let steps = extract_outline(html).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1], "Click the Security tab");
    }

    #[test]
    fn prose_lists_are_not_outlines() {
        let html = r#"
            <ol>
              <li>Faster builds for everyone</li>
              <li>Lower memory usage overall</li>
            </ol>
        "#;
        assert!(extract_outline(html).is_none());
    }

    #[test]
    fn page_without_instructions_yields_none() {
        assert!(extract_outline("<p>Reference material only.</p>").is_none());
    }
}
