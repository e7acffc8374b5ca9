// ── Docs Resolver: Keyword Mapping ─────────────────────────────────────────
// Tier 3: a static table from feature keywords to canonical docs URLs,
// consulted when neither the entry body nor the docs search produced a
// link. Read-only, built once, never mutated at runtime.
//
// Matching is scored: the table entry sharing the most keywords with the
// title wins; zero overlap is no match. Broad single-keyword entries sit
// before their refinements so equal scores resolve to the broad page.

use std::collections::HashSet;

/// Builtin feature map for the GitHub product surface.
const BUILTIN_TABLE: &[(&str, &str)] = &[
    // Copilot
    ("copilot", "https://docs.github.com/en/copilot"),
    (
        "copilot chat",
        "https://docs.github.com/en/copilot/using-github-copilot/asking-github-copilot-questions-in-your-ide",
    ),
    (
        "copilot agent",
        "https://docs.github.com/en/copilot/using-github-copilot/using-copilot-coding-agent-to-work-on-tasks",
    ),
    (
        "copilot review",
        "https://docs.github.com/en/copilot/using-github-copilot/code-review/using-copilot-code-review",
    ),
    (
        "copilot extensions",
        "https://docs.github.com/en/copilot/using-github-copilot/using-extensions-to-integrate-external-tools-with-copilot-chat",
    ),
    // Actions
    ("actions", "https://docs.github.com/en/actions"),
    (
        "actions runner",
        "https://docs.github.com/en/actions/using-github-hosted-runners",
    ),
    (
        "actions workflow",
        "https://docs.github.com/en/actions/writing-workflows",
    ),
    (
        "actions cache",
        "https://docs.github.com/en/actions/using-workflows/caching-dependencies-to-speed-up-workflows",
    ),
    // Security
    ("security", "https://docs.github.com/en/code-security"),
    ("dependabot", "https://docs.github.com/en/code-security/dependabot"),
    (
        "secret scanning",
        "https://docs.github.com/en/code-security/secret-scanning",
    ),
    (
        "code scanning",
        "https://docs.github.com/en/code-security/code-scanning",
    ),
    (
        "codeql",
        "https://docs.github.com/en/code-security/code-scanning/introduction-to-code-scanning/about-code-scanning-with-codeql",
    ),
    (
        "security advisories",
        "https://docs.github.com/en/code-security/security-advisories",
    ),
    // Codespaces
    ("codespaces", "https://docs.github.com/en/codespaces"),
    ("codespace", "https://docs.github.com/en/codespaces"),
    // Projects & Issues
    (
        "projects",
        "https://docs.github.com/en/issues/planning-and-tracking-with-projects",
    ),
    ("issues", "https://docs.github.com/en/issues"),
    // Pull Requests
    ("pull request", "https://docs.github.com/en/pull-requests"),
    (
        "merge",
        "https://docs.github.com/en/pull-requests/collaborating-with-pull-requests/incorporating-changes-from-a-pull-request",
    ),
    // Repositories
    ("repository", "https://docs.github.com/en/repositories"),
    (
        "branch protection",
        "https://docs.github.com/en/repositories/configuring-branches-and-merges-in-your-repository/managing-protected-branches",
    ),
    (
        "rulesets",
        "https://docs.github.com/en/repositories/configuring-branches-and-merges-in-your-repository/managing-rulesets",
    ),
    // API
    ("api", "https://docs.github.com/en/rest"),
    ("graphql", "https://docs.github.com/en/graphql"),
    ("rest api", "https://docs.github.com/en/rest"),
    // Enterprise
    ("enterprise", "https://docs.github.com/en/enterprise-cloud@latest"),
    (
        "audit log",
        "https://docs.github.com/en/enterprise-cloud@latest/admin/monitoring-activity-in-your-enterprise/reviewing-audit-logs-for-your-enterprise",
    ),
    // Packages
    ("packages", "https://docs.github.com/en/packages"),
    (
        "container registry",
        "https://docs.github.com/en/packages/working-with-a-github-packages-registry/working-with-the-container-registry",
    ),
    // Mobile
    (
        "mobile",
        "https://docs.github.com/en/get-started/using-github/github-mobile",
    ),
    // CLI
    ("cli", "https://docs.github.com/en/github-cli"),
    ("gh", "https://docs.github.com/en/github-cli"),
];

#[derive(Debug, Clone)]
struct MapEntry {
    keywords: Vec<String>,
    url: String,
}

/// Static keyword-to-URL table. The builtin table covers the GitHub product
/// surface; custom tables exist for tests and alternate deployments.
#[derive(Debug, Clone)]
pub struct KeywordMap {
    entries: Vec<MapEntry>,
}

impl Default for KeywordMap {
    fn default() -> Self {
        Self::from_pairs(BUILTIN_TABLE)
    }
}

impl KeywordMap {
    /// Build from `(space-separated keywords, url)` pairs, kept in order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(keywords, url)| MapEntry {
                keywords: keywords
                    .split_whitespace()
                    .map(|k| k.to_lowercase())
                    .collect(),
                url: (*url).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Highest-overlap entry for the given title keywords, table order
    /// breaking ties. `None` when nothing overlaps at all.
    pub fn lookup(&self, keywords: &[String]) -> Option<&str> {
        let keyword_set: HashSet<&str> = keywords.iter().map(String::as_str).collect();

        let mut best: Option<&MapEntry> = None;
        let mut best_score = 0;
        for entry in &self.entries {
            let score = entry
                .keywords
                .iter()
                .filter(|k| keyword_set.contains(k.as_str()))
                .count();
            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }
        best.map(|e| e.url.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn single_keyword_match() {
        let map = KeywordMap::default();
        assert_eq!(
            map.lookup(&kws(&["copilot", "memory", "feature"])),
            Some("https://docs.github.com/en/copilot")
        );
    }

    #[test]
    fn larger_overlap_beats_broad_entry() {
        let map = KeywordMap::default();
        assert_eq!(
            map.lookup(&kws(&["copilot", "chat", "improvements"])),
            Some("https://docs.github.com/en/copilot/using-github-copilot/asking-github-copilot-questions-in-your-ide")
        );
    }

    #[test]
    fn no_overlap_is_no_match() {
        let map = KeywordMap::default();
        assert_eq!(map.lookup(&kws(&["foo", "bar", "widget"])), None);
        assert_eq!(map.lookup(&[]), None);
    }

    #[test]
    fn custom_table() {
        let map = KeywordMap::from_pairs(&[("copilot", "https://docs.github.com/copilot")]);
        assert_eq!(
            map.lookup(&kws(&["copilot"])),
            Some("https://docs.github.com/copilot")
        );
        assert!(!map.is_empty());
    }
}
