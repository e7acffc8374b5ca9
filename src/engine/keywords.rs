// ── Digest Engine: Title Keywords ──────────────────────────────────────────
// Turn an entry title into search keywords for the docs-search and
// keyword-mapping tiers. Plain stop-word filtering, fast and deterministic.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words that never help a docs search.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
        "can", "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
        "from", "as", "into", "through", "during", "before", "after", "above", "below", "between",
        "under", "again", "further", "then", "once", "now", "generally", "available", "new", "and",
        "or", "but", "if", "because", "until", "while", "this", "that", "these", "those", "am",
        "it", "its", "it's", "they", "them", "their", "what", "which", "who", "whom", "where",
        "when", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
        "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
        "just", "also",
    ]
    .into_iter()
    .collect()
});

/// Word shape: letter first, then letters/digits and the symbols that show up
/// in tech terms (c++, c#, key-vault).
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z][a-zA-Z0-9+#-]*\b").unwrap());

/// Maximum keywords passed to the search tier.
const MAX_KEYWORDS: usize = 6;

/// Extract lowercase keywords from a title: stop words and one/two-letter
/// words dropped, feed order preserved, capped at `MAX_KEYWORDS`.
pub fn extract_keywords(title: &str) -> Vec<String> {
    let lower = title.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w.as_str()))
        .take(MAX_KEYWORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_short_words() {
        let kws = extract_keywords("Copilot is now generally available in the CLI");
        assert_eq!(kws, vec!["copilot", "cli"]);
    }

    #[test]
    fn caps_at_six() {
        let kws = extract_keywords(
            "Dependabot secret scanning alerts runners workflows codespaces packages",
        );
        assert_eq!(kws.len(), 6);
        assert_eq!(kws[0], "dependabot");
    }

    #[test]
    fn empty_when_nothing_useful() {
        assert!(extract_keywords("it is the a an").is_empty());
        assert!(extract_keywords("").is_empty());
    }
}
