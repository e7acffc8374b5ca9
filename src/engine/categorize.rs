// ── Digest Engine: Categorization ──────────────────────────────────────────
// Deterministic lookup from the feed's "changelog-type" taxonomy term to the
// closed `Category` enum. A tag lookup, not inference: no NLP, no scoring.

use crate::atoms::types::Category;

/// Map a raw taxonomy term to a `Category`.
/// Unknown, empty, or missing tags land on `Improvement`, the safe default.
pub fn categorize(raw_tag: &str) -> Category {
    let tag = raw_tag.trim();
    if tag.eq_ignore_ascii_case("release") {
        Category::Release
    } else if tag.eq_ignore_ascii_case("retired") || tag.eq_ignore_ascii_case("retirement") {
        Category::Retirement
    } else {
        Category::Improvement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags() {
        assert_eq!(categorize("Release"), Category::Release);
        assert_eq!(categorize("Retired"), Category::Retirement);
        assert_eq!(categorize("Retirement"), Category::Retirement);
        assert_eq!(categorize("Improvement"), Category::Improvement);
    }

    #[test]
    fn unknown_tag_defaults_to_improvement() {
        assert_eq!(categorize("Breaking Change"), Category::Improvement);
        assert_eq!(categorize(""), Category::Improvement);
        assert_eq!(categorize("   "), Category::Improvement);
    }

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(categorize("release"), Category::Release);
        assert_eq!(categorize("RETIRED"), Category::Retirement);
    }
}
