// ── Digest Engine: Dates ───────────────────────────────────────────────────
// Feed dates arrive as RFC 2822 strings ("Thu, 15 Jan 2026 21:57:44 +0000").
// Display formatting is Pacific Time, the house style of the digest.

use chrono::{DateTime, FixedOffset};
use chrono_tz::America::Los_Angeles;

/// Parse the feed's RFC 2822 publish date. `None` on garbage input; the
/// pipeline keeps the entry and falls back to the raw string for display.
pub fn parse_published(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(raw.trim()).ok()
}

/// Format as "Jan 15, 2026 at 1:57 PM PT".
pub fn format_pacific(dt: &DateTime<FixedOffset>) -> String {
    let local = dt.with_timezone(&Los_Angeles);
    // %l pads single-digit hours with a space; collapse it out
    let formatted = local.format("%b %d, %Y at %l:%M %p PT").to_string();
    formatted.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse-and-format in one step, returning the raw string when the feed
/// date does not parse.
pub fn display_date(raw: &str) -> String {
    match parse_published(raw) {
        Some(dt) => format_pacific(&dt),
        None => raw.to_string(),
    }
}
