// ── Digest Engine: Summary Extraction ──────────────────────────────────────
// Distill an entry's HTML body into a short plain-text summary plus a
// handful of key-capability strings. Heuristic text work only; the goal is
// a skimmable digest, not a faithful transcription.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node, Selector};

/// RSS boilerplate the feed appends to every entry body.
static BOILERPLATE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)The post .+ appeared first on The GitHub Blog\.",
        r"(?i)The post .+ appeared first on GitHub Blog\.",
        r"(?i)appeared first on The GitHub Blog\.",
        r"(?i)appeared first on GitHub Blog\.",
        r"(?i)Learn more\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Soft cap on summary length; clipping happens on sentence boundaries.
const SUMMARY_MAX_CHARS: usize = 350;
/// Sentences shorter than this are link stubs or fragments, skip them.
const MIN_SENTENCE_CHARS: usize = 15;
/// Cap on extracted key features.
const MAX_KEY_FEATURES: usize = 4;

// ── Plain text extraction ──────────────────────────────────────────────────

/// Flatten HTML to space-separated text, ignoring script/style content.
pub fn html_to_text(html: &str) -> String {
    let doc = Html::parse_fragment(html);
    let mut parts: Vec<String> = Vec::new();
    for node in doc.tree.nodes() {
        if let Node::Text(text) = node.value() {
            let skipped = node.ancestors().any(|a| {
                matches!(a.value(), Node::Element(el) if el.name() == "script" || el.name() == "style")
            });
            if !skipped {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.split_whitespace().collect::<Vec<_>>().join(" "));
                }
            }
        }
    }
    parts.join(" ")
}

fn strip_boilerplate(text: &str) -> String {
    let mut out = text.to_string();
    for re in BOILERPLATE.iter() {
        out = re.replace_all(&out, "").into_owned();
    }
    out.trim().to_string()
}

// ── Sentence-boundary clipping ─────────────────────────────────────────────

/// Split on sentence terminators followed by whitespace. Terminators and
/// whitespace are ASCII, so byte offsets are always char boundaries.
fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let mut end = i + 1;
            while end < bytes.len() && matches!(bytes[end], b'.' | b'!' | b'?') {
                end += 1;
            }
            if end >= bytes.len() || bytes[end].is_ascii_whitespace() {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                    end += 1;
                }
                start = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn clip_sentences(text: &str, budget: usize) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0;
    for sentence in split_sentences(text) {
        if sentence.len() < MIN_SENTENCE_CHARS {
            continue;
        }
        if used + sentence.len() > budget {
            break;
        }
        used += sentence.len();
        kept.push(sentence);
    }
    kept.join(" ")
}

// ── Public surface ─────────────────────────────────────────────────────────

/// Concise plain-text summary: prefer the full content body, fall back to
/// the feed's summary field when the body yields nothing usable.
pub fn summarize(content_html: &str, summary_html: &str) -> String {
    if !content_html.trim().is_empty() {
        let text = strip_boilerplate(&html_to_text(content_html));
        let clipped = clip_sentences(&text, SUMMARY_MAX_CHARS);
        if !clipped.is_empty() {
            return clipped;
        }
    }
    strip_boilerplate(&html_to_text(summary_html))
}

/// Pull up to four key-capability strings: `<li>` items first (changelogs
/// list capabilities as bullets), then bold runs as secondary signals.
pub fn key_features(content_html: &str) -> Vec<String> {
    let doc = Html::parse_fragment(content_html);
    let li_sel = Selector::parse("li").unwrap();
    let bold_sel = Selector::parse("strong, b").unwrap();

    let mut features: Vec<String> = Vec::new();

    for li in doc.select(&li_sel) {
        let text = li
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if text.len() > 15 && text.len() < 150 && !features.contains(&text) {
            features.push(text);
        }
    }

    for bold in doc.select(&bold_sel) {
        let text = bold
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if text.len() > 5 && text.len() < 80 && !features.contains(&text) {
            features.push(text);
        }
    }

    features.truncate(MAX_KEY_FEATURES);
    features
}
