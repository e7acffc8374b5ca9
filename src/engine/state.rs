// ── Digest Engine: State Tracking ──────────────────────────────────────────
// Owns the set of already-delivered entry URLs and the filter/commit pair
// around it. Both operations are pure functions over an explicit snapshot
// value; the orchestrator owns reading and writing the snapshot to whatever
// backing store it chooses (file, cache, commit-back).
//
// Guarantee: at-most-once. A URL enters the snapshot only after the caller
// has confirmed delivery, and it is never removed — permanent dedup, not a
// time window. The system prefers skipping an entry over sending it twice.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::atoms::error::{DigestError, DigestResult};
use crate::atoms::types::{Identified, InvalidEntry};

// ── Snapshot ───────────────────────────────────────────────────────────────

/// Persisted record of delivery history: a monotonically growing set of
/// canonical entry URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    processed: BTreeSet<String>,
}

/// On-disk shape: `{"processed_urls": [...]}`. An earlier deployment stored
/// a URL→timestamp map instead of a list; deserialization accepts both and
/// keeps only the keys (timestamps fed an expiry policy that no longer
/// exists).
#[derive(Serialize, Deserialize)]
struct SnapshotWire {
    processed_urls: WireUrls,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireUrls {
    List(Vec<String>),
    Timestamped(BTreeMap<String, String>),
}

impl StateSnapshot {
    /// Parse a previously persisted snapshot. `None` (no prior snapshot)
    /// yields the empty set — a first run, not an error. Malformed JSON is
    /// fatal: the engine must not guess partial delivery state.
    pub fn from_json(raw: Option<&str>) -> DigestResult<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let wire: SnapshotWire = serde_json::from_str(raw)
            .map_err(|e| DigestError::State(format!("snapshot unreadable: {}", e)))?;
        let processed = match wire.processed_urls {
            WireUrls::List(urls) => urls.into_iter().collect(),
            WireUrls::Timestamped(map) => map.into_keys().collect(),
        };
        Ok(Self { processed })
    }

    /// Serialize for persistence. URLs are written as a sorted list so the
    /// stored file diffs cleanly between runs.
    pub fn to_json(&self) -> DigestResult<String> {
        let wire = SnapshotWire {
            processed_urls: WireUrls::List(self.processed.iter().cloned().collect()),
        };
        Ok(serde_json::to_string_pretty(&wire)?)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.processed.contains(url)
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StateSnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            processed: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Filter / commit ────────────────────────────────────────────────────────

/// Result of filtering a candidate batch: the never-seen entries in their
/// original relative order, plus the data-quality rejects.
#[derive(Debug, Clone)]
pub struct FilterOutcome<T> {
    pub unseen: Vec<T>,
    pub invalid: Vec<InvalidEntry>,
}

/// Why an identifier is unusable as a dedup key, or `None` if it is fine.
fn identifier_problem(url: &str) -> Option<&'static str> {
    if url.trim().is_empty() {
        return Some("empty identifier");
    }
    match Url::parse(url) {
        Ok(_) => None,
        Err(_) => Some("identifier is not an absolute URL"),
    }
}

/// Return every candidate whose URL is absent from the snapshot, preserving
/// input order. Pure: no side effects, no snapshot mutation. An empty result
/// is the normal "nothing to do" outcome, not an error.
///
/// Entries with an empty or malformed URL are excluded and reported in
/// `invalid` — treating them as "new" would resend them forever, treating
/// them as "seen" would drop them silently.
pub fn filter_unseen<T: Identified + Clone>(
    candidates: &[T],
    snapshot: &StateSnapshot,
) -> FilterOutcome<T> {
    let mut unseen = Vec::new();
    let mut invalid = Vec::new();

    for entry in candidates {
        if let Some(reason) = identifier_problem(entry.identifier()) {
            warn!(
                "[state] skipping entry '{}': {} ({:?})",
                entry.label(),
                reason,
                entry.identifier()
            );
            invalid.push(InvalidEntry {
                title: entry.label().to_string(),
                url: entry.identifier().to_string(),
                reason: reason.to_string(),
            });
            continue;
        }
        if !snapshot.contains(entry.identifier()) {
            unseen.push(entry.clone());
        }
    }

    FilterOutcome { unseen, invalid }
}

/// Union the delivered entries' URLs into a new snapshot. Call only after
/// the caller has confirmed successful delivery of exactly these entries;
/// committing early silently drops them from every future digest.
///
/// Set union makes this idempotent, so a retried commit is a no-op.
pub fn commit<T: Identified>(snapshot: &StateSnapshot, delivered: &[T]) -> StateSnapshot {
    let mut next = snapshot.clone();
    for entry in delivered {
        if let Some(reason) = identifier_problem(entry.identifier()) {
            warn!("[state] not committing '{}': {}", entry.label(), reason);
            continue;
        }
        next.processed.insert(entry.identifier().to_string());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::types::RawEntry;

    fn entry(url: &str) -> RawEntry {
        RawEntry {
            url: url.to_string(),
            title: format!("entry {}", url),
            published: String::new(),
            summary_html: String::new(),
            content_html: String::new(),
            category_tag: String::new(),
            labels: vec![],
        }
    }

    #[test]
    fn filters_seen_entries() {
        let snapshot: StateSnapshot = ["https://x/a"].into_iter().collect();
        let candidates = vec![entry("https://x/a"), entry("https://x/b")];
        let outcome = filter_unseen(&candidates, &snapshot);
        assert_eq!(outcome.unseen.len(), 1);
        assert_eq!(outcome.unseen[0].url, "https://x/b");
        assert!(outcome.invalid.is_empty());
    }

    #[test]
    fn preserves_candidate_order() {
        let snapshot = StateSnapshot::default();
        let candidates = vec![
            entry("https://x/c"),
            entry("https://x/a"),
            entry("https://x/b"),
        ];
        let outcome = filter_unseen(&candidates, &snapshot);
        let urls: Vec<&str> = outcome.unseen.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["https://x/c", "https://x/a", "https://x/b"]);
    }

    #[test]
    fn invalid_identifiers_are_reported_not_processed() {
        let snapshot = StateSnapshot::default();
        let candidates = vec![entry(""), entry("not a url"), entry("https://x/ok")];
        let outcome = filter_unseen(&candidates, &snapshot);
        assert_eq!(outcome.unseen.len(), 1);
        assert_eq!(outcome.unseen[0].url, "https://x/ok");
        assert_eq!(outcome.invalid.len(), 2);
        assert_eq!(outcome.invalid[0].reason, "empty identifier");

        // commit skips them too: an empty URL must never enter the snapshot
        let next = commit(&snapshot, &candidates);
        assert_eq!(next.len(), 1);
        assert!(next.contains("https://x/ok"));
    }

    #[test]
    fn commit_is_idempotent_and_monotonic() {
        let snapshot: StateSnapshot = ["https://x/old"].into_iter().collect();
        let delivered = vec![entry("https://x/a"), entry("https://x/b")];

        let once = commit(&snapshot, &delivered);
        let twice = commit(&once, &delivered);
        assert_eq!(once, twice);

        // prior identifiers survive every commit
        assert!(once.contains("https://x/old"));
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn delivery_is_at_most_once_across_runs() {
        // filter → commit → filter again must surface nothing
        let snapshot = StateSnapshot::default();
        let batch = vec![entry("https://x/a"), entry("https://x/b")];

        let first = filter_unseen(&batch, &snapshot);
        let committed = commit(&snapshot, &first.unseen);
        let second = filter_unseen(&batch, &committed);
        assert!(second.unseen.is_empty());
    }

    #[test]
    fn missing_snapshot_is_empty_not_error() {
        let snapshot = StateSnapshot::from_json(None).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_fatal() {
        let err = StateSnapshot::from_json(Some("{not json")).unwrap_err();
        assert!(matches!(err, DigestError::State(_)));

        // wrong shape is corrupt too
        let err = StateSnapshot::from_json(Some(r#"{"urls": []}"#)).unwrap_err();
        assert!(matches!(err, DigestError::State(_)));
    }

    #[test]
    fn snapshot_json_round_trip() {
        let snapshot: StateSnapshot = ["https://x/a", "https://x/b"].into_iter().collect();
        let json = snapshot.to_json().unwrap();
        let back = StateSnapshot::from_json(Some(&json)).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn legacy_timestamped_snapshot_still_loads() {
        let legacy = r#"{
            "processed_urls": {
                "https://x/a": "2026-01-26T08:00:00",
                "https://x/b": "2026-02-01T09:30:00"
            }
        }"#;
        let snapshot = StateSnapshot::from_json(Some(legacy)).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains("https://x/a"));
        assert!(snapshot.contains("https://x/b"));
    }
}
