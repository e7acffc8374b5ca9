// ── Digest Engine: Run Pipeline ────────────────────────────────────────────
// The per-run control flow of the core, as one entry point:
//
//   filter unseen → build entries (categorize, dates, summary, features)
//                 → resolve docs for Release entries → grouped batch
//
// The orchestrator renders and sends the batch externally, then calls
// `engine::state::commit` with exactly the delivered entries. Entries are
// processed sequentially and independently; a resolution failure degrades
// one entry, never the batch.

use log::info;

use crate::atoms::types::{Category, ChangelogEntry, InvalidEntry, RawEntry};
use crate::engine::resolver::DocsResolver;
use crate::engine::state::{filter_unseen, StateSnapshot};
use crate::engine::{categorize, dates, summary};

// ── Batch output ───────────────────────────────────────────────────────────

/// Everything the rendering collaborator needs for one digest, grouped by
/// category with per-group input order preserved.
#[derive(Debug, Clone, Default)]
pub struct DigestBatch {
    pub releases: Vec<ChangelogEntry>,
    pub improvements: Vec<ChangelogEntry>,
    pub retirements: Vec<ChangelogEntry>,
    /// Data-quality rejects, for the caller's warning report.
    pub invalid: Vec<InvalidEntry>,
}

impl DigestBatch {
    /// Normal "nothing to send" outcome; the orchestrator skips delivery.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty() && self.improvements.is_empty() && self.retirements.is_empty()
    }

    pub fn total(&self) -> usize {
        self.releases.len() + self.improvements.len() + self.retirements.len()
    }

    /// All entries in category order, for the commit step after delivery.
    pub fn all_entries(&self) -> Vec<&ChangelogEntry> {
        self.releases
            .iter()
            .chain(self.improvements.iter())
            .chain(self.retirements.iter())
            .collect()
    }
}

// ── Entry construction ─────────────────────────────────────────────────────

fn build_entry(raw: RawEntry) -> ChangelogEntry {
    ChangelogEntry {
        published_at: dates::parse_published(&raw.published),
        published_display: dates::display_date(&raw.published),
        summary: summary::summarize(&raw.content_html, &raw.summary_html),
        key_features: summary::key_features(&raw.content_html),
        category: categorize::categorize(&raw.category_tag),
        url: raw.url,
        title: raw.title,
        content_html: raw.content_html,
        labels: raw.labels,
        docs: None,
    }
}

// ── Pipeline entry point ───────────────────────────────────────────────────

/// Filter, categorize, and enrich one run's worth of raw feed entries.
/// Release entries get documentation resolution; Improvement and Retirement
/// entries never carry a navigation outline. Pure apart from the resolver's
/// collaborator calls; the snapshot is not touched.
pub async fn prepare_digest(
    raw: &[RawEntry],
    snapshot: &StateSnapshot,
    resolver: &DocsResolver,
) -> DigestBatch {
    let outcome = filter_unseen(raw, snapshot);
    info!(
        "[pipeline] {} candidates, {} unseen, {} invalid",
        raw.len(),
        outcome.unseen.len(),
        outcome.invalid.len()
    );

    let mut batch = DigestBatch {
        invalid: outcome.invalid,
        ..Default::default()
    };

    for raw_entry in outcome.unseen {
        let mut entry = build_entry(raw_entry);
        match entry.category {
            Category::Release => {
                entry.docs = Some(resolver.resolve(&entry).await);
                batch.releases.push(entry);
            }
            Category::Improvement => batch.improvements.push(entry),
            Category::Retirement => batch.retirements.push(entry),
        }
    }

    info!(
        "[pipeline] prepared digest: {} releases, {} improvements, {} retirements",
        batch.releases.len(),
        batch.improvements.len(),
        batch.retirements.len()
    );
    batch
}
