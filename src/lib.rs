// ── Changelog Digest Engine ────────────────────────────────────────────────
// Core library for the GitHub changelog email digest.
//
// The engine consumes raw feed entries and a prior state snapshot, and
// produces a filtered, categorized, enriched entry batch plus an updated
// snapshot. It never fetches the feed, renders HTML, or sends mail itself;
// those live with the orchestrator:
//
//   orchestrator fetches feed      → engine::state filters unseen entries
//   unseen entries are categorized → Release entries get docs resolution
//   orchestrator renders & sends   → engine::state commits delivered URLs
//
// Dedup is permanent and at-most-once: a URL enters the snapshot only after
// confirmed delivery, and is never removed.

pub mod atoms;
pub mod engine;

pub use atoms::error::{DigestError, DigestResult};
pub use atoms::types::{
    Category, ChangelogEntry, DocsReference, Identified, InvalidEntry, NavigationOutline,
    RawEntry, ResolutionTier,
};
pub use engine::docs_search::{HttpDocsPage, HttpDocsSearch};
pub use engine::pipeline::{prepare_digest, DigestBatch};
pub use engine::resolver::{DocsPageFetcher, DocsResolver, DocsSearch, KeywordMap};
pub use engine::state::{commit, filter_unseen, FilterOutcome, StateSnapshot};
