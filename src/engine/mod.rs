// ── Digest Engine ──────────────────────────────────────────────────────────
// The functional core: dedup state tracking, categorization, enrichment.
// Pure logic stays synchronous; only the resolver's collaborator calls
// (docs search, page fetch) are async.

pub mod categorize;
pub mod dates;
pub mod docs_search;
pub mod keywords;
pub mod pipeline;
pub mod resolver;
pub mod state;
pub mod summary;
