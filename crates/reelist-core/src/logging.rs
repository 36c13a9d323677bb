//! Structured logging field name constants for reelist.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across the
//! controller and every collection source.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Fetch failed and is surfaced to the presentation layer |
//! | WARN  | Recoverable issue (slow fetch, inconsistent page metadata) |
//! | INFO  | Lifecycle events (epoch reset, end of collection reached) |
//! | DEBUG | Decision points (advance guards, stale-result discard) |
//! | TRACE | Per-item detail (dedup hits) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "controller", "client"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "discover", "requests", "service", "scroll"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "fetch_page", "advance", "set_criteria", "go_to_page"
pub const OPERATION: &str = "op";

// ─── Pagination fields ─────────────────────────────────────────────────────

/// 1-based page number of the descriptor being processed.
pub const PAGE: &str = "page";

/// Criteria epoch of the descriptor or controller.
pub const EPOCH: &str = "epoch";

/// Total pages declared by the server.
pub const TOTAL_PAGES: &str = "total_pages";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of items returned by a page fetch.
pub const RESULT_COUNT: &str = "result_count";

/// Number of items accumulated after a merge.
pub const ACCUMULATED_COUNT: &str = "accumulated_count";
