//! Centralized default constants for reelist.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Page size for discover-style infinite-scroll collections (upstream fixed).
pub const DISCOVER_PAGE_SIZE: usize = 20;

/// Page size for the discrete-paged request list (upstream fixed).
pub const REQUEST_PAGE_SIZE: usize = 10;

// =============================================================================
// CRITERIA KEYS
// =============================================================================

/// Criteria key for the UI locale (`language` query parameter upstream).
pub const CRITERIA_LOCALE: &str = "language";

/// Criteria key for the request-list status filter.
pub const CRITERIA_FILTER: &str = "filter";

/// Criteria key for the request-list sort order.
pub const CRITERIA_SORT: &str = "sort";

/// Default locale sent with discover requests.
pub const DEFAULT_LOCALE: &str = "en";

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// Default API base URL (local server, upstream's default port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5055";

/// Timeout for collection fetches (seconds).
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetch duration above which a slow-fetch warning is logged (milliseconds).
pub const SLOW_FETCH_MS: u64 = 5000;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Env var overriding the API base URL.
pub const ENV_BASE_URL: &str = "REELIST_BASE_URL";

/// Env var holding the API key, sent as `X-Api-Key` when set.
pub const ENV_API_KEY: &str = "REELIST_API_KEY";

/// Env var overriding the fetch timeout (seconds).
pub const ENV_TIMEOUT_SECS: &str = "REELIST_TIMEOUT_SECS";

/// Env var overriding the discover locale.
pub const ENV_LOCALE: &str = "REELIST_LOCALE";
