//! The incremental paginated-collection controller.
//!
//! [`CollectionController`] turns a page-indexed collection endpoint into a
//! continuously growing (or page-swapping) result set while tracking
//! loading/empty/end states under rapidly changing input: filter switches,
//! sort switches, scroll-triggered fetches, page-button clicks.
//!
//! The controller performs no I/O. Commands that require a fetch return the
//! [`PageDescriptor`] to run; the caller resolves it against a
//! [`crate::CollectionSource`] and reports back through
//! [`CollectionController::on_page_resolved`] /
//! [`CollectionController::on_page_failed`]. All state lives behind these
//! commands, so the epoch-guard invariant is structurally enforced: a
//! resolution stamped with a superseded epoch cannot touch state at all.

use std::collections::HashSet;

use tracing::{debug, info, trace, warn};

use crate::descriptor::{Criteria, PageDescriptor};
use crate::error::Error;
use crate::models::{CollectionItem, PageResult};

// =============================================================================
// STRATEGY
// =============================================================================

/// How resolved pages merge into the visible collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Infinite scroll: pages concatenate in order, duplicates dropped.
    Append,
    /// Discrete paging: each resolved page atomically replaces the last.
    Replace,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Epoch-guarded pagination state machine for one collection screen.
///
/// One controller instance owns one collection's state; it is never shared
/// across screens and needs no synchronization.
pub struct CollectionController<T: CollectionItem> {
    strategy: FetchStrategy,
    page_size: usize,
    criteria: Criteria,

    /// Criteria generation. Incremented on every criteria change; resolutions
    /// stamped with an older epoch are discarded.
    epoch: u64,

    accumulated: Vec<T>,
    /// Identity keys of accumulated items (append-strategy dedup).
    seen: HashSet<T::Key>,

    /// Highest page resolved this epoch. Monotonically non-decreasing;
    /// advanced only on resolution, so a failed page is re-issued by the
    /// next advance rather than skipped.
    highest_requested_page: u32,
    /// Page of the last resolution (discrete-paging display). 0 before any.
    current_page: u32,

    last_known_total_pages: Option<u32>,
    total_results: Option<u64>,
    /// Item count of the last resolved page; a short page marks the end.
    last_page_len: Option<usize>,

    /// The at-most-one in-flight descriptor for the current epoch.
    pending: Option<PageDescriptor>,
    failure: Option<Error>,
    /// Descriptor of the last failed fetch, kept for presentation-driven retry.
    last_failed: Option<PageDescriptor>,

    resolved_in_epoch: bool,
}

impl<T: CollectionItem> CollectionController<T> {
    /// Create a controller at epoch 0 and issue the first page.
    ///
    /// The returned descriptor is already marked pending; the caller must
    /// resolve or fail it before another fetch can be issued.
    pub fn new(
        criteria: Criteria,
        strategy: FetchStrategy,
        page_size: usize,
    ) -> (Self, PageDescriptor) {
        let mut controller = Self {
            strategy,
            page_size,
            criteria,
            epoch: 0,
            accumulated: Vec::new(),
            seen: HashSet::new(),
            highest_requested_page: 0,
            current_page: 0,
            last_known_total_pages: None,
            total_results: None,
            last_page_len: None,
            pending: None,
            failure: None,
            last_failed: None,
            resolved_in_epoch: false,
        };
        let descriptor = controller.issue(1);
        (controller, descriptor)
    }

    // ─── Commands ──────────────────────────────────────────────────────────

    /// Replace the criteria, starting a fresh epoch.
    ///
    /// A deep-equal criteria value is an idempotent no-op: no reset, no
    /// epoch bump, no fetch. Otherwise all accumulated state is dropped and
    /// page 1 of the new epoch is issued; any in-flight fetch of the old
    /// epoch keeps running but its eventual resolution is discarded.
    pub fn set_criteria(&mut self, criteria: Criteria) -> Option<PageDescriptor> {
        if criteria == self.criteria {
            debug!(op = "set_criteria", epoch = self.epoch, "criteria unchanged, no-op");
            return None;
        }

        self.epoch += 1;
        self.criteria = criteria;
        self.accumulated.clear();
        self.seen.clear();
        self.highest_requested_page = 0;
        self.current_page = 0;
        self.last_known_total_pages = None;
        self.total_results = None;
        self.last_page_len = None;
        self.pending = None;
        self.failure = None;
        self.last_failed = None;
        self.resolved_in_epoch = false;

        info!(op = "set_criteria", epoch = self.epoch, "criteria changed, epoch reset");
        Some(self.issue(1))
    }

    /// Request the next page. Never fails; returns `None` when no fetch is
    /// warranted (one already pending, end reached, or all pages requested).
    pub fn advance(&mut self) -> Option<PageDescriptor> {
        if self.pending.is_some() {
            debug!(op = "advance", epoch = self.epoch, "fetch already pending");
            return None;
        }
        if self.is_reaching_end() {
            debug!(op = "advance", epoch = self.epoch, "end of collection reached");
            return None;
        }
        if let Some(total) = self.last_known_total_pages {
            if self.highest_requested_page >= total {
                debug!(
                    op = "advance",
                    epoch = self.epoch,
                    total_pages = total,
                    "all pages requested"
                );
                return None;
            }
        }
        Some(self.issue(self.highest_requested_page + 1))
    }

    /// Navigate to a specific page (discrete-paging variant).
    ///
    /// First-class operation: "previous" is `go_to_page(current - 1)`, not a
    /// special case of [`Self::advance`]. Rejected (no-op) for page 0, pages
    /// beyond the known total, while a fetch is pending, or under the append
    /// strategy. Always re-issues a fresh fetch for the page.
    pub fn go_to_page(&mut self, page: u32) -> Option<PageDescriptor> {
        if self.strategy != FetchStrategy::Replace {
            debug!(op = "go_to_page", page, "rejected: append strategy");
            return None;
        }
        if page == 0 {
            debug!(op = "go_to_page", page, "rejected: pages are 1-based");
            return None;
        }
        if self.pending.is_some() {
            debug!(op = "go_to_page", page, "rejected: fetch already pending");
            return None;
        }
        if let Some(total) = self.last_known_total_pages {
            if page > total {
                debug!(op = "go_to_page", page, total_pages = total, "rejected: beyond last page");
                return None;
            }
        }
        Some(self.issue(page))
    }

    /// Re-issue the last failed fetch. Retry is presentation-triggered; the
    /// controller never retries on its own.
    pub fn retry(&mut self) -> Option<PageDescriptor> {
        if self.pending.is_some() {
            return None;
        }
        let descriptor = self.last_failed.take()?;
        debug!(op = "retry", page = descriptor.page, epoch = descriptor.epoch, "re-issuing failed fetch");
        self.pending = Some(descriptor.clone());
        Some(descriptor)
    }

    /// Merge a resolved page into the collection.
    ///
    /// Resolutions from a superseded epoch, or descriptors that don't match
    /// the pending fetch (e.g. delivered to the wrong controller instance),
    /// are discarded without touching state.
    pub fn on_page_resolved(&mut self, descriptor: &PageDescriptor, result: PageResult<T>) {
        if !self.accepts(descriptor, "on_page_resolved") {
            return;
        }

        self.pending = None;
        self.failure = None;
        self.last_failed = None;
        self.resolved_in_epoch = true;

        if result.page != descriptor.page {
            warn!(
                op = "on_page_resolved",
                page = descriptor.page,
                reported = result.page,
                "server reported a different page number than requested"
            );
        }

        self.last_page_len = Some(result.results.len());
        // totalPages >= 1 once any page is known
        self.last_known_total_pages = Some(result.total_pages.max(1));
        self.total_results = Some(result.total_results);
        self.current_page = descriptor.page;
        self.highest_requested_page = self.highest_requested_page.max(descriptor.page);

        match self.strategy {
            FetchStrategy::Append => {
                for item in result.results {
                    if self.seen.insert(item.key()) {
                        self.accumulated.push(item);
                    } else {
                        trace!(op = "on_page_resolved", "dropping duplicate item");
                    }
                }
            }
            FetchStrategy::Replace => {
                self.accumulated = result.results;
            }
        }

        debug!(
            op = "on_page_resolved",
            page = descriptor.page,
            epoch = descriptor.epoch,
            accumulated_count = self.accumulated.len(),
            "page merged"
        );
        if self.is_reaching_end() {
            info!(op = "on_page_resolved", epoch = self.epoch, "end of collection reached");
        }
    }

    /// Record a failed fetch. Accumulated items stay visible alongside the
    /// failure (partial-result resilience).
    pub fn on_page_failed(&mut self, descriptor: &PageDescriptor, error: Error) {
        if !self.accepts(descriptor, "on_page_failed") {
            return;
        }

        self.pending = None;
        self.last_failed = Some(descriptor.clone());
        debug!(
            op = "on_page_failed",
            page = descriptor.page,
            epoch = descriptor.epoch,
            error = %error,
            "page fetch failed"
        );
        self.failure = Some(error);
    }

    // ─── Derived state ─────────────────────────────────────────────────────

    /// Read-only view over the unfiltered collection.
    pub fn view(&self) -> CollectionView<'_, T> {
        self.view_filtered(|_| true)
    }

    /// Read-only view with a pure post-filter applied to the visible items.
    ///
    /// The filter affects only what is rendered (and thus emptiness); end of
    /// collection stays a server-pagination fact computed from unfiltered
    /// state. A page whose items are all filtered out while more pages
    /// remain reports neither empty nor end, keeping the screen eligible to
    /// auto-advance.
    pub fn view_filtered(&self, keep: impl Fn(&T) -> bool) -> CollectionView<'_, T> {
        let items: Vec<&T> = self.accumulated.iter().filter(|item| keep(item)).collect();

        let is_loading_initial = !self.resolved_in_epoch && self.failure.is_none();
        let is_loading_more =
            self.resolved_in_epoch && self.pending.is_some() && !self.accumulated.is_empty();
        let is_reaching_end = self.is_reaching_end();
        let is_empty = !is_loading_initial
            && self.failure.is_none()
            && items.is_empty()
            && is_reaching_end;

        let total_pages = self.last_known_total_pages;
        let has_previous_page = self.current_page > 1;
        let has_next_page = total_pages.is_some_and(|total| {
            self.current_page >= 1 && self.current_page < total
        });

        CollectionView {
            items,
            is_loading_initial,
            is_loading_more,
            is_empty,
            is_reaching_end,
            failure: self.failure.as_ref(),
            total_results: self.total_results,
            total_pages,
            current_page: self.current_page,
            has_previous_page,
            has_next_page,
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    // ─── Internals ─────────────────────────────────────────────────────────

    fn issue(&mut self, page: u32) -> PageDescriptor {
        let descriptor = PageDescriptor::new(page, self.criteria.clone(), self.epoch);
        self.pending = Some(descriptor.clone());
        descriptor
    }

    /// Whether a resolution for `descriptor` may touch state.
    fn accepts(&self, descriptor: &PageDescriptor, op: &'static str) -> bool {
        if descriptor.epoch != self.epoch {
            debug!(
                op,
                page = descriptor.page,
                epoch = descriptor.epoch,
                current_epoch = self.epoch,
                "discarding stale result from superseded epoch"
            );
            return false;
        }
        if self.pending.as_ref() != Some(descriptor) {
            debug!(op, page = descriptor.page, "discarding result for unknown descriptor");
            return false;
        }
        true
    }

    /// End of collection, from unfiltered server-declared facts only:
    /// the last resolved page was short, or every known page was requested.
    fn is_reaching_end(&self) -> bool {
        if !self.resolved_in_epoch {
            return false;
        }
        if self.last_page_len.is_some_and(|len| len < self.page_size) {
            return true;
        }
        self.last_known_total_pages
            .is_some_and(|total| self.highest_requested_page >= total)
    }
}

// =============================================================================
// VIEW
// =============================================================================

/// Read-only presentation contract, recomputed on every call.
///
/// Presentation reads these fields and issues commands; it never mutates
/// collection state.
#[derive(Debug)]
pub struct CollectionView<'a, T> {
    /// Visible items, post-filter applied, accumulation order preserved.
    pub items: Vec<&'a T>,
    /// No page has resolved for the current epoch and nothing failed.
    pub is_loading_initial: bool,
    /// More content is being fetched behind already-visible items.
    pub is_loading_more: bool,
    /// Nothing to show and nothing left to fetch.
    pub is_empty: bool,
    /// Server-declared end of the collection (unfiltered fact).
    pub is_reaching_end: bool,
    pub failure: Option<&'a Error>,
    pub total_results: Option<u64>,
    pub total_pages: Option<u32>,
    /// Page of the last resolution; 0 before the first one.
    pub current_page: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> CollectionView<'_, T> {
    /// Predicate for [`crate::ScrollAdvanceTrigger`]: listen for bottom
    /// events only while another page could actually be fetched.
    pub fn should_listen(&self) -> bool {
        !self.is_loading_initial
            && !self.is_loading_more
            && !self.is_empty
            && !self.is_reaching_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{DISCOVER_PAGE_SIZE, REQUEST_PAGE_SIZE};
    use crate::models::{RequestFilter, RequestSort};

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u64);

    impl CollectionItem for Item {
        type Key = u64;

        fn key(&self) -> u64 {
            self.0
        }
    }

    fn page(page: u32, total_pages: u32, ids: std::ops::Range<u64>) -> PageResult<Item> {
        let results: Vec<Item> = ids.map(Item).collect();
        PageResult {
            page,
            total_results: (total_pages as u64) * 20,
            total_pages,
            results,
        }
    }

    fn discover_controller() -> (CollectionController<Item>, PageDescriptor) {
        CollectionController::new(
            Criteria::discover("en"),
            FetchStrategy::Append,
            DISCOVER_PAGE_SIZE,
        )
    }

    // =============================================================================
    // Lifecycle tests
    // =============================================================================

    #[test]
    fn test_initial_fetch_resolves_first_page() {
        // Full first page of three
        let (mut ctl, first) = discover_controller();
        assert_eq!(first.page, 1);
        assert_eq!(first.epoch, 0);
        assert!(ctl.view().is_loading_initial);

        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        let view = ctl.view();
        assert!(!view.is_loading_initial);
        assert_eq!(view.items.len(), 20);
        assert!(!view.is_reaching_end);
        assert!(!view.is_empty);
    }

    #[test]
    fn test_accumulation_until_short_final_page() {
        // 20 + 20 + 5 items, then advance becomes a no-op
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        let second = ctl.advance().expect("second page should be issued");
        assert_eq!(second.page, 2);
        ctl.on_page_resolved(&second, page(2, 3, 20..40));
        assert_eq!(ctl.view().items.len(), 40);

        let third = ctl.advance().expect("third page should be issued");
        ctl.on_page_resolved(&third, page(3, 3, 40..45));

        let view = ctl.view();
        assert_eq!(view.items.len(), 45);
        assert!(view.is_reaching_end);
        assert!(ctl.advance().is_none());
    }

    #[test]
    fn test_empty_replace_collection_then_filter_reset() {
        // Empty pending list, then switch to the all filter
        let (mut ctl, first) = CollectionController::<Item>::new(
            Criteria::requests(RequestFilter::Pending, RequestSort::Added),
            FetchStrategy::Replace,
            REQUEST_PAGE_SIZE,
        );
        ctl.on_page_resolved(
            &first,
            PageResult {
                page: 1,
                total_results: 0,
                total_pages: 1,
                results: vec![],
            },
        );
        assert!(ctl.view().is_empty);

        let reset = ctl
            .set_criteria(Criteria::requests(RequestFilter::All, RequestSort::Added))
            .expect("filter change should issue a fetch");
        assert_eq!(reset.page, 1);
        assert_eq!(reset.epoch, 1);
        assert!(ctl.view().is_loading_initial);
    }

    #[test]
    fn test_stale_epoch_resolution_is_discarded() {
        // The crux invariant. An in-flight page for the old
        // criteria resolves after a criteria change and must change nothing.
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));
        let stale = ctl.advance().expect("page 2 should be issued");

        let fresh = ctl
            .set_criteria(Criteria::discover("fr"))
            .expect("locale change should issue a fetch");
        assert_eq!(ctl.epoch(), 1);
        assert!(ctl.view().is_loading_initial);

        // Old-epoch page 2 lands late
        ctl.on_page_resolved(&stale, page(2, 3, 20..40));

        let view = ctl.view();
        assert_eq!(view.items.len(), 0);
        assert!(view.is_loading_initial);
        assert!(ctl.is_pending());

        // The new epoch still resolves normally afterwards
        ctl.on_page_resolved(&fresh, page(1, 2, 100..120));
        assert_eq!(ctl.view().items.len(), 20);
    }

    // =============================================================================
    // Property tests
    // =============================================================================

    #[test]
    fn test_append_is_prefix_preserving() {
        // Accumulation only grows, never reorders
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));
        let after_one: Vec<u64> = ctl.view().items.iter().map(|i| i.0).collect();

        let second = ctl.advance().unwrap();
        ctl.on_page_resolved(&second, page(2, 3, 20..40));
        let after_two: Vec<u64> = ctl.view().items.iter().map(|i| i.0).collect();

        assert_eq!(&after_two[..after_one.len()], &after_one[..]);
        assert_eq!(after_two.len(), 40);
    }

    #[test]
    fn test_short_page_marks_end_regardless_of_total_pages() {
        // 7 of 20 items ends the collection even with totalPages = 99
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 99, 0..7));

        assert!(ctl.view().is_reaching_end);
        assert!(ctl.advance().is_none());
    }

    #[test]
    fn test_post_filter_empties_view_without_ending_collection() {
        // A fully filtered-out page is neither empty nor the end
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        let view = ctl.view_filtered(|_| false);
        assert_eq!(view.items.len(), 0);
        assert!(!view.is_reaching_end);
        assert!(!view.is_empty);
        assert!(view.should_listen());
        assert!(ctl.advance().is_some());
    }

    #[test]
    fn test_set_criteria_with_equal_criteria_is_noop() {
        // Deep-equal criteria change nothing
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        assert!(ctl.set_criteria(Criteria::discover("en")).is_none());
        assert_eq!(ctl.epoch(), 0);
        assert_eq!(ctl.view().items.len(), 20);
    }

    // =============================================================================
    // Guard and edge-case tests
    // =============================================================================

    #[test]
    fn test_advance_is_noop_while_pending() {
        let (mut ctl, first) = discover_controller();
        assert!(ctl.advance().is_none());
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        assert!(ctl.advance().is_some());
        assert!(ctl.advance().is_none());
    }

    #[test]
    fn test_append_drops_duplicate_items_across_pages() {
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        // Page 2 re-serves items 18 and 19 at its head
        let second = ctl.advance().unwrap();
        ctl.on_page_resolved(&second, page(2, 3, 18..40));

        let ids: Vec<u64> = ctl.view().items.iter().map(|i| i.0).collect();
        assert_eq!(ids.len(), 40);
        assert_eq!(ids, (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_failure_keeps_accumulated_items_visible() {
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        let second = ctl.advance().unwrap();
        ctl.on_page_failed(&second, Error::Network("connection reset".into()));

        let view = ctl.view();
        assert_eq!(view.items.len(), 20);
        assert!(view.failure.is_some());
        assert!(!view.is_empty);
        assert!(!view.is_loading_more);
    }

    #[test]
    fn test_retry_reissues_failed_descriptor_and_clears_on_success() {
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        let second = ctl.advance().unwrap();
        ctl.on_page_failed(&second, Error::Server { status: 502, message: "bad gateway".into() });

        let retried = ctl.retry().expect("failed fetch should be retryable");
        assert_eq!(retried, second);
        assert!(ctl.retry().is_none());

        ctl.on_page_resolved(&retried, page(2, 3, 20..40));
        let view = ctl.view();
        assert!(view.failure.is_none());
        assert_eq!(view.items.len(), 40);
    }

    #[test]
    fn test_advance_reissues_failed_page() {
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));

        let second = ctl.advance().unwrap();
        ctl.on_page_failed(&second, Error::Network("connection reset".into()));

        // A scroll-triggered advance refetches the failed page, never past it
        let reissued = ctl.advance().expect("failed page should be re-issued");
        assert_eq!(reissued.page, 2);

        ctl.on_page_resolved(&reissued, page(2, 3, 20..40));
        let view = ctl.view();
        assert!(view.failure.is_none());
        assert_eq!(view.items.len(), 40);
    }

    #[test]
    fn test_initial_failure_then_advance_starts_at_page_one() {
        let (mut ctl, first) = discover_controller();
        ctl.on_page_failed(&first, Error::Network("timeout".into()));

        let reissued = ctl.advance().expect("page 1 should be re-issued");
        assert_eq!(reissued.page, 1);
    }

    #[test]
    fn test_failure_from_stale_epoch_is_discarded() {
        let (mut ctl, first) = discover_controller();
        ctl.set_criteria(Criteria::discover("de"));

        ctl.on_page_failed(&first, Error::Network("timeout".into()));
        assert!(ctl.view().failure.is_none());
    }

    #[test]
    fn test_foreign_descriptor_cannot_corrupt_state() {
        let (mut ctl, first) = discover_controller();
        let (_other, foreign) = discover_controller();

        // Same epoch and criteria, but not the pending descriptor (page 5)
        let mismatched = PageDescriptor::new(5, foreign.criteria.clone(), 0);
        ctl.on_page_resolved(&mismatched, page(5, 9, 0..20));

        assert!(ctl.view().is_loading_initial);
        assert!(ctl.is_pending());

        ctl.on_page_resolved(&first, page(1, 3, 0..20));
        assert_eq!(ctl.view().items.len(), 20);
    }

    #[test]
    fn test_go_to_page_navigation_and_guards() {
        let (mut ctl, first) = CollectionController::<Item>::new(
            Criteria::requests(RequestFilter::All, RequestSort::Added),
            FetchStrategy::Replace,
            REQUEST_PAGE_SIZE,
        );

        // Initial fetch still pending
        assert!(ctl.go_to_page(2).is_none());

        ctl.on_page_resolved(
            &first,
            PageResult {
                page: 1,
                total_results: 25,
                total_pages: 3,
                results: (0..10).map(Item).collect(),
            },
        );
        let view = ctl.view();
        assert_eq!(view.current_page, 1);
        assert!(view.has_next_page);
        assert!(!view.has_previous_page);

        assert!(ctl.go_to_page(0).is_none());
        assert!(ctl.go_to_page(4).is_none());

        let next = ctl.go_to_page(2).expect("page 2 is addressable");
        ctl.on_page_resolved(
            &next,
            PageResult {
                page: 2,
                total_results: 25,
                total_pages: 3,
                results: (10..20).map(Item).collect(),
            },
        );
        let view = ctl.view();
        assert_eq!(view.current_page, 2);
        assert!(view.has_previous_page);
        assert!(view.has_next_page);
        // Replace strategy swaps the page wholesale
        assert_eq!(view.items.first().map(|i| i.0), Some(10));
        assert_eq!(view.items.len(), 10);

        // Previous is a first-class re-fetch of a known page
        let previous = ctl.go_to_page(1).expect("page 1 is addressable");
        assert_eq!(previous.page, 1);
    }

    #[test]
    fn test_go_to_page_rejected_under_append_strategy() {
        let (mut ctl, first) = discover_controller();
        ctl.on_page_resolved(&first, page(1, 3, 0..20));
        assert!(ctl.go_to_page(2).is_none());
    }

    #[test]
    fn test_loading_more_requires_visible_items() {
        let (mut ctl, first) = discover_controller();
        assert!(!ctl.view().is_loading_more);

        ctl.on_page_resolved(&first, page(1, 3, 0..20));
        assert!(!ctl.view().is_loading_more);

        ctl.advance().unwrap();
        assert!(ctl.view().is_loading_more);
    }

    #[test]
    fn test_should_listen_only_between_fetches() {
        let (mut ctl, first) = discover_controller();
        assert!(!ctl.view().should_listen());

        ctl.on_page_resolved(&first, page(1, 3, 0..20));
        assert!(ctl.view().should_listen());

        let second = ctl.advance().unwrap();
        assert!(!ctl.view().should_listen());

        ctl.on_page_resolved(&second, page(2, 2, 20..40));
        assert!(!ctl.view().should_listen());
    }
}
