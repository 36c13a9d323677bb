//! Async driver coupling a controller to a collection source.
//!
//! Commands are synchronous and non-blocking: each one that warrants a fetch
//! spawns it onto the runtime and returns immediately, so rapid user input
//! (filter switch while a page is in flight) behaves exactly like the UI it
//! models. Resolutions come back through a channel and are applied by
//! [`CollectionService::settle`] (or one at a time by
//! [`CollectionService::apply_next`]); the controller's epoch guard discards
//! anything from a superseded criteria generation. In-flight fetches of a
//! superseded epoch are not aborted, only ignored; correctness never
//! depends on cancellation.

use std::sync::Arc;

use reelist_core::{
    CollectionController, CollectionSource, CollectionView, Criteria, Error, FetchStrategy,
    PageDescriptor, PageResult,
};
use tokio::sync::mpsc;
use tracing::debug;

enum Resolution<T> {
    Resolved(PageDescriptor, PageResult<T>),
    Failed(PageDescriptor, Error),
}

/// One screen's collection: a controller, its source, and the in-flight
/// fetches between them. Single-owner; never shared across screens.
pub struct CollectionService<S>
where
    S: CollectionSource + 'static,
    S::Item: Send + 'static,
{
    source: Arc<S>,
    controller: CollectionController<S::Item>,
    tx: mpsc::UnboundedSender<Resolution<S::Item>>,
    rx: mpsc::UnboundedReceiver<Resolution<S::Item>>,
}

impl<S> CollectionService<S>
where
    S: CollectionSource + 'static,
    S::Item: Send + 'static,
{
    /// Create the service and start fetching page 1.
    pub fn new(source: S, criteria: Criteria, strategy: FetchStrategy, page_size: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (controller, first) = CollectionController::new(criteria, strategy, page_size);
        let service = Self {
            source: Arc::new(source),
            controller,
            tx,
            rx,
        };
        service.dispatch(first);
        service
    }

    // ─── Commands (non-blocking) ───────────────────────────────────────────

    pub fn set_criteria(&mut self, criteria: Criteria) {
        if let Some(descriptor) = self.controller.set_criteria(criteria) {
            self.dispatch(descriptor);
        }
    }

    pub fn advance(&mut self) {
        if let Some(descriptor) = self.controller.advance() {
            self.dispatch(descriptor);
        }
    }

    pub fn go_to_page(&mut self, page: u32) {
        if let Some(descriptor) = self.controller.go_to_page(page) {
            self.dispatch(descriptor);
        }
    }

    pub fn retry(&mut self) {
        if let Some(descriptor) = self.controller.retry() {
            self.dispatch(descriptor);
        }
    }

    // ─── Resolution pump ───────────────────────────────────────────────────

    /// Apply the next completed fetch, waiting for one if necessary.
    ///
    /// Returns `false` without waiting when no fetch is pending for the
    /// current epoch.
    pub async fn apply_next(&mut self) -> bool {
        if !self.controller.is_pending() {
            return false;
        }
        // The service holds a sender, so recv() cannot return None.
        if let Some(resolution) = self.rx.recv().await {
            self.apply(resolution);
        }
        true
    }

    /// Apply completed fetches until the current epoch has none in flight.
    ///
    /// Stale resolutions drained along the way are discarded by the
    /// controller's epoch guard.
    pub async fn settle(&mut self) {
        while self.apply_next().await {}
    }

    /// Apply any already-completed fetches without waiting.
    pub fn apply_ready(&mut self) {
        while let Ok(resolution) = self.rx.try_recv() {
            self.apply(resolution);
        }
    }

    // ─── Reads ─────────────────────────────────────────────────────────────

    pub fn view(&self) -> CollectionView<'_, S::Item> {
        self.controller.view()
    }

    pub fn view_filtered(&self, keep: impl Fn(&S::Item) -> bool) -> CollectionView<'_, S::Item> {
        self.controller.view_filtered(keep)
    }

    pub fn controller(&self) -> &CollectionController<S::Item> {
        &self.controller
    }

    // ─── Internals ─────────────────────────────────────────────────────────

    fn apply(&mut self, resolution: Resolution<S::Item>) {
        match resolution {
            Resolution::Resolved(descriptor, page) => {
                self.controller.on_page_resolved(&descriptor, page);
            }
            Resolution::Failed(descriptor, error) => {
                self.controller.on_page_failed(&descriptor, error);
            }
        }
    }

    fn dispatch(&self, descriptor: PageDescriptor) {
        debug!(
            subsystem = "client",
            component = "service",
            op = "dispatch",
            page = descriptor.page,
            epoch = descriptor.epoch,
            "spawning page fetch"
        );
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let resolution = match source.fetch_page(&descriptor).await {
                Ok(page) => Resolution::Resolved(descriptor, page),
                Err(error) => Resolution::Failed(descriptor, error),
            };
            // Receiver dropped means the screen unmounted; nothing to do.
            let _ = tx.send(resolution);
        });
    }
}
