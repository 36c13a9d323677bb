//! The external data boundary of the controller.

use async_trait::async_trait;

use crate::descriptor::PageDescriptor;
use crate::error::Result;
use crate::models::{CollectionItem, PageResult};

/// A page-indexed collection endpoint.
///
/// Implementations resolve a [`PageDescriptor`] into one page of items plus
/// pagination metadata, normalized to 1-based page addressing regardless of
/// the endpoint's own scheme (`page` or `skip`/`take`). Transport failures
/// map to [`crate::Error::Network`], non-success responses to
/// [`crate::Error::Server`].
///
/// Sources are stateless with respect to the controller: they never see
/// accumulated items and need no knowledge of epochs beyond carrying the
/// descriptor through.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    type Item: CollectionItem;

    /// Fetch one page of the collection.
    async fn fetch_page(&self, descriptor: &PageDescriptor) -> Result<PageResult<Self::Item>>;
}
