//! # reelist-core
//!
//! Core types, traits, and abstractions for the reelist media-request client.
//!
//! This crate provides the incremental paginated-collection controller and
//! the data structures it operates on. It performs no I/O: fetching is
//! delegated to a [`CollectionSource`] implementation (see `reelist-client`
//! for the HTTP-backed ones), and the controller is a plain state machine
//! driven by commands and page resolutions.

pub mod controller;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod models;
pub mod scroll;
pub mod traits;

// Re-export commonly used types at crate root
pub use controller::{CollectionController, CollectionView, FetchStrategy};
pub use descriptor::{Criteria, PageDescriptor};
pub use error::{Error, Result};
pub use models::{
    CollectionItem, MediaRequest, MediaResult, MediaStatus, PageResult, RequestFilter,
    RequestMedia, RequestSort, RequestStatus,
};
pub use scroll::ScrollAdvanceTrigger;
pub use traits::CollectionSource;
