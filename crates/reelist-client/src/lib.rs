//! # reelist-client
//!
//! HTTP-backed [`reelist_core::CollectionSource`] implementations for the
//! two observed endpoint families, plus [`CollectionService`], the async
//! driver that couples a source to a
//! [`reelist_core::CollectionController`].
//!
//! The discover endpoints are `page`-addressed; the request-list endpoint is
//! `skip`/`take`-addressed. Both are normalized to 1-based
//! [`reelist_core::PageResult`] pages here, so the controller only ever sees
//! one addressing scheme.

pub mod config;
pub mod discover;
pub mod requests;
pub mod service;

pub use config::ClientConfig;
pub use discover::UpcomingMoviesSource;
pub use requests::RequestListSource;
pub use service::CollectionService;
