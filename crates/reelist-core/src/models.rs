//! Domain records for the two collection families (discover media, requests)
//! and the normalized page-result wrapper every [`crate::CollectionSource`]
//! produces.
//!
//! The media variants mirror the upstream API's discriminated union: each
//! result carries a `mediaType` tag (`movie` / `tv` / `person`), so
//! presentation dispatch is an exhaustive match rather than a sequence of
//! type tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// AVAILABILITY / REQUEST STATUS
// =============================================================================

/// Availability of a media item in the library.
///
/// Numeric on the wire (upstream convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MediaStatus {
    Unknown = 1,
    Pending = 2,
    Processing = 3,
    PartiallyAvailable = 4,
    Available = 5,
}

impl TryFrom<u8> for MediaStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MediaStatus::Unknown),
            2 => Ok(MediaStatus::Pending),
            3 => Ok(MediaStatus::Processing),
            4 => Ok(MediaStatus::PartiallyAvailable),
            5 => Ok(MediaStatus::Available),
            other => Err(format!("unknown media status: {}", other)),
        }
    }
}

impl From<MediaStatus> for u8 {
    fn from(status: MediaStatus) -> u8 {
        status as u8
    }
}

/// Lifecycle status of a media request. Numeric on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RequestStatus {
    Pending = 1,
    Approved = 2,
    Declined = 3,
}

impl TryFrom<u8> for RequestStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RequestStatus::Pending),
            2 => Ok(RequestStatus::Approved),
            3 => Ok(RequestStatus::Declined),
            other => Err(format!("unknown request status: {}", other)),
        }
    }
}

impl From<RequestStatus> for u8 {
    fn from(status: RequestStatus) -> u8 {
        status as u8
    }
}

// =============================================================================
// DISCOVER RESULTS
// =============================================================================

/// Library info attached to a discover result when the item is known locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    pub status: MediaStatus,
}

/// A single discover result: movie, series, or person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum MediaResult {
    #[serde(rename_all = "camelCase")]
    Movie {
        id: u64,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster_path: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        release_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_info: Option<MediaInfo>,
    },
    #[serde(rename_all = "camelCase")]
    Tv {
        id: u64,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster_path: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first_air_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_info: Option<MediaInfo>,
    },
    #[serde(rename_all = "camelCase")]
    Person {
        id: u64,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        profile_path: Option<String>,
    },
}

impl MediaResult {
    /// Library status, when the item is known locally.
    pub fn status(&self) -> Option<MediaStatus> {
        match self {
            MediaResult::Movie { media_info, .. } | MediaResult::Tv { media_info, .. } => {
                media_info.as_ref().map(|info| info.status)
            }
            MediaResult::Person { .. } => None,
        }
    }

    /// Whether the item is already (fully or partially) available in the
    /// library. Backs the "hide available" post-filter: presentation passes
    /// `|item| !item.is_available()` to
    /// [`crate::CollectionController::view_filtered`].
    pub fn is_available(&self) -> bool {
        matches!(
            self.status(),
            Some(MediaStatus::Available) | Some(MediaStatus::PartiallyAvailable)
        )
    }
}

// =============================================================================
// REQUEST LIST
// =============================================================================

/// Status filter dimension of the request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestFilter {
    All,
    #[default]
    Pending,
    Approved,
}

impl RequestFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestFilter::All => "all",
            RequestFilter::Pending => "pending",
            RequestFilter::Approved => "approved",
        }
    }
}

/// Sort dimension of the request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestSort {
    #[default]
    Added,
    Modified,
}

impl RequestSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestSort::Added => "added",
            RequestSort::Modified => "modified",
        }
    }
}

/// Library media entry a request refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMedia {
    pub id: u64,
    pub tmdb_id: u64,
    pub media_type: String,
    pub status: MediaStatus,
}

/// A media request row as served by the request-list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRequest {
    pub id: u64,
    pub status: RequestStatus,
    pub media: RequestMedia,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

// =============================================================================
// PAGE RESULT
// =============================================================================

/// One resolved page of a collection, normalized to 1-based page addressing.
///
/// This is also the exact wire shape of the discover endpoints; the
/// skip/take-addressed request endpoint is normalized into it by its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub page: u32,
    pub total_results: u64,
    pub total_pages: u32,
    pub results: Vec<T>,
}

// =============================================================================
// ITEM IDENTITY
// =============================================================================

/// Stable identity for collection items, used by the append strategy to
/// drop duplicates that page boundaries occasionally repeat.
pub trait CollectionItem {
    type Key: Eq + std::hash::Hash + Clone + std::fmt::Debug;

    fn key(&self) -> Self::Key;
}

/// Discriminant half of a [`MediaResult`] key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Tv,
    Person,
}

impl CollectionItem for MediaResult {
    type Key = (MediaKind, u64);

    fn key(&self) -> Self::Key {
        match self {
            MediaResult::Movie { id, .. } => (MediaKind::Movie, *id),
            MediaResult::Tv { id, .. } => (MediaKind::Tv, *id),
            MediaResult::Person { id, .. } => (MediaKind::Person, *id),
        }
    }
}

impl CollectionItem for MediaRequest {
    type Key = u64;

    fn key(&self) -> Self::Key {
        self.id
    }
}
