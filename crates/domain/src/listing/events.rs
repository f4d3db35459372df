//! Listing domain events.

use chrono::{DateTime, Utc};
use event_store::AggregateId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{Money, Photo, UsageCondition};

/// Events that can occur on a listing aggregate.
///
/// Every status transition and photo mutation is recorded as one of these
/// variants; the aggregate's current state is the fold of its event history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ListingEvent {
    /// Listing was created and entered moderation.
    ListingCreated(ListingCreatedData),

    /// Listing passed moderation and became visible.
    ListingPublished(ListingPublishedData),

    /// Listing was declined by moderation.
    ListingRejected(ListingRejectedData),

    /// Listing was sold.
    ListingSold(ListingSoldData),

    /// Listing was removed by its owner or an admin.
    ListingDeleted(ListingDeletedData),

    /// A photo was attached to the listing.
    PhotoAdded(PhotoAddedData),

    /// A photo was removed from the listing.
    PhotoRemoved(PhotoRemovedData),

    /// All photos were removed from the listing.
    PhotosCleared(PhotosClearedData),
}

impl DomainEvent for ListingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ListingEvent::ListingCreated(_) => "ListingCreated",
            ListingEvent::ListingPublished(_) => "ListingPublished",
            ListingEvent::ListingRejected(_) => "ListingRejected",
            ListingEvent::ListingSold(_) => "ListingSold",
            ListingEvent::ListingDeleted(_) => "ListingDeleted",
            ListingEvent::PhotoAdded(_) => "PhotoAdded",
            ListingEvent::PhotoRemoved(_) => "PhotoRemoved",
            ListingEvent::PhotosCleared(_) => "PhotosCleared",
        }
    }
}

/// Data for ListingCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCreatedData {
    /// The unique listing ID.
    pub listing_id: AggregateId,

    /// Listing title.
    pub title: String,

    /// Listing description.
    pub description: String,

    /// Asking price.
    pub price: Money,

    /// Usage condition of the advertised item.
    pub usage_condition: UsageCondition,

    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

/// Data for ListingPublished event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPublishedData {
    /// When the listing was published.
    pub published_at: DateTime<Utc>,
}

/// Data for ListingRejected event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRejectedData {
    /// When the listing was rejected.
    pub rejected_at: DateTime<Utc>,
}

/// Data for ListingSold event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSoldData {
    /// When the sale happened. Becomes the listing's sale date.
    pub sold_at: DateTime<Utc>,
}

/// Data for ListingDeleted event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDeletedData {
    /// When the listing was deleted.
    pub deleted_at: DateTime<Utc>,
}

/// Data for PhotoAdded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoAddedData {
    /// The photo that was attached.
    pub photo: Photo,
}

/// Data for PhotoRemoved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoRemovedData {
    /// The photo that was removed.
    pub photo: Photo,
}

/// Data for PhotosCleared event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosClearedData {
    /// When the album was cleared.
    pub cleared_at: DateTime<Utc>,
}

// Convenience constructors for events
impl ListingEvent {
    /// Creates a ListingCreated event.
    pub fn listing_created(
        listing_id: AggregateId,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        usage_condition: UsageCondition,
    ) -> Self {
        ListingEvent::ListingCreated(ListingCreatedData {
            listing_id,
            title: title.into(),
            description: description.into(),
            price,
            usage_condition,
            created_at: Utc::now(),
        })
    }

    /// Creates a ListingPublished event.
    pub fn listing_published() -> Self {
        ListingEvent::ListingPublished(ListingPublishedData {
            published_at: Utc::now(),
        })
    }

    /// Creates a ListingRejected event.
    pub fn listing_rejected() -> Self {
        ListingEvent::ListingRejected(ListingRejectedData {
            rejected_at: Utc::now(),
        })
    }

    /// Creates a ListingSold event stamped with the current time.
    pub fn listing_sold() -> Self {
        ListingEvent::ListingSold(ListingSoldData { sold_at: Utc::now() })
    }

    /// Creates a ListingDeleted event.
    pub fn listing_deleted() -> Self {
        ListingEvent::ListingDeleted(ListingDeletedData {
            deleted_at: Utc::now(),
        })
    }

    /// Creates a PhotoAdded event.
    pub fn photo_added(photo: Photo) -> Self {
        ListingEvent::PhotoAdded(PhotoAddedData { photo })
    }

    /// Creates a PhotoRemoved event.
    pub fn photo_removed(photo: Photo) -> Self {
        ListingEvent::PhotoRemoved(PhotoRemovedData { photo })
    }

    /// Creates a PhotosCleared event.
    pub fn photos_cleared() -> Self {
        ListingEvent::PhotosCleared(PhotosClearedData {
            cleared_at: Utc::now(),
        })
    }
}
