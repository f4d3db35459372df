//! Listing commands.

use event_store::AggregateId;

use crate::command::Command;

use super::{Listing, Money, Photo, UsageCondition};

/// Command to create a new listing.
#[derive(Debug, Clone)]
pub struct CreateListing {
    /// The listing ID to create.
    pub listing_id: AggregateId,

    /// Listing title.
    pub title: String,

    /// Listing description.
    pub description: String,

    /// Asking price.
    pub price: Money,

    /// Usage condition of the advertised item. Validated as required.
    pub usage_condition: Option<UsageCondition>,
}

impl CreateListing {
    /// Creates a new CreateListing command.
    pub fn new(
        listing_id: AggregateId,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        usage_condition: Option<UsageCondition>,
    ) -> Self {
        Self {
            listing_id,
            title: title.into(),
            description: description.into(),
            price,
            usage_condition,
        }
    }

    /// Creates a new CreateListing command with a generated listing ID.
    pub fn with_new_id(
        title: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        usage_condition: UsageCondition,
    ) -> Self {
        Self::new(
            AggregateId::new(),
            title,
            description,
            price,
            Some(usage_condition),
        )
    }
}

impl Command for CreateListing {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to publish a pending listing.
#[derive(Debug, Clone)]
pub struct PublishListing {
    /// The listing to publish.
    pub listing_id: AggregateId,
}

impl PublishListing {
    /// Creates a new PublishListing command.
    pub fn new(listing_id: AggregateId) -> Self {
        Self { listing_id }
    }
}

impl Command for PublishListing {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to reject a pending listing.
#[derive(Debug, Clone)]
pub struct RejectListing {
    /// The listing to reject.
    pub listing_id: AggregateId,
}

impl RejectListing {
    /// Creates a new RejectListing command.
    pub fn new(listing_id: AggregateId) -> Self {
        Self { listing_id }
    }
}

impl Command for RejectListing {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to sell a published listing.
#[derive(Debug, Clone)]
pub struct SellListing {
    /// The listing to sell.
    pub listing_id: AggregateId,
}

impl SellListing {
    /// Creates a new SellListing command.
    pub fn new(listing_id: AggregateId) -> Self {
        Self { listing_id }
    }
}

impl Command for SellListing {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to delete a listing.
#[derive(Debug, Clone)]
pub struct DeleteListing {
    /// The listing to delete.
    pub listing_id: AggregateId,
}

impl DeleteListing {
    /// Creates a new DeleteListing command.
    pub fn new(listing_id: AggregateId) -> Self {
        Self { listing_id }
    }
}

impl Command for DeleteListing {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to attach a photo to a listing.
#[derive(Debug, Clone)]
pub struct AddPhoto {
    /// The listing to attach the photo to.
    pub listing_id: AggregateId,

    /// The photo to attach.
    pub photo: Photo,
}

impl AddPhoto {
    /// Creates a new AddPhoto command.
    pub fn new(listing_id: AggregateId, photo: impl Into<Photo>) -> Self {
        Self {
            listing_id,
            photo: photo.into(),
        }
    }
}

impl Command for AddPhoto {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to remove a photo from a listing.
#[derive(Debug, Clone)]
pub struct RemovePhoto {
    /// The listing to remove the photo from.
    pub listing_id: AggregateId,

    /// The photo to remove.
    pub photo: Photo,
}

impl RemovePhoto {
    /// Creates a new RemovePhoto command.
    pub fn new(listing_id: AggregateId, photo: impl Into<Photo>) -> Self {
        Self {
            listing_id,
            photo: photo.into(),
        }
    }
}

impl Command for RemovePhoto {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}

/// Command to remove every photo from a listing.
#[derive(Debug, Clone)]
pub struct ClearPhotos {
    /// The listing to clear.
    pub listing_id: AggregateId,
}

impl ClearPhotos {
    /// Creates a new ClearPhotos command.
    pub fn new(listing_id: AggregateId) -> Self {
        Self { listing_id }
    }
}

impl Command for ClearPhotos {
    type Aggregate = Listing;

    fn aggregate_id(&self) -> AggregateId {
        self.listing_id
    }
}
