//! Listing aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod service;
mod state;
mod value_objects;

pub use aggregate::Listing;
pub use commands::*;
pub use events::{
    ListingCreatedData, ListingDeletedData, ListingEvent, ListingPublishedData,
    ListingRejectedData, ListingSoldData, PhotoAddedData, PhotoRemovedData, PhotosClearedData,
};
pub use service::ListingService;
pub use state::ListingStatus;
pub use value_objects::{Money, Photo, PhotoAlbum, UsageCondition};
