//! Domain layer for the marketplace listing system.
//!
//! This crate provides the core domain abstractions including:
//! - Aggregate trait for event-sourced entities
//! - DomainEvent trait for domain events
//! - Command trait and CommandHandler for command processing
//! - Validation contract with full-violation reporting
//! - Listing aggregate implementation with status state machine

pub mod aggregate;
pub mod command;
pub mod error;
pub mod listing;
pub mod validation;

pub use aggregate::{Aggregate, DomainEvent};
pub use command::{Command, CommandHandler, CommandResult};
pub use error::DomainError;
pub use listing::{
    AddPhoto, ClearPhotos, CreateListing, DeleteListing, Listing, ListingEvent, ListingService,
    ListingStatus, Money, Photo, PhotoAlbum, PublishListing, RejectListing, RemovePhoto,
    SellListing, UsageCondition,
};
pub use validation::{
    Contract, EnglishCatalog, MessageCatalog, Rule, ValidationFailure, Violation,
};
