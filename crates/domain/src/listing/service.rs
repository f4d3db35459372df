//! Listing service providing a simplified API for listing operations.

use std::sync::Arc;

use event_store::{AggregateId, EventStore};

use crate::command::{CommandHandler, CommandResult};
use crate::error::DomainError;
use crate::validation::{EnglishCatalog, MessageCatalog};

use super::{
    AddPhoto, ClearPhotos, CreateListing, DeleteListing, Listing, PublishListing, RejectListing,
    RemovePhoto, SellListing,
};

/// Service for managing listings.
///
/// Wraps the command handler with one method per listing command and carries
/// the injected [`MessageCatalog`] used to render violation text.
pub struct ListingService<S: EventStore> {
    handler: CommandHandler<S, Listing>,
    messages: Arc<dyn MessageCatalog>,
}

impl<S: EventStore> ListingService<S> {
    /// Creates a new listing service with the default English messages.
    pub fn new(store: S) -> Self {
        Self::with_messages(store, Arc::new(EnglishCatalog))
    }

    /// Creates a new listing service with a custom message catalog.
    pub fn with_messages(store: S, messages: Arc<dyn MessageCatalog>) -> Self {
        Self {
            handler: CommandHandler::new(store),
            messages,
        }
    }

    /// Returns a reference to the underlying command handler.
    pub fn handler(&self) -> &CommandHandler<S, Listing> {
        &self.handler
    }

    /// Creates a new listing.
    #[tracing::instrument(skip(self))]
    pub async fn create_listing(
        &self,
        cmd: CreateListing,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);

        self.handler
            .execute(cmd.listing_id, |listing| {
                listing.create(
                    cmd.listing_id,
                    &cmd.title,
                    &cmd.description,
                    cmd.price,
                    cmd.usage_condition,
                    messages.as_ref(),
                )
            })
            .await
    }

    /// Publishes a pending listing.
    #[tracing::instrument(skip(self))]
    pub async fn publish_listing(
        &self,
        cmd: PublishListing,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);

        self.handler
            .execute(cmd.listing_id, |listing| listing.publish(messages.as_ref()))
            .await
    }

    /// Rejects a pending listing.
    #[tracing::instrument(skip(self))]
    pub async fn reject_listing(
        &self,
        cmd: RejectListing,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);

        self.handler
            .execute(cmd.listing_id, |listing| listing.reject(messages.as_ref()))
            .await
    }

    /// Sells a published listing.
    #[tracing::instrument(skip(self))]
    pub async fn sell_listing(
        &self,
        cmd: SellListing,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);

        self.handler
            .execute(cmd.listing_id, |listing| listing.sell(messages.as_ref()))
            .await
    }

    /// Deletes a listing.
    #[tracing::instrument(skip(self))]
    pub async fn delete_listing(
        &self,
        cmd: DeleteListing,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);

        self.handler
            .execute(cmd.listing_id, |listing| listing.delete(messages.as_ref()))
            .await
    }

    /// Attaches a photo to a listing.
    #[tracing::instrument(skip(self))]
    pub async fn add_photo(&self, cmd: AddPhoto) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);
        let photo = cmd.photo.clone();

        self.handler
            .execute(cmd.listing_id, |listing| {
                listing.add_photo(photo, messages.as_ref())
            })
            .await
    }

    /// Removes a photo from a listing.
    #[tracing::instrument(skip(self))]
    pub async fn remove_photo(
        &self,
        cmd: RemovePhoto,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);
        let photo = cmd.photo.clone();

        self.handler
            .execute(cmd.listing_id, |listing| {
                listing.remove_photo(photo, messages.as_ref())
            })
            .await
    }

    /// Removes every photo from a listing.
    #[tracing::instrument(skip(self))]
    pub async fn clear_photos(
        &self,
        cmd: ClearPhotos,
    ) -> Result<CommandResult<Listing>, DomainError> {
        let messages = Arc::clone(&self.messages);

        self.handler
            .execute(cmd.listing_id, |listing| {
                listing.clear_photos(messages.as_ref())
            })
            .await
    }

    /// Loads a listing by ID.
    ///
    /// Returns None if the listing doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_listing(
        &self,
        listing_id: AggregateId,
    ) -> Result<Option<Listing>, DomainError> {
        self.handler.load_existing(listing_id).await
    }
}
