//! Listing aggregate implementation.

use chrono::{DateTime, Utc};
use event_store::{AggregateId, Version};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::validation::{Contract, MessageCatalog, Rule, ValidationFailure};

use super::{
    ListingEvent, ListingStatus, Money, Photo, PhotoAlbum, UsageCondition,
    events::{ListingCreatedData, ListingSoldData, PhotoAddedData, PhotoRemovedData},
};

/// Listing aggregate root.
///
/// A classified ad in the marketplace, from creation through moderation to
/// sale or removal. All mutations go through behaviour methods that validate
/// preconditions and emit events; fields change only in [`Aggregate::apply`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    id: Option<AggregateId>,

    /// Current version for optimistic concurrency.
    #[serde(default)]
    version: Version,

    /// Listing title, 1-100 characters.
    title: String,

    /// Listing description.
    description: String,

    /// Asking price, strictly positive.
    price: Money,

    /// When the listing was sold, if it was.
    sale_date: Option<DateTime<Utc>>,

    /// Current status in the listing lifecycle.
    status: ListingStatus,

    /// Usage condition of the advertised item, fixed at creation.
    usage_condition: Option<UsageCondition>,

    /// Photos attached to the listing.
    photos: PhotoAlbum,
}

impl Aggregate for Listing {
    type Event = ListingEvent;
    type Error = ValidationFailure;

    fn aggregate_type() -> &'static str {
        "Listing"
    }

    fn id(&self) -> Option<AggregateId> {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            ListingEvent::ListingCreated(data) => self.apply_created(data),
            ListingEvent::ListingPublished(_) => {
                self.status = ListingStatus::Published;
            }
            ListingEvent::ListingRejected(_) => {
                self.status = ListingStatus::Rejected;
            }
            ListingEvent::ListingSold(data) => self.apply_sold(data),
            ListingEvent::ListingDeleted(_) => {
                self.status = ListingStatus::Deleted;
            }
            ListingEvent::PhotoAdded(data) => self.apply_photo_added(data),
            ListingEvent::PhotoRemoved(data) => self.apply_photo_removed(data),
            ListingEvent::PhotosCleared(_) => {
                self.photos.clear();
            }
        }
    }
}

// Query methods
impl Listing {
    /// Returns the listing title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the listing description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the asking price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns when the listing was sold, if it was.
    pub fn sale_date(&self) -> Option<DateTime<Utc>> {
        self.sale_date
    }

    /// Returns the current status.
    pub fn status(&self) -> ListingStatus {
        self.status
    }

    /// Returns the usage condition of the advertised item.
    pub fn usage_condition(&self) -> Option<UsageCondition> {
        self.usage_condition
    }

    /// Returns the photo album.
    pub fn photos(&self) -> &PhotoAlbum {
        &self.photos
    }

    /// Returns true if the listing is in a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

// Command methods (return events)
impl Listing {
    /// Creates a new listing in `Pending` status.
    ///
    /// All broken rules are reported together; nothing is created on failure.
    pub fn create(
        &self,
        listing_id: AggregateId,
        title: &str,
        description: &str,
        price: Money,
        usage_condition: Option<UsageCondition>,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        Contract::new(messages)
            .is_true("listing", self.id.is_none(), Rule::AlreadyCreated)
            .max_len("title", title, 100)
            .not_blank("title", title)
            .not_blank("description", description)
            .greater_than_zero("price", price.cents())
            .require("usage_condition", usage_condition.is_some())
            .check()?;

        match usage_condition {
            Some(condition) => Ok(vec![ListingEvent::listing_created(
                listing_id,
                title,
                description,
                price,
                condition,
            )]),
            None => unreachable!("usage_condition presence checked by the contract"),
        }
    }

    /// Publishes a pending listing, making it available for sale.
    pub fn publish(
        &self,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        Contract::new(messages)
            .is_true(
                "status",
                self.status.is_pending(),
                Rule::StatusMustBe {
                    expected: ListingStatus::Pending.as_str(),
                },
            )
            .check()?;

        Ok(vec![ListingEvent::listing_published()])
    }

    /// Rejects a pending listing (moderation declined it).
    pub fn reject(
        &self,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        Contract::new(messages)
            .is_true(
                "status",
                self.status.is_pending(),
                Rule::StatusMustBe {
                    expected: ListingStatus::Pending.as_str(),
                },
            )
            .check()?;

        Ok(vec![ListingEvent::listing_rejected()])
    }

    /// Sells a published listing, recording the sale date.
    pub fn sell(
        &self,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        Contract::new(messages)
            .is_true("status", self.status.is_published(), Rule::NotForSale)
            .check()?;

        Ok(vec![ListingEvent::listing_sold()])
    }

    /// Deletes the listing. Allowed from any non-terminal status.
    pub fn delete(
        &self,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        Contract::new(messages)
            .is_true(
                "status",
                self.status.can_be_deleted(),
                Rule::NotDeletable {
                    current: self.status.as_str(),
                },
            )
            .check()?;

        Ok(vec![ListingEvent::listing_deleted()])
    }

    /// Attaches a photo to the listing.
    ///
    /// Not gated by status: any existing listing may receive a photo
    /// attachment.
    pub fn add_photo(
        &self,
        photo: Photo,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        Ok(vec![ListingEvent::photo_added(photo)])
    }

    /// Removes a photo from the album.
    ///
    /// Idempotent: removing a photo that is not in the album is a no-op and
    /// emits nothing.
    pub fn remove_photo(
        &self,
        photo: Photo,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        if self.photos.contains(&photo) {
            Ok(vec![ListingEvent::photo_removed(photo)])
        } else {
            Ok(vec![])
        }
    }

    /// Removes every photo from the album. No-op when already empty.
    pub fn clear_photos(
        &self,
        messages: &dyn MessageCatalog,
    ) -> Result<Vec<ListingEvent>, ValidationFailure> {
        self.require_exists(messages)?;

        if self.photos.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![ListingEvent::photos_cleared()])
        }
    }

    /// Every behaviour except `create` requires the listing to exist: the only
    /// transition out of the uncreated state is creation itself.
    fn require_exists(&self, messages: &dyn MessageCatalog) -> Result<(), ValidationFailure> {
        Contract::new(messages)
            .is_true("listing", self.id.is_some(), Rule::NotFound)
            .check()
    }
}

// Apply event helpers
impl Listing {
    fn apply_created(&mut self, data: ListingCreatedData) {
        self.id = Some(data.listing_id);
        self.title = data.title;
        self.description = data.description;
        self.price = data.price;
        self.usage_condition = Some(data.usage_condition);
        self.status = ListingStatus::Pending;
    }

    fn apply_sold(&mut self, data: ListingSoldData) {
        self.status = ListingStatus::Sold;
        self.sale_date = Some(data.sold_at);
    }

    fn apply_photo_added(&mut self, data: PhotoAddedData) {
        self.photos.add(data.photo);
    }

    fn apply_photo_removed(&mut self, data: PhotoRemovedData) {
        self.photos.remove(&data.photo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{Aggregate, DomainEvent};
    use crate::validation::EnglishCatalog;

    const MESSAGES: EnglishCatalog = EnglishCatalog;

    fn create_listing() -> (Listing, AggregateId) {
        let mut listing = Listing::default();
        let listing_id = AggregateId::new();
        let events = listing
            .create(
                listing_id,
                "Bike",
                "Road bike, 2020",
                Money::from_cents(50000),
                Some(UsageCondition::Used),
                &MESSAGES,
            )
            .unwrap();
        listing.apply_events(events);
        (listing, listing_id)
    }

    fn published_listing() -> (Listing, AggregateId) {
        let (mut listing, id) = create_listing();
        listing.apply_events(listing.publish(&MESSAGES).unwrap());
        (listing, id)
    }

    #[test]
    fn create_listing_is_pending() {
        let (listing, listing_id) = create_listing();
        assert_eq!(listing.id(), Some(listing_id));
        assert_eq!(listing.status(), ListingStatus::Pending);
        assert_eq!(listing.title(), "Bike");
        assert_eq!(listing.description(), "Road bike, 2020");
        assert_eq!(listing.price(), Money::from_cents(50000));
        assert_eq!(listing.usage_condition(), Some(UsageCondition::Used));
        assert!(listing.sale_date().is_none());
        assert!(listing.photos().is_empty());
    }

    #[test]
    fn create_raises_listing_created_event() {
        let listing = Listing::default();
        let listing_id = AggregateId::new();
        let events = listing
            .create(
                listing_id,
                "Bike",
                "Road bike, 2020",
                Money::from_cents(50000),
                Some(UsageCondition::Used),
                &MESSAGES,
            )
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "ListingCreated");
        if let ListingEvent::ListingCreated(data) = &events[0] {
            assert_eq!(data.listing_id, listing_id);
            assert_eq!(data.title, "Bike");
            assert_eq!(data.price, Money::from_cents(50000));
        } else {
            panic!("Expected ListingCreated event");
        }
    }

    #[test]
    fn create_with_blank_title_fails() {
        let listing = Listing::default();
        let failure = listing
            .create(
                AggregateId::new(),
                "",
                "x",
                Money::from_cents(1000),
                Some(UsageCondition::Used),
                &MESSAGES,
            )
            .unwrap_err();

        assert!(failure.has_field("title"));
        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.field == "title" && v.rule == Rule::Required)
        );
    }

    #[test]
    fn create_reports_all_broken_rules_at_once() {
        let listing = Listing::default();
        let failure = listing
            .create(
                AggregateId::new(),
                "   ",
                "",
                Money::zero(),
                None,
                &MESSAGES,
            )
            .unwrap_err();

        assert_eq!(failure.len(), 4);
        assert!(failure.has_field("title"));
        assert!(failure.has_field("description"));
        assert!(failure.has_field("price"));
        assert!(failure.has_field("usage_condition"));
    }

    #[test]
    fn create_with_negative_price_fails() {
        let listing = Listing::default();
        let failure = listing
            .create(
                AggregateId::new(),
                "Bike",
                "desc",
                Money::from_cents(-100),
                Some(UsageCondition::New),
                &MESSAGES,
            )
            .unwrap_err();

        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.field == "price" && v.rule == Rule::GreaterThanZero)
        );
    }

    #[test]
    fn create_title_length_limit() {
        let listing = Listing::default();

        let exactly_100 = "a".repeat(100);
        assert!(
            listing
                .create(
                    AggregateId::new(),
                    &exactly_100,
                    "desc",
                    Money::from_cents(1000),
                    Some(UsageCondition::New),
                    &MESSAGES,
                )
                .is_ok()
        );

        let over_100 = "a".repeat(101);
        let failure = listing
            .create(
                AggregateId::new(),
                &over_100,
                "desc",
                Money::from_cents(1000),
                Some(UsageCondition::New),
                &MESSAGES,
            )
            .unwrap_err();
        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.field == "title" && v.rule == Rule::MaxLength { max: 100 })
        );
    }

    #[test]
    fn create_twice_fails() {
        let (listing, _) = create_listing();
        let failure = listing
            .create(
                AggregateId::new(),
                "Another",
                "desc",
                Money::from_cents(1000),
                Some(UsageCondition::New),
                &MESSAGES,
            )
            .unwrap_err();

        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.rule == Rule::AlreadyCreated)
        );
    }

    #[test]
    fn publish_pending_listing() {
        let (mut listing, _) = create_listing();
        let events = listing.publish(&MESSAGES).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "ListingPublished");

        listing.apply_events(events);
        assert_eq!(listing.status(), ListingStatus::Published);
    }

    #[test]
    fn publish_and_sell_records_sale_date() {
        let (mut listing, _) = create_listing();

        let published = listing.publish(&MESSAGES).unwrap();
        listing.apply_events(published);

        let sold = listing.sell(&MESSAGES).unwrap();
        assert_eq!(sold[0].event_type(), "ListingSold");
        listing.apply_events(sold);

        assert_eq!(listing.status(), ListingStatus::Sold);
        assert!(listing.sale_date().is_some());
        assert!(listing.is_terminal());
    }

    #[test]
    fn sell_pending_listing_fails() {
        let (listing, _) = create_listing();
        let failure = listing.sell(&MESSAGES).unwrap_err();

        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.field == "status" && v.rule == Rule::NotForSale)
        );
        // No state change on failure
        assert_eq!(listing.status(), ListingStatus::Pending);
        assert!(listing.sale_date().is_none());
    }

    #[test]
    fn publish_after_reject_fails() {
        let (mut listing, _) = create_listing();
        listing.apply_events(listing.reject(&MESSAGES).unwrap());
        assert_eq!(listing.status(), ListingStatus::Rejected);

        let failure = listing.publish(&MESSAGES).unwrap_err();
        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.rule == Rule::StatusMustBe { expected: "Pending" })
        );
        assert_eq!(listing.status(), ListingStatus::Rejected);
    }

    #[test]
    fn publish_twice_fails() {
        let (listing, _) = published_listing();
        assert!(listing.publish(&MESSAGES).is_err());
    }

    #[test]
    fn reject_published_listing_fails() {
        let (listing, _) = published_listing();
        assert!(listing.reject(&MESSAGES).is_err());
    }

    #[test]
    fn delete_pending_listing() {
        let (mut listing, _) = create_listing();
        let events = listing.delete(&MESSAGES).unwrap();
        assert_eq!(events[0].event_type(), "ListingDeleted");

        listing.apply_events(events);
        assert_eq!(listing.status(), ListingStatus::Deleted);
    }

    #[test]
    fn delete_published_listing() {
        let (mut listing, _) = published_listing();
        listing.apply_events(listing.delete(&MESSAGES).unwrap());
        assert_eq!(listing.status(), ListingStatus::Deleted);
    }

    #[test]
    fn delete_from_terminal_status_fails() {
        let (mut listing, _) = published_listing();
        listing.apply_events(listing.sell(&MESSAGES).unwrap());

        let failure = listing.delete(&MESSAGES).unwrap_err();
        assert!(
            failure
                .violations()
                .iter()
                .any(|v| v.rule == Rule::NotDeletable { current: "Sold" })
        );
        assert_eq!(listing.status(), ListingStatus::Sold);
    }

    #[test]
    fn delete_twice_fails() {
        let (mut listing, _) = create_listing();
        listing.apply_events(listing.delete(&MESSAGES).unwrap());
        assert!(listing.delete(&MESSAGES).is_err());
    }

    #[test]
    fn sell_after_sold_fails() {
        let (mut listing, _) = published_listing();
        listing.apply_events(listing.sell(&MESSAGES).unwrap());
        assert!(listing.sell(&MESSAGES).is_err());
    }

    #[test]
    fn add_photo_is_not_gated_by_status() {
        let (mut listing, _) = published_listing();
        listing.apply_events(listing.sell(&MESSAGES).unwrap());

        let events = listing.add_photo(Photo::new("a.jpg"), &MESSAGES).unwrap();
        assert_eq!(events[0].event_type(), "PhotoAdded");

        listing.apply_events(events);
        assert_eq!(listing.photos().len(), 1);
    }

    #[test]
    fn remove_photo_present() {
        let (mut listing, _) = create_listing();
        listing.apply_events(listing.add_photo(Photo::new("a.jpg"), &MESSAGES).unwrap());
        listing.apply_events(listing.add_photo(Photo::new("b.jpg"), &MESSAGES).unwrap());

        let events = listing.remove_photo(Photo::new("a.jpg"), &MESSAGES).unwrap();
        assert_eq!(events.len(), 1);
        listing.apply_events(events);

        assert_eq!(listing.photos().len(), 1);
        assert!(listing.photos().contains(&Photo::new("b.jpg")));
    }

    #[test]
    fn remove_absent_photo_is_noop() {
        let (mut listing, _) = create_listing();
        listing.apply_events(listing.add_photo(Photo::new("a.jpg"), &MESSAGES).unwrap());

        let events = listing.remove_photo(Photo::new("missing.jpg"), &MESSAGES).unwrap();
        assert!(events.is_empty());
        assert_eq!(listing.photos().len(), 1);
    }

    #[test]
    fn clear_photos() {
        let (mut listing, _) = create_listing();
        listing.apply_events(listing.add_photo(Photo::new("a.jpg"), &MESSAGES).unwrap());
        listing.apply_events(listing.add_photo(Photo::new("b.jpg"), &MESSAGES).unwrap());

        listing.apply_events(listing.clear_photos(&MESSAGES).unwrap());
        assert!(listing.photos().is_empty());
    }

    #[test]
    fn clear_empty_album_is_noop() {
        let (listing, _) = create_listing();
        let events = listing.clear_photos(&MESSAGES).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn behaviours_require_an_existing_listing() {
        let listing = Listing::default();

        let failures = [
            listing.publish(&MESSAGES).unwrap_err(),
            listing.reject(&MESSAGES).unwrap_err(),
            listing.sell(&MESSAGES).unwrap_err(),
            listing.delete(&MESSAGES).unwrap_err(),
            listing.add_photo(Photo::new("a.jpg"), &MESSAGES).unwrap_err(),
            listing
                .remove_photo(Photo::new("a.jpg"), &MESSAGES)
                .unwrap_err(),
            listing.clear_photos(&MESSAGES).unwrap_err(),
        ];

        for failure in failures {
            assert!(
                failure
                    .violations()
                    .iter()
                    .any(|v| v.field == "listing" && v.rule == Rule::NotFound)
            );
        }
    }

    #[test]
    fn failed_create_changes_nothing() {
        let listing = Listing::default();
        let _ = listing.create(
            AggregateId::new(),
            "",
            "",
            Money::zero(),
            None,
            &MESSAGES,
        );

        assert!(listing.id().is_none());
        assert_eq!(listing.status(), ListingStatus::Pending);
        assert!(listing.title().is_empty());
    }

    #[test]
    fn replay_rebuilds_state_from_history() {
        let listing_id = AggregateId::new();

        // Fold a full history onto a fresh aggregate
        let mut replayed = Listing::default();
        replayed.apply(ListingEvent::listing_created(
            listing_id,
            "Bike",
            "Road bike, 2020",
            Money::from_cents(50000),
            UsageCondition::Used,
        ));
        replayed.apply(ListingEvent::photo_added(Photo::new("a.jpg")));
        replayed.apply(ListingEvent::listing_published());
        replayed.apply(ListingEvent::listing_sold());

        assert_eq!(replayed.id(), Some(listing_id));
        assert_eq!(replayed.status(), ListingStatus::Sold);
        assert_eq!(replayed.photos().len(), 1);
        assert!(replayed.sale_date().is_some());
    }

    #[test]
    fn serialization_roundtrip() {
        let (mut listing, listing_id) = create_listing();
        listing.apply_events(listing.add_photo(Photo::new("a.jpg"), &MESSAGES).unwrap());

        let json = serde_json::to_string(&listing).unwrap();
        let deserialized: Listing = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id(), Some(listing_id));
        assert_eq!(deserialized.title(), "Bike");
        assert_eq!(deserialized.photos().len(), 1);
    }
}
