//! Value objects for the listing domain.

use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 50000 = $500.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole dollar value.
    ///
    /// Saturates at the i64 bounds instead of overflowing.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

/// Usage condition of the advertised item.
///
/// Required at creation and immutable for the lifetime of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageCondition {
    /// The item has never been used.
    New,

    /// The item has been used.
    Used,
}

impl UsageCondition {
    /// Returns the condition name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageCondition::New => "New",
            UsageCondition::Used => "Used",
        }
    }
}

impl std::fmt::Display for UsageCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A photo attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    /// Creates a photo from its storage URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the photo URL.
    pub fn url(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Photo {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl From<String> for Photo {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// Ordered collection of photos attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoAlbum {
    photos: Vec<Photo>,
}

impl PhotoAlbum {
    /// Creates a new empty album.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a photo to the album.
    pub fn add(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// Removes the first occurrence of the photo, if present.
    pub fn remove(&mut self, photo: &Photo) {
        if let Some(pos) = self.photos.iter().position(|p| p == photo) {
            self.photos.remove(pos);
        }
    }

    /// Removes every photo from the album.
    pub fn clear(&mut self) {
        self.photos.clear();
    }

    /// Returns true if the album contains the photo.
    pub fn contains(&self, photo: &Photo) -> bool {
        self.photos.contains(photo)
    }

    /// Returns the number of photos in the album.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Returns true if the album has no photos.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Iterates over the photos in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn money_from_dollars() {
        let money = Money::from_dollars(500);
        assert_eq!(money.cents(), 50000);
        assert_eq!(money.dollars(), 500);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn money_from_dollars_saturates_at_bounds() {
        assert_eq!(Money::from_dollars(i64::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_dollars(i64::MIN).cents(), i64::MIN);
    }

    #[test]
    fn money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(100).to_string(), "$1.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn money_sign_predicates() {
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(0).is_zero());
        assert!(!Money::from_cents(-100).is_positive());
    }

    #[test]
    fn usage_condition_display() {
        assert_eq!(UsageCondition::New.to_string(), "New");
        assert_eq!(UsageCondition::Used.to_string(), "Used");
    }

    #[test]
    fn photo_url() {
        let photo = Photo::new("https://cdn.example.com/p/1.jpg");
        assert_eq!(photo.url(), "https://cdn.example.com/p/1.jpg");
    }

    #[test]
    fn album_add_and_contains() {
        let mut album = PhotoAlbum::new();
        assert!(album.is_empty());

        album.add(Photo::new("a.jpg"));
        album.add(Photo::new("b.jpg"));

        assert_eq!(album.len(), 2);
        assert!(album.contains(&Photo::new("a.jpg")));
        assert!(!album.contains(&Photo::new("c.jpg")));
    }

    #[test]
    fn album_remove_is_idempotent() {
        let mut album = PhotoAlbum::new();
        album.add(Photo::new("a.jpg"));

        album.remove(&Photo::new("missing.jpg"));
        assert_eq!(album.len(), 1);

        album.remove(&Photo::new("a.jpg"));
        assert!(album.is_empty());

        album.remove(&Photo::new("a.jpg"));
        assert!(album.is_empty());
    }

    #[test]
    fn album_remove_only_first_occurrence() {
        let mut album = PhotoAlbum::new();
        album.add(Photo::new("a.jpg"));
        album.add(Photo::new("a.jpg"));

        album.remove(&Photo::new("a.jpg"));
        assert_eq!(album.len(), 1);
    }

    #[test]
    fn album_clear() {
        let mut album = PhotoAlbum::new();
        album.add(Photo::new("a.jpg"));
        album.add(Photo::new("b.jpg"));

        album.clear();
        assert!(album.is_empty());
    }

    #[test]
    fn album_preserves_order() {
        let mut album = PhotoAlbum::new();
        album.add(Photo::new("a.jpg"));
        album.add(Photo::new("b.jpg"));
        album.add(Photo::new("c.jpg"));

        let urls: Vec<_> = album.iter().map(Photo::url).collect();
        assert_eq!(urls, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn album_serialization_roundtrip() {
        let mut album = PhotoAlbum::new();
        album.add(Photo::new("a.jpg"));

        let json = serde_json::to_string(&album).unwrap();
        let deserialized: PhotoAlbum = serde_json::from_str(&json).unwrap();
        assert_eq!(album, deserialized);
    }
}
