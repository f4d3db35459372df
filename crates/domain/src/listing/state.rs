//! Listing status state machine.

use serde::{Deserialize, Serialize};

/// The status of a listing in its lifecycle.
///
/// Status transitions:
/// ```text
/// Pending ──┬── publish ──► Published ──┬── sell ──► Sold
///           │                          │
///           ├── reject ──► Rejected    └── delete ──► Deleted
///           │
///           └── delete ──► Deleted
/// ```
///
/// Sold, Rejected, and Deleted are terminal: a listing never returns to
/// Pending or Published once it reaches one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ListingStatus {
    /// Newly created, awaiting moderation.
    #[default]
    Pending,

    /// Visible and available for sale.
    Published,

    /// Sold to a buyer (terminal).
    Sold,

    /// Declined by moderation (terminal).
    Rejected,

    /// Removed by its owner or an admin (terminal).
    Deleted,
}

impl ListingStatus {
    /// Returns true if the listing is awaiting moderation.
    pub fn is_pending(&self) -> bool {
        matches!(self, ListingStatus::Pending)
    }

    /// Returns true if the listing is visible and available for sale.
    pub fn is_published(&self) -> bool {
        matches!(self, ListingStatus::Published)
    }

    /// Returns true if the listing can be deleted from this status.
    ///
    /// Deletion is allowed from any non-terminal status.
    pub fn can_be_deleted(&self) -> bool {
        matches!(self, ListingStatus::Pending | ListingStatus::Published)
    }

    /// Returns true if this is a terminal status (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ListingStatus::Sold | ListingStatus::Rejected | ListingStatus::Deleted
        )
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "Pending",
            ListingStatus::Published => "Published",
            ListingStatus::Sold => "Sold",
            ListingStatus::Rejected => "Rejected",
            ListingStatus::Deleted => "Deleted",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
