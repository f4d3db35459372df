//! Event persistence layer for the marketplace domain.
//!
//! Aggregates never touch storage directly: they emit events, and this crate
//! owns the envelope format, versioning, and the [`EventStore`] contract used
//! to persist and replay them. [`InMemoryEventStore`] is the reference
//! implementation used by tests and local tooling.

pub mod error;
pub mod event;
pub mod memory;
pub mod store;

pub use error::{EventStoreError, Result};
pub use event::{AggregateId, EventEnvelope, EventEnvelopeBuilder, EventId, Version};
pub use memory::InMemoryEventStore;
pub use store::{AppendOptions, EventStore, EventStoreExt, EventStream};
