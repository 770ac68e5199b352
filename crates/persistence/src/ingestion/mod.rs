//! Startup ingestion of seed documents.
//!
//! [`IngestionGuard`] populates a collection from a [`SeedSource`] only when
//! the store reports that the collection does not exist yet. The check is
//! made against the store on every run, so restarting against a populated
//! index is a no-op.

mod guard;
mod seed;

pub use guard::{IngestionGuard, IngestionOutcome};
pub use seed::SeedSource;
