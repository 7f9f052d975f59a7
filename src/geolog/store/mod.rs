//! # Storage Layer
//!
//! The collection lives in a single storage slot: one named location holding
//! the whole serialized collection as a UTF-8 blob. There is no per-sample
//! file and no secondary index — every mutation rewrites the slot whole.
//! The [`DataStore`] trait abstracts over where that slot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, slot is `samples.json` inside a
//!   data directory.
//! - [`memory::InMemoryStore`]: slot is a string held in memory. Used by
//!   tests, including ones that seed the slot with garbage to exercise
//!   corruption handling.
//!
//! ## Slot Format
//!
//! A JSON array of sample objects in insertion order, camelCase member
//! names:
//!
//! ```text
//! [
//!   {
//!     "id": "6dba7a3f-…",
//!     "sampleNumber": "S-001",
//!     "collector": "",
//!     "locality": "",
//!     "country": "",
//!     "mineralogy": "",
//!     "paleontology": "",
//!     "latitude": "-34.6",
//!     "longitude": "-58.4"
//!   }
//! ]
//! ```
//!
//! A missing slot reads as an empty collection. An unparsable slot reads as
//! [`CorruptData`](crate::error::GeologError::CorruptData) — callers decide
//! whether to recover (the command layer does, with a warning).

use crate::error::Result;
use crate::model::Sample;

pub mod fs;
pub mod memory;

/// Abstract interface for the collection's storage slot.
pub trait DataStore {
    /// Read the entire collection. Missing slot means empty collection.
    fn load(&self) -> Result<Vec<Sample>>;

    /// Serialize the collection and overwrite the slot whole.
    fn save(&mut self, samples: &[Sample]) -> Result<()>;

    /// Remove the slot entirely.
    fn clear(&mut self) -> Result<()>;
}
