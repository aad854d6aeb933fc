//! Saved investigations.
//!
//! An investigation is a named snapshot of an input, the query built from it
//! and the settings used. Records live in process memory only.

pub mod store;
pub mod types;

pub use store::{InMemoryInvestigationStore, InvestigationStore};
pub use types::{
    InvestigationError, InvestigationId, InvestigationRecord, InvestigationResult,
    InvestigationStats, InvestigationStatus,
};
