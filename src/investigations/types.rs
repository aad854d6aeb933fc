//! Types for saved investigations.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::query::{BuiltQuery, InvestigationInput, PresetTemplate, RiskLevel, SearchEngine};

/// Identifier of a saved investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestigationId(Uuid);

impl InvestigationId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvestigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvestigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InvestigationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Lifecycle state of an investigation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestigationStatus {
    /// Being worked on.
    #[default]
    Active,
    /// Kept for reference.
    Archived,
}

/// Investigation register error type.
#[derive(Debug, Error)]
pub enum InvestigationError {
    /// Investigations need a non-blank name.
    #[error("investigation name must not be blank")]
    BlankName,
    /// No investigation with this id.
    #[error("investigation not found: {0}")]
    NotFound(InvestigationId),
}

/// Convenience result alias for investigation operations.
pub type InvestigationResult<T> = Result<T, InvestigationError>;

/// Counts over the investigation register.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationStats {
    /// All records.
    pub total_investigations: usize,
    /// Records with `active` status.
    pub active_investigations: usize,
    /// Records with `archived` status.
    pub archived_investigations: usize,
}

/// A saved investigation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationRecord {
    /// Identifier.
    pub id: InvestigationId,
    /// Display name.
    pub name: String,
    /// Subject's full name, copied from the input.
    pub target_name: Option<String>,
    /// Input the query was built from.
    pub input: InvestigationInput,
    /// Built query.
    pub query: String,
    /// Preset applied.
    pub preset: Option<PresetTemplate>,
    /// Target engine.
    pub engine: SearchEngine,
    /// Whether terms were joined with `AND`.
    pub use_and_logic: bool,
    /// Risk of the query at save time.
    pub risk: RiskLevel,
    /// Lifecycle state.
    pub status: InvestigationStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl InvestigationRecord {
    /// Create a record from a composed query.
    ///
    /// # Errors
    /// Returns [`InvestigationError::BlankName`] if `name` is blank.
    pub fn new(
        name: &str,
        input: InvestigationInput,
        built: BuiltQuery,
    ) -> InvestigationResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvestigationError::BlankName);
        }

        let now = Utc::now();
        Ok(Self {
            id: InvestigationId::new(),
            name: name.to_string(),
            target_name: input.full_name().map(ToString::to_string),
            input,
            query: built.query,
            preset: built.preset,
            engine: built.engine,
            use_and_logic: built.use_and_logic,
            risk: built.risk,
            status: InvestigationStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Case-insensitive substring match on the name or the target name.
    /// A blank needle matches every record.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self
                .target_name
                .as_ref()
                .is_some_and(|target| target.to_lowercase().contains(&needle))
    }
}
