//! In-memory investigation register.

use chrono::Utc;
use dashmap::DashMap;

use super::types::{
    InvestigationError, InvestigationId, InvestigationRecord, InvestigationResult,
    InvestigationStats, InvestigationStatus,
};

/// Trait for investigation storage.
pub trait InvestigationStore: Send + Sync {
    /// Store a new record and return it.
    fn insert(&self, record: InvestigationRecord) -> InvestigationRecord;

    /// Get a record by ID.
    fn get(&self, id: InvestigationId) -> InvestigationResult<InvestigationRecord>;

    /// List all records, newest first.
    fn list(&self) -> Vec<InvestigationRecord>;

    /// Records whose name or target name contains `needle`, ignoring case.
    /// Same order as [`list`](Self::list).
    fn search(&self, needle: &str) -> Vec<InvestigationRecord> {
        self.list()
            .into_iter()
            .filter(|record| record.matches(needle))
            .collect()
    }

    /// Total, active and archived counts.
    fn stats(&self) -> InvestigationStats {
        self.list()
            .iter()
            .fold(InvestigationStats::default(), |mut stats, record| {
                stats.total_investigations += 1;
                match record.status {
                    InvestigationStatus::Active => stats.active_investigations += 1,
                    InvestigationStatus::Archived => stats.archived_investigations += 1,
                }
                stats
            })
    }

    /// Change the status of a record and touch `updated_at`.
    fn set_status(
        &self,
        id: InvestigationId,
        status: InvestigationStatus,
    ) -> InvestigationResult<InvestigationRecord>;

    /// Permanently delete a record.
    fn delete(&self, id: InvestigationId) -> InvestigationResult<()>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Check if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryInvestigationStore {
    records: DashMap<InvestigationId, InvestigationRecord>,
}

impl InMemoryInvestigationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvestigationStore for InMemoryInvestigationStore {
    fn insert(&self, record: InvestigationRecord) -> InvestigationRecord {
        tracing::info!(id = %record.id, name = %record.name, "saved investigation");
        self.records.insert(record.id, record.clone());
        record
    }

    fn get(&self, id: InvestigationId) -> InvestigationResult<InvestigationRecord> {
        self.records
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(InvestigationError::NotFound(id))
    }

    fn list(&self) -> Vec<InvestigationRecord> {
        let mut records: Vec<InvestigationRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        records
    }

    fn set_status(
        &self,
        id: InvestigationId,
        status: InvestigationStatus,
    ) -> InvestigationResult<InvestigationRecord> {
        let mut entry = self
            .records
            .get_mut(&id)
            .ok_or(InvestigationError::NotFound(id))?;
        entry.status = status;
        entry.updated_at = Utc::now();
        Ok(entry.value().clone())
    }

    fn delete(&self, id: InvestigationId) -> InvestigationResult<()> {
        if self.records.remove(&id).is_none() {
            return Err(InvestigationError::NotFound(id));
        }
        tracing::info!(%id, "deleted investigation");
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::query::{InvestigationInput, QueryRequest, QueryService};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn record(name: &str) -> Result<InvestigationRecord, Box<dyn std::error::Error>> {
        let input = InvestigationInput::new().with_full_name(name);
        let built = QueryService::default().compose(&QueryRequest::new(input.clone()))?;
        Ok(InvestigationRecord::new(name, input, built)?)
    }

    #[test]
    fn test_insert_and_get() -> TestResult {
        let store = InMemoryInvestigationStore::new();
        let saved = store.insert(record("Jane Doe")?);

        let fetched = store.get(saved.id)?;
        assert_eq!(fetched.name, "Jane Doe");
        assert_eq!(fetched.query, "\"Jane Doe\"");
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn test_get_missing() {
        let store = InMemoryInvestigationStore::new();
        let id = InvestigationId::new();
        assert!(matches!(store.get(id), Err(InvestigationError::NotFound(missing)) if missing == id));
    }

    #[test]
    fn test_list_newest_first() -> TestResult {
        let store = InMemoryInvestigationStore::new();
        let mut older = record("Older")?;
        older.created_at -= Duration::minutes(5);
        store.insert(older);
        store.insert(record("Newer")?);

        let names: Vec<String> = store.list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Newer", "Older"]);
        Ok(())
    }

    #[test]
    fn test_archive() -> TestResult {
        let store = InMemoryInvestigationStore::new();
        let saved = store.insert(record("Case")?);

        let archived = store.set_status(saved.id, InvestigationStatus::Archived)?;
        assert_eq!(archived.status, InvestigationStatus::Archived);
        assert!(archived.updated_at >= saved.updated_at);
        assert_eq!(store.get(saved.id)?.status, InvestigationStatus::Archived);
        Ok(())
    }

    #[test]
    fn test_search_ignores_case() -> TestResult {
        let store = InMemoryInvestigationStore::new();
        let mut older = record("Jane Doe")?;
        older.created_at -= Duration::minutes(5);
        older.name = "Background check".to_string();
        store.insert(older);
        store.insert(record("Janet Smith")?);
        store.insert(record("Bob Stone")?);

        let names: Vec<String> = store.search("JANE").into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Janet Smith", "Background check"]);
        assert!(store.search("nobody").is_empty());
        assert_eq!(store.search("").len(), 3);
        Ok(())
    }

    #[test]
    fn test_stats() -> TestResult {
        let store = InMemoryInvestigationStore::new();
        assert_eq!(store.stats(), InvestigationStats::default());

        let first = store.insert(record("One")?);
        store.insert(record("Two")?);
        store.insert(record("Three")?);
        store.set_status(first.id, InvestigationStatus::Archived)?;

        let stats = store.stats();
        assert_eq!(stats.total_investigations, 3);
        assert_eq!(stats.active_investigations, 2);
        assert_eq!(stats.archived_investigations, 1);
        Ok(())
    }

    #[test]
    fn test_delete() -> TestResult {
        let store = InMemoryInvestigationStore::new();
        let saved = store.insert(record("Case")?);

        store.delete(saved.id)?;
        assert!(store.is_empty());
        assert!(store.delete(saved.id).is_err());
        Ok(())
    }
}
