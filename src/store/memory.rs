//! In-Memory Store
//!
//! [`EmployeeStore`] over a vector, mirroring the MongoDB store's semantics.
//! Backs the test suites, which never need a running database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{checked_skip, ensure_changes, EmployeeStore, Result, StoreError};
use crate::models::{Employee, EmployeeId};

/// Employee store held in process memory, in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    records: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<EmployeeId> {
        let mut records = self.records.write().await;
        let id = employee.id.unwrap_or_else(EmployeeId::generate);
        if records.iter().any(|r| r.id == Some(id)) {
            return Err(StoreError::Duplicate(id));
        }

        records.push(Employee {
            id: Some(id),
            ..employee.clone()
        });
        Ok(id)
    }

    async fn find_page(&self, limit: i64, skip: i64) -> Result<Vec<Employee>> {
        let skip = usize::try_from(checked_skip(skip)?).unwrap_or(usize::MAX);
        // Same as MongoDB: 0 is unbounded, a negative limit counts by magnitude.
        let take = match limit {
            0 => usize::MAX,
            n => usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX),
        };

        let records = self.records.read().await;
        Ok(records.iter().skip(skip).take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == Some(*id)).cloned())
    }

    async fn update(&self, id: &EmployeeId, changes: &Employee) -> Result<()> {
        ensure_changes(id, changes)?;
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == Some(*id))
            .ok_or(StoreError::NotFound)?;
        record.apply(changes);
        Ok(())
    }

    async fn remove(&self, id: &EmployeeId) -> Result<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == Some(*id))
            .ok_or(StoreError::NotFound)?;
        records.remove(index);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
