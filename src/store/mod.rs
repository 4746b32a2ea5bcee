//! Store Module
//!
//! The data-store adapter: a single employee collection accessed through
//! the [`EmployeeStore`] trait, backed by MongoDB in production and by an
//! in-memory vector in tests.

mod document;
mod memory;
mod mongo;


use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Employee, EmployeeId};

// Re-export public types
pub use document::EmployeeDocument;
pub use memory::InMemoryEmployeeStore;
pub use mongo::MongoEmployeeStore;

// == Store Error Enum ==
/// Errors reported by a store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Driver level failure (connection, query, write)
    #[error("{0}")]
    Database(#[from] mongodb::error::Error),

    /// Record could not be encoded as a BSON document
    #[error("{0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// No document matched the identifier of a write
    #[error("not found")]
    NotFound,

    /// A document with the same identifier already exists
    #[error("duplicate key: {0}")]
    Duplicate(EmployeeId),

    /// The request could not be turned into a valid store operation
    #[error("{0}")]
    InvalidQuery(String),
}

/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// == Employee Store Trait ==
/// Accessor for the employee collection.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Inserts a record, returning its identifier.
    ///
    /// An identifier is generated when the record carries none.
    async fn insert(&self, employee: &Employee) -> Result<EmployeeId>;

    /// Returns up to `limit` records after skipping `skip`, in natural order.
    ///
    /// A `limit` of 0 means no limit; a negative skip is rejected.
    async fn find_page(&self, limit: i64, skip: i64) -> Result<Vec<Employee>>;

    /// Looks up a single record.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>>;

    /// Sets the fields present in `changes` on an existing record.
    ///
    /// Fails with [`StoreError::NotFound`] when no record matches, and with
    /// [`StoreError::InvalidQuery`] when `changes` carries another `_id`.
    async fn update(&self, id: &EmployeeId, changes: &Employee) -> Result<()>;

    /// Removes a record.
    ///
    /// Fails with [`StoreError::NotFound`] when no record matches.
    async fn remove(&self, id: &EmployeeId) -> Result<()>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Converts a signed skip into the unsigned offset stores accept.
pub(crate) fn checked_skip(skip: i64) -> Result<u64> {
    u64::try_from(skip)
        .map_err(|_| StoreError::InvalidQuery(format!("skip must be non-negative, got {}", skip)))
}

/// Rejects an update that would set nothing or would move the record to
/// another identifier. `_id` is immutable; restating the same one is allowed.
pub(crate) fn ensure_changes(id: &EmployeeId, changes: &Employee) -> Result<()> {
    if changes.id.is_some_and(|body_id| body_id != *id) {
        return Err(StoreError::InvalidQuery(
            "cannot modify immutable field '_id'".to_string(),
        ));
    }
    if changes.has_no_fields() {
        return Err(StoreError::InvalidQuery("update has no fields to set".to_string()));
    }
    Ok(())
}
