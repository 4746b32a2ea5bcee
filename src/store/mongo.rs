//! MongoDB Store
//!
//! [`EmployeeStore`] over a single MongoDB collection.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, to_document},
    options::FindOptions,
    Client, Collection, Database,
};
use tracing::{debug, info};

use super::{checked_skip, ensure_changes, EmployeeDocument, EmployeeStore, Result, StoreError};
use crate::models::{Employee, EmployeeId};

/// MongoDB backed employee store.
///
/// Cloning is cheap; the driver's client is a pooled handle safe for
/// concurrent use.
#[derive(Clone, Debug)]
pub struct MongoEmployeeStore {
    db: Database,
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeStore {
    /// Connects to `uri` and verifies the server answers a ping.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        let store = Self {
            collection: db.collection(collection),
            db,
        };
        store.ping().await?;
        info!(database, collection, "Connected to MongoDB");
        Ok(store)
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, employee: &Employee) -> Result<EmployeeId> {
        let result = self
            .collection
            .insert_one(EmployeeDocument::from(employee.clone()), None)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(EmployeeId::from)
            .ok_or_else(|| StoreError::InvalidQuery("inserted id is not an ObjectId".to_string()))?;
        debug!(%id, "Inserted employee");
        Ok(id)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn find_page(&self, limit: i64, skip: i64) -> Result<Vec<Employee>> {
        let mut options = FindOptions::default();
        options.limit = (limit != 0).then_some(limit);
        options.skip = Some(checked_skip(skip)?);

        let cursor = self.collection.find(None, options).await?;
        let docs: Vec<EmployeeDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Employee::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.object_id() }, None)
            .await?;
        Ok(found.map(Employee::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &EmployeeId, changes: &Employee) -> Result<()> {
        ensure_changes(id, changes)?;
        let set = to_document(&EmployeeDocument::changes(changes))?;

        let result = self
            .collection
            .update_one(doc! { "_id": id.object_id() }, doc! { "$set": set }, None)
            .await?;
        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn remove(&self, id: &EmployeeId) -> Result<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() }, None)
            .await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
