//! Job repository for all MongoDB operations on the jobs collection.
//!
//! This repository encapsulates all database access logic for the Job
//! collection, providing a clean interface for the service layer.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, to_document, Document};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_JOBS;
use crate::errors::ApiError;
use crate::models::Job;

/// Repository for job-related database operations.
pub struct JobRepository {
    collection: Collection<Job>,
}

impl JobRepository {
    /// Create a new JobRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_JOBS),
        }
    }

    /// Fetch every job in natural store order.
    pub async fn find_all(&self) -> Result<Vec<Job>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find a job by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Job>, ApiError> {
        debug!("Repository: Finding job by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Fetch all jobs posted by the given buyer, unpaginated.
    pub async fn find_by_owner(&self, email: &str) -> Result<Vec<Job>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "buyer.email": email })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch one page of jobs for the given filter and sort directive.
    ///
    /// `limit` of `None` returns every match past `skip`.
    pub async fn find_page(
        &self,
        filter: Document,
        sort: Option<Document>,
        skip: u64,
        limit: Option<i64>,
    ) -> Result<Vec<Job>, ApiError> {
        debug!("Repository: Finding jobs with filter: {:?}", filter);
        let mut find = self.collection.find(filter).skip(skip);
        if let Some(sort) = sort {
            find = find.sort(sort);
        }
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        Ok(find.await?.try_collect().await?)
    }

    /// Count documents matching a filter.
    pub async fn count(&self, filter: Document) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(filter).await?)
    }

    /// Insert a new job.
    pub async fn insert(&self, job: &Job) -> Result<mongodb::results::InsertOneResult, ApiError> {
        Ok(self.collection.insert_one(job).await?)
    }

    /// Replace-or-insert the full client document under the given id.
    pub async fn upsert(
        &self,
        id: ObjectId,
        job: &Job,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        let mut fields = to_document(job)?;
        // _id is immutable; never include it in the $set
        fields.remove("_id");

        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .upsert(true)
            .await?)
    }

    /// Delete a job by ObjectId.
    pub async fn delete(
        &self,
        id: ObjectId,
    ) -> Result<mongodb::results::DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
