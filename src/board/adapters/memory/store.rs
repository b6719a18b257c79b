//! In-memory task store backed by JSON documents.

use async_trait::async_trait;
use mockable::Clock;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use uuid::Uuid;

use crate::board::{
    domain::{Task, TaskDraft, TaskId, TaskRecord, UserId},
    ports::{AuthGateway, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Failures local to the in-memory collection, surfaced through the port
/// error taxonomy.
#[derive(Debug, Clone, Error)]
enum MemoryStoreFault {
    /// An operation ran without a signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,

    /// The collection lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),

    /// A stored document lost its JSON object shape.
    #[error("stored document is not a JSON object")]
    MalformedDocument,
}

/// In-memory document collection mirroring the remote task store.
///
/// Documents are JSON values held in insertion order; identifiers are
/// minted UUID strings; owner and creation timestamp are stamped at write
/// time. Listing, updating, and deleting are all scoped to the documents
/// of the user the gateway reports as signed in, the same visibility the
/// remote collection enforces.
#[derive(Debug)]
pub struct InMemoryTaskStore<A, C>
where
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    auth: Arc<A>,
    clock: Arc<C>,
    documents: Arc<RwLock<Vec<Value>>>,
}

impl<A, C> InMemoryTaskStore<A, C>
where
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    /// Creates an empty collection scoped through the given gateway and
    /// clock.
    #[must_use]
    pub fn new(auth: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            auth,
            clock,
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn signed_in_owner(&self) -> Result<String, MemoryStoreFault> {
        self.auth
            .current_user()
            .map(|user| user.id().as_str().to_owned())
            .ok_or(MemoryStoreFault::NotSignedIn)
    }
}

/// Returns the identifier recorded in a stored document.
fn document_id(document: &Value) -> Option<&str> {
    document.get("id").and_then(Value::as_str)
}

/// Returns the owner recorded in a stored document.
fn document_owner(document: &Value) -> Option<&str> {
    document.get("owner").and_then(Value::as_str)
}

/// Reports whether a document belongs to the given owner and id.
fn matches_scope(document: &Value, owner: &str, id: &TaskId) -> bool {
    document_id(document) == Some(id.as_str()) && document_owner(document) == Some(owner)
}

#[async_trait]
impl<A, C> TaskStore for InMemoryTaskStore<A, C>
where
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let owner = self.signed_in_owner().map_err(TaskStoreError::fetch)?;
        let documents = self
            .documents
            .read()
            .map_err(|err| TaskStoreError::fetch(MemoryStoreFault::Poisoned(err.to_string())))?;

        let mut tasks = Vec::new();
        for document in documents.iter() {
            if document_owner(document) != Some(owner.as_str()) {
                continue;
            }
            let task: Task =
                serde_json::from_value(document.clone()).map_err(TaskStoreError::fetch)?;
            tasks.push(task);
        }
        Ok(tasks)
    }

    async fn create(&self, draft: TaskDraft) -> TaskStoreResult<()> {
        let owner = self.signed_in_owner().map_err(TaskStoreError::write)?;
        let record = TaskRecord {
            id: TaskId::new(Uuid::new_v4().to_string()),
            owner: UserId::new(owner),
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            status: draft.status(),
            completed: draft.is_completed(),
            created_at: self.clock.utc(),
        };
        let document =
            serde_json::to_value(Task::from_record(record)).map_err(TaskStoreError::write)?;

        let mut documents = self
            .documents
            .write()
            .map_err(|err| TaskStoreError::write(MemoryStoreFault::Poisoned(err.to_string())))?;
        documents.push(document);
        Ok(())
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()> {
        let owner = self.signed_in_owner().map_err(TaskStoreError::write)?;
        let mut documents = self
            .documents
            .write()
            .map_err(|err| TaskStoreError::write(MemoryStoreFault::Poisoned(err.to_string())))?;

        let document = documents
            .iter_mut()
            .find(|document| matches_scope(document, &owner, id))
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        let fields = document
            .as_object_mut()
            .ok_or_else(|| TaskStoreError::write(MemoryStoreFault::MalformedDocument))?;

        if let Some(status) = patch.status() {
            fields.insert(
                "status".to_owned(),
                Value::String(status.as_str().to_owned()),
            );
        }
        if let Some(title) = patch.title() {
            fields.insert("title".to_owned(), Value::String(title.to_owned()));
        }
        if let Some(description) = patch.description() {
            fields.insert(
                "description".to_owned(),
                Value::String(description.to_owned()),
            );
        }
        if let Some(completed) = patch.completed() {
            fields.insert("completed".to_owned(), Value::Bool(completed));
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let owner = self.signed_in_owner().map_err(TaskStoreError::write)?;
        let mut documents = self
            .documents
            .write()
            .map_err(|err| TaskStoreError::write(MemoryStoreFault::Poisoned(err.to_string())))?;

        let before = documents.len();
        documents.retain(|document| !matches_scope(document, &owner, id));
        if documents.len() == before {
            return Err(TaskStoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
