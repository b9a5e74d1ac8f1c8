use chrono::Utc;
use tasks_api::v1::{Task, TaskStatus};

use crate::{error::Error, store::TaskStore};

/// Stateless translation between the boundary and the store. Owns the
/// timestamp bookkeeping; the store owns ids and durability.
#[derive(Clone, Debug)]
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Status is always pending at creation, whatever the caller sent.
    pub async fn create(&self, title: &str) -> Result<Task, Error> {
        self.store.insert(title, Utc::now()).await
    }

    pub async fn list(&self) -> Result<Vec<Task>, Error> {
        self.store.all().await
    }

    /// Bumps `updated_at` even when the task is already in the target
    /// status. A missing id is a not-found error.
    pub async fn set_status(&self, id: i64, status: TaskStatus) -> Result<Task, Error> {
        match self.store.update_status(id, status, Utc::now()).await? {
            Some(task) => Ok(task),
            None => Err(Error::TaskNotFound(id)),
        }
    }

    /// A missing id is `false`, not an error. Intentionally asymmetric
    /// with `set_status`.
    pub async fn delete(&self, id: i64) -> Result<bool, Error> {
        self.store.delete(id).await
    }
}
