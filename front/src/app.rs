use tasks_api::v1::{Task, TaskStatus};
use tracing::error;

use crate::api::ApiClient;

/// Local mirror of the server's task list. Every mutation goes to the
/// boundary first; state only changes from the server's response, so a
/// failed call leaves the list exactly as it was.
#[derive(Debug, Default)]
pub struct App {
    pub tasks: Vec<Task>,
}

impl App {
    pub async fn load(&mut self, client: &ApiClient) {
        match client.get_tasks().await {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => error!("failed to load tasks: {err:?}"),
        }
    }

    pub async fn create(&mut self, client: &ApiClient, title: &str) {
        // the boundary owns the real validation; this only skips blank input
        let title = title.trim();
        if title.is_empty() {
            return;
        }

        match client.create_task(title).await {
            Ok(task) => self.apply_created(task),
            Err(err) => error!("failed to create task: {err:?}"),
        }
    }

    pub async fn toggle(&mut self, client: &ApiClient, id: i64) {
        let status = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.status.toggled());

        let Some(status) = status else {
            error!("no task with id {id}");
            return;
        };

        match client.set_task_status(id, status).await {
            Ok(task) => self.apply_updated(task),
            Err(err) => error!("failed to update task status: {err:?}"),
        }
    }

    pub async fn delete(&mut self, client: &ApiClient, id: i64) {
        match client.delete_task(id).await {
            Ok(result) => self.apply_deleted(id, result.success),
            Err(err) => error!("failed to delete task: {err:?}"),
        }
    }

    /// New tasks are prepended, matching the server's newest-first order.
    pub fn apply_created(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    pub fn apply_updated(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|slot| slot.id == task.id) {
            *slot = task;
        }
    }

    /// The row disappears locally only when the server reports a removal.
    pub fn apply_deleted(&mut self, id: i64, success: bool) {
        if success {
            self.tasks.retain(|task| task.id != id);
        }
    }

    pub fn pending(&self) -> usize {
        self.count(TaskStatus::Pending)
    }

    pub fn completed(&self) -> usize {
        self.count(TaskStatus::Completed)
    }

    fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|task| task.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn task(id: i64, status: TaskStatus) -> Task {
        let now = Utc::now();

        Task {
            id,
            title: format!("task {id}"),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn created_tasks_are_prepended() {
        let mut app = App::default();
        app.apply_created(task(1, TaskStatus::Pending));
        app.apply_created(task(2, TaskStatus::Pending));

        let ids: Vec<_> = app.tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn updates_replace_the_matching_row_in_place() {
        let mut app = App::default();
        app.apply_created(task(1, TaskStatus::Pending));
        app.apply_created(task(2, TaskStatus::Pending));

        app.apply_updated(task(1, TaskStatus::Completed));

        assert_eq!(app.tasks[0].status, TaskStatus::Pending);
        assert_eq!(app.tasks[1].status, TaskStatus::Completed);
        assert_eq!(app.tasks.len(), 2);
    }

    #[test]
    fn updates_for_unknown_ids_change_nothing() {
        let mut app = App::default();
        app.apply_created(task(1, TaskStatus::Pending));

        app.apply_updated(task(9, TaskStatus::Completed));

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].id, 1);
    }

    #[test]
    fn deletes_are_applied_only_on_success() {
        let mut app = App::default();
        app.apply_created(task(1, TaskStatus::Pending));
        app.apply_created(task(2, TaskStatus::Completed));

        app.apply_deleted(1, false);
        assert_eq!(app.tasks.len(), 2);

        app.apply_deleted(1, true);
        let ids: Vec<_> = app.tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn counts_split_by_status() {
        let mut app = App::default();
        app.apply_created(task(1, TaskStatus::Pending));
        app.apply_created(task(2, TaskStatus::Completed));
        app.apply_created(task(3, TaskStatus::Pending));

        assert_eq!(app.pending(), 2);
        assert_eq!(app.completed(), 1);
    }
}
