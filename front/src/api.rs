use tasks_api::v1::{CreateTask, DeleteResult, Health, Task, TaskStatus};

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub async fn get_tasks(&self) -> eyre::Result<Vec<Task>> {
        let response = self.http.get(format!("{}/tasks", self.base)).send().await?;

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn create_task(&self, title: &str) -> eyre::Result<Task> {
        let response = self
            .http
            .post(format!("{}/tasks", self.base))
            .json(&CreateTask {
                title: title.to_owned(),
            })
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn set_task_status(&self, id: i64, status: TaskStatus) -> eyre::Result<Task> {
        let response = self
            .http
            .post(format!("{}/tasks/{}/status", self.base, id))
            .json(&status)
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn delete_task(&self, id: i64) -> eyre::Result<DeleteResult> {
        let response = self
            .http
            .delete(format!("{}/tasks/{}", self.base, id))
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn healthcheck(&self) -> eyre::Result<Health> {
        let response = self
            .http
            .get(format!("{}/healthcheck", self.base))
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }
}
