use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use tasks_api::v1::{CreateTask, DeleteResult, Health, Task, TaskStatus, MAX_TITLE_LEN};
use tracing::info;

use crate::{error::Error, AppState};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(get_tasks).post(create_task))
        .route("/tasks/:id/status", post(set_task_status))
        .route("/tasks/:id", delete(delete_task))
        .route("/healthcheck", get(healthcheck))
}

async fn healthcheck() -> Json<Health> {
    Json(Health {
        status: String::from("ok"),
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn get_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Task>>, Error> {
    Ok(Json(state.tasks.list().await?))
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateTask>,
) -> Result<Json<Task>, Error> {
    validate_title(&input.title)?;

    let task = state.tasks.create(&input.title).await?;

    info!(
        id = task.id,
        title = %task.title,
        "created task"
    );

    Ok(Json(task))
}

async fn set_task_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(status): Json<TaskStatus>,
) -> Result<Json<Task>, Error> {
    let task = state.tasks.set_status(id, status).await?;

    info!(
        id = task.id,
        status = %task.status,
        "updated task status"
    );

    Ok(Json(task))
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResult>, Error> {
    let success = state.tasks.delete(id).await?;

    info!(id, success, "deleted task");

    Ok(Json(DeleteResult { success }))
}

fn validate_title(title: &str) -> Result<(), Error> {
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(Error::TitleTooLong);
    }

    Ok(())
}
