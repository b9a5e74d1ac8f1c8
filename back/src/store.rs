use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    FromRow, SqlitePool,
};
use tasks_api::v1::{Task, TaskStatus};

use crate::error::Error;

/// `AUTOINCREMENT` keeps deleted ids from ever being reassigned.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL,
    status     TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .journal_mode(SqliteJournalMode::Wal)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;
    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

#[derive(FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Result<Task, Error> {
        let status = self
            .status
            .parse()
            .map_err(|_| Error::CorruptStatus(self.status.clone()))?;

        Ok(Task {
            id: self.id,
            title: self.title,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Clone, Debug)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a pending task and returns the materialized row. Both
    /// timestamps come from the single `now` value.
    pub async fn insert(&self, title: &str, now: DateTime<Utc>) -> Result<Task, Error> {
        let row: TaskRow = sqlx::query_as(
            "INSERT INTO tasks (title, status, created_at, updated_at) \
             VALUES (?1, 'pending', ?2, ?2) \
             RETURNING id, title, status, created_at, updated_at",
        )
        .bind(title)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_task()
    }

    /// All tasks, newest first. Creation-time ties fall back to id order.
    pub async fn all(&self) -> Result<Vec<Task>, Error> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT id, title, status, created_at, updated_at FROM tasks \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TaskRow::into_task).collect()
    }

    /// Returns `None` when no row has the given id.
    pub async fn update_status(
        &self,
        id: i64,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<Task>, Error> {
        let row: Option<TaskRow> = sqlx::query_as(
            "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3 \
             RETURNING id, title, status, created_at, updated_at",
        )
        .bind(status.as_str())
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TaskRow::into_task).transpose()
    }

    /// Whether a row was removed. A missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
