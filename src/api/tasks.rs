//! Task Endpoints
//!
//! Bindings for the `tasks` table, including the single-field status
//! patch issued after a kanban drag.

use serde::Serialize;

use crate::models::{Task, TaskCategory, TaskPriority, TaskStatus};

#[derive(Serialize)]
pub struct NewTask<'a> {
    pub event_id: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub assigned_to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

#[derive(Serialize)]
pub struct TaskPatch<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub assigned_to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

#[derive(Serialize)]
struct StatusPatch {
    status: TaskStatus,
}

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    super::get_list("tasks?order=created_at.asc").await
}

pub async fn list_tasks_by_event(event_id: &str) -> Result<Vec<Task>, String> {
    super::get_list(&format!("tasks?event_id=eq.{}&order=created_at.asc", event_id)).await
}

pub async fn create_task(task: &NewTask<'_>) -> Result<Task, String> {
    super::insert_one("tasks", task).await
}

pub async fn update_task(id: &str, patch: &TaskPatch<'_>) -> Result<Task, String> {
    super::update_one("tasks", id, patch).await
}

/// Persist just the status after a board move.
pub async fn update_task_status(id: &str, status: TaskStatus) -> Result<Task, String> {
    super::update_one("tasks", id, &StatusPatch { status }).await
}

pub async fn delete_task(id: &str) -> Result<(), String> {
    super::delete_row("tasks", id).await
}
