//! Content Pipeline Endpoints

use serde::Serialize;

use crate::models::{ContentIdea, ContentStatus, Platform};

#[derive(Serialize)]
pub struct NewContentIdea<'a> {
    pub event_id: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub platform: Platform,
    pub status: ContentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<&'a str>,
}

#[derive(Serialize)]
pub struct ContentIdeaPatch<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub platform: Platform,
    pub status: ContentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<&'a str>,
}

#[derive(Serialize)]
struct StatusPatch {
    status: ContentStatus,
}

pub async fn list_content_by_event(event_id: &str) -> Result<Vec<ContentIdea>, String> {
    super::get_list(&format!("content_ideas?event_id=eq.{}&order=created_at.asc", event_id)).await
}

pub async fn create_content_idea(idea: &NewContentIdea<'_>) -> Result<ContentIdea, String> {
    super::insert_one("content_ideas", idea).await
}

pub async fn update_content_idea(id: &str, patch: &ContentIdeaPatch<'_>) -> Result<ContentIdea, String> {
    super::update_one("content_ideas", id, patch).await
}

/// Persist just the status after a pipeline move.
pub async fn update_content_status(id: &str, status: ContentStatus) -> Result<ContentIdea, String> {
    super::update_one("content_ideas", id, &StatusPatch { status }).await
}

pub async fn delete_content_idea(id: &str) -> Result<(), String> {
    super::delete_row("content_ideas", id).await
}
