//! Event Endpoints

use serde::Serialize;

use crate::models::{Event, EventStatus, EventType};

#[derive(Serialize)]
pub struct NewEvent<'a> {
    pub name: &'a str,
    pub event_type: EventType,
    pub date_start: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<&'a str>,
    pub location: &'a str,
    pub status: EventStatus,
    pub budget_total: f64,
    pub budget_spent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Serialize)]
pub struct EventPatch<'a> {
    pub name: &'a str,
    pub event_type: EventType,
    pub date_start: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<&'a str>,
    pub location: &'a str,
    pub status: EventStatus,
    pub budget_total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

pub async fn list_events() -> Result<Vec<Event>, String> {
    super::get_list("events?order=date_start.asc").await
}

pub async fn get_event(id: &str) -> Result<Option<Event>, String> {
    let rows: Vec<Event> = super::get_list(&format!("events?id=eq.{}", id)).await?;
    Ok(rows.into_iter().next())
}

pub async fn create_event(event: &NewEvent<'_>) -> Result<Event, String> {
    super::insert_one("events", event).await
}

pub async fn update_event(id: &str, patch: &EventPatch<'_>) -> Result<Event, String> {
    super::update_one("events", id, patch).await
}

pub async fn delete_event(id: &str) -> Result<(), String> {
    super::delete_row("events", id).await
}
