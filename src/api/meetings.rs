//! Meeting Endpoints
//!
//! Includes the two single-field patches issued outside the form flow:
//! debounced minutes autosave and the optimistic attendance toggle.

use serde::Serialize;

use crate::models::Meeting;

#[derive(Serialize)]
pub struct NewMeeting<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<&'a str>,
    pub attendees: &'a [String],
}

#[derive(Serialize)]
pub struct MeetingPatch<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<&'a str>,
    // Always sent; clearing the related event needs an explicit null
    pub event_id: Option<&'a str>,
}

#[derive(Serialize)]
struct MinutesPatch<'a> {
    minutes: &'a str,
}

#[derive(Serialize)]
struct AttendeesPatch<'a> {
    attendees: &'a [String],
}

pub async fn list_meetings() -> Result<Vec<Meeting>, String> {
    super::get_list("meetings?order=date.desc").await
}

pub async fn get_meeting(id: &str) -> Result<Option<Meeting>, String> {
    let rows: Vec<Meeting> = super::get_list(&format!("meetings?id=eq.{}", id)).await?;
    Ok(rows.into_iter().next())
}

pub async fn create_meeting(meeting: &NewMeeting<'_>) -> Result<Meeting, String> {
    super::insert_one("meetings", meeting).await
}

pub async fn update_meeting(id: &str, patch: &MeetingPatch<'_>) -> Result<Meeting, String> {
    super::update_one("meetings", id, patch).await
}

pub async fn update_minutes(id: &str, minutes: &str) -> Result<Meeting, String> {
    super::update_one("meetings", id, &MinutesPatch { minutes }).await
}

pub async fn update_attendees(id: &str, attendees: &[String]) -> Result<Meeting, String> {
    super::update_one("meetings", id, &AttendeesPatch { attendees }).await
}

pub async fn delete_meeting(id: &str) -> Result<(), String> {
    super::delete_row("meetings", id).await
}
