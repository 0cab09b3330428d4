//! Bug Report Endpoints

use serde::Serialize;

use crate::models::{BugIssue, BugPriority, BugStatus};

#[derive(Serialize)]
pub struct NewBugIssue<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: BugStatus,
    pub priority: BugPriority,
    pub reported_by: &'a str,
}

#[derive(Serialize)]
pub struct BugIssuePatch<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: BugStatus,
    pub priority: BugPriority,
    pub reported_by: &'a str,
}

pub async fn list_bugs() -> Result<Vec<BugIssue>, String> {
    super::get_list("bug_issues?order=created_at.desc").await
}

pub async fn create_bug(bug: &NewBugIssue<'_>) -> Result<BugIssue, String> {
    super::insert_one("bug_issues", bug).await
}

pub async fn update_bug(id: &str, patch: &BugIssuePatch<'_>) -> Result<BugIssue, String> {
    super::update_one("bug_issues", id, patch).await
}

pub async fn delete_bug(id: &str) -> Result<(), String> {
    super::delete_row("bug_issues", id).await
}
