//! Frontend Models
//!
//! Data structures matching the backend tables. Ids and timestamps are
//! assigned by the backend; dates travel as ISO-8601 strings.

use serde::{Deserialize, Serialize};

/// A status enum that drives a drag-reorder board.
///
/// `COLUMNS` is the fixed column order; `as_str` is the wire value and
/// `display_name` the column title shown to the user.
pub trait BoardStatus: Copy + PartialEq + Sized + 'static {
    const COLUMNS: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn display_name(&self) -> &'static str;

    fn from_str(s: &str) -> Option<Self> {
        Self::COLUMNS.iter().copied().find(|c| c.as_str() == s)
    }
}

// ========================
// Events
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Planning,
    Active,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Planning => "planning",
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub const ALL: &'static [EventStatus] = &[
        EventStatus::Planning,
        EventStatus::Active,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn from_str(value: &str) -> Option<EventStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "O-Week")]
    OWeek,
    #[serde(rename = "Basant")]
    Basant,
    #[serde(rename = "SRC Festival")]
    SrcFestival,
    #[serde(rename = "Coke Studio")]
    CokeStudio,
    #[serde(rename = "General")]
    General,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::OWeek => "O-Week",
            EventType::Basant => "Basant",
            EventType::SrcFestival => "SRC Festival",
            EventType::CokeStudio => "Coke Studio",
            EventType::General => "General",
        }
    }

    pub const ALL: &'static [EventType] = &[
        EventType::OWeek,
        EventType::Basant,
        EventType::SrcFestival,
        EventType::CokeStudio,
        EventType::General,
    ];

    pub fn from_str(value: &str) -> Option<EventType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub event_type: EventType,
    pub date_start: String,
    pub date_end: Option<String>,
    pub location: String,
    pub status: EventStatus,
    pub budget_total: f64,
    pub budget_spent: f64,
    pub description: Option<String>,
    pub created_at: String,
}

// ========================
// Tasks
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl BoardStatus for TaskStatus {
    const COLUMNS: &'static [TaskStatus] =
        &[TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub const ALL: &'static [TaskPriority] =
        &[TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn from_str(value: &str) -> Option<TaskPriority> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    General,
    Content,
    Logistics,
    Food,
    Props,
    Sponsors,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::General => "general",
            TaskCategory::Content => "content",
            TaskCategory::Logistics => "logistics",
            TaskCategory::Food => "food",
            TaskCategory::Props => "props",
            TaskCategory::Sponsors => "sponsors",
        }
    }

    pub const ALL: &'static [TaskCategory] = &[
        TaskCategory::General,
        TaskCategory::Content,
        TaskCategory::Logistics,
        TaskCategory::Food,
        TaskCategory::Props,
        TaskCategory::Sponsors,
    ];

    pub fn from_str(value: &str) -> Option<TaskCategory> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub created_at: String,
}

// ========================
// Content pipeline
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Idea,
    Planned,
    InProduction,
    Posted,
}

impl BoardStatus for ContentStatus {
    const COLUMNS: &'static [ContentStatus] = &[
        ContentStatus::Idea,
        ContentStatus::Planned,
        ContentStatus::InProduction,
        ContentStatus::Posted,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Idea => "idea",
            ContentStatus::Planned => "planned",
            ContentStatus::InProduction => "in_production",
            ContentStatus::Posted => "posted",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ContentStatus::Idea => "Idea",
            ContentStatus::Planned => "Planned",
            ContentStatus::InProduction => "In Production",
            ContentStatus::Posted => "Posted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Instagram,
    Tiktok,
    Facebook,
    General,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::General => "general",
        }
    }

    pub const ALL: &'static [Platform] = &[
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Facebook,
        Platform::General,
    ];

    pub fn from_str(value: &str) -> Option<Platform> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub platform: Platform,
    pub status: ContentStatus,
    pub scheduled_date: Option<String>,
    pub event_id: String,
    pub created_at: String,
}

// ========================
// Inventory / budget
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    Needed,
    Acquired,
    Available,
}

impl InventoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::Needed => "needed",
            InventoryStatus::Acquired => "acquired",
            InventoryStatus::Available => "available",
        }
    }

    pub const ALL: &'static [InventoryStatus] = &[
        InventoryStatus::Needed,
        InventoryStatus::Acquired,
        InventoryStatus::Available,
    ];

    pub fn from_str(value: &str) -> Option<InventoryStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub quantity: i64,
    pub status: InventoryStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub event_id: String,
    pub description: String,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub category: String,
}

// ========================
// Meetings / team / bugs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub meeting_link: Option<String>,
    pub event_id: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub joined_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl BugStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BugStatus::Open => "open",
            BugStatus::InProgress => "in_progress",
            BugStatus::Resolved => "resolved",
            BugStatus::Closed => "closed",
        }
    }

    pub const ALL: &'static [BugStatus] = &[
        BugStatus::Open,
        BugStatus::InProgress,
        BugStatus::Resolved,
        BugStatus::Closed,
    ];

    pub fn from_str(value: &str) -> Option<BugStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl BugPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            BugPriority::Low => "low",
            BugPriority::Medium => "medium",
            BugPriority::High => "high",
            BugPriority::Critical => "critical",
        }
    }

    pub const ALL: &'static [BugPriority] = &[
        BugPriority::Low,
        BugPriority::Medium,
        BugPriority::High,
        BugPriority::Critical,
    ];

    pub fn from_str(value: &str) -> Option<BugPriority> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BugIssue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: BugStatus,
    pub priority: BugPriority,
    pub reported_by: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_round_trips_through_wire_values() {
        for status in TaskStatus::COLUMNS {
            assert_eq!(TaskStatus::from_str(status.as_str()), Some(*status));
        }
        assert_eq!(TaskStatus::from_str("archived"), None);
    }

    #[test]
    fn content_status_columns_are_ordered() {
        let names: Vec<&str> = ContentStatus::COLUMNS.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["idea", "planned", "in_production", "posted"]);
    }

    #[test]
    fn task_serializes_with_snake_case_status() {
        let task = Task {
            id: "t1".to_string(),
            event_id: "e1".to_string(),
            title: "Design posters".to_string(),
            description: None,
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            category: TaskCategory::Content,
            assigned_to: None,
            due_date: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn event_type_keeps_display_spelling_on_the_wire() {
        let json = serde_json::to_value(EventType::SrcFestival).unwrap();
        assert_eq!(json, "SRC Festival");
        let back: EventType = serde_json::from_value(json).unwrap();
        assert_eq!(back, EventType::SrcFestival);
    }
}
