//! List Aggregations
//!
//! Pure derivations for the dashboard cards, budget tracker and task
//! lists. Recomputed on every call; collections can change under sibling
//! components at any time, so nothing here caches.

use chrono::NaiveDate;

use crate::models::{BudgetItem, Event, EventStatus, Task, TaskPriority, TaskStatus};

/// Percentage of an allocation that has been spent.
///
/// A zero (or negative) allocation has no meaningful percentage; the
/// marker renders as "N/A" instead of leaking NaN/Infinity into the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PercentUsed {
    Applicable(i64),
    NotApplicable,
}

impl std::fmt::Display for PercentUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercentUsed::Applicable(p) => write!(f, "{}%", p),
            PercentUsed::NotApplicable => write!(f, "N/A"),
        }
    }
}

pub fn percent_used(spent: f64, allocated: f64) -> PercentUsed {
    if allocated <= 0.0 {
        PercentUsed::NotApplicable
    } else {
        PercentUsed::Applicable(((spent / allocated) * 100.0).round() as i64)
    }
}

/// Remaining budget; negative means overspent (flagged visually, not an error).
pub fn remaining(total: f64, actual: f64) -> f64 {
    total - actual
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BudgetTotals {
    pub estimated: f64,
    pub actual: f64,
}

pub fn budget_totals(items: &[BudgetItem]) -> BudgetTotals {
    BudgetTotals {
        estimated: items.iter().map(|i| i.estimated_cost).sum(),
        actual: items.iter().map(|i| i.actual_cost).sum(),
    }
}

/// Events still in planning or running.
pub fn active_event_count(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e.status, EventStatus::Planning | EventStatus::Active))
        .count()
}

pub fn total_budget(events: &[Event]) -> f64 {
    events.iter().map(|e| e.budget_total).sum()
}

pub fn total_spent(events: &[Event]) -> f64 {
    events.iter().map(|e| e.budget_spent).sum()
}

/// Tasks not yet completed.
pub fn open_task_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.status != TaskStatus::Completed).count()
}

pub fn count_with_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

/// High-priority tasks still open, for the dashboard "Priority Tasks" card.
pub fn priority_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.priority == TaskPriority::High && t.status != TaskStatus::Completed)
        .cloned()
        .collect()
}

/// Soonest-starting events first; unparseable dates last, name as tie-break.
pub fn upcoming_events(events: &[Event], n: usize) -> Vec<Event> {
    let mut sorted: Vec<Event> = events.to_vec();
    sorted.sort_by(|a, b| {
        match (parse_day(&a.date_start), parse_day(&b.date_start)) {
            (Some(da), Some(db)) => da.cmp(&db).then_with(|| a.name.cmp(&b.name)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        }
    });
    sorted.truncate(n);
    sorted
}

/// Ascending due date, undated tasks last, title as tie-break.
pub fn tasks_due_order(tasks: &[Task]) -> Vec<Task> {
    let mut sorted: Vec<Task> = tasks.to_vec();
    sorted.sort_by(|a, b| {
        let da = a.due_date.as_deref().and_then(parse_day);
        let db = b.due_date.as_deref().and_then(parse_day);
        match (da, db) {
            (Some(da), Some(db)) => da.cmp(&db).then_with(|| a.title.cmp(&b.title)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        }
    });
    sorted
}

/// Day part of an ISO-8601 date or timestamp string.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let day = s.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// "Jan 5" style short date for cards and lists.
pub fn short_date(s: &str) -> String {
    match parse_day(s) {
        Some(d) => d.format("%b %-d").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, TaskCategory};

    fn make_budget_item(estimated: f64, actual: f64) -> BudgetItem {
        BudgetItem {
            id: format!("b-{}-{}", estimated, actual),
            event_id: "e1".to_string(),
            description: "Expense".to_string(),
            estimated_cost: estimated,
            actual_cost: actual,
            category: "logistics".to_string(),
        }
    }

    fn make_event(name: &str, status: EventStatus, date_start: &str) -> Event {
        Event {
            id: name.to_string(),
            name: name.to_string(),
            event_type: EventType::General,
            date_start: date_start.to_string(),
            date_end: None,
            location: "Main lawn".to_string(),
            status,
            budget_total: 1000.0,
            budget_spent: 250.0,
            description: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn make_task(title: &str, priority: TaskPriority, status: TaskStatus, due: Option<&str>) -> Task {
        Task {
            id: title.to_string(),
            event_id: "e1".to_string(),
            title: title.to_string(),
            description: None,
            status,
            priority,
            category: TaskCategory::General,
            assigned_to: None,
            due_date: due.map(str::to_string),
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_collections_sum_to_zero() {
        let totals = budget_totals(&[]);
        assert_eq!(totals.estimated, 0.0);
        assert_eq!(totals.actual, 0.0);
        assert_eq!(total_budget(&[]), 0.0);
        assert_eq!(open_task_count(&[]), 0);
    }

    #[test]
    fn zero_allocation_yields_not_applicable_never_nan() {
        assert_eq!(percent_used(45.0, 0.0), PercentUsed::NotApplicable);
        assert_eq!(percent_used(0.0, 0.0), PercentUsed::NotApplicable);
        assert_eq!(percent_used(45.0, 0.0).to_string(), "N/A");
    }

    #[test]
    fn budget_scenario_with_zero_total() {
        // items = [{50, 45}, {30, 0}], total budget 0
        let items = vec![make_budget_item(50.0, 45.0), make_budget_item(30.0, 0.0)];
        let totals = budget_totals(&items);
        assert_eq!(totals.actual, 45.0);
        assert_eq!(totals.estimated, 80.0);
        assert_eq!(percent_used(totals.actual, 0.0), PercentUsed::NotApplicable);
        // Overspend is allowed and reported as a negative remainder
        assert_eq!(remaining(0.0, totals.actual), -45.0);
    }

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(percent_used(1.0, 3.0), PercentUsed::Applicable(33));
        assert_eq!(percent_used(2.0, 3.0), PercentUsed::Applicable(67));
        assert_eq!(percent_used(450.0, 300.0), PercentUsed::Applicable(150));
    }

    #[test]
    fn active_events_counts_planning_and_active_only() {
        let events = vec![
            make_event("a", EventStatus::Planning, "2025-03-01"),
            make_event("b", EventStatus::Active, "2025-03-02"),
            make_event("c", EventStatus::Completed, "2025-03-03"),
            make_event("d", EventStatus::Cancelled, "2025-03-04"),
        ];
        assert_eq!(active_event_count(&events), 2);
    }

    #[test]
    fn upcoming_events_sorted_soonest_first() {
        let events = vec![
            make_event("later", EventStatus::Planning, "2025-06-01"),
            make_event("soon", EventStatus::Planning, "2025-02-01T18:00:00Z"),
            make_event("middle", EventStatus::Planning, "2025-04-15"),
        ];
        let upcoming = upcoming_events(&events, 2);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].name, "soon");
        assert_eq!(upcoming[1].name, "middle");
    }

    #[test]
    fn due_order_puts_undated_tasks_last() {
        let tasks = vec![
            make_task("undated", TaskPriority::Low, TaskStatus::Todo, None),
            make_task("late", TaskPriority::Low, TaskStatus::Todo, Some("2025-05-20")),
            make_task("early", TaskPriority::Low, TaskStatus::Todo, Some("2025-05-01")),
        ];
        let ordered = tasks_due_order(&tasks);
        let titles: Vec<&str> = ordered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["early", "late", "undated"]);
    }

    #[test]
    fn priority_tasks_excludes_completed() {
        let tasks = vec![
            make_task("open-high", TaskPriority::High, TaskStatus::Todo, None),
            make_task("done-high", TaskPriority::High, TaskStatus::Completed, None),
            make_task("open-low", TaskPriority::Low, TaskStatus::Todo, None),
        ];
        let picked = priority_tasks(&tasks);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].title, "open-high");
    }
}
