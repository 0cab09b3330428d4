//! Dashboard Page
//!
//! Society-wide snapshot: headline stats, the next few events, and the
//! open task queue in due-date order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate::{
    active_event_count, count_with_status, open_task_count, priority_tasks, short_date,
    tasks_due_order, total_budget, total_spent, upcoming_events,
};
use crate::api;
use crate::app::Page;
use crate::components::{RowDelete, StatusBadge};
use crate::context::use_app_context;
use crate::models::{BoardStatus, Task, TaskStatus};
use crate::store::{store_event_name, use_app_store, AppStateStoreFields};

/// Queue rows for one status tab, soonest due first.
fn queue_for(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks_due_order(tasks)
        .into_iter()
        .filter(|t| t.status == status)
        .collect()
}

#[component]
pub fn DashboardPage(navigate: Callback<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (queue_status, set_queue_status) = signal(TaskStatus::Todo);

    let delete_task = move |id: String| {
        spawn_local(async move {
            match api::delete_task(&id).await {
                Ok(()) => {
                    let _ = set_tasks.try_update(|rows| rows.retain(|t| t.id != id));
                    ctx.toast_success("Task deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[DASHBOARD] task delete failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to delete task");
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(rows) => {
                    let _ = set_tasks.try_set(rows);
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[DASHBOARD] task load failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to load tasks");
                }
            }
        });
    });

    let events = move || store.events().get();

    view! {
        <div class="page dashboard">
            <h1>"Dashboard"</h1>

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-value">{move || active_event_count(&events())}</span>
                    <span class="stat-label">"Active Events"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">
                        {move || format!("Rs {:.0}", total_budget(&events()))}
                    </span>
                    <span class="stat-label">"Total Budget"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">
                        {move || format!("Rs {:.0}", total_spent(&events()))}
                    </span>
                    <span class="stat-label">"Spent"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || open_task_count(&tasks.get())}</span>
                    <span class="stat-label">"Open Tasks"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">
                        {move || count_with_status(&tasks.get(), TaskStatus::InProgress)}
                    </span>
                    <span class="stat-label">"In Progress"</span>
                </div>
            </div>

            <div class="dashboard-columns">
                <section class="dashboard-panel">
                    <h2>"Upcoming Events"</h2>
                    <For
                        each=move || upcoming_events(&events(), 3)
                        key=|e| e.id.clone()
                        children=move |event| {
                            let id = event.id.clone();
                            view! {
                                <div
                                    class="upcoming-event"
                                    on:click=move |_| navigate.run(Page::EventDetail(id.clone()))
                                >
                                    <span class="event-name">{event.name.clone()}</span>
                                    <span class="event-date">{short_date(&event.date_start)}</span>
                                    <span class="event-location">{event.location.clone()}</span>
                                </div>
                            }
                        }
                    />
                    <Show when=move || upcoming_events(&events(), 3).is_empty()>
                        <p class="empty-note">"No upcoming events."</p>
                    </Show>
                </section>

                <section class="dashboard-panel">
                    <h2>"High Priority"</h2>
                    <For
                        each={move || priority_tasks(&tasks.get()).into_iter().take(5).collect::<Vec<_>>()}
                        key=|t| t.id.clone()
                        children=move |task| {
                            let event_id = task.event_id.clone();
                            view! {
                                <div class="priority-task">
                                    <span class="task-title">{task.title.clone()}</span>
                                    <span class="task-event">
                                        {move || store_event_name(&store, &event_id).unwrap_or_default()}
                                    </span>
                                </div>
                            }
                        }
                    />
                    <Show when=move || priority_tasks(&tasks.get()).is_empty()>
                        <p class="empty-note">"Nothing urgent."</p>
                    </Show>
                </section>
            </div>

            <section class="dashboard-panel wide">
                <div class="panel-header">
                    <h2>"Task Queue"</h2>
                    <div class="queue-tabs">
                        {TaskStatus::COLUMNS.iter().map(|&status| view! {
                            <button
                                class=move || if queue_status.get() == status {
                                    "queue-tab active"
                                } else {
                                    "queue-tab"
                                }
                                on:click=move |_| set_queue_status.set(status)
                            >
                                {status.display_name()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
                <For
                    each=move || queue_for(&tasks.get(), queue_status.get())
                    key=|t| (t.id.clone(), t.status.as_str(), t.due_date.clone())
                    children=move |task| {
                        let due = task.due_date.as_deref().map(short_date);
                        let id_for_delete = task.id.clone();
                        view! {
                            <div class="queue-row">
                                <StatusBadge
                                    status_key=task.status.as_str()
                                    label=task.status.display_name()
                                />
                                <span class="task-title">{task.title.clone()}</span>
                                <span class="task-due">{due.unwrap_or_else(|| "No due date".to_string())}</span>
                                <RowDelete
                                    on_delete=Callback::new(move |_| delete_task(id_for_delete.clone()))
                                />
                            </div>
                        }
                    }
                />
                <Show when=move || queue_for(&tasks.get(), queue_status.get()).is_empty()>
                    <p class="empty-note">"Nothing here."</p>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskCategory, TaskPriority};

    fn make_task(id: &str, status: TaskStatus, due: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            event_id: "e1".to_string(),
            title: id.to_string(),
            description: None,
            status,
            priority: TaskPriority::Medium,
            category: TaskCategory::General,
            assigned_to: None,
            due_date: due.map(str::to_string),
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn queue_shows_only_the_selected_status_in_due_order() {
        let tasks = vec![
            make_task("done", TaskStatus::Completed, Some("2025-03-01")),
            make_task("later", TaskStatus::Todo, Some("2025-04-01")),
            make_task("soon", TaskStatus::Todo, Some("2025-03-15")),
            make_task("undated", TaskStatus::Todo, None),
            make_task("busy", TaskStatus::InProgress, Some("2025-03-20")),
        ];

        let todo_rows = queue_for(&tasks, TaskStatus::Todo);
        let todo: Vec<&str> = todo_rows
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(todo, vec!["soon", "later", "undated"]);

        let done_rows = queue_for(&tasks, TaskStatus::Completed);
        let done: Vec<&str> = done_rows
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(done, vec!["done"]);
    }
}
