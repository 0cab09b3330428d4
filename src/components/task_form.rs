//! Task Editor Dialog
//!
//! Create/edit form for tasks. Validation runs on submit; nothing is
//! sent until every rule passes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewTask, TaskPatch};
use crate::components::form::{input_value, select_value, textarea_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::{Event, Task, TaskCategory, TaskPriority, TaskStatus};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate::{check, FieldError, TASK_RULES};

/// Event id the dialog opens with: the caller's scope wins, then the
/// task being edited, then the first known event so an untouched picker
/// matches what the browser shows selected.
fn initial_event_choice(scoped: Option<&str>, existing: Option<&Task>, events: &[Event]) -> String {
    scoped
        .map(str::to_string)
        .or_else(|| existing.map(|t| t.event_id.clone()))
        .or_else(|| events.first().map(|e| e.id.clone()))
        .unwrap_or_default()
}

#[component]
pub fn TaskFormDialog(
    /// Preselected event when the board is scoped; None shows an event picker
    #[prop(optional_no_strip)] event_id: Option<String>,
    task: ReadSignal<Option<Task>>,
    on_saved: Callback<(Task, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let existing = task.get_untracked();
    let is_edit = existing.is_some();
    let kept_status = existing.as_ref().map(|t| t.status).unwrap_or(TaskStatus::Todo);

    let (title, set_title) = signal(existing.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        existing
            .as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let (event, set_event) = signal(initial_event_choice(
        event_id.as_deref(),
        existing.as_ref(),
        &store.events().get_untracked(),
    ));
    let (priority, set_priority) = signal(
        existing
            .as_ref()
            .map(|t| t.priority)
            .unwrap_or(TaskPriority::Medium),
    );
    let (category, set_category) = signal(
        existing
            .as_ref()
            .map(|t| t.category)
            .unwrap_or(TaskCategory::General),
    );
    let (assigned_to, set_assigned_to) = signal(
        existing
            .as_ref()
            .and_then(|t| t.assigned_to.clone())
            .unwrap_or_else(|| "Unassigned".to_string()),
    );
    let (due_date, set_due_date) = signal(
        existing
            .as_ref()
            .and_then(|t| t.due_date.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let show_event_picker = event_id.is_none();

    let submit = move |_| {
        let found = check(TASK_RULES, |field| match field {
            "title" => title.get_untracked(),
            _ => String::new(),
        });
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        // No events yet means nothing to attach the task to
        if show_event_picker && !is_edit && event.get_untracked().is_empty() {
            ctx.toast_error("Create an event first");
            return;
        }
        set_errors.set(Vec::new());
        set_saving.set(true);

        spawn_local(async move {
            let title_v = title.get_untracked();
            let description_v = description.get_untracked();
            let event_v = event.get_untracked();
            let assigned_v = assigned_to.get_untracked();
            let due_v = due_date.get_untracked();

            let description_opt =
                (!description_v.trim().is_empty()).then_some(description_v.as_str());
            let due_opt = (!due_v.is_empty()).then_some(due_v.as_str());

            let saved = match task.get_untracked() {
                Some(current) => api::update_task(
                    &current.id,
                    &TaskPatch {
                        title: &title_v,
                        description: description_opt,
                        status: kept_status,
                        priority: priority.get_untracked(),
                        category: category.get_untracked(),
                        assigned_to: &assigned_v,
                        due_date: due_opt,
                    },
                )
                .await
                .map(|t| (t, false)),
                None => api::create_task(&NewTask {
                    event_id: &event_v,
                    title: &title_v,
                    description: description_opt,
                    status: TaskStatus::Todo,
                    priority: priority.get_untracked(),
                    category: category.get_untracked(),
                    assigned_to: &assigned_v,
                    due_date: due_opt,
                })
                .await
                .map(|t| (t, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created { "Task created" } else { "Task updated" });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[FORM] task save failed: {}", err).into());
                    ctx.toast_error("Failed to save task");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Task" } else { "New Task" }}</h2>

                <label class="form-field">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="title" />
                </label>

                {show_event_picker.then(|| view! {
                    <label class="form-field">
                        "Event"
                        <select
                            prop:value=move || event.get()
                            on:change=move |ev| set_event.set(select_value(&ev))
                        >
                            <For
                                each=move || store.events().get()
                                key=|e| e.id.clone()
                                children=move |e| view! {
                                    <option value=e.id.clone()>{e.name.clone()}</option>
                                }
                            />
                        </select>
                    </label>
                })}

                <label class="form-field">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(textarea_value(&ev))
                    />
                </label>

                <div class="form-row">
                    <label class="form-field">
                        "Priority"
                        <select
                            prop:value=move || priority.get().as_str()
                            on:change=move |ev| {
                                if let Some(p) = TaskPriority::from_str(&select_value(&ev)) {
                                    set_priority.set(p);
                                }
                            }
                        >
                            {TaskPriority::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Category"
                        <select
                            prop:value=move || category.get().as_str()
                            on:change=move |ev| {
                                if let Some(c) = TaskCategory::from_str(&select_value(&ev)) {
                                    set_category.set(c);
                                }
                            }
                        >
                            {TaskCategory::ALL.iter().map(|c| view! {
                                <option value=c.as_str()>{c.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>

                <div class="form-row">
                    <label class="form-field">
                        "Assigned to"
                        <select
                            prop:value=move || assigned_to.get()
                            on:change=move |ev| set_assigned_to.set(select_value(&ev))
                        >
                            <option value="Unassigned">"Unassigned"</option>
                            <For
                                each=move || store.team_members().get()
                                key=|m| m.id.clone()
                                children=move |m| view! {
                                    <option value=m.name.clone()>{m.name.clone()}</option>
                                }
                            />
                        </select>
                    </label>

                    <label class="form-field">
                        "Due date"
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(input_value(&ev))
                        />
                    </label>
                </div>

                <div class="dialog-actions">
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="save-btn" disabled=move || saving.get() on:click=submit>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventStatus, EventType};

    fn make_event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            name: id.to_string(),
            event_type: EventType::General,
            date_start: "2025-03-01".to_string(),
            date_end: None,
            location: "Main lawn".to_string(),
            status: EventStatus::Planning,
            budget_total: 0.0,
            budget_spent: 0.0,
            description: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn make_task(event_id: &str) -> Task {
        Task {
            id: "t1".to_string(),
            event_id: event_id.to_string(),
            title: "Book the hall".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            category: TaskCategory::General,
            assigned_to: None,
            due_date: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn scoped_board_pins_its_own_event() {
        let events = vec![make_event("e1"), make_event("e2")];
        assert_eq!(initial_event_choice(Some("e2"), None, &events), "e2");
    }

    #[test]
    fn editing_keeps_the_tasks_event() {
        let events = vec![make_event("e1"), make_event("e2")];
        let task = make_task("e2");
        assert_eq!(initial_event_choice(None, Some(&task), &events), "e2");
    }

    #[test]
    fn untouched_picker_defaults_to_the_first_event() {
        let events = vec![make_event("e1"), make_event("e2")];
        assert_eq!(initial_event_choice(None, None, &events), "e1");
        assert_eq!(initial_event_choice(None, None, &[]), "");
    }
}
