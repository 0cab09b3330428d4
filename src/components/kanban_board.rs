//! Task Kanban Board
//!
//! Status-column view of tasks with drag-driven moves. Drops apply to
//! local state immediately; the status patch runs in the background and
//! a failed patch reloads the authoritative list instead of leaving the
//! optimistic value in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_dnd::*;

use crate::api;
use crate::board::{BoardState, Move, MoveOutcome};
use crate::components::{RowDelete, TaskFormDialog};
use crate::context::use_app_context;
use crate::models::{BoardStatus, Task, TaskStatus};
use crate::store::{store_event_name, use_app_store};
use crate::aggregate::short_date;

/// Column records after the page-level filters, display order.
fn visible_tasks(
    board: &BoardState<Task>,
    status: TaskStatus,
    event: &str,
    priority: &str,
    assignee: &str,
) -> Vec<Task> {
    board
        .column_records(status)
        .into_iter()
        .filter(|t| event == "all" || t.event_id == event)
        .filter(|t| priority == "all" || t.priority.as_str() == priority)
        .filter(|t| assignee == "all" || t.assigned_to.as_deref() == Some(assignee))
        .collect()
}

/// Kanban board over tasks, scoped to one event or to all of them.
///
/// Filter signals carry "all" or a concrete event id / priority wire
/// value / assignee name.
#[component]
pub fn TaskBoard(
    #[prop(optional_no_strip)] event_id: Option<String>,
    event_filter: ReadSignal<String>,
    priority_filter: ReadSignal<String>,
    assignee_filter: ReadSignal<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (board, set_board) = signal(BoardState::<Task>::default());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<Task>);

    let show_event = event_id.is_none();

    // Load tasks for the board's scope; re-runs on the global reload trigger
    let scope = event_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let scope = scope.clone();
        spawn_local(async move {
            let loaded = match &scope {
                Some(id) => api::list_tasks_by_event(id).await,
                None => api::list_tasks().await,
            };
            match loaded {
                Ok(tasks) => {
                    let _ = set_board.try_set(BoardState::new(tasks));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[BOARD] task load failed: {}", err).into());
                    ctx.toast_error("Failed to load tasks");
                }
            }
        });
    });

    let visible = move |status: TaskStatus| {
        visible_tasks(
            &board.get(),
            status,
            &event_filter.get(),
            &priority_filter.get(),
            &assignee_filter.get(),
        )
    };

    // Drop handling: optimistic local apply, then persist, reconcile on failure
    let dnd = create_dnd_signals();
    let scope = event_id.clone();
    bind_document_listeners(dnd, move |record_id, slot| {
        let Some(&destination_status) = TaskStatus::COLUMNS.get(slot.column) else {
            return;
        };
        let snapshot = board.get_untracked();
        let Some(record) = snapshot.records().iter().find(|t| t.id == record_id) else {
            return;
        };
        let source_status = record.status;
        let source_column = visible_tasks(
            &snapshot,
            source_status,
            &event_filter.get_untracked(),
            &priority_filter.get_untracked(),
            &assignee_filter.get_untracked(),
        );
        let Some(source_index) = source_column.iter().position(|t| t.id == record_id) else {
            return;
        };

        let mv = Move {
            record_id,
            source_status,
            source_index,
            destination_status,
            destination_index: slot.index,
        };
        let outcome = set_board
            .try_update(|b| b.apply_move(&mv))
            .unwrap_or(MoveOutcome::NoOp);

        if let MoveOutcome::Moved(change) = outcome {
            let scope = scope.clone();
            spawn_local(async move {
                match api::update_task_status(&change.record_id, change.new_status).await {
                    Ok(_) => {
                        ctx.toast_success(format!("Moved to {}", change.new_status.display_name()));
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[BOARD] status update failed: {}", err).into(),
                        );
                        ctx.toast_error("Failed to update status");
                        // Reconcile with the store rather than keep the optimistic value
                        let fresh = match &scope {
                            Some(id) => api::list_tasks_by_event(id).await,
                            None => api::list_tasks().await,
                        };
                        match fresh {
                            Ok(tasks) => {
                                let _ = set_board.try_update(|b| b.set_records(tasks));
                            }
                            Err(err) => {
                                web_sys::console::warn_1(
                                    &format!("[BOARD] reload failed: {}", err).into(),
                                );
                                ctx.toast_error("Failed to reload tasks");
                            }
                        }
                    }
                }
            });
        }
    });

    let on_edit = Callback::new(move |task: Task| {
        set_editing.set(Some(task));
        set_show_form.set(true);
    });

    let on_delete = Callback::new(move |task_id: String| {
        spawn_local(async move {
            match api::delete_task(&task_id).await {
                Ok(_) => {
                    let _ = set_board.try_update(|b| b.remove(&task_id));
                    ctx.toast_success("Task deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[BOARD] delete failed: {}", err).into());
                    ctx.toast_error("Failed to delete task");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(task, created): (Task, bool)| {
        let _ = set_board.try_update(|b| {
            if created {
                b.push(task);
            } else {
                b.replace(task);
            }
        });
        set_show_form.set(false);
    });

    let form_event_id = event_id.clone();

    view! {
        <div class="board">
            <div class="board-toolbar">
                <span class="board-count">
                    {move || format!("{} tasks", board.get().len())}
                </span>
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Add Task"
                </button>
            </div>

            <div class="board-columns">
                {TaskStatus::COLUMNS.iter().enumerate().map(|(col_idx, status)| {
                    let status = *status;
                    view! {
                        <div class="board-column">
                            <div class="board-column-header">
                                <h3>{status.display_name()}</h3>
                                <span class="column-count">{move || visible(status).len()}</span>
                            </div>

                            <ColumnSlot dnd=dnd column=col_idx index=0 />

                            <For
                                each={move || visible(status).into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(i, t)| (t.id.clone(), *i, t.title.clone(), t.priority.as_str(), t.due_date.clone(), t.assigned_to.clone())
                                children=move |(i, task)| {
                                    let id = task.id.clone();
                                    let on_mousedown = make_on_mousedown(dnd, id.clone());
                                    let is_dragging = {
                                        let id = id.clone();
                                        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
                                    };
                                    let card_class = move || {
                                        if is_dragging() { "board-card dragging" } else { "board-card" }
                                    };
                                    view! {
                                        <div class=card_class on:mousedown=on_mousedown>
                                            <TaskCard
                                                task=task
                                                show_event=show_event
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        </div>
                                        <ColumnSlot dnd=dnd column=col_idx index=i + 1 />
                                    }
                                }
                            />
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || board.get().is_empty()>
                <p class="empty-note">"No tasks yet."</p>
            </Show>

            <Show when=move || show_form.get()>
                <TaskFormDialog
                    event_id=form_event_id.clone()
                    task=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}

/// One task card; drag handlers live on the wrapper in the column
#[component]
fn TaskCard(
    task: Task,
    show_event: bool,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();
    let event_id_for_name = task.event_id.clone();
    let event_name = move || {
        show_event
            .then(|| store_event_name(&store, &event_id_for_name))
            .flatten()
    };
    let priority_class = format!("priority-dot {}", task.priority.as_str());
    let due = task.due_date.as_deref().map(short_date);
    let assignee = task
        .assigned_to
        .clone()
        .filter(|a| !a.is_empty() && a != "Unassigned");
    let task_for_edit = task.clone();
    let id_for_delete = task.id.clone();

    view! {
        <div class="card-header">
            <span class=priority_class></span>
            <span class="card-title">{task.title.clone()}</span>
            <button
                class="edit-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(task_for_edit.clone());
                }
            >
                "✎"
            </button>
            <RowDelete
                on_delete=Callback::new(move |_| on_delete.run(id_for_delete.clone()))
            />
        </div>
        <div class="card-meta">
            {move || event_name().map(|name| view! { <span class="card-event">{name}</span> })}
            {due.map(|d| view! { <span class="card-due">{d}</span> })}
            {assignee.map(|a| view! { <span class="card-assignee">{a}</span> })}
        </div>
    }
}

/// Drop slot between cards; highlights while it is the active target
#[component]
pub fn ColumnSlot(dnd: DndSignals, column: usize, index: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, column, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(dnd.drop_slot_read.get(), Some(slot) if slot.column == column && slot.index == index)
    };
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
