//! Content Idea Board
//!
//! Drag board for an event's content pipeline. Same optimistic move and
//! reconcile-on-failure behavior as the task board, without page filters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_dnd::*;

use crate::aggregate::short_date;
use crate::api;
use crate::board::{BoardState, Move, MoveOutcome};
use crate::components::kanban_board::ColumnSlot;
use crate::components::{ContentFormDialog, RowDelete};
use crate::context::use_app_context;
use crate::models::{BoardStatus, ContentIdea, ContentStatus};

/// Content pipeline board for a single event
#[component]
pub fn ContentBoard(event_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (board, set_board) = signal(BoardState::<ContentIdea>::default());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<ContentIdea>);

    let scope = event_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let scope = scope.clone();
        spawn_local(async move {
            match api::list_content_by_event(&scope).await {
                Ok(ideas) => {
                    let _ = set_board.try_update(|b| b.set_records(ideas));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[BOARD] content load failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to load content ideas");
                }
            }
        });
    });

    let dnd = create_dnd_signals();
    let scope = event_id.clone();
    bind_document_listeners(dnd, move |record_id, slot| {
        let Some(&destination_status) = ContentStatus::COLUMNS.get(slot.column) else {
            return;
        };
        let snapshot = board.get_untracked();
        let Some(record) = snapshot.records().iter().find(|c| c.id == record_id) else {
            return;
        };
        let source_status = record.status;
        let Some(source_index) = snapshot
            .column_records(source_status)
            .iter()
            .position(|c| c.id == record_id)
        else {
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
                match api::update_content_status(&change.record_id, change.new_status).await {
                    Ok(_) => {
                        ctx.toast_success(format!("Moved to {}", change.new_status.display_name()));
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[BOARD] content status update failed: {}", err).into(),
                        );
                        ctx.toast_error("Failed to update status");
                        match api::list_content_by_event(&scope).await {
                            Ok(ideas) => {
                                let _ = set_board.try_update(|b| b.set_records(ideas));
                            }
                            Err(err) => {
                                web_sys::console::warn_1(
                                    &format!("[BOARD] content reload failed: {}", err).into(),
                                );
                                ctx.toast_error("Failed to reload content ideas");
                            }
                        }
                    }
                }
            });
        }
    });

    let on_delete = Callback::new(move |idea_id: String| {
        spawn_local(async move {
            match api::delete_content_idea(&idea_id).await {
                Ok(_) => {
                    let _ = set_board.try_update(|b| b.remove(&idea_id));
                    ctx.toast_success("Content idea deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[BOARD] content delete failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to delete content idea");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(idea, created): (ContentIdea, bool)| {
        let _ = set_board.try_update(|b| {
            if created {
                b.push(idea);
            } else {
                b.replace(idea);
            }
        });
        set_show_form.set(false);
    });

    let form_event_id = event_id.clone();

    view! {
        <div class="board">
            <div class="board-toolbar">
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Add Content"
                </button>
            </div>

            <div class="board-columns">
                {ContentStatus::COLUMNS.iter().enumerate().map(|(col_idx, status)| {
                    let status = *status;
                    let column = move || board.get().column_records(status);
                    view! {
                        <div class="board-column">
                            <div class="board-column-header">
                                <h3>{status.display_name()}</h3>
                                <span class="column-count">{move || board.get().column_len(status)}</span>
                            </div>

                            <ColumnSlot dnd=dnd column=col_idx index=0 />

                            <For
                                each={move || column().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(i, c)| (c.id.clone(), *i, c.title.clone(), c.platform.as_str(), c.scheduled_date.clone())
                                children=move |(i, idea)| {
                                    let id = idea.id.clone();
                                    let on_mousedown = make_on_mousedown(dnd, id.clone());
                                    let is_dragging = {
                                        let id = id.clone();
                                        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
                                    };
                                    let card_class = move || {
                                        if is_dragging() { "board-card dragging" } else { "board-card" }
                                    };
                                    let scheduled = idea.scheduled_date.as_deref().map(short_date);
                                    let idea_for_edit = idea.clone();
                                    let id_for_delete = idea.id.clone();
                                    view! {
                                        <div class=card_class on:mousedown=on_mousedown>
                                            <div class="card-header">
                                                <span class="card-title">{idea.title.clone()}</span>
                                                <button
                                                    class="edit-btn"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        set_editing.set(Some(idea_for_edit.clone()));
                                                        set_show_form.set(true);
                                                    }
                                                >
                                                    "✎"
                                                </button>
                                                <RowDelete
                                                    on_delete=Callback::new(move |_| on_delete.run(id_for_delete.clone()))
                                                />
                                            </div>
                                            <div class="card-meta">
                                                <span class="card-platform">{idea.platform.as_str()}</span>
                                                {scheduled.map(|d| view! { <span class="card-due">{d}</span> })}
                                            </div>
                                        </div>
                                        <ColumnSlot dnd=dnd column=col_idx index=i + 1 />
                                    }
                                }
                            />
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || show_form.get()>
                <ContentFormDialog
                    event_id=form_event_id.clone()
                    idea=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}
