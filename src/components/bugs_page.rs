//! Bugs Page
//!
//! Issue tracker table for problems with the dashboard itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate::short_date;
use crate::api;
use crate::components::{BugFormDialog, RowDelete, StatusBadge};
use crate::context::use_app_context;
use crate::models::BugIssue;

#[component]
pub fn BugsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (bugs, set_bugs) = signal(Vec::<BugIssue>::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<BugIssue>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_bugs().await {
                Ok(rows) => {
                    let _ = set_bugs.try_set(rows);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[BUGS] load failed: {}", err).into());
                    ctx.toast_error("Failed to load issues");
                }
            }
        });
    });

    let on_delete = Callback::new(move |bug_id: String| {
        spawn_local(async move {
            match api::delete_bug(&bug_id).await {
                Ok(_) => {
                    let _ = set_bugs.try_update(|rows| rows.retain(|b| b.id != bug_id));
                    ctx.toast_success("Issue deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[BUGS] delete failed: {}", err).into());
                    ctx.toast_error("Failed to delete issue");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(bug, created): (BugIssue, bool)| {
        let _ = set_bugs.try_update(|rows| {
            if created {
                rows.push(bug);
            } else if let Some(existing) = rows.iter_mut().find(|b| b.id == bug.id) {
                *existing = bug;
            }
        });
        set_show_form.set(false);
    });

    view! {
        <div class="page bugs">
            <div class="page-header">
                <h1>"Issues"</h1>
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Report Issue"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Status"</th>
                        <th>"Priority"</th>
                        <th>"Reported by"</th>
                        <th>"Reported"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || bugs.get()
                        key=|b| (b.id.clone(), b.status.as_str(), b.priority.as_str(), b.title.clone())
                        children=move |bug| {
                            let bug_for_edit = bug.clone();
                            let id_for_delete = bug.id.clone();
                            view! {
                                <tr>
                                    <td class="bug-title">{bug.title.clone()}</td>
                                    <td>
                                        <StatusBadge
                                            status_key=bug.status.as_str()
                                            label=bug.status.as_str()
                                        />
                                    </td>
                                    <td class="bug-priority">{bug.priority.as_str()}</td>
                                    <td>{bug.reported_by.clone()}</td>
                                    <td>{short_date(&bug.created_at)}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing.set(Some(bug_for_edit.clone()));
                                                set_show_form.set(true);
                                            }
                                        >
                                            "✎"
                                        </button>
                                        <RowDelete
                                            on_delete=Callback::new(move |_| on_delete.run(id_for_delete.clone()))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || bugs.get().is_empty()>
                <p class="empty-note">"No known issues. Suspicious."</p>
            </Show>

            <Show when=move || show_form.get()>
                <BugFormDialog
                    bug=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}
