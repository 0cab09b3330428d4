//! Budget Tracker
//!
//! Per-event budget table with estimated/actual totals and the share of
//! the event allocation consumed so far.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate::{budget_totals, percent_used, remaining};
use crate::api;
use crate::components::{BudgetFormDialog, RowDelete};
use crate::context::use_app_context;
use crate::models::BudgetItem;

#[component]
pub fn BudgetTracker(event_id: String, allocated: f64) -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<BudgetItem>::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<BudgetItem>);

    let scope = event_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let scope = scope.clone();
        spawn_local(async move {
            match api::list_budget_items(&scope).await {
                Ok(rows) => {
                    let _ = set_items.try_set(rows);
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[BUDGET] load failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to load budget items");
                }
            }
        });
    });

    let totals = move || budget_totals(&items.get());

    let on_delete = Callback::new(move |item_id: String| {
        spawn_local(async move {
            match api::delete_budget_item(&item_id).await {
                Ok(_) => {
                    let _ = set_items.try_update(|rows| rows.retain(|i| i.id != item_id));
                    ctx.toast_success("Budget item deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[BUDGET] delete failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to delete budget item");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(item, created): (BudgetItem, bool)| {
        let _ = set_items.try_update(|rows| {
            if created {
                rows.push(item);
            } else if let Some(existing) = rows.iter_mut().find(|i| i.id == item.id) {
                *existing = item;
            }
        });
        set_show_form.set(false);
    });

    let form_event_id = event_id.clone();

    view! {
        <div class="budget-tracker">
            <div class="budget-summary">
                <div class="summary-stat">
                    <span class="stat-label">"Allocated"</span>
                    <span class="stat-value">{format!("Rs {:.0}", allocated)}</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-label">"Estimated"</span>
                    <span class="stat-value">{move || format!("Rs {:.0}", totals().estimated)}</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-label">"Spent"</span>
                    <span class="stat-value">{move || format!("Rs {:.0}", totals().actual)}</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-label">"Remaining"</span>
                    <span class="stat-value">
                        {move || format!("Rs {:.0}", remaining(allocated, totals().actual))}
                    </span>
                </div>
                <div class="summary-stat">
                    <span class="stat-label">"Used"</span>
                    <span class="stat-value">
                        {move || percent_used(totals().actual, allocated).to_string()}
                    </span>
                </div>
            </div>

            <div class="board-toolbar">
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Add Budget Item"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th>"Category"</th>
                        <th>"Estimated"</th>
                        <th>"Actual"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|i| (i.id.clone(), i.description.clone(), i.estimated_cost.to_bits(), i.actual_cost.to_bits(), i.category.clone())
                        children=move |item| {
                            let item_for_edit = item.clone();
                            let id_for_delete = item.id.clone();
                            view! {
                                <tr>
                                    <td>{item.description.clone()}</td>
                                    <td>{item.category.clone()}</td>
                                    <td>{format!("Rs {:.0}", item.estimated_cost)}</td>
                                    <td>{format!("Rs {:.0}", item.actual_cost)}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing.set(Some(item_for_edit.clone()));
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

            <Show when=move || items.get().is_empty()>
                <p class="empty-note">"No budget items yet."</p>
            </Show>

            <Show when=move || show_form.get()>
                <BudgetFormDialog
                    event_id=form_event_id.clone()
                    item=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}
