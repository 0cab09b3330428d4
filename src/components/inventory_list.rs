//! Inventory List
//!
//! Per-event equipment checklist with a quick status cycle on each row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, InventoryItemPatch};
use crate::components::{InventoryFormDialog, RowDelete, StatusBadge};
use crate::context::use_app_context;
use crate::models::{InventoryItem, InventoryStatus};

fn next_status(status: InventoryStatus) -> InventoryStatus {
    match status {
        InventoryStatus::Needed => InventoryStatus::Acquired,
        InventoryStatus::Acquired => InventoryStatus::Available,
        InventoryStatus::Available => InventoryStatus::Needed,
    }
}

#[component]
pub fn InventoryList(event_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<InventoryItem>);

    let scope = event_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let scope = scope.clone();
        spawn_local(async move {
            match api::list_inventory(&scope).await {
                Ok(rows) => {
                    let _ = set_items.try_set(rows);
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[INVENTORY] load failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to load inventory");
                }
            }
        });
    });

    // Cycle needed -> acquired -> available -> needed; revert on failure
    let on_cycle = Callback::new(move |item: InventoryItem| {
        let advanced = next_status(item.status);
        let previous = item.status;
        let _ = set_items.try_update(|rows| {
            if let Some(row) = rows.iter_mut().find(|i| i.id == item.id) {
                row.status = advanced;
            }
        });
        spawn_local(async move {
            let patch = InventoryItemPatch {
                name: &item.name,
                quantity: item.quantity,
                status: advanced,
            };
            if let Err(err) = api::update_inventory_item(&item.id, &patch).await {
                web_sys::console::warn_1(
                    &format!("[INVENTORY] status update failed: {}", err).into(),
                );
                ctx.toast_error("Failed to update item");
                let _ = set_items.try_update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|i| i.id == item.id) {
                        row.status = previous;
                    }
                });
            }
        });
    });

    let on_delete = Callback::new(move |item_id: String| {
        spawn_local(async move {
            match api::delete_inventory_item(&item_id).await {
                Ok(_) => {
                    let _ = set_items.try_update(|rows| rows.retain(|i| i.id != item_id));
                    ctx.toast_success("Item deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[INVENTORY] delete failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to delete item");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(item, created): (InventoryItem, bool)| {
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
        <div class="inventory-list">
            <div class="board-toolbar">
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Add Item"
                </button>
            </div>

            <ul class="item-rows">
                <For
                    each=move || items.get()
                    key=|i| (i.id.clone(), i.name.clone(), i.quantity, i.status.as_str())
                    children=move |item| {
                        let item_for_cycle = item.clone();
                        let item_for_edit = item.clone();
                        let id_for_delete = item.id.clone();
                        view! {
                            <li class="item-row">
                                <span class="item-name">{item.name.clone()}</span>
                                <span class="item-quantity">{format!("x{}", item.quantity)}</span>
                                <button
                                    class="status-cycle"
                                    on:click=move |_| on_cycle.run(item_for_cycle.clone())
                                >
                                    <StatusBadge
                                        status_key=item.status.as_str()
                                        label=item.status.as_str()
                                    />
                                </button>
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
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || items.get().is_empty()>
                <p class="empty-note">"No items yet."</p>
            </Show>

            <Show when=move || show_form.get()>
                <InventoryFormDialog
                    event_id=form_event_id.clone()
                    item=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}
