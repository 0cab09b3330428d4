//! Inventory Item Editor Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, InventoryItemPatch, NewInventoryItem};
use crate::components::form::{input_value, select_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::{InventoryItem, InventoryStatus};
use crate::validate::{check, FieldError, INVENTORY_RULES};

#[component]
pub fn InventoryFormDialog(
    event_id: String,
    item: ReadSignal<Option<InventoryItem>>,
    on_saved: Callback<(InventoryItem, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let existing = item.get_untracked();
    let is_edit = existing.is_some();

    let (name, set_name) = signal(existing.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (quantity, set_quantity) = signal(
        existing
            .as_ref()
            .map(|i| i.quantity.to_string())
            .unwrap_or_else(|| "1".to_string()),
    );
    let (status, set_status) = signal(
        existing
            .as_ref()
            .map(|i| i.status)
            .unwrap_or(InventoryStatus::Needed),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let found = check(INVENTORY_RULES, |field| match field {
            "name" => name.get_untracked(),
            "quantity" => quantity.get_untracked(),
            _ => String::new(),
        });
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_saving.set(true);

        let event_id = event_id.clone();
        spawn_local(async move {
            let name_v = name.get_untracked();
            let quantity_v = quantity.get_untracked().trim().parse::<i64>().unwrap_or(1);

            let saved = match item.get_untracked() {
                Some(current) => api::update_inventory_item(
                    &current.id,
                    &InventoryItemPatch {
                        name: &name_v,
                        quantity: quantity_v,
                        status: status.get_untracked(),
                    },
                )
                .await
                .map(|i| (i, false)),
                None => api::create_inventory_item(&NewInventoryItem {
                    event_id: &event_id,
                    name: &name_v,
                    quantity: quantity_v,
                    status: status.get_untracked(),
                })
                .await
                .map(|i| (i, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created { "Item added" } else { "Item updated" });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[FORM] inventory save failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to save item");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Item" } else { "New Item" }}</h2>

                <label class="form-field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="name" />
                </label>

                <div class="form-row">
                    <label class="form-field">
                        "Quantity"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(input_value(&ev))
                        />
                        <FieldMessage errors=errors field="quantity" />
                    </label>

                    <label class="form-field">
                        "Status"
                        <select
                            prop:value=move || status.get().as_str()
                            on:change=move |ev| {
                                if let Some(s) = InventoryStatus::from_str(&select_value(&ev)) {
                                    set_status.set(s);
                                }
                            }
                        >
                            {InventoryStatus::ALL.iter().map(|s| view! {
                                <option value=s.as_str()>{s.as_str()}</option>
                            }).collect_view()}
                        </select>
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
