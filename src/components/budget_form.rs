//! Budget Line Editor Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, BudgetItemPatch, NewBudgetItem};
use crate::components::form::{input_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::BudgetItem;
use crate::validate::{check, FieldError, BUDGET_RULES};

#[component]
pub fn BudgetFormDialog(
    event_id: String,
    item: ReadSignal<Option<BudgetItem>>,
    on_saved: Callback<(BudgetItem, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let existing = item.get_untracked();
    let is_edit = existing.is_some();

    let (description, set_description) = signal(
        existing
            .as_ref()
            .map(|i| i.description.clone())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        existing
            .as_ref()
            .map(|i| i.category.clone())
            .unwrap_or_default(),
    );
    let (estimated, set_estimated) = signal(
        existing
            .as_ref()
            .map(|i| i.estimated_cost.to_string())
            .unwrap_or_default(),
    );
    let (actual, set_actual) = signal(
        existing
            .as_ref()
            .map(|i| i.actual_cost.to_string())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let found = check(BUDGET_RULES, |field| match field {
            "description" => description.get_untracked(),
            "category" => category.get_untracked(),
            "estimated_cost" => estimated.get_untracked(),
            "actual_cost" => actual.get_untracked(),
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
            let description_v = description.get_untracked();
            let category_v = category.get_untracked();
            let estimated_v = estimated.get_untracked().trim().parse::<f64>().unwrap_or(0.0);
            let actual_v = actual.get_untracked().trim().parse::<f64>().unwrap_or(0.0);

            let saved = match item.get_untracked() {
                Some(current) => api::update_budget_item(
                    &current.id,
                    &BudgetItemPatch {
                        description: &description_v,
                        estimated_cost: estimated_v,
                        actual_cost: actual_v,
                        category: &category_v,
                    },
                )
                .await
                .map(|i| (i, false)),
                None => api::create_budget_item(&NewBudgetItem {
                    event_id: &event_id,
                    description: &description_v,
                    estimated_cost: estimated_v,
                    actual_cost: actual_v,
                    category: &category_v,
                })
                .await
                .map(|i| (i, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created {
                        "Budget item created"
                    } else {
                        "Budget item updated"
                    });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[FORM] budget save failed: {}", err).into());
                    ctx.toast_error("Failed to save budget item");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Budget Item" } else { "New Budget Item" }}</h2>

                <label class="form-field">
                    "Description"
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="description" />
                </label>

                <label class="form-field">
                    "Category"
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="category" />
                </label>

                <div class="form-row">
                    <label class="form-field">
                        "Estimated cost"
                        <input
                            type="number"
                            prop:value=move || estimated.get()
                            on:input=move |ev| set_estimated.set(input_value(&ev))
                        />
                        <FieldMessage errors=errors field="estimated_cost" />
                    </label>

                    <label class="form-field">
                        "Actual cost"
                        <input
                            type="number"
                            prop:value=move || actual.get()
                            on:input=move |ev| set_actual.set(input_value(&ev))
                        />
                        <FieldMessage errors=errors field="actual_cost" />
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
