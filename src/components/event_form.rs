//! Event Editor Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, EventPatch, NewEvent};
use crate::components::form::{input_value, select_value, textarea_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::{Event, EventStatus, EventType};
use crate::validate::{check, FieldError, EVENT_RULES};

#[component]
pub fn EventFormDialog(
    event: ReadSignal<Option<Event>>,
    on_saved: Callback<(Event, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let existing = event.get_untracked();
    let is_edit = existing.is_some();
    let kept_spent = existing.as_ref().map(|e| e.budget_spent).unwrap_or(0.0);

    let (name, set_name) = signal(existing.as_ref().map(|e| e.name.clone()).unwrap_or_default());
    let (event_type, set_event_type) = signal(
        existing
            .as_ref()
            .map(|e| e.event_type)
            .unwrap_or(EventType::General),
    );
    let (date_start, set_date_start) = signal(
        existing
            .as_ref()
            .map(|e| e.date_start.clone())
            .unwrap_or_default(),
    );
    let (date_end, set_date_end) = signal(
        existing
            .as_ref()
            .and_then(|e| e.date_end.clone())
            .unwrap_or_default(),
    );
    let (location, set_location) = signal(
        existing
            .as_ref()
            .map(|e| e.location.clone())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(
        existing
            .as_ref()
            .map(|e| e.status)
            .unwrap_or(EventStatus::Planning),
    );
    let (budget_total, set_budget_total) = signal(
        existing
            .as_ref()
            .map(|e| e.budget_total.to_string())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        existing
            .as_ref()
            .and_then(|e| e.description.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let found = check(EVENT_RULES, |field| match field {
            "name" => name.get_untracked(),
            "location" => location.get_untracked(),
            "budget_total" => budget_total.get_untracked(),
            _ => String::new(),
        });
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_saving.set(true);

        spawn_local(async move {
            let name_v = name.get_untracked();
            let start_v = date_start.get_untracked();
            let end_v = date_end.get_untracked();
            let location_v = location.get_untracked();
            let description_v = description.get_untracked();
            let budget_v = budget_total.get_untracked().trim().parse::<f64>().unwrap_or(0.0);

            let end_opt = (!end_v.is_empty()).then_some(end_v.as_str());
            let description_opt =
                (!description_v.trim().is_empty()).then_some(description_v.as_str());

            let saved = match event.get_untracked() {
                Some(current) => api::update_event(
                    &current.id,
                    &EventPatch {
                        name: &name_v,
                        event_type: event_type.get_untracked(),
                        date_start: &start_v,
                        date_end: end_opt,
                        location: &location_v,
                        status: status.get_untracked(),
                        budget_total: budget_v,
                        description: description_opt,
                    },
                )
                .await
                .map(|e| (e, false)),
                None => api::create_event(&NewEvent {
                    name: &name_v,
                    event_type: event_type.get_untracked(),
                    date_start: &start_v,
                    date_end: end_opt,
                    location: &location_v,
                    status: status.get_untracked(),
                    budget_total: budget_v,
                    budget_spent: kept_spent,
                    description: description_opt,
                })
                .await
                .map(|e| (e, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created { "Event created" } else { "Event updated" });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[FORM] event save failed: {}", err).into());
                    ctx.toast_error("Failed to save event");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Event" } else { "New Event" }}</h2>

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
                        "Type"
                        <select
                            prop:value=move || event_type.get().as_str()
                            on:change=move |ev| {
                                if let Some(t) = EventType::from_str(&select_value(&ev)) {
                                    set_event_type.set(t);
                                }
                            }
                        >
                            {EventType::ALL.iter().map(|t| view! {
                                <option value=t.as_str()>{t.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Status"
                        <select
                            prop:value=move || status.get().as_str()
                            on:change=move |ev| {
                                if let Some(s) = EventStatus::from_str(&select_value(&ev)) {
                                    set_status.set(s);
                                }
                            }
                        >
                            {EventStatus::ALL.iter().map(|s| view! {
                                <option value=s.as_str()>{s.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>

                <div class="form-row">
                    <label class="form-field">
                        "Start date"
                        <input
                            type="date"
                            prop:value=move || date_start.get()
                            on:input=move |ev| set_date_start.set(input_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "End date"
                        <input
                            type="date"
                            prop:value=move || date_end.get()
                            on:input=move |ev| set_date_end.set(input_value(&ev))
                        />
                    </label>
                </div>

                <label class="form-field">
                    "Location"
                    <input
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="location" />
                </label>

                <label class="form-field">
                    "Total budget"
                    <input
                        type="number"
                        prop:value=move || budget_total.get()
                        on:input=move |ev| set_budget_total.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="budget_total" />
                </label>

                <label class="form-field">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(textarea_value(&ev))
                    />
                </label>

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
