//! Bug Report Editor Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, BugIssuePatch, NewBugIssue};
use crate::components::form::{input_value, select_value, textarea_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::{BugIssue, BugPriority, BugStatus};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate::{check, FieldError, BUG_RULES};

#[component]
pub fn BugFormDialog(
    bug: ReadSignal<Option<BugIssue>>,
    on_saved: Callback<(BugIssue, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let existing = bug.get_untracked();
    let is_edit = existing.is_some();

    let (title, set_title) = signal(existing.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        existing
            .as_ref()
            .map(|b| b.description.clone())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(
        existing.as_ref().map(|b| b.status).unwrap_or(BugStatus::Open),
    );
    let (priority, set_priority) = signal(
        existing
            .as_ref()
            .map(|b| b.priority)
            .unwrap_or(BugPriority::Medium),
    );
    let (reported_by, set_reported_by) = signal(
        existing
            .as_ref()
            .map(|b| b.reported_by.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let found = check(BUG_RULES, |field| match field {
            "title" => title.get_untracked(),
            "description" => description.get_untracked(),
            "reported_by" => reported_by.get_untracked(),
            _ => String::new(),
        });
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_saving.set(true);

        spawn_local(async move {
            let title_v = title.get_untracked();
            let description_v = description.get_untracked();
            let reporter_v = reported_by.get_untracked();

            let saved = match bug.get_untracked() {
                Some(current) => api::update_bug(
                    &current.id,
                    &BugIssuePatch {
                        title: &title_v,
                        description: &description_v,
                        status: status.get_untracked(),
                        priority: priority.get_untracked(),
                        reported_by: &reporter_v,
                    },
                )
                .await
                .map(|b| (b, false)),
                None => api::create_bug(&NewBugIssue {
                    title: &title_v,
                    description: &description_v,
                    status: status.get_untracked(),
                    priority: priority.get_untracked(),
                    reported_by: &reporter_v,
                })
                .await
                .map(|b| (b, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created { "Issue reported" } else { "Issue updated" });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[FORM] bug save failed: {}", err).into());
                    ctx.toast_error("Failed to save issue");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Issue" } else { "Report Issue" }}</h2>

                <label class="form-field">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="title" />
                </label>

                <label class="form-field">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(textarea_value(&ev))
                    />
                    <FieldMessage errors=errors field="description" />
                </label>

                <div class="form-row">
                    <label class="form-field">
                        "Status"
                        <select
                            prop:value=move || status.get().as_str()
                            on:change=move |ev| {
                                if let Some(s) = BugStatus::from_str(&select_value(&ev)) {
                                    set_status.set(s);
                                }
                            }
                        >
                            {BugStatus::ALL.iter().map(|s| view! {
                                <option value=s.as_str()>{s.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Priority"
                        <select
                            prop:value=move || priority.get().as_str()
                            on:change=move |ev| {
                                if let Some(p) = BugPriority::from_str(&select_value(&ev)) {
                                    set_priority.set(p);
                                }
                            }
                        >
                            {BugPriority::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>

                <label class="form-field">
                    "Reported by"
                    <select
                        prop:value=move || reported_by.get()
                        on:change=move |ev| set_reported_by.set(select_value(&ev))
                    >
                        <option value="">"Select a member"</option>
                        <For
                            each=move || store.team_members().get()
                            key=|m| m.id.clone()
                            children=move |m| view! {
                                <option value=m.name.clone()>{m.name.clone()}</option>
                            }
                        />
                    </select>
                    <FieldMessage errors=errors field="reported_by" />
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
