//! Content Idea Editor Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContentIdeaPatch, NewContentIdea};
use crate::components::form::{input_value, select_value, textarea_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::{ContentIdea, ContentStatus, Platform};
use crate::validate::{check, FieldError, CONTENT_RULES};

#[component]
pub fn ContentFormDialog(
    event_id: String,
    idea: ReadSignal<Option<ContentIdea>>,
    on_saved: Callback<(ContentIdea, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let existing = idea.get_untracked();
    let is_edit = existing.is_some();
    let kept_status = existing.as_ref().map(|c| c.status).unwrap_or(ContentStatus::Idea);

    let (title, set_title) = signal(existing.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        existing
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let (platform, set_platform) = signal(
        existing
            .as_ref()
            .map(|c| c.platform)
            .unwrap_or(Platform::Instagram),
    );
    let (scheduled_date, set_scheduled_date) = signal(
        existing
            .as_ref()
            .and_then(|c| c.scheduled_date.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let found = check(CONTENT_RULES, |field| match field {
            "title" => title.get_untracked(),
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
            let title_v = title.get_untracked();
            let description_v = description.get_untracked();
            let scheduled_v = scheduled_date.get_untracked();

            let description_opt =
                (!description_v.trim().is_empty()).then_some(description_v.as_str());
            let scheduled_opt = (!scheduled_v.is_empty()).then_some(scheduled_v.as_str());

            let saved = match idea.get_untracked() {
                Some(current) => api::update_content_idea(
                    &current.id,
                    &ContentIdeaPatch {
                        title: &title_v,
                        description: description_opt,
                        platform: platform.get_untracked(),
                        status: kept_status,
                        scheduled_date: scheduled_opt,
                    },
                )
                .await
                .map(|c| (c, false)),
                None => api::create_content_idea(&NewContentIdea {
                    event_id: &event_id,
                    title: &title_v,
                    description: description_opt,
                    platform: platform.get_untracked(),
                    status: ContentStatus::Idea,
                    scheduled_date: scheduled_opt,
                })
                .await
                .map(|c| (c, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created {
                        "Content idea created"
                    } else {
                        "Content idea updated"
                    });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[FORM] content save failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to save content idea");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Content Idea" } else { "New Content Idea" }}</h2>

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
                </label>

                <div class="form-row">
                    <label class="form-field">
                        "Platform"
                        <select
                            prop:value=move || platform.get().as_str()
                            on:change=move |ev| {
                                if let Some(p) = Platform::from_str(&select_value(&ev)) {
                                    set_platform.set(p);
                                }
                            }
                        >
                            {Platform::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Scheduled date"
                        <input
                            type="date"
                            prop:value=move || scheduled_date.get()
                            on:input=move |ev| set_scheduled_date.set(input_value(&ev))
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
