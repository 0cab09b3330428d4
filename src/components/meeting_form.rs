//! Meeting Editor Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, MeetingPatch, NewMeeting};
use crate::components::form::{input_value, select_value, textarea_value, FieldMessage};
use crate::context::use_app_context;
use crate::models::Meeting;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate::{check, FieldError, MEETING_RULES};

#[component]
pub fn MeetingFormDialog(
    meeting: ReadSignal<Option<Meeting>>,
    on_saved: Callback<(Meeting, bool)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let existing = meeting.get_untracked();
    let is_edit = existing.is_some();
    let kept_attendees = existing.as_ref().map(|m| m.attendees.clone()).unwrap_or_default();

    let (title, set_title) = signal(existing.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let (date, set_date) = signal(existing.as_ref().map(|m| m.date.clone()).unwrap_or_default());
    let (location, set_location) = signal(
        existing
            .as_ref()
            .map(|m| m.location.clone())
            .unwrap_or_default(),
    );
    let (agenda, set_agenda) = signal(
        existing
            .as_ref()
            .and_then(|m| m.agenda.clone())
            .unwrap_or_default(),
    );
    let (meeting_link, set_meeting_link) = signal(
        existing
            .as_ref()
            .and_then(|m| m.meeting_link.clone())
            .unwrap_or_default(),
    );
    let (event, set_event) = signal(
        existing
            .as_ref()
            .and_then(|m| m.event_id.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let found = check(MEETING_RULES, |field| match field {
            "title" => title.get_untracked(),
            "date" => date.get_untracked(),
            "location" => location.get_untracked(),
            _ => String::new(),
        });
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_saving.set(true);

        let kept_attendees = kept_attendees.clone();
        spawn_local(async move {
            let title_v = title.get_untracked();
            let date_v = date.get_untracked();
            let location_v = location.get_untracked();
            let agenda_v = agenda.get_untracked();
            let link_v = meeting_link.get_untracked();
            let event_v = event.get_untracked();

            let agenda_opt = (!agenda_v.trim().is_empty()).then_some(agenda_v.as_str());
            let link_opt = (!link_v.trim().is_empty()).then_some(link_v.as_str());
            let event_opt = (!event_v.is_empty()).then_some(event_v.as_str());

            let saved = match meeting.get_untracked() {
                Some(current) => api::update_meeting(
                    &current.id,
                    &MeetingPatch {
                        title: &title_v,
                        date: &date_v,
                        location: &location_v,
                        agenda: agenda_opt,
                        meeting_link: link_opt,
                        event_id: event_opt,
                    },
                )
                .await
                .map(|m| (m, false)),
                None => api::create_meeting(&NewMeeting {
                    title: &title_v,
                    date: &date_v,
                    location: &location_v,
                    agenda: agenda_opt,
                    meeting_link: link_opt,
                    event_id: event_opt,
                    attendees: &kept_attendees,
                })
                .await
                .map(|m| (m, true)),
            };

            let _ = set_saving.try_set(false);
            match saved {
                Ok((record, created)) => {
                    ctx.toast_success(if created {
                        "Meeting scheduled"
                    } else {
                        "Meeting updated"
                    });
                    on_saved.run((record, created));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[FORM] meeting save failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to save meeting");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Meeting" } else { "Schedule Meeting" }}</h2>

                <label class="form-field">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(input_value(&ev))
                    />
                    <FieldMessage errors=errors field="title" />
                </label>

                <div class="form-row">
                    <label class="form-field">
                        "Date"
                        <input
                            type="datetime-local"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(input_value(&ev))
                        />
                        <FieldMessage errors=errors field="date" />
                    </label>

                    <label class="form-field">
                        "Location"
                        <input
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(input_value(&ev))
                        />
                        <FieldMessage errors=errors field="location" />
                    </label>
                </div>

                <label class="form-field">
                    "Agenda"
                    <textarea
                        prop:value=move || agenda.get()
                        on:input=move |ev| set_agenda.set(textarea_value(&ev))
                    />
                </label>

                <label class="form-field">
                    "Meeting link"
                    <input
                        type="url"
                        prop:value=move || meeting_link.get()
                        on:input=move |ev| set_meeting_link.set(input_value(&ev))
                    />
                </label>

                <label class="form-field">
                    "Related event"
                    <select
                        prop:value=move || event.get()
                        on:change=move |ev| set_event.set(select_value(&ev))
                    >
                        <option value="">"None"</option>
                        <For
                            each=move || store.events().get()
                            key=|e| e.id.clone()
                            children=move |e| view! {
                                <option value=e.id.clone()>{e.name.clone()}</option>
                            }
                        />
                    </select>
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
