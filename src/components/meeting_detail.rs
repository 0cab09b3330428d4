//! Meeting Detail Page
//!
//! Agenda, attendance and the autosaving minutes editor for a single
//! meeting. Attendance toggles apply locally first and roll back to the
//! previous list when the write fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate::short_date;
use crate::api;
use crate::app::Page;
use crate::components::MinutesEditor;
use crate::context::use_app_context;
use crate::models::Meeting;
use crate::store::{store_event_name, use_app_store, AppStateStoreFields};

/// A toggled attendee list: present members drop out, absent ones join
fn toggle_attendee(attendees: &[String], name: &str) -> Vec<String> {
    if attendees.iter().any(|a| a == name) {
        attendees.iter().filter(|a| *a != name).cloned().collect()
    } else {
        let mut next = attendees.to_vec();
        next.push(name.to_string());
        next
    }
}

#[component]
pub fn MeetingDetailPage(meeting_id: String, navigate: Callback<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (meeting, set_meeting) = signal(None::<Meeting>);
    let (loaded, set_loaded) = signal(false);

    let scope = meeting_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let scope = scope.clone();
        spawn_local(async move {
            match api::get_meeting(&scope).await {
                Ok(found) => {
                    let _ = set_meeting.try_set(found);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[MEETING] load failed: {}", err).into());
                    ctx.toast_error("Failed to load meeting");
                }
            }
            let _ = set_loaded.try_set(true);
        });
    });

    let toggle_id = meeting_id.clone();
    let on_toggle = Callback::new(move |name: String| {
        let Some(current) = meeting.get_untracked() else {
            return;
        };
        let previous = current.attendees.clone();
        let next = toggle_attendee(&previous, &name);
        let _ = set_meeting.try_update(|m| {
            if let Some(m) = m.as_mut() {
                m.attendees = next.clone();
            }
        });
        let meeting_db_id = toggle_id.clone();
        spawn_local(async move {
            if let Err(err) = api::update_attendees(&meeting_db_id, &next).await {
                web_sys::console::warn_1(
                    &format!("[MEETING] attendance update failed: {}", err).into(),
                );
                ctx.toast_error("Failed to update attendance");
                let _ = set_meeting.try_update(|m| {
                    if let Some(m) = m.as_mut() {
                        m.attendees = previous;
                    }
                });
            }
        });
    });

    let editor_id = meeting_id.clone();

    view! {
        <div class="page meeting-detail">
            <button class="back-btn" on:click=move |_| navigate.run(Page::Meetings)>
                "← Meetings"
            </button>

            <Show when=move || loaded.get() && meeting.get().is_none()>
                <div class="not-found">
                    <h2>"Meeting not found"</h2>
                    <p>"It may have been deleted."</p>
                </div>
            </Show>

            // Header and agenda re-render with the record; the attendance
            // checkboxes and the minutes editor mount once so toggling
            // attendance cannot wipe an in-flight minutes buffer.
            {move || meeting.get().map(|m| {
                let event_label = m
                    .event_id
                    .as_deref()
                    .and_then(|id| store_event_name(&store, id));
                view! {
                    <div class="meeting-detail-header">
                        <h1>{m.title.clone()}</h1>
                        <span class="meeting-date">{short_date(&m.date)}</span>
                        <span class="meeting-location">{m.location.clone()}</span>
                        {event_label.map(|name| view! { <span class="meeting-event">{name}</span> })}
                        {m.meeting_link.clone().map(|link| view! {
                            <a class="meeting-link" href=link.clone() target="_blank">{link.clone()}</a>
                        })}
                    </div>

                    {m.agenda.clone().map(|agenda| view! {
                        <section class="meeting-agenda">
                            <h3>"Agenda"</h3>
                            <p>{agenda}</p>
                        </section>
                    })}
                }
            })}

            <Show when=move || meeting.get().is_some()>
                <section class="meeting-attendance">
                    <h3>"Attendance"</h3>
                    <div class="attendance-grid">
                        <For
                            each=move || store.team_members().get()
                            key=|member| member.id.clone()
                            children=move |member| {
                                let name = member.name.clone();
                                let name_for_check = member.name.clone();
                                let present = move || {
                                    meeting
                                        .get()
                                        .map(|m| m.attendees.iter().any(|a| *a == name_for_check))
                                        .unwrap_or(false)
                                };
                                view! {
                                    <label class="attendance-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=present
                                            on:change=move |_| on_toggle.run(name.clone())
                                        />
                                        <span>{member.name.clone()}</span>
                                        <span class="member-role">{member.role.clone()}</span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </section>

                <MinutesEditor
                    meeting_id=editor_id.clone()
                    initial=meeting
                        .get_untracked()
                        .and_then(|m| m.minutes)
                        .unwrap_or_default()
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_attendee;

    #[test]
    fn absent_member_joins_the_list() {
        let attendees = vec!["Ayesha".to_string()];
        let next = toggle_attendee(&attendees, "Bilal");
        assert_eq!(next, vec!["Ayesha".to_string(), "Bilal".to_string()]);
    }

    #[test]
    fn present_member_drops_out() {
        let attendees = vec!["Ayesha".to_string(), "Bilal".to_string()];
        let next = toggle_attendee(&attendees, "Ayesha");
        assert_eq!(next, vec!["Bilal".to_string()]);
    }
}
