//! Meetings Page
//!
//! Chronological meeting list with scheduling, editing and deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate::{parse_day, short_date};
use crate::api;
use crate::app::Page;
use crate::components::{MeetingFormDialog, RowDelete};
use crate::context::use_app_context;
use crate::models::Meeting;
use crate::store::{store_event_name, use_app_store};

/// Soonest first; unparseable dates sink to the end
fn meetings_in_order(meetings: &[Meeting]) -> Vec<Meeting> {
    let mut sorted = meetings.to_vec();
    sorted.sort_by(|a, b| match (parse_day(&a.date), parse_day(&b.date)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    });
    sorted
}

#[component]
pub fn MeetingsPage(navigate: Callback<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (meetings, set_meetings) = signal(Vec::<Meeting>::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<Meeting>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_meetings().await {
                Ok(rows) => {
                    let _ = set_meetings.try_set(rows);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[MEETINGS] load failed: {}", err).into());
                    ctx.toast_error("Failed to load meetings");
                }
            }
        });
    });

    let on_delete = Callback::new(move |meeting_id: String| {
        spawn_local(async move {
            match api::delete_meeting(&meeting_id).await {
                Ok(_) => {
                    let _ = set_meetings.try_update(|rows| rows.retain(|m| m.id != meeting_id));
                    ctx.toast_success("Meeting deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[MEETINGS] delete failed: {}", err).into(),
                    );
                    ctx.toast_error("Failed to delete meeting");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(meeting, created): (Meeting, bool)| {
        let _ = set_meetings.try_update(|rows| {
            if created {
                rows.push(meeting);
            } else if let Some(existing) = rows.iter_mut().find(|m| m.id == meeting.id) {
                *existing = meeting;
            }
        });
        set_show_form.set(false);
    });

    view! {
        <div class="page meetings">
            <div class="page-header">
                <h1>"Meetings"</h1>
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Schedule Meeting"
                </button>
            </div>

            <div class="meeting-list">
                <For
                    each=move || meetings_in_order(&meetings.get())
                    key=|m| (m.id.clone(), m.title.clone(), m.date.clone())
                    children=move |meeting| {
                        let id_for_open = meeting.id.clone();
                        let meeting_for_edit = meeting.clone();
                        let id_for_delete = meeting.id.clone();
                        let event_id = meeting.event_id.clone();
                        view! {
                            <div
                                class="meeting-row"
                                on:click=move |_| navigate.run(Page::MeetingDetail(id_for_open.clone()))
                            >
                                <span class="meeting-title">{meeting.title.clone()}</span>
                                <span class="meeting-date">{short_date(&meeting.date)}</span>
                                <span class="meeting-location">{meeting.location.clone()}</span>
                                <span class="meeting-event">
                                    {move || {
                                        event_id
                                            .as_deref()
                                            .and_then(|id| store_event_name(&store, id))
                                            .unwrap_or_default()
                                    }}
                                </span>
                                <span class="meeting-attendees">
                                    {format!("{} attending", meeting.attendees.len())}
                                </span>
                                <button
                                    class="edit-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        set_editing.set(Some(meeting_for_edit.clone()));
                                        set_show_form.set(true);
                                    }
                                >
                                    "✎"
                                </button>
                                <RowDelete
                                    on_delete=Callback::new(move |_| on_delete.run(id_for_delete.clone()))
                                />
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || meetings.get().is_empty()>
                <p class="empty-note">"No meetings scheduled."</p>
            </Show>

            <Show when=move || show_form.get()>
                <MeetingFormDialog
                    meeting=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(id: &str, title: &str, date: &str) -> Meeting {
        Meeting {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            location: "Common Room".to_string(),
            agenda: None,
            minutes: None,
            attendees: Vec::new(),
            meeting_link: None,
            event_id: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn meetings_sort_soonest_first_with_undated_last() {
        let rows = vec![
            meeting("m1", "Retro", "2025-03-10"),
            meeting("m2", "Kickoff", "not a date"),
            meeting("m3", "Planning", "2025-02-01"),
        ];
        let ordered = meetings_in_order(&rows);
        let ids: Vec<&str> = ordered.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m3", "m1", "m2"]);
    }
}
