//! Events Page
//!
//! Card grid of all events with create/edit/delete. The shared store is
//! the source of truth here so that event names stay fresh everywhere.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate::{percent_used, short_date};
use crate::api;
use crate::app::Page;
use crate::components::{EventFormDialog, RowDelete, StatusBadge};
use crate::context::use_app_context;
use crate::models::Event;
use crate::store::{
    store_add_event, store_remove_event, store_update_event, use_app_store, AppStateStoreFields,
};

#[component]
pub fn EventsPage(navigate: Callback<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<Event>);

    let on_delete = Callback::new(move |event_id: String| {
        spawn_local(async move {
            match api::delete_event(&event_id).await {
                Ok(_) => {
                    store_remove_event(&store, &event_id);
                    ctx.toast_success("Event deleted");
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[EVENTS] delete failed: {}", err).into());
                    ctx.toast_error("Failed to delete event");
                }
            }
        });
    });

    let on_saved = Callback::new(move |(event, created): (Event, bool)| {
        if created {
            store_add_event(&store, event);
        } else {
            store_update_event(&store, event);
        }
        set_show_form.set(false);
    });

    view! {
        <div class="page events">
            <div class="page-header">
                <h1>"Events"</h1>
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ New Event"
                </button>
            </div>

            <div class="event-grid">
                <For
                    each=move || store.events().get()
                    key=|e| (e.id.clone(), e.name.clone(), e.status.as_str(), e.budget_spent.to_bits())
                    children=move |event| {
                        let id_for_open = event.id.clone();
                        let event_for_edit = event.clone();
                        let id_for_delete = event.id.clone();
                        let used = percent_used(event.budget_spent, event.budget_total);
                        view! {
                            <div
                                class="event-card"
                                on:click=move |_| navigate.run(Page::EventDetail(id_for_open.clone()))
                            >
                                <div class="event-card-header">
                                    <h3>{event.name.clone()}</h3>
                                    <StatusBadge
                                        status_key=event.status.as_str()
                                        label=event.status.as_str()
                                    />
                                </div>
                                <p class="event-type">{event.event_type.as_str()}</p>
                                <p class="event-date">{short_date(&event.date_start)}</p>
                                <p class="event-location">{event.location.clone()}</p>
                                <p class="event-budget">
                                    {format!(
                                        "Rs {:.0} of Rs {:.0} ({})",
                                        event.budget_spent, event.budget_total, used
                                    )}
                                </p>
                                <div class="event-card-actions">
                                    <button
                                        class="edit-btn"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            set_editing.set(Some(event_for_edit.clone()));
                                            set_show_form.set(true);
                                        }
                                    >
                                        "✎"
                                    </button>
                                    <RowDelete
                                        on_delete=Callback::new(move |_| on_delete.run(id_for_delete.clone()))
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || store.events().get().is_empty()>
                <p class="empty-note">"No events yet. Create the first one."</p>
            </Show>

            <Show when=move || show_form.get()>
                <EventFormDialog
                    event=editing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| set_show_form.set(false))
                />
            </Show>
        </div>
    }
}
