//! Tasks Page
//!
//! All-events kanban with event, priority and assignee filters. The
//! filters narrow what the board shows; moves always act on the real
//! records underneath.

use leptos::prelude::*;

use crate::components::form::select_value;
use crate::components::TaskBoard;
use crate::models::TaskPriority;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TasksPage() -> impl IntoView {
    let store = use_app_store();
    let (event_filter, set_event_filter) = signal("all".to_string());
    let (priority_filter, set_priority_filter) = signal("all".to_string());
    let (assignee_filter, set_assignee_filter) = signal("all".to_string());

    view! {
        <div class="page tasks">
            <div class="page-header">
                <h1>"Tasks"</h1>
                <div class="filter-bar">
                    <select
                        prop:value=move || event_filter.get()
                        on:change=move |ev| set_event_filter.set(select_value(&ev))
                    >
                        <option value="all">"All events"</option>
                        <For
                            each=move || store.events().get()
                            key=|e| e.id.clone()
                            children=move |e| view! {
                                <option value=e.id.clone()>{e.name.clone()}</option>
                            }
                        />
                    </select>

                    <select
                        prop:value=move || priority_filter.get()
                        on:change=move |ev| set_priority_filter.set(select_value(&ev))
                    >
                        <option value="all">"All priorities"</option>
                        {TaskPriority::ALL.iter().map(|p| view! {
                            <option value=p.as_str()>{p.as_str()}</option>
                        }).collect_view()}
                    </select>

                    <select
                        prop:value=move || assignee_filter.get()
                        on:change=move |ev| set_assignee_filter.set(select_value(&ev))
                    >
                        <option value="all">"All members"</option>
                        <For
                            each=move || store.team_members().get()
                            key=|m| m.id.clone()
                            children=move |m| view! {
                                <option value=m.name.clone()>{m.name.clone()}</option>
                            }
                        />
                    </select>
                </div>
            </div>

            <TaskBoard
                event_filter=event_filter
                priority_filter=priority_filter
                assignee_filter=assignee_filter
            />
        </div>
    }
}
