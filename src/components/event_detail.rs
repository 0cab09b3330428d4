//! Event Detail Page
//!
//! One event's workspace: task board, budget tracker, inventory list and
//! the content pipeline, switched by tabs. Renders an inline not-found
//! state when the id no longer resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::Page;
use crate::components::{BudgetTracker, ContentBoard, InventoryList, StatusBadge, TaskBoard};
use crate::context::use_app_context;
use crate::models::Event;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Tasks,
    Budget,
    Inventory,
    Content,
}

impl Tab {
    const ALL: &'static [Tab] = &[Tab::Tasks, Tab::Budget, Tab::Inventory, Tab::Content];

    fn label(self) -> &'static str {
        match self {
            Tab::Tasks => "Tasks",
            Tab::Budget => "Budget",
            Tab::Inventory => "Inventory",
            Tab::Content => "Content",
        }
    }
}

#[component]
pub fn EventDetailPage(event_id: String, navigate: Callback<Page>) -> impl IntoView {
    let ctx = use_app_context();
    let (event, set_event) = signal(None::<Event>);
    let (loaded, set_loaded) = signal(false);
    let (tab, set_tab) = signal(Tab::Tasks);

    // Static filters: the scoped board has its own event, no page filters
    let (all_filter, _) = signal("all".to_string());

    let scope = event_id.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let scope = scope.clone();
        spawn_local(async move {
            match api::get_event(&scope).await {
                Ok(found) => {
                    let _ = set_event.try_set(found);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[EVENT] load failed: {}", err).into());
                    ctx.toast_error("Failed to load event");
                }
            }
            let _ = set_loaded.try_set(true);
        });
    });

    let board_event_id = event_id.clone();
    let content_event_id = event_id.clone();
    let budget_event_id = event_id.clone();
    let inventory_event_id = event_id.clone();

    view! {
        <div class="page event-detail">
            <button class="back-btn" on:click=move |_| navigate.run(Page::Events)>
                "← Events"
            </button>

            <Show when=move || loaded.get() && event.get().is_none()>
                <div class="not-found">
                    <h2>"Event not found"</h2>
                    <p>"It may have been deleted."</p>
                </div>
            </Show>

            {move || event.get().map(|ev| {
                let board_event_id = board_event_id.clone();
                let content_event_id = content_event_id.clone();
                let budget_event_id = budget_event_id.clone();
                let inventory_event_id = inventory_event_id.clone();
                let allocated = ev.budget_total;
                view! {
                    <div class="event-detail-header">
                        <h1>{ev.name.clone()}</h1>
                        <StatusBadge status_key=ev.status.as_str() label=ev.status.as_str() />
                        <span class="event-type">{ev.event_type.as_str()}</span>
                        <span class="event-location">{ev.location.clone()}</span>
                    </div>
                    {ev.description.clone().map(|d| view! { <p class="event-description">{d}</p> })}

                    <div class="tab-bar">
                        {Tab::ALL.iter().map(|t| {
                            let t = *t;
                            view! {
                                <button
                                    class=move || if tab.get() == t { "tab active" } else { "tab" }
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="tab-body">
                        {move || match tab.get() {
                            Tab::Tasks => view! {
                                <TaskBoard
                                    event_id=Some(board_event_id.clone())
                                    event_filter=all_filter
                                    priority_filter=all_filter
                                    assignee_filter=all_filter
                                />
                            }.into_any(),
                            Tab::Budget => view! {
                                <BudgetTracker
                                    event_id=budget_event_id.clone()
                                    allocated=allocated
                                />
                            }.into_any(),
                            Tab::Inventory => view! {
                                <InventoryList event_id=inventory_event_id.clone() />
                            }.into_any(),
                            Tab::Content => view! {
                                <ContentBoard event_id=content_event_id.clone() />
                            }.into_any(),
                        }}
                    </div>
                }
            })}
        </div>
    }
}
