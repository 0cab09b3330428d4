//! Application Shell
//!
//! Sidebar navigation plus the page switch. Provides the toast/reload
//! context and the shared store, and keeps the cross-page reference
//! data (events, team roster) loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    BugsPage, DashboardPage, EventDetailPage, EventsPage, MeetingDetailPage, MeetingsPage,
    TasksPage, TeamPage, ToastHost,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Where the user is; detail pages carry the record id
#[derive(Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Events,
    EventDetail(String),
    Tasks,
    Meetings,
    MeetingDetail(String),
    Team,
    Bugs,
}

impl Page {
    /// Sidebar entry this page belongs under
    fn section(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Events | Page::EventDetail(_) => "events",
            Page::Tasks => "tasks",
            Page::Meetings | Page::MeetingDetail(_) => "meetings",
            Page::Team => "team",
            Page::Bugs => "bugs",
        }
    }
}

const NAV: &[(&str, &str, Page)] = &[
    ("dashboard", "Dashboard", Page::Dashboard),
    ("events", "Events", Page::Events),
    ("tasks", "Tasks", Page::Tasks),
    ("meetings", "Meetings", Page::Meetings),
    ("team", "Team", Page::Team),
    ("bugs", "Issues", Page::Bugs),
];

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let store = Store::new(AppState::default());
    provide_context(store);

    let (page, set_page) = signal(Page::Dashboard);
    let navigate = Callback::new(move |next: Page| set_page.set(next));

    // Reference data everything else renders against
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_events().await {
                Ok(events) => store.events().set(events),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[APP] event load failed: {}", err).into());
                    ctx.toast_error("Failed to load events");
                }
            }
            match api::list_team_members().await {
                Ok(members) => store.team_members().set(members),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[APP] team load failed: {}", err).into());
                    ctx.toast_error("Failed to load team");
                }
            }
        });
    });

    view! {
        <div class="app-shell">
            <nav class="sidebar">
                <div class="sidebar-brand">"Society Hub"</div>
                {NAV.iter().map(|(section, label, target)| {
                    let section = *section;
                    let target = target.clone();
                    view! {
                        <button
                            class=move || {
                                if page.get().section() == section {
                                    "nav-item active"
                                } else {
                                    "nav-item"
                                }
                            }
                            on:click=move |_| set_page.set(target.clone())
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}

                <button
                    class="nav-item refresh"
                    on:click=move |_| {
                        ctx.reload();
                        ctx.toast_info("Refreshing data");
                    }
                >
                    "Refresh"
                </button>
            </nav>

            <main class="content">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardPage navigate=navigate /> }.into_any(),
                    Page::Events => view! { <EventsPage navigate=navigate /> }.into_any(),
                    Page::EventDetail(id) => {
                        view! { <EventDetailPage event_id=id navigate=navigate /> }.into_any()
                    }
                    Page::Tasks => view! { <TasksPage /> }.into_any(),
                    Page::Meetings => view! { <MeetingsPage navigate=navigate /> }.into_any(),
                    Page::MeetingDetail(id) => {
                        view! { <MeetingDetailPage meeting_id=id navigate=navigate /> }.into_any()
                    }
                    Page::Team => view! { <TeamPage /> }.into_any(),
                    Page::Bugs => view! { <BugsPage /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
