//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only
//! cross-page reference data; each board owns its own record collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Event, TeamMember};

/// Reference data shared across pages
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All society events, soonest first
    pub events: Vec<Event>,
    /// Team roster for assignee pickers and attendance
    pub team_members: Vec<TeamMember>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an event to the store
pub fn store_add_event(store: &AppStore, event: Event) {
    store.events().write().push(event);
}

/// Update an event in the store by ID
pub fn store_update_event(store: &AppStore, updated: Event) {
    store.events().write().iter_mut()
        .find(|e| e.id == updated.id)
        .map(|e| *e = updated);
}

/// Remove an event from the store by ID
pub fn store_remove_event(store: &AppStore, event_id: &str) {
    store.events().write().retain(|e| e.id != event_id);
}

/// Look up an event name by ID (for task and card labels)
pub fn store_event_name(store: &AppStore, event_id: &str) -> Option<String> {
    store
        .events()
        .read()
        .iter()
        .find(|e| e.id == event_id)
        .map(|e| e.name.clone())
}
