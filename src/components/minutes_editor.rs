//! Meeting Minutes Editor
//!
//! Free-text editor that autosaves after the typist goes idle. The
//! pending timer is cancelled whenever a new keystroke arrives, so only
//! the latest buffer is ever committed. A failed save keeps the buffer
//! dirty and schedules its own retry after another idle period.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::autosave::{AutosavePolicy, AUTOSAVE_IDLE_MS};
use crate::components::form::textarea_value;
use crate::context::use_app_context;

#[derive(Clone, Copy, PartialEq)]
enum SaveState {
    Saved,
    Dirty,
    Saving,
    Failed,
}

impl SaveState {
    fn label(self) -> &'static str {
        match self {
            SaveState::Saved => "Saved",
            SaveState::Dirty => "Unsaved changes",
            SaveState::Saving => "Saving...",
            SaveState::Failed => "Save failed",
        }
    }
}

#[component]
pub fn MinutesEditor(meeting_id: String, initial: String) -> impl IntoView {
    let ctx = use_app_context();
    let (policy, set_policy) = signal(AutosavePolicy::new(initial));
    let (state, set_state) = signal(SaveState::Saved);

    // Replacing the stored timeout drops the old one, which cancels it
    let idle_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    // Filled in below once the save closure exists; lets a failed save
    // re-arm the timer with itself
    let retry: StoredValue<Option<Callback<()>>> = StoredValue::new(None);

    let do_save = {
        let meeting_id = meeting_id.clone();
        move || {
            let Some(snapshot) = policy.try_get_untracked() else {
                return;
            };
            let Some(text) = snapshot.pending_commit() else {
                let _ = set_state.try_set(SaveState::Saved);
                return;
            };
            let _ = set_state.try_set(SaveState::Saving);
            let meeting_id = meeting_id.clone();
            spawn_local(async move {
                match api::update_minutes(&meeting_id, &text).await {
                    Ok(_) => {
                        let _ = set_policy.try_update(|p| p.confirm(text));
                        let still_dirty = policy
                            .try_get_untracked()
                            .map(|p| p.is_dirty())
                            .unwrap_or(false);
                        let _ = set_state.try_set(if still_dirty {
                            SaveState::Dirty
                        } else {
                            SaveState::Saved
                        });
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[MINUTES] autosave failed: {}", err).into(),
                        );
                        ctx.toast_error("Failed to save minutes");
                        let _ = set_state.try_set(SaveState::Failed);
                        if let Some(Some(again)) = retry.try_get_value() {
                            let _ = idle_timer.try_set_value(Some(Timeout::new(
                                AUTOSAVE_IDLE_MS,
                                move || again.run(()),
                            )));
                        }
                    }
                }
            });
        }
    };
    retry.set_value(Some(Callback::new({
        let do_save = do_save.clone();
        move |_| do_save()
    })));

    let on_input = move |ev: web_sys::Event| {
        let text = textarea_value(&ev);
        set_policy.update(|p| p.edit(text));
        if policy.get_untracked().is_dirty() {
            set_state.set(SaveState::Dirty);
            let save = do_save.clone();
            idle_timer.set_value(Some(Timeout::new(AUTOSAVE_IDLE_MS, save)));
        } else {
            set_state.set(SaveState::Saved);
            idle_timer.set_value(None);
        }
    };

    let state_class = move || match state.get() {
        SaveState::Saved => "save-state saved",
        SaveState::Dirty => "save-state dirty",
        SaveState::Saving => "save-state saving",
        SaveState::Failed => "save-state failed",
    };

    view! {
        <div class="minutes-editor">
            <div class="minutes-header">
                <h3>"Minutes"</h3>
                <span class=state_class>{move || state.get().label()}</span>
            </div>
            <textarea
                class="minutes-textarea"
                placeholder="Type meeting minutes here..."
                prop:value=move || policy.get().buffer().to_string()
                on:input=on_input
            />
        </div>
    }
}
