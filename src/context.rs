//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger for
//! authoritative re-fetches and the transient notification queue.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload collections from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Active transient notifications - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: ReadSignal<u32>,
    set_next_toast_id: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (toasts, set_toasts) = signal(Vec::new());
        let (next_toast_id, set_next_toast_id) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            toasts,
            set_toasts,
            next_toast_id,
            set_next_toast_id,
        }
    }

    /// Trigger a reload of the shared collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.push_toast(ToastLevel::Success, message.into());
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.push_toast(ToastLevel::Error, message.into());
    }

    pub fn toast_info(&self, message: impl Into<String>) {
        self.push_toast(ToastLevel::Info, message.into());
    }

    fn push_toast(&self, level: ToastLevel, message: String) {
        let id = self.next_toast_id.get_untracked();
        self.set_next_toast_id.set(id + 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, level, message });
        });

        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_DISMISS_MS, move || {
            let _ = set_toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
