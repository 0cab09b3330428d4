//! Form Helpers
//!
//! Event-target value extraction for inputs, selects and textareas, and
//! the inline per-field error line used by every editor dialog.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::validate::{error_for, FieldError};

pub fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

pub fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlSelectElement>().map(|s| s.value()))
        .unwrap_or_default()
}

pub fn textarea_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlTextAreaElement>().map(|a| a.value()))
        .unwrap_or_default()
}

/// How long an armed delete control waits before standing down
const DISARM_MS: u32 = 4_000;

/// Two-step destructive control for rows and cards.
///
/// The first click arms it; a second click within a few seconds runs
/// the delete, and doing nothing lets it stand down on its own.
#[component]
pub fn RowDelete(#[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    // Replacing the stored timeout drops the old one, which cancels it
    let disarm_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let disarm = move || {
        disarm_timer.set_value(None);
        set_armed.set(false);
    };

    view! {
        {move || if armed.get() {
            view! {
                <span class="row-delete armed">
                    <button
                        class="row-delete-confirm"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            disarm();
                            on_delete.run(());
                        }
                    >
                        "Delete"
                    </button>
                    <button
                        class="row-delete-cancel"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            disarm();
                        }
                    >
                        "Keep"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="row-delete"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_armed.set(true);
                        disarm_timer.set_value(Some(Timeout::new(DISARM_MS, move || {
                            let _ = set_armed.try_set(false);
                        })));
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }}
    }
}

/// Inline validation message under one field
#[component]
pub fn FieldMessage(
    errors: ReadSignal<Vec<FieldError>>,
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            error_for(&errors.get(), field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        }}
    }
}
