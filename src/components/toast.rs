//! Toast Host Component
//!
//! Renders the transient notification queue from the app context.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastLevel};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                        ToastLevel::Info => "toast info",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
