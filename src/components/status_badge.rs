//! Status Badge Component
//!
//! Small colored pill for any status value across the app.

use leptos::prelude::*;

fn badge_class(status_key: &str) -> &'static str {
    match status_key {
        "planning" | "todo" | "idea" | "needed" | "open" => "badge slate",
        "active" | "in_progress" | "planned" | "acquired" => "badge blue",
        "completed" | "posted" | "available" | "resolved" => "badge green",
        "cancelled" | "closed" => "badge red",
        "in_production" => "badge purple",
        _ => "badge",
    }
}

/// Colored status pill; `status_key` is the wire value, `label` what the user sees
#[component]
pub fn StatusBadge(
    #[prop(into)] status_key: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! { <span class=badge_class(&status_key)>{label}</span> }
}
