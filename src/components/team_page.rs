//! Team Page
//!
//! Read-only roster pulled from the shared store.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TeamPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="page team">
            <h1>"Team"</h1>

            <div class="member-grid">
                <For
                    each=move || store.team_members().get()
                    key=|m| m.id.clone()
                    children=move |member| {
                        let initial = member
                            .name
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().to_string())
                            .unwrap_or_default();
                        view! {
                            <div class="member-card">
                                <div class="member-avatar">
                                    {member.avatar.clone().map(|src| view! {
                                        <img src=src alt=member.name.clone() />
                                    }.into_any()).unwrap_or_else(|| view! {
                                        <span class="avatar-fallback">{initial}</span>
                                    }.into_any())}
                                </div>
                                <h3>{member.name.clone()}</h3>
                                <p class="member-role">{member.role.clone()}</p>
                                <p class="member-email">{member.email.clone()}</p>
                                {member.phone.clone().map(|p| view! {
                                    <p class="member-phone">{p}</p>
                                })}
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || store.team_members().get().is_empty()>
                <p class="empty-note">"No team members yet."</p>
            </Show>
        </div>
    }
}
