//! Верхняя панель: переключатель боковой навигации, название, выбор роли.

use crate::layout::global_context::{use_global_context, use_navigator};
use crate::shared::icons::icon;
use contracts::system::roles::Role;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let nav = use_navigator();

    let is_sidebar_visible = move || ctx.left_open.get();
    let user_label = move || {
        let role = nav.role();
        ctx.config.with_value(|c| match role {
            Role::Admin => "Administrator".to_string(),
            Role::Mentor => c.chat.mentor_name.clone(),
            Role::User => c.chat.student_name.clone(),
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"EduPlatform"</span>
            </div>

            <div class="top-header__actions">
                <select
                    class="top-header__role"
                    title="Switch role"
                    on:change=move |ev| {
                        let role = Role::parse(Some(&event_target_value(&ev)), nav.role());
                        nav.switch_role(role);
                    }
                    prop:value=move || nav.role().slug()
                >
                    {Role::ALL
                        .iter()
                        .copied()
                        .map(|role| view! {
                            <option value=role.slug() selected=move || nav.role() == role>
                                {role.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_label}</span>
                </div>
            </div>
        </div>
    }
}
