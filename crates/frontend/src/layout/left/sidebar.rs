//! Навигация по вкладкам текущей роли

use crate::layout::global_context::use_navigator;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <div class="app-sidebar__content">
            {move || {
                nav.role()
                    .tabs()
                    .iter()
                    .copied()
                    .map(|tab| {
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || nav.tab() == tab
                                on:click=move |_| nav.open_tab(tab)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(tab.icon())}
                                    <span>{tab.label()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
