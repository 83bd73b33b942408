use crate::layout::global_context::{use_global_context, QueryNavigator};
use crate::layout::left::Sidebar;
use crate::layout::tabs::render_tab_content;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Всё состояние экрана лежит в query string, поэтому маршрут один
#[component]
fn MainLayout() -> impl IntoView {
    let nav = QueryNavigator::new(use_global_context().default_role());
    provide_context(nav);

    // экран перестраивается только при смене вкладки или роли
    let active = Memo::new(move |_| (nav.tab(), nav.role()));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                (move || {
                    let (tab, role) = active.get();
                    render_tab_content(tab, role)
                })
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="empty-state">"Page not found."</div> }>
            <Route path=path!("/") view=MainLayout />
        </Routes>
    }
}
