pub mod details;
pub mod form;
pub mod list;

use crate::layout::global_context::use_navigator;
use crate::shared::data::{use_data, DataViewHandle};
use contracts::shared::data_view::ViewState;
use details::EventDetails;
use form::EventEditor;
use leptos::prelude::*;
use list::EventList;

/// Дашборд мероприятий: список, карточка или форма в зависимости от URL
#[component]
pub fn EventsDashboard(can_edit: bool) -> impl IntoView {
    let handle = DataViewHandle::bind(use_data().events, use_navigator());

    move || match handle.view() {
        ViewState::List => view! { <EventList handle can_edit /> }.into_any(),
        ViewState::Detail(id) => view! { <EventDetails handle id can_edit /> }.into_any(),
        ViewState::Form(mode) => view! { <EventEditor handle mode /> }.into_any(),
    }
}
