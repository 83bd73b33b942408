pub mod details;
pub mod form;
pub mod list;

use crate::layout::global_context::use_navigator;
use crate::shared::data::{use_data, DataViewHandle};
use contracts::shared::data_view::ViewState;
use details::NewsDetails;
use form::NewsEditor;
use leptos::prelude::*;
use list::NewsList;

#[component]
pub fn NewsDashboard(can_edit: bool) -> impl IntoView {
    let handle = DataViewHandle::bind(use_data().news, use_navigator());

    move || match handle.view() {
        ViewState::List => view! { <NewsList handle can_edit /> }.into_any(),
        ViewState::Detail(id) => view! { <NewsDetails handle id can_edit /> }.into_any(),
        ViewState::Form(mode) => view! { <NewsEditor handle mode /> }.into_any(),
    }
}
