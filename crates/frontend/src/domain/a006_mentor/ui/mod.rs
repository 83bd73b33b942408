pub mod details;
pub mod form;
pub mod list;

use crate::layout::global_context::use_navigator;
use crate::shared::data::{use_data, DataViewHandle};
use contracts::shared::data_view::ViewState;
use details::MentorDetails;
use form::MentorEditor;
use leptos::prelude::*;
use list::MentorList;

#[component]
pub fn MentorsDashboard(can_edit: bool) -> impl IntoView {
    let handle = DataViewHandle::bind(use_data().mentors, use_navigator());

    move || match handle.view() {
        ViewState::List => view! { <MentorList handle can_edit /> }.into_any(),
        ViewState::Detail(id) => view! { <MentorDetails handle id can_edit /> }.into_any(),
        ViewState::Form(mode) => view! { <MentorEditor handle mode /> }.into_any(),
    }
}
