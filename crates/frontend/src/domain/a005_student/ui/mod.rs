pub mod details;
pub mod form;
pub mod list;

use crate::layout::global_context::use_navigator;
use crate::shared::data::{use_data, DataViewHandle};
use contracts::shared::data_view::ViewState;
use details::StudentDetails;
use form::StudentEditor;
use leptos::prelude::*;
use list::StudentList;

#[component]
pub fn StudentsDashboard(can_edit: bool) -> impl IntoView {
    let handle = DataViewHandle::bind(use_data().students, use_navigator());

    move || match handle.view() {
        ViewState::List => view! { <StudentList handle can_edit /> }.into_any(),
        ViewState::Detail(id) => view! { <StudentDetails handle id can_edit /> }.into_any(),
        ViewState::Form(mode) => view! { <StudentEditor handle mode /> }.into_any(),
    }
}
