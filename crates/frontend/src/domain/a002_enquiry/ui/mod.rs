pub mod details;
pub mod form;
pub mod list;

use crate::layout::global_context::use_navigator;
use crate::shared::data::{use_data, DataViewHandle};
use contracts::shared::data_view::ViewState;
use details::EnquiryDetails;
use form::EnquiryEditor;
use leptos::prelude::*;
use list::EnquiryList;

#[component]
pub fn EnquiriesDashboard(can_edit: bool) -> impl IntoView {
    let handle = DataViewHandle::bind(use_data().enquiries, use_navigator());

    move || match handle.view() {
        ViewState::List => view! { <EnquiryList handle can_edit /> }.into_any(),
        ViewState::Detail(id) => view! { <EnquiryDetails handle id can_edit /> }.into_any(),
        ViewState::Form(mode) => view! { <EnquiryEditor handle mode /> }.into_any(),
    }
}
