pub mod details;
pub mod form;
pub mod list;

use crate::layout::global_context::use_navigator;
use crate::shared::data::{use_data, DataViewHandle};
use contracts::shared::data_view::ViewState;
use details::BlogPostDetails;
use form::BlogPostEditor;
use leptos::prelude::*;
use list::BlogPostList;

#[component]
pub fn BlogDashboard(can_edit: bool) -> impl IntoView {
    let handle = DataViewHandle::bind(use_data().blog, use_navigator());

    move || match handle.view() {
        ViewState::List => view! { <BlogPostList handle can_edit /> }.into_any(),
        ViewState::Detail(id) => view! { <BlogPostDetails handle id can_edit /> }.into_any(),
        ViewState::Form(mode) => view! { <BlogPostEditor handle mode /> }.into_any(),
    }
}
