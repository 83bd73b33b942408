use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{detail_header, missing_record};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_blog_post::aggregate::BlogPost;
use contracts::domain::common::form_fields::format_date;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn BlogPostDetails(
    handle: DataViewHandle<BlogPost>,
    id: RecordId,
    can_edit: bool,
) -> impl IntoView {
    view! {
        <PageFrame page_id="a001_blog_post--detail" category=PAGE_CAT_DETAIL>
            {move || match handle.selected() {
                Some(post) => view! {
                    {detail_header(handle, id, post.title.clone(), can_edit)}
                    <div class="page__content">
                        <CardAnimated style="max-width: 820px;">
                            {post.cover_image_url.clone().map(|src| view! {
                                <img class="blog-cover" src=src alt="" loading="lazy" />
                            })}
                            <div class="blog-meta">
                                {status_badge(post.status)}
                                {status_badge(post.category)}
                                <span>{format!("By {}", post.author)}</span>
                                <span>{format_date(post.published_on)}</span>
                                <span>{format!("{} min read", post.read_time_minutes)}</span>
                            </div>
                            <p class="blog-excerpt">{post.excerpt.clone()}</p>
                            <div class="blog-content">{post.content.clone()}</div>
                        </CardAnimated>
                    </div>
                }
                .into_any(),
                None => missing_record(handle).into_any(),
            }}
        </PageFrame>
    }
}
