use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{detail_header, missing_record};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_news::aggregate::NewsItem;
use contracts::domain::common::form_fields::format_date;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn NewsDetails(handle: DataViewHandle<NewsItem>, id: RecordId, can_edit: bool) -> impl IntoView {
    view! {
        <PageFrame page_id="a004_news--detail" category=PAGE_CAT_DETAIL>
            {move || match handle.selected() {
                Some(item) => view! {
                    {detail_header(handle, id, item.headline.clone(), can_edit)}
                    <div class="page__content">
                        <CardAnimated style="max-width: 820px;">
                            <div class="news-meta">
                                {status_badge(item.category)}
                                {status_badge(item.status)}
                                <span>{format_date(item.published_on)}</span>
                            </div>
                            <p class="news-summary">{item.summary.clone()}</p>
                            <div class="news-body">{item.body.clone()}</div>
                        </CardAnimated>
                    </div>
                }
                .into_any(),
                None => missing_record(handle).into_any(),
            }}
        </PageFrame>
    }
}
