use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{detail_header, missing_record};
use crate::shared::components::progress_ring::ProgressRing;
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::common::form_fields::format_date;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn EventDetails(handle: DataViewHandle<Event>, id: RecordId, can_edit: bool) -> impl IntoView {
    view! {
        <PageFrame page_id="a003_event--detail" category=PAGE_CAT_DETAIL>
            {move || match handle.selected() {
                Some(event) => {
                    let fill = event.fill_percent();
                    view! {
                        {detail_header(handle, id, event.title.clone(), can_edit)}
                        <div class="page__content details-grid">
                            <CardAnimated delay_ms=0>
                                <dl class="details-list">
                                    <dt>"Category"</dt>
                                    <dd>{status_badge(event.category)}</dd>
                                    <dt>"Status"</dt>
                                    <dd>{status_badge(event.status)}</dd>
                                    <dt>"Date"</dt>
                                    <dd>{format_date(event.starts_on)}</dd>
                                    <dt>"Location"</dt>
                                    <dd>{event.location.clone()}</dd>
                                    <dt>"Capacity"</dt>
                                    <dd>{event.capacity}</dd>
                                    <dt>"Seats left"</dt>
                                    <dd>{event.seats_left()}</dd>
                                </dl>
                            </CardAnimated>
                            <CardAnimated delay_ms=80>
                                <ProgressRing percent=fill label="Registration" />
                            </CardAnimated>
                        </div>
                    }
                    .into_any()
                }
                None => missing_record(handle).into_any(),
            }}
        </PageFrame>
    }
}
