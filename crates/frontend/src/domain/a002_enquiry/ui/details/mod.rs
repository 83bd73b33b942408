use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::copy_button::CopyValue;
use crate::shared::components::data_view_parts::{detail_header, missing_record};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_enquiry::aggregate::Enquiry;
use contracts::domain::common::form_fields::format_date;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

#[component]
pub fn EnquiryDetails(
    handle: DataViewHandle<Enquiry>,
    id: RecordId,
    can_edit: bool,
) -> impl IntoView {
    view! {
        <PageFrame page_id="a002_enquiry--detail" category=PAGE_CAT_DETAIL>
            {move || match handle.selected() {
                Some(enquiry) => view! {
                    {detail_header(handle, id, enquiry.subject.clone(), can_edit)}
                    <div class="page__content">
                        <CardAnimated style="max-width: 720px;">
                            <dl class="details-list">
                                <dt>"From"</dt>
                                <dd>{enquiry.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd><CopyValue value=enquiry.email.clone() /></dd>
                                <dt>"Received"</dt>
                                <dd>{format_date(enquiry.received_on)}</dd>
                                <dt>"Status"</dt>
                                <dd>{status_badge(enquiry.status)}</dd>
                            </dl>
                            <div class="enquiry-message">{enquiry.message.clone()}</div>
                        </CardAnimated>
                    </div>
                }
                .into_any(),
                None => missing_record(handle).into_any(),
            }}
        </PageFrame>
    }
}
