use crate::shared::components::data_view_parts::{list_footer, list_toolbar};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_enquiry::aggregate::Enquiry;
use contracts::domain::common::form_fields::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EnquiryList(handle: DataViewHandle<Enquiry>, can_edit: bool) -> impl IntoView {
    let filter = move || handle.with(|dv| dv.filter().query.clone());

    view! {
        <PageFrame page_id="a002_enquiry--list" category=PAGE_CAT_LIST>
            {list_toolbar(handle, can_edit, "Search by name or subject")}
            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=180.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=240.0>"Subject"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Received"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter();
                            handle.page_items().into_iter().map(|enquiry| {
                                let id = enquiry.id;
                                let name = highlight_matches(&enquiry.name, &needle);
                                let subject = highlight_matches(&enquiry.subject, &needle);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        handle.open_detail(id);
                                                    }
                                                >
                                                    {name}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{enquiry.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {subject}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(enquiry.received_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(enquiry.status)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
                {list_footer(handle)}
            </div>
        </PageFrame>
    }
}
