use crate::shared::components::data_view_parts::{list_footer, list_toolbar};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::common::form_fields::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EventList(handle: DataViewHandle<Event>, can_edit: bool) -> impl IntoView {
    let filter = move || handle.with(|dv| dv.filter().query.clone());

    view! {
        <PageFrame page_id="a003_event--list" category=PAGE_CAT_LIST>
            {list_toolbar(handle, can_edit, "Search by title or location")}
            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=240.0>"Title"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Date"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=140.0>"Location"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Registered"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter();
                            handle.page_items().into_iter().map(|event| {
                                let id = event.id;
                                let title = highlight_matches(&event.title, &needle);
                                let location = highlight_matches(&event.location, &needle);
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
                                                    {title}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(event.category)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(event.starts_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{location}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format!("{} / {}", event.registered, event.capacity)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(event.status)}</TableCellLayout>
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
