use crate::shared::components::data_view_parts::{list_footer, list_toolbar};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_news::aggregate::NewsItem;
use contracts::domain::common::form_fields::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn NewsList(handle: DataViewHandle<NewsItem>, can_edit: bool) -> impl IntoView {
    let filter = move || handle.with(|dv| dv.filter().query.clone());

    view! {
        <PageFrame page_id="a004_news--list" category=PAGE_CAT_LIST>
            {list_toolbar(handle, can_edit, "Search headlines and summaries")}
            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=260.0>"Headline"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=320.0>"Summary"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Published"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter();
                            handle.page_items().into_iter().map(|item| {
                                let id = item.id;
                                let headline = highlight_matches(&item.headline, &needle);
                                let summary = highlight_matches(&item.summary, &needle);
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
                                                    {headline}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {summary}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(item.category)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(item.published_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(item.status)}</TableCellLayout>
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
