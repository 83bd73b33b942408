use crate::shared::components::data_view_parts::{list_footer, list_toolbar};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_blog_post::aggregate::BlogPost;
use contracts::domain::common::form_fields::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BlogPostList(handle: DataViewHandle<BlogPost>, can_edit: bool) -> impl IntoView {
    let filter = move || handle.with(|dv| dv.filter().query.clone());

    view! {
        <PageFrame page_id="a001_blog_post--list" category=PAGE_CAT_LIST>
            {list_toolbar(handle, can_edit, "Search by title or author")}
            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=260.0>"Title"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=150.0>"Author"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Published"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Read time"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter();
                            handle.page_items().into_iter().map(|post| {
                                let id = post.id;
                                let title = highlight_matches(&post.title, &needle);
                                let author = highlight_matches(&post.author, &needle);
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
                                            <TableCellLayout>{author}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(post.category)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(post.published_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format!("{} min", post.read_time_minutes)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(post.status)}</TableCellLayout>
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
