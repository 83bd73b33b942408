use crate::shared::components::data_view_parts::{list_footer, list_toolbar};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_student::aggregate::Student;
use contracts::domain::common::form_fields::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StudentList(handle: DataViewHandle<Student>, can_edit: bool) -> impl IntoView {
    let filter = move || handle.with(|dv| dv.filter().query.clone());

    view! {
        <PageFrame page_id="a005_student--list" category=PAGE_CAT_LIST>
            {list_toolbar(handle, can_edit, "Search by name or email")}
            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=180.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=220.0>"Email"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=180.0>"Course"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Progress"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Enrolled"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter();
                            handle.page_items().into_iter().map(|student| {
                                let id = student.id;
                                let name = highlight_matches(&student.name, &needle);
                                let email = highlight_matches(&student.email, &needle);
                                let width = format!("width: {}%;", student.progress);
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
                                            <TableCellLayout truncate=true>
                                                {email}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{student.course.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="progress-bar">
                                                    <div class="progress-bar__fill" style=width></div>
                                                </div>
                                                <span class="progress-bar__label">{format!("{}%", student.progress)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(student.enrolled_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{status_badge(student.status)}</TableCellLayout>
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
