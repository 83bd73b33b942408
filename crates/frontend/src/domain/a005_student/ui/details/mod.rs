use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{detail_header, missing_record};
use crate::shared::components::progress_ring::ProgressRing;
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::{use_data, DataViewHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a005_student::aggregate::Student;
use contracts::domain::common::form_fields::format_date;
use contracts::domain::common::RecordId;
use contracts::shared::data_view::DataProvider;
use leptos::prelude::*;

#[component]
pub fn StudentDetails(
    handle: DataViewHandle<Student>,
    id: RecordId,
    can_edit: bool,
) -> impl IntoView {
    let mentors = use_data().mentors;
    let mentor_name = move |mentor_id: Option<RecordId>| {
        mentor_id
            .and_then(|mid| mentors.with(|dv| dv.provider().get(mid).map(|m| m.name.clone())))
            .unwrap_or_else(|| "Not assigned".to_string())
    };

    view! {
        <PageFrame page_id="a005_student--detail" category=PAGE_CAT_DETAIL>
            {move || match handle.selected() {
                Some(student) => {
                    let progress = f64::from(student.progress);
                    view! {
                        {detail_header(handle, id, student.name.clone(), can_edit)}
                        <div class="page__content details-grid">
                            <CardAnimated delay_ms=0>
                                <dl class="details-list">
                                    <dt>"Email"</dt>
                                    <dd>{student.email.clone()}</dd>
                                    <dt>"Course"</dt>
                                    <dd>{student.course.clone()}</dd>
                                    <dt>"Mentor"</dt>
                                    <dd>{mentor_name(student.mentor_id)}</dd>
                                    <dt>"Enrolled"</dt>
                                    <dd>{format_date(student.enrolled_on)}</dd>
                                    <dt>"Status"</dt>
                                    <dd>{status_badge(student.status)}</dd>
                                </dl>
                            </CardAnimated>
                            <CardAnimated delay_ms=80>
                                <ProgressRing percent=progress label="Course progress" />
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
