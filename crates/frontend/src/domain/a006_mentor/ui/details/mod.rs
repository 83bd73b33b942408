use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::copy_button::CopyValue;
use crate::shared::components::data_view_parts::{detail_header, missing_record};
use crate::shared::components::status_badge::status_badge;
use crate::shared::data::{use_data, DataViewHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a006_mentor::aggregate::Mentor;
use contracts::domain::common::form_fields::format_date;
use contracts::domain::common::RecordId;
use contracts::shared::data_view::DataProvider;
use leptos::prelude::*;

#[component]
pub fn MentorDetails(handle: DataViewHandle<Mentor>, id: RecordId, can_edit: bool) -> impl IntoView {
    // студенты, закреплённые за наставником
    let students = use_data().students;
    let assigned = move || {
        students.with(|dv| {
            dv.provider()
                .list()
                .iter()
                .filter(|s| s.mentor_id == Some(id))
                .map(|s| s.name.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="a006_mentor--detail" category=PAGE_CAT_DETAIL>
            {move || match handle.selected() {
                Some(mentor) => view! {
                    {detail_header(handle, id, mentor.name.clone(), can_edit)}
                    <div class="page__content details-grid">
                        <CardAnimated delay_ms=0>
                            <dl class="details-list">
                                <dt>"Email"</dt>
                                <dd><CopyValue value=mentor.email.clone() /></dd>
                                <dt>"Expertise"</dt>
                                <dd>{mentor.expertise.clone()}</dd>
                                <dt>"Rating"</dt>
                                <dd>{format!("★ {:.1}", mentor.rating)}</dd>
                                <dt>"Joined"</dt>
                                <dd>{format_date(mentor.joined_on)}</dd>
                                <dt>"Status"</dt>
                                <dd>{status_badge(mentor.status)}</dd>
                            </dl>
                        </CardAnimated>
                        <CardAnimated delay_ms=80>
                            <h3 class="card__title">
                                {format!("Students ({})", mentor.students_count)}
                            </h3>
                            <ul class="plain-list">
                                {assigned().into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                            </ul>
                        </CardAnimated>
                    </div>
                }
                .into_any(),
                None => missing_record(handle).into_any(),
            }}
        </PageFrame>
    }
}
