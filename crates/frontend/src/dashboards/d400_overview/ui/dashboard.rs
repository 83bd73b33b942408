use crate::layout::global_context::use_global_context;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::progress_ring::ProgressRing;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::data::use_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{
    average_progress, event_fill_rate, status_counts, students_of_mentor, StatusCount,
};
use contracts::domain::a001_blog_post::aggregate::PostStatus;
use contracts::domain::a002_enquiry::aggregate::EnquiryStatus;
use contracts::domain::a003_event::aggregate::EventStatus;
use contracts::domain::a004_news::aggregate::NewsStatus;
use contracts::domain::a005_student::aggregate::StudentStatus;
use contracts::domain::common::SelectorValue;
use contracts::shared::data_view::DataProvider;
use contracts::system::roles::Role;
use leptos::prelude::*;

/// "2 active · 1 graduated"; нулевые значения пропускаются
fn breakdown<S: SelectorValue>(counts: &[StatusCount<S>]) -> Option<String> {
    let parts: Vec<String> = counts
        .iter()
        .filter(|c| c.count > 0)
        .map(|c| format!("{} {}", c.count, c.value.label().to_lowercase()))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

fn count_of<S: SelectorValue>(counts: &[StatusCount<S>], value: S) -> usize {
    counts
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.count)
        .unwrap_or(0)
}

#[component]
pub fn OverviewDashboard(role: Role) -> impl IntoView {
    let title = format!("{} overview", role.label());

    let content = match role {
        Role::Admin => view! { <AdminOverview /> }.into_any(),
        Role::Mentor => view! { <MentorOverview /> }.into_any(),
        Role::User => view! { <UserOverview /> }.into_any(),
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

#[component]
fn AdminOverview() -> impl IntoView {
    let data = use_data();

    let students = Memo::new(move |_| {
        data.students
            .with(|dv| status_counts(dv.provider().list(), |s| s.status))
    });
    let enquiries = Memo::new(move |_| {
        data.enquiries
            .with(|dv| status_counts(dv.provider().list(), |e| e.status))
    });
    let events = Memo::new(move |_| {
        data.events
            .with(|dv| status_counts(dv.provider().list(), |e| e.status))
    });
    let posts = Memo::new(move |_| {
        data.blog
            .with(|dv| status_counts(dv.provider().list(), |p| p.status))
    });
    let mentors_total = Signal::derive(move || data.mentors.with(|dv| dv.provider().list().len()));
    let news_published = Signal::derive(move || {
        data.news.with(|dv| {
            dv.provider()
                .list()
                .iter()
                .filter(|n| n.status == NewsStatus::Published)
                .count()
        })
    });

    let avg_progress = Signal::derive(move || {
        data.students.with(|dv| average_progress(dv.provider().list()))
    });
    let fill_rate = Signal::derive(move || data.events.with(|dv| event_fill_rate(dv.provider().list())));

    view! {
        <div class="stat-grid">
            <StatCard
                label="Students"
                icon_name="users"
                value=Signal::derive(move || students.with(|c| c.iter().map(|x| x.count).sum::<usize>()))
                subtitle=Signal::derive(move || students.with(|c| breakdown(c)))
            />
            <StatCard label="Mentors" icon_name="mentor" value=mentors_total />
            <StatCard
                label="New enquiries"
                icon_name="mail"
                tone=StatTone::Warning
                value=Signal::derive(move || enquiries.with(|c| count_of(c, EnquiryStatus::New)))
                subtitle=Signal::derive(move || enquiries.with(|c| breakdown(c)))
            />
            <StatCard
                label="Upcoming events"
                icon_name="calendar"
                tone=StatTone::Good
                value=Signal::derive(move || events.with(|c| count_of(c, EventStatus::Upcoming)))
                subtitle=Signal::derive(move || events.with(|c| breakdown(c)))
            />
            <StatCard
                label="Published posts"
                icon_name="blog"
                value=Signal::derive(move || posts.with(|c| count_of(c, PostStatus::Published)))
                subtitle=Signal::derive(move || posts.with(|c| breakdown(c)))
            />
            <StatCard label="Published news" icon_name="news" value=news_published />
        </div>
        <div class="ring-grid">
            <CardAnimated delay_ms=0>
                <ProgressRing percent=avg_progress label="Average course progress" />
            </CardAnimated>
            <CardAnimated delay_ms=80>
                <ProgressRing percent=fill_rate label="Event seats filled" />
            </CardAnimated>
        </div>
    }
}

#[component]
fn MentorOverview() -> impl IntoView {
    let data = use_data();
    let mentor_name = use_global_context()
        .config
        .with_value(|c| c.chat.mentor_name.clone());
    let name = StoredValue::new(mentor_name.clone());

    // (всего, активных, средний прогресс) по студентам наставника
    let mine = Memo::new(move |_| {
        data.mentors.with(|mentors| {
            data.students.with(|students| {
                name.with_value(|name| {
                    let list = students_of_mentor(
                        mentors.provider().list(),
                        students.provider().list(),
                        name,
                    );
                    let active = list
                        .iter()
                        .filter(|s| s.status == StudentStatus::Active)
                        .count();
                    (list.len(), active, average_progress(list.iter().copied()))
                })
            })
        })
    });
    let upcoming = Signal::derive(move || {
        data.events.with(|dv| {
            dv.provider()
                .list()
                .iter()
                .filter(|e| e.status == EventStatus::Upcoming)
                .count()
        })
    });
    let fill_rate = Signal::derive(move || data.events.with(|dv| event_fill_rate(dv.provider().list())));

    view! {
        <p class="page__subtitle">{format!("Signed in as {}", mentor_name)}</p>
        <div class="stat-grid">
            <StatCard label="My students" icon_name="users" value=Signal::derive(move || mine.get().0) />
            <StatCard
                label="Active"
                icon_name="user"
                tone=StatTone::Good
                value=Signal::derive(move || mine.get().1)
            />
            <StatCard label="Upcoming events" icon_name="calendar" value=upcoming />
        </div>
        <div class="ring-grid">
            <CardAnimated delay_ms=0>
                <ProgressRing
                    percent=Signal::derive(move || mine.get().2)
                    label="My students' progress"
                />
            </CardAnimated>
            <CardAnimated delay_ms=80>
                <ProgressRing percent=fill_rate label="Event seats filled" />
            </CardAnimated>
        </div>
    }
}

#[component]
fn UserOverview() -> impl IntoView {
    let data = use_data();
    let student_name = use_global_context()
        .config
        .with_value(|c| c.chat.student_name.clone());
    let name = StoredValue::new(student_name.clone());

    let my_progress = Signal::derive(move || {
        data.students.with(|dv| {
            name.with_value(|name| {
                dv.provider()
                    .list()
                    .iter()
                    .find(|s| &s.name == name)
                    .map(|s| f64::from(s.progress))
                    .unwrap_or(0.0)
            })
        })
    });
    let upcoming = Signal::derive(move || {
        data.events.with(|dv| {
            dv.provider()
                .list()
                .iter()
                .filter(|e| e.status == EventStatus::Upcoming)
                .count()
        })
    });
    let news = Signal::derive(move || {
        data.news.with(|dv| {
            dv.provider()
                .list()
                .iter()
                .filter(|n| n.status == NewsStatus::Published)
                .count()
        })
    });
    let posts = Signal::derive(move || {
        data.blog.with(|dv| {
            dv.provider()
                .list()
                .iter()
                .filter(|p| p.status == PostStatus::Published)
                .count()
        })
    });
    let fill_rate = Signal::derive(move || data.events.with(|dv| event_fill_rate(dv.provider().list())));

    view! {
        <p class="page__subtitle">{format!("Welcome back, {}", student_name)}</p>
        <div class="stat-grid">
            <StatCard label="Upcoming events" icon_name="calendar" tone=StatTone::Good value=upcoming />
            <StatCard label="News" icon_name="news" value=news />
            <StatCard label="Blog posts" icon_name="blog" value=posts />
        </div>
        <div class="ring-grid">
            <CardAnimated delay_ms=0>
                <ProgressRing percent=my_progress label="My course progress" />
            </CardAnimated>
            <CardAnimated delay_ms=80>
                <ProgressRing percent=fill_rate label="Event seats filled" />
            </CardAnimated>
        </div>
    }
}
