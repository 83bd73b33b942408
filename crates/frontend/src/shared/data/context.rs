use super::mock;
use chrono::Utc;
use contracts::domain::a001_blog_post::aggregate::BlogPost;
use contracts::domain::a002_enquiry::aggregate::Enquiry;
use contracts::domain::a003_event::aggregate::Event;
use contracts::domain::a004_news::aggregate::NewsItem;
use contracts::domain::a005_student::aggregate::Student;
use contracts::domain::a006_mentor::aggregate::Mentor;
use contracts::shared::chat::Conversation;
use contracts::shared::config::DashboardConfig;
use contracts::shared::data_view::{DataView, RecordStore};
use contracts::system::roles::DashboardTab;
use leptos::prelude::*;

/// Хранилища всех дашбордов. Живут всё время работы приложения, поэтому
/// фильтры и страница сохраняются при переключении вкладок.
#[derive(Clone, Copy)]
pub struct DataContext {
    pub blog: RwSignal<DataView<BlogPost>>,
    pub enquiries: RwSignal<DataView<Enquiry>>,
    pub events: RwSignal<DataView<Event>>,
    pub news: RwSignal<DataView<NewsItem>>,
    pub students: RwSignal<DataView<Student>>,
    pub mentors: RwSignal<DataView<Mentor>>,
    /// Чат наставника со студентом
    pub mentor_chat: RwSignal<Conversation>,
    /// Чат студента с наставником
    pub student_chat: RwSignal<Conversation>,
}

impl DataContext {
    pub fn new(config: &DashboardConfig) -> Self {
        let size = |tab| config.page_size(tab);
        let now = Utc::now();
        log::info!(
            "seeding demo data: {} posts, {} enquiries, {} events, {} news, {} students, {} mentors",
            mock::BLOG_POSTS,
            mock::ENQUIRIES,
            mock::EVENTS,
            mock::NEWS_ITEMS,
            mock::STUDENTS,
            mock::MENTORS
        );
        Self {
            blog: RwSignal::new(DataView::new(
                RecordStore::new(mock::blog_posts()),
                size(DashboardTab::Blog),
            )),
            enquiries: RwSignal::new(DataView::new(
                RecordStore::new(mock::enquiries()),
                size(DashboardTab::Enquiries),
            )),
            events: RwSignal::new(DataView::new(
                RecordStore::new(mock::events()),
                size(DashboardTab::Events),
            )),
            news: RwSignal::new(DataView::new(
                RecordStore::new(mock::news()),
                size(DashboardTab::News),
            )),
            students: RwSignal::new(DataView::new(
                RecordStore::new(mock::students()),
                size(DashboardTab::Students),
            )),
            mentors: RwSignal::new(DataView::new(
                RecordStore::new(mock::mentors()),
                size(DashboardTab::Mentors),
            )),
            mentor_chat: RwSignal::new(Conversation::with_greeting(
                config.chat.student_name.clone(),
                now,
            )),
            student_chat: RwSignal::new(Conversation::with_greeting(
                config.chat.mentor_name.clone(),
                now,
            )),
        }
    }
}

pub fn use_data() -> DataContext {
    use_context::<DataContext>().expect("DataContext not provided")
}
