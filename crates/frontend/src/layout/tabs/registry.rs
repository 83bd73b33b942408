//! Tab content registry: единственное место, где вкладка сопоставляется с View.
//!
//! Права роли на редактирование передаются в дашборд как `can_edit`.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_blog_post::ui::BlogDashboard;
use crate::domain::a002_enquiry::ui::EnquiriesDashboard;
use crate::domain::a003_event::ui::EventsDashboard;
use crate::domain::a004_news::ui::NewsDashboard;
use crate::domain::a005_student::ui::StudentsDashboard;
use crate::domain::a006_mentor::ui::MentorsDashboard;
use crate::system::chat::ui::ChatPanel;
use contracts::system::roles::{DashboardTab, Role};
use leptos::prelude::*;

pub fn render_tab_content(tab: DashboardTab, role: Role) -> AnyView {
    let can_edit = role.can_edit(tab);
    log::debug!("render tab {} for {}", tab.slug(), role.slug());

    match tab {
        DashboardTab::Overview => view! { <OverviewDashboard role /> }.into_any(),
        DashboardTab::Blog => view! { <BlogDashboard can_edit /> }.into_any(),
        DashboardTab::Enquiries => view! { <EnquiriesDashboard can_edit /> }.into_any(),
        DashboardTab::Events => view! { <EventsDashboard can_edit /> }.into_any(),
        DashboardTab::News => view! { <NewsDashboard can_edit /> }.into_any(),
        DashboardTab::Students => view! { <StudentsDashboard can_edit /> }.into_any(),
        DashboardTab::Mentors => view! { <MentorsDashboard can_edit /> }.into_any(),
        DashboardTab::Chat => view! { <ChatPanel role /> }.into_any(),
    }
}
