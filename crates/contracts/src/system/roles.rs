//! Роли пользователей и вкладки их дашбордов

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Mentor,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Mentor, Role::User];

    pub fn slug(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mentor => "mentor",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Mentor => "Mentor",
            Role::User => "Student",
        }
    }

    /// Неизвестная или отсутствующая роль даёт `fallback`
    pub fn parse(slug: Option<&str>, fallback: Role) -> Role {
        slug.and_then(|s| Self::ALL.into_iter().find(|r| r.slug() == s))
            .unwrap_or(fallback)
    }

    /// Вкладки роли в порядке меню; первая открывается по умолчанию
    pub fn tabs(&self) -> &'static [DashboardTab] {
        use DashboardTab::*;
        match self {
            Role::Admin => &[Overview, Blog, Enquiries, Events, News, Students, Mentors],
            Role::Mentor => &[Overview, Students, Events, Chat],
            Role::User => &[Overview, Events, News, Blog, Chat],
        }
    }

    pub fn default_tab(&self) -> DashboardTab {
        self.tabs()[0]
    }

    /// Может ли роль создавать, редактировать и удалять записи вкладки
    pub fn can_edit(&self, tab: DashboardTab) -> bool {
        match self {
            Role::Admin => true,
            Role::Mentor => matches!(tab, DashboardTab::Students),
            Role::User => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Overview,
    Blog,
    Enquiries,
    Events,
    News,
    Students,
    Mentors,
    Chat,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 8] = [
        DashboardTab::Overview,
        DashboardTab::Blog,
        DashboardTab::Enquiries,
        DashboardTab::Events,
        DashboardTab::News,
        DashboardTab::Students,
        DashboardTab::Mentors,
        DashboardTab::Chat,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Blog => "blog",
            DashboardTab::Enquiries => "enquiries",
            DashboardTab::Events => "events",
            DashboardTab::News => "news",
            DashboardTab::Students => "students",
            DashboardTab::Mentors => "mentors",
            DashboardTab::Chat => "chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Blog => "Blog",
            DashboardTab::Enquiries => "Enquiries",
            DashboardTab::Events => "Events",
            DashboardTab::News => "News",
            DashboardTab::Students => "Students",
            DashboardTab::Mentors => "Mentors",
            DashboardTab::Chat => "Chat",
        }
    }

    /// Имя иконки из `shared::icons`
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "dashboard",
            DashboardTab::Blog => "blog",
            DashboardTab::Enquiries => "mail",
            DashboardTab::Events => "calendar",
            DashboardTab::News => "news",
            DashboardTab::Students => "users",
            DashboardTab::Mentors => "mentor",
            DashboardTab::Chat => "chat",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Вкладка из URL для роли: неизвестная или недоступная роли вкладка
    /// заменяется первой вкладкой роли
    pub fn resolve(slug: Option<&str>, role: Role) -> Self {
        slug.and_then(Self::from_slug)
            .filter(|tab| role.tabs().contains(tab))
            .unwrap_or_else(|| role.default_tab())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_fallback() {
        assert_eq!(Role::parse(Some("mentor"), Role::Admin), Role::Mentor);
        assert_eq!(Role::parse(Some("root"), Role::User), Role::User);
        assert_eq!(Role::parse(None, Role::Admin), Role::Admin);
    }

    #[test]
    fn test_tab_resolution_per_role() {
        assert_eq!(DashboardTab::resolve(Some("events"), Role::User), DashboardTab::Events);
        assert_eq!(DashboardTab::resolve(Some("mentors"), Role::User), DashboardTab::Overview);
        assert_eq!(DashboardTab::resolve(Some("bogus"), Role::Mentor), DashboardTab::Overview);
        assert_eq!(DashboardTab::resolve(None, Role::Admin), DashboardTab::Overview);
    }

    #[test]
    fn test_every_role_starts_with_overview() {
        for role in Role::ALL {
            assert_eq!(role.default_tab(), DashboardTab::Overview);
        }
    }

    #[test]
    fn test_edit_permissions() {
        assert!(Role::Admin.can_edit(DashboardTab::Blog));
        assert!(Role::Mentor.can_edit(DashboardTab::Students));
        assert!(!Role::Mentor.can_edit(DashboardTab::Events));
        assert!(!Role::User.can_edit(DashboardTab::Events));
    }

    #[test]
    fn test_slugs_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_slug(tab.slug()), Some(tab));
        }
    }
}
