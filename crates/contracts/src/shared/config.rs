use crate::system::roles::{DashboardTab, Role};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub session: SessionConfig,
    pub pagination: PaginationConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Роль, если в URL нет `role`
    pub default_role: Role,
}

/// Размер страницы для каждого списка
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub blog: usize,
    pub enquiries: usize,
    pub events: usize,
    pub news: usize,
    pub students: usize,
    pub mentors: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    /// Задержка автоответа, мс
    pub reply_delay_ms: u32,
    /// Собеседник студента
    pub mentor_name: String,
    /// Собеседник ментора
    pub student_name: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[session]
default_role = "admin"

[pagination]
blog = 6
enquiries = 8
events = 10
news = 6
students = 10
mentors = 8

[chat]
reply_delay_ms = 1500
mentor_name = "Elena Morozova"
student_name = "Alex Johnson"
"#;

impl Default for DashboardConfig {
    /// Те же значения, что и в [`DEFAULT_CONFIG`]
    fn default() -> Self {
        Self {
            session: SessionConfig {
                default_role: Role::Admin,
            },
            pagination: PaginationConfig {
                blog: 6,
                enquiries: 8,
                events: 10,
                news: 6,
                students: 10,
                mentors: 8,
            },
            chat: ChatConfig {
                reply_delay_ms: 1500,
                mentor_name: "Elena Morozova".into(),
                student_name: "Alex Johnson".into(),
            },
        }
    }
}

impl DashboardConfig {
    /// Размер страницы вкладки; для вкладок без списка берётся размер событий
    pub fn page_size(&self, tab: DashboardTab) -> usize {
        let p = &self.pagination;
        match tab {
            DashboardTab::Blog => p.blog,
            DashboardTab::Enquiries => p.enquiries,
            DashboardTab::Events => p.events,
            DashboardTab::News => p.news,
            DashboardTab::Students => p.students,
            DashboardTab::Mentors => p.mentors,
            DashboardTab::Overview | DashboardTab::Chat => p.events,
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. Override text (e.g. from browser storage), if it parses
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DashboardConfig> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Loading config from override");
                return Ok(config);
            }
            Err(e) => log::warn!("Config override ignored: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.session.default_role, Role::Admin);
        assert_eq!(config.page_size(DashboardTab::Events), 10);
        assert_eq!(config.chat.reply_delay_ms, 1500);
    }

    #[test]
    fn test_override_replaces_default() {
        let text = DEFAULT_CONFIG
            .replace("default_role = \"admin\"", "default_role = \"mentor\"")
            .replace("students = 10", "students = 25");
        let config = load_config(Some(&text)).unwrap();
        assert_eq!(config.session.default_role, Role::Mentor);
        assert_eq!(config.page_size(DashboardTab::Students), 25);
    }

    #[test]
    fn test_default_matches_embedded() {
        assert_eq!(DashboardConfig::default(), parse_config(DEFAULT_CONFIG).unwrap());
    }

    #[test]
    fn test_broken_override_falls_back() {
        let config = load_config(Some("[session]\ndefault_role = 3")).unwrap();
        assert_eq!(config, parse_config(DEFAULT_CONFIG).unwrap());
    }
}
