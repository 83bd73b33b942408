use contracts::shared::config::DashboardConfig;
use contracts::shared::data_view::{ViewQuery, ViewState};
use contracts::system::roles::{DashboardTab, Role};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<DashboardConfig>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn default_role(&self) -> Role {
        self.config.with_value(|c| c.session.default_role)
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

/// Состояние приложения в строке запроса: роль, вкладка, экран, запись.
///
/// Единственный источник правды для навигации. Кнопки "назад/вперёд"
/// браузера меняют `location.search`, мемо пересчитывается, и дашборды
/// восстанавливают экран.
#[derive(Clone, Copy)]
pub struct QueryNavigator {
    query: Memo<ViewQuery>,
    default_role: Role,
    navigate: StoredValue<Box<dyn Fn(&str, NavigateOptions)>, LocalStorage>,
}

impl QueryNavigator {
    /// Должен вызываться внутри `<Router>`
    pub fn new(default_role: Role) -> Self {
        let location = use_location();
        let query = Memo::new(move |_| ViewQuery::parse(&location.search.get()));
        let navigate = use_navigate();
        let navigate: Box<dyn Fn(&str, NavigateOptions)> =
            Box::new(move |url: &str, options: NavigateOptions| navigate(url, options));
        Self {
            query,
            default_role,
            navigate: StoredValue::new_local(navigate),
        }
    }

    pub fn query(&self) -> ViewQuery {
        self.query.get()
    }

    pub fn query_untracked(&self) -> ViewQuery {
        self.query.get_untracked()
    }

    pub fn role(&self) -> Role {
        let query = self.query.get();
        Role::parse(query.role.as_deref(), self.default_role)
    }

    pub fn tab(&self) -> DashboardTab {
        let query = self.query.get();
        let role = Role::parse(query.role.as_deref(), self.default_role);
        DashboardTab::resolve(query.tab.as_deref(), role)
    }

    /// Переключить роль: открывается первая вкладка роли, экран списка
    pub fn switch_role(&self, role: Role) {
        let query = ViewQuery {
            role: Some(role.slug().to_string()),
            tab: Some(role.default_tab().slug().to_string()),
            view: None,
            id: None,
        };
        log::debug!("switch role -> {}", role.slug());
        self.push(&query);
    }

    pub fn open_tab(&self, tab: DashboardTab) {
        let mut query = self.query_untracked();
        query.tab = Some(tab.slug().to_string());
        query.view = None;
        query.id = None;
        self.push(&query);
    }

    /// Записать экран дашборда в URL (новая запись истории)
    pub fn show(&self, view: ViewState) {
        let mut query = self.query_untracked();
        view.write_query(&mut query);
        self.push(&query);
    }

    /// Исправить URL без новой записи истории (например, `id` удалённой записи)
    pub fn correct(&self, view: ViewState) {
        let mut query = self.query_untracked();
        view.write_query(&mut query);
        self.go(&query, true);
    }

    fn push(&self, query: &ViewQuery) {
        self.go(query, false);
    }

    fn go(&self, query: &ViewQuery, replace: bool) {
        if self.query.with_untracked(|current| current == query) {
            return;
        }
        let url = format!("/{}", query.to_search());
        self.navigate.with_value(|navigate| {
            navigate(
                &url,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            )
        });
    }
}

pub fn use_navigator() -> QueryNavigator {
    use_context::<QueryNavigator>().expect("QueryNavigator not found")
}
