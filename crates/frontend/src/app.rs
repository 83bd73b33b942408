use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::data::DataContext;
use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Ключ localStorage с TOML-переопределением настроек
const CONFIG_STORAGE_KEY: &str = "dashboard_config";

fn stored_config_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Переопределение из localStorage, иначе встроенные настройки
fn resolve_config() -> DashboardConfig {
    let override_toml = stored_config_override();
    load_config(override_toml.as_deref()).unwrap_or_else(|e| {
        log::error!("embedded config is invalid: {:#}", e);
        DashboardConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = resolve_config();
    log::info!(
        "dashboard config loaded, default role {}",
        config.session.default_role.slug()
    );

    provide_context(DataContext::new(&config));
    provide_context(AppGlobalContext::new(config));

    view! {
        <Router>
            <AppRoutes />
        </Router>
    }
}
