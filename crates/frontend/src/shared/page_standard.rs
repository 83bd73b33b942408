//! Категории страниц дашборда.
//!
//! Корневой элемент каждой страницы несёт:
//!   - HTML `id` в формате `{entity}--{category}` (например, `"a003_event--list"`)
//!   - `data-page-category` с одной из констант ниже
//!
//! Разделитель `--` позволяет скопировать id из инспектора браузера и
//! сразу найти каталог `domain/a003_event/`.

/// Таблица записей с фильтрами и пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка или форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Обзорная страница роли, чат
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_DASHBOARD];

/// Проверить формат `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_page_id() {
        assert!(is_valid_page_id("a003_event--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a003_event"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_event--popup"));
    }
}
