use super::{RecordId, SelectorValue};
use crate::shared::error::DataViewError;
use std::fmt::Debug;

/// Trait для типов данных, поддерживающих текстовый поиск
pub trait Searchable {
    /// Поля, по которым выполняется поиск (одно или два)
    fn search_fields(&self) -> Vec<&str>;

    /// Регистронезависимое вхождение подстроки хотя бы в одно поле.
    /// Пустой запрос совпадает с любой записью.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Трейт для корня агрегата
///
/// Общий контракт всех записей, которые показываются в дашбордах
/// по схеме список → карточка → форма.
pub trait AggregateRoot: Searchable + Clone + Debug + Send + Sync + 'static {
    /// Статус или категория, по которой фильтруется список
    type Selector: SelectorValue;

    /// Данные формы создания/редактирования
    type Form: Clone + Debug + Default + Send + Sync + 'static;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> RecordId;

    /// Значение для фильтра по статусу/категории
    fn selector(&self) -> Self::Selector;

    /// Заголовок записи для карточки и заголовка формы
    fn title(&self) -> &str;

    /// Заполнить форму текущими значениями
    fn to_form(&self) -> Self::Form;

    /// Собрать новую запись из формы
    fn create_from_form(id: RecordId, form: &Self::Form) -> Result<Self, DataViewError>;

    /// Поверхностное слияние формы в существующую запись.
    /// ID и поля, которых нет в форме, не меняются.
    fn apply_form(&mut self, form: &Self::Form) -> Result<(), DataViewError>;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "blog_post")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a001_blog_post")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Post {
        title: String,
        author: String,
    }

    impl Searchable for Post {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.author]
        }
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let post = Post {
            title: "Getting Started with Rust".into(),
            author: "Maria Lopez".into(),
        };
        assert!(post.matches_filter("rust"));
        assert!(post.matches_filter("LOPEZ"));
        assert!(post.matches_filter("  started "));
        assert!(!post.matches_filter("python"));
    }

    #[test]
    fn test_empty_filter_matches() {
        let post = Post {
            title: String::new(),
            author: String::new(),
        };
        assert!(post.matches_filter(""));
        assert!(post.matches_filter("   "));
    }
}
