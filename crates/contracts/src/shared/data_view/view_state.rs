use crate::domain::common::{AggregateId, RecordId};
use serde::{Deserialize, Serialize};

/// Режим формы: новая запись или редактирование существующей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Что сейчас показывает дашборд
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    List,
    Detail(RecordId),
    Form(FormMode),
}

impl ViewState {
    pub const LIST: &'static str = "list";
    pub const DETAIL: &'static str = "detail";
    pub const FORM: &'static str = "form";

    /// ID записи, открытой в карточке или форме редактирования
    pub fn selected_id(&self) -> Option<RecordId> {
        match self {
            ViewState::Detail(id) | ViewState::Form(FormMode::Edit(id)) => Some(*id),
            ViewState::List | ViewState::Form(FormMode::Create) => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ViewState::List => Self::LIST,
            ViewState::Detail(_) => Self::DETAIL,
            ViewState::Form(_) => Self::FORM,
        }
    }

    /// Открыть форму редактирования из карточки
    pub fn edit(self) -> Self {
        match self {
            ViewState::Detail(id) => ViewState::Form(FormMode::Edit(id)),
            other => other,
        }
    }

    /// Отмена формы: редактирование возвращает в карточку, создание в список
    pub fn cancel(self) -> Self {
        match self {
            ViewState::Form(FormMode::Edit(id)) => ViewState::Detail(id),
            _ => ViewState::List,
        }
    }

    /// Состояние после успешного сохранения формы
    pub fn after_submit(self, saved: RecordId) -> Self {
        match self {
            ViewState::Form(FormMode::Edit(_)) => ViewState::Detail(saved),
            _ => ViewState::List,
        }
    }

    /// Сбросить в список, если выбранной записи больше нет в хранилище
    pub fn resolve<F>(self, exists: F) -> Self
    where
        F: Fn(RecordId) -> bool,
    {
        match self.selected_id() {
            Some(id) if !exists(id) => {
                log::debug!("record {} not found, falling back to list", id);
                ViewState::List
            }
            _ => self,
        }
    }

    /// Разобрать состояние из параметров URL.
    ///
    /// Неизвестный `view` или некорректный `id` дают список; `view=form`
    /// без `id` означает создание.
    pub fn from_query(query: &ViewQuery) -> Self {
        let id = query
            .id
            .as_deref()
            .and_then(|raw| RecordId::from_string(raw).ok());
        match (query.view.as_deref(), id) {
            (Some("detail"), Some(id)) => ViewState::Detail(id),
            (Some("form"), Some(id)) => ViewState::Form(FormMode::Edit(id)),
            (Some("form"), None) if query.id.is_none() => ViewState::Form(FormMode::Create),
            _ => ViewState::List,
        }
    }

    /// Записать состояние в параметры URL (остальные параметры не трогаются)
    pub fn write_query(&self, query: &mut ViewQuery) {
        match self {
            ViewState::List => {
                query.view = None;
                query.id = None;
            }
            _ => {
                query.view = Some(self.slug().to_string());
                query.id = self.selected_id().map(|id| id.as_string());
            }
        }
    }
}

/// Параметры строки запроса `?role=..&tab=..&view=..&id=..`.
///
/// Схемы нет: всё хранится строками, толкование делают [`ViewState`] и
/// роли/вкладки.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ViewQuery {
    /// Разбор `location.search`; при ошибке возвращаются значения по умолчанию
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    /// Строка для `history.pushState`/навигации, всегда начинается с `?`
    pub fn to_search(&self) -> String {
        format!("?{}", serde_qs::to_string(self).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(search: &str) -> ViewState {
        ViewState::from_query(&ViewQuery::parse(search))
    }

    #[test]
    fn test_parse_known_views() {
        assert_eq!(state("?tab=events&view=detail&id=123"), ViewState::Detail(RecordId(123)));
        assert_eq!(state("view=form"), ViewState::Form(FormMode::Create));
        assert_eq!(state("view=form&id=5"), ViewState::Form(FormMode::Edit(RecordId(5))));
        assert_eq!(state("view=list"), ViewState::List);
        assert_eq!(state(""), ViewState::List);
    }

    #[test]
    fn test_malformed_values_fall_back_to_list() {
        assert_eq!(state("view=detail"), ViewState::List);
        assert_eq!(state("view=detail&id=abc"), ViewState::List);
        assert_eq!(state("view=form&id=abc"), ViewState::List);
        assert_eq!(state("view=gallery&id=1"), ViewState::List);
    }

    #[test]
    fn test_write_then_parse() {
        let mut query = ViewQuery {
            role: Some("admin".into()),
            tab: Some("events".into()),
            ..Default::default()
        };
        ViewState::Form(FormMode::Edit(RecordId(7))).write_query(&mut query);
        let search = query.to_search();
        assert_eq!(search, "?role=admin&tab=events&view=form&id=7");
        assert_eq!(state(&search), ViewState::Form(FormMode::Edit(RecordId(7))));

        ViewState::List.write_query(&mut query);
        assert_eq!(query.to_search(), "?role=admin&tab=events");
    }

    #[test]
    fn test_transitions() {
        let detail = ViewState::Detail(RecordId(3));
        let edit = detail.edit();
        assert_eq!(edit, ViewState::Form(FormMode::Edit(RecordId(3))));
        assert_eq!(edit.cancel(), detail);
        assert_eq!(edit.after_submit(RecordId(3)), detail);

        let create = ViewState::Form(FormMode::Create);
        assert_eq!(create.cancel(), ViewState::List);
        assert_eq!(create.after_submit(RecordId(10)), ViewState::List);
        assert_eq!(ViewState::List.edit(), ViewState::List);
    }

    #[test]
    fn test_resolve_missing_record() {
        let detail = ViewState::Detail(RecordId(3));
        assert_eq!(detail.resolve(|id| id == RecordId(3)), detail);
        assert_eq!(detail.resolve(|_| false), ViewState::List);
        assert_eq!(
            ViewState::Form(FormMode::Create).resolve(|_| false),
            ViewState::Form(FormMode::Create)
        );
    }
}
