use super::filter::{filter_records, FilterState};
use super::paginator::Paginator;
use super::provider::{DataProvider, RecordStore};
use super::view_state::{FormMode, ViewState};
use crate::domain::common::{AggregateRoot, RecordId, Selector};
use crate::shared::error::DataViewError;
use std::marker::PhantomData;

/// Состояние одного дашборда: хранилище, фильтр, пагинация и текущий экран.
///
/// Все операции синхронные. Инварианты после каждой операции:
/// - текущая страница в пределах `[1, max(1, total_pages)]`;
/// - выбранная запись (карточка/редактирование) существует в хранилище.
#[derive(Debug, Clone)]
pub struct DataView<T: AggregateRoot, P: DataProvider<T> = RecordStore<T>> {
    provider: P,
    filter: FilterState<T::Selector>,
    paginator: Paginator,
    view: ViewState,
    _record: PhantomData<T>,
}

impl<T: AggregateRoot, P: DataProvider<T>> DataView<T, P> {
    pub fn new(provider: P, page_size: usize) -> Self {
        Self {
            provider,
            filter: FilterState::default(),
            paginator: Paginator::new(page_size),
            view: ViewState::List,
            _record: PhantomData,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn records(&self) -> &[T] {
        self.provider.list()
    }

    // ------------------------------------------------------------------
    // Фильтр
    // ------------------------------------------------------------------

    pub fn filter(&self) -> &FilterState<T::Selector> {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.paginator.reset();
    }

    pub fn set_selector(&mut self, selector: Selector<T::Selector>) {
        self.filter.selector = selector;
        self.paginator.reset();
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.paginator.reset();
    }

    pub fn filtered(&self) -> Vec<&T> {
        filter_records(self.provider.list(), &self.filter)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    // ------------------------------------------------------------------
    // Пагинация
    // ------------------------------------------------------------------

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered_count())
    }

    /// Записи текущей страницы
    pub fn page_items(&self) -> Vec<T> {
        let filtered = self.filtered();
        self.paginator
            .page_slice(&filtered)
            .iter()
            .map(|r| (*r).clone())
            .collect()
    }

    pub fn next_page(&mut self) {
        let count = self.filtered_count();
        self.paginator.next(count);
    }

    pub fn prev_page(&mut self) {
        let count = self.filtered_count();
        self.paginator.prev(count);
    }

    pub fn jump_to_page(&mut self, page: usize) {
        let count = self.filtered_count();
        self.paginator.jump(page, count);
    }

    // ------------------------------------------------------------------
    // Навигация
    // ------------------------------------------------------------------

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Запись, открытая в карточке или форме редактирования
    pub fn selected(&self) -> Option<&T> {
        self.view.selected_id().and_then(|id| self.provider.get(id))
    }

    /// Установить экран (клик по строке, кнопки, восстановление из URL).
    /// Ссылка на отсутствующую запись сбрасывает в список.
    pub fn restore(&mut self, view: ViewState) -> ViewState {
        let provider = &self.provider;
        self.view = view.resolve(|id| provider.contains(id));
        self.view
    }

    pub fn open_detail(&mut self, id: RecordId) -> ViewState {
        self.restore(ViewState::Detail(id))
    }

    pub fn open_create(&mut self) -> ViewState {
        self.restore(ViewState::Form(FormMode::Create))
    }

    pub fn open_edit(&mut self, id: RecordId) -> ViewState {
        self.restore(ViewState::Form(FormMode::Edit(id)))
    }

    pub fn cancel(&mut self) -> ViewState {
        let next = self.view.cancel();
        self.restore(next)
    }

    pub fn back_to_list(&mut self) -> ViewState {
        self.restore(ViewState::List)
    }

    /// Начальные значения формы для текущего экрана
    pub fn form_for_view(&self) -> T::Form {
        match self.view {
            ViewState::Form(FormMode::Edit(_)) => {
                self.selected().map(|r| r.to_form()).unwrap_or_default()
            }
            _ => T::Form::default(),
        }
    }

    // ------------------------------------------------------------------
    // Изменения
    // ------------------------------------------------------------------

    /// Сохранить форму: обновление при редактировании, иначе создание.
    ///
    /// При ошибке проверки экран не меняется.
    pub fn submit(&mut self, form: &T::Form) -> Result<RecordId, DataViewError> {
        let saved = match self.view {
            ViewState::Form(FormMode::Edit(id)) => {
                self.provider.update(id, form)?;
                id
            }
            _ => {
                let id = self.provider.create(form)?;
                // новая запись стоит первой
                self.paginator.reset();
                id
            }
        };
        // правка могла вывести запись из-под фильтра
        let count = self.filtered_count();
        self.paginator.clamp(count);
        let next = self.view.after_submit(saved);
        self.restore(next);
        Ok(saved)
    }

    /// Удалить запись. Если она была открыта, вернуться к списку.
    pub fn delete(&mut self, id: RecordId) -> Result<(), DataViewError> {
        self.provider.delete(id)?;
        if self.view.selected_id() == Some(id) {
            self.view = ViewState::List;
        }
        let count = self.filtered_count();
        self.paginator.clamp(count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_event::aggregate::{Event, EventCategory, EventForm, EventStatus};
    use chrono::NaiveDate;

    fn event(id: u64, category: EventCategory) -> Event {
        Event {
            id: RecordId(id),
            title: format!("Event {}", id),
            location: if id % 2 == 0 { "Online".into() } else { "Lisbon".into() },
            starts_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            category,
            capacity: 50,
            registered: 10,
            status: EventStatus::Upcoming,
        }
    }

    fn twelve_events() -> DataView<Event> {
        let records = (1..=12).map(|id| event(id, EventCategory::Workshop)).collect();
        DataView::new(RecordStore::new(records), 10)
    }

    fn form(title: &str) -> EventForm {
        EventForm {
            title: title.into(),
            location: "Online".into(),
            starts_on: "2024-07-01".into(),
            category: EventCategory::Webinar,
            capacity: "30".into(),
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn test_twelve_events_two_pages() {
        let mut view = twelve_events();
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.page_items().len(), 10);

        view.next_page();
        let page: Vec<u64> = view.page_items().iter().map(|e| e.id.0).collect();
        assert_eq!(page, vec![11, 12]);

        view.next_page();
        assert_eq!(view.paginator().current_page(), 2);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = twelve_events();
        view.jump_to_page(2);
        view.set_query("online");
        assert_eq!(view.paginator().current_page(), 1);
        assert_eq!(view.filtered_count(), 6);

        view.jump_to_page(2);
        view.set_selector(Selector::Only(EventCategory::Workshop));
        assert_eq!(view.paginator().current_page(), 1);

        view.set_selector(Selector::Only(EventCategory::Meetup));
        assert_eq!(view.total_pages(), 0);
        assert!(view.page_items().is_empty());
    }

    #[test]
    fn test_delete_selected_returns_to_list() {
        let mut view = twelve_events();
        assert_eq!(view.open_detail(RecordId(4)), ViewState::Detail(RecordId(4)));
        view.delete(RecordId(4)).unwrap();
        assert_eq!(view.view(), ViewState::List);
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_delete_other_keeps_detail() {
        let mut view = twelve_events();
        view.open_detail(RecordId(4));
        view.delete(RecordId(5)).unwrap();
        assert_eq!(view.view(), ViewState::Detail(RecordId(4)));
    }

    #[test]
    fn test_delete_clamps_page() {
        let records = (1..=11).map(|id| event(id, EventCategory::Meetup)).collect();
        let mut view: DataView<Event> = DataView::new(RecordStore::new(records), 10);
        view.jump_to_page(2);
        assert_eq!(view.paginator().current_page(), 2);
        view.delete(RecordId(11)).unwrap();
        assert_eq!(view.paginator().current_page(), 1);
        assert_eq!(view.page_items().len(), 10);
    }

    #[test]
    fn test_edit_out_of_filter_clamps_page() {
        let records = (1..=11).map(|id| event(id, EventCategory::Workshop)).collect();
        let mut view: DataView<Event> = DataView::new(RecordStore::new(records), 10);
        view.set_selector(Selector::Only(EventCategory::Workshop));
        view.jump_to_page(2);
        let last = view.page_items()[0].id;
        assert_eq!(last, RecordId(11));

        view.open_edit(last);
        let mut edit = view.form_for_view();
        edit.category = EventCategory::Meetup;
        view.submit(&edit).unwrap();
        view.back_to_list();

        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.paginator().current_page(), 1);
        assert_eq!(view.page_items().len(), 10);
    }

    #[test]
    fn test_open_missing_record_falls_back() {
        let mut view = twelve_events();
        assert_eq!(view.open_detail(RecordId(99)), ViewState::List);
        assert_eq!(view.open_edit(RecordId(99)), ViewState::List);
    }

    #[test]
    fn test_edit_submit_preserves_id_and_returns_to_detail() {
        let mut view = twelve_events();
        view.open_detail(RecordId(3));
        view.restore(view.view().edit());
        let mut edit = view.form_for_view();
        assert_eq!(edit.title, "Event 3");
        edit.title = "Renamed".into();

        let saved = view.submit(&edit).unwrap();
        assert_eq!(saved, RecordId(3));
        assert_eq!(view.view(), ViewState::Detail(RecordId(3)));
        let selected = view.selected().unwrap();
        assert_eq!(selected.title, "Renamed");
        assert_eq!(selected.registered, 10);
        assert_eq!(selected.location, "Lisbon");
        assert_eq!(view.records().len(), 12);
    }

    #[test]
    fn test_create_submit_prepends_and_returns_to_list() {
        let mut view = twelve_events();
        view.jump_to_page(2);
        view.open_create();
        assert_eq!(view.form_for_view(), EventForm::default());

        let id = view.submit(&form("Fresh webinar")).unwrap();
        assert_eq!(id, RecordId(13));
        assert_eq!(view.view(), ViewState::List);
        assert_eq!(view.paginator().current_page(), 1);
        assert_eq!(view.page_items()[0].title, "Fresh webinar");
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut view = twelve_events();
        view.open_create();
        let err = view.submit(&form("")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(view.view(), ViewState::Form(FormMode::Create));
        assert_eq!(view.records().len(), 12);
    }

    #[test]
    fn test_cancel_paths() {
        let mut view = twelve_events();
        view.open_edit(RecordId(2));
        assert_eq!(view.cancel(), ViewState::Detail(RecordId(2)));
        assert_eq!(view.back_to_list(), ViewState::List);
        view.open_create();
        assert_eq!(view.cancel(), ViewState::List);
    }
}
