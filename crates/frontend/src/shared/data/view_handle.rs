//! Связка [`DataView`] с URL: экран дашборда читается из строки запроса,
//! действия пользователя меняют хранилище и записывают новый экран в историю.

use crate::layout::global_context::QueryNavigator;
use contracts::domain::common::{AggregateRoot, RecordId, Selector};
use contracts::shared::data_view::{DataProvider, DataView, ViewState};
use leptos::prelude::*;

pub struct DataViewHandle<T: AggregateRoot> {
    state: RwSignal<DataView<T>>,
    view: Memo<ViewState>,
    nav: QueryNavigator,
}

impl<T: AggregateRoot> Clone for DataViewHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AggregateRoot> Copy for DataViewHandle<T> {}

impl<T: AggregateRoot> DataViewHandle<T> {
    /// Подписать дашборд на URL. Вызывается один раз при монтировании.
    pub fn bind(state: RwSignal<DataView<T>>, nav: QueryNavigator) -> Self {
        // первый кадр сразу рисуется с экраном из URL
        let initial = ViewState::from_query(&nav.query_untracked());
        state.update(|dv| {
            dv.restore(initial);
        });
        Effect::new(move |_| {
            let query = nav.query();
            let requested = ViewState::from_query(&query);
            let resolved =
                state.with_untracked(|dv| requested.resolve(|id| dv.provider().contains(id)));
            if state.with_untracked(|dv| dv.view()) != resolved {
                state.update(|dv| {
                    dv.restore(resolved);
                });
            }
            if resolved != requested {
                // ссылка на несуществующую запись
                nav.correct(resolved);
            }
        });
        let view = Memo::new(move |_| state.with(|dv| dv.view()));
        Self { state, view, nav }
    }

    pub fn view(&self) -> ViewState {
        self.view.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&DataView<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&DataView<T>) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn page_items(&self) -> Vec<T> {
        self.state.with(|dv| dv.page_items())
    }

    pub fn selected(&self) -> Option<T> {
        self.state.with(|dv| dv.selected().cloned())
    }

    // ------------------------------------------------------------------
    // Фильтр и страницы
    // ------------------------------------------------------------------

    pub fn set_query(&self, query: String) {
        if self.state.with_untracked(|dv| dv.filter().query != query) {
            self.state.update(|dv| dv.set_query(query));
        }
    }

    pub fn set_selector(&self, selector: Selector<T::Selector>) {
        if self.state.with_untracked(|dv| dv.filter().selector != selector) {
            self.state.update(|dv| dv.set_selector(selector));
        }
    }

    pub fn reset_filters(&self) {
        self.state.update(|dv| dv.reset_filters());
    }

    pub fn next_page(&self) {
        self.state.update(|dv| dv.next_page());
    }

    pub fn prev_page(&self) {
        self.state.update(|dv| dv.prev_page());
    }

    pub fn jump_to_page(&self, page: usize) {
        self.state.update(|dv| dv.jump_to_page(page));
    }

    // ------------------------------------------------------------------
    // Навигация
    // ------------------------------------------------------------------

    fn show(&self, next: Option<ViewState>) {
        if let Some(next) = next {
            self.nav.show(next);
        }
    }

    pub fn open_detail(&self, id: RecordId) {
        self.show(self.state.try_update(|dv| dv.open_detail(id)));
    }

    pub fn open_create(&self) {
        self.show(self.state.try_update(|dv| dv.open_create()));
    }

    pub fn open_edit(&self, id: RecordId) {
        self.show(self.state.try_update(|dv| dv.open_edit(id)));
    }

    pub fn cancel(&self) {
        self.show(self.state.try_update(|dv| dv.cancel()));
    }

    pub fn back_to_list(&self) {
        self.show(self.state.try_update(|dv| dv.back_to_list()));
    }

    // ------------------------------------------------------------------
    // Изменения
    // ------------------------------------------------------------------

    /// Сохранить форму текущего экрана. Ошибка проверки возвращается текстом
    /// для вывода в форме.
    pub fn submit(&self, form: &T::Form) -> Result<RecordId, String> {
        let outcome = self
            .state
            .try_update(|dv| dv.submit(form).map(|id| (id, dv.view())));
        match outcome {
            Some(Ok((id, next))) => {
                log::info!("{} {} saved", T::element_name(), id);
                self.nav.show(next);
                Ok(id)
            }
            Some(Err(e)) => {
                log::warn!("{} not saved: {}", T::element_name(), e);
                Err(e.to_string())
            }
            None => Err(format!("{} is no longer available", T::list_name())),
        }
    }

    /// Удалить запись после подтверждения пользователем
    pub fn delete(&self, id: RecordId) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Delete this {}?",
                    T::element_name().to_lowercase()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let outcome = self
            .state
            .try_update(|dv| dv.delete(id).map(|_| dv.view()));
        match outcome {
            Some(Ok(next)) => {
                log::info!("{} {} deleted", T::element_name(), id);
                self.nav.show(next);
            }
            Some(Err(e)) => log::warn!("{} {} not deleted: {}", T::element_name(), id, e),
            None => {}
        }
    }
}
