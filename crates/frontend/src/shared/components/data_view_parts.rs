//! Общие части экранов дашборда: панель фильтров над таблицей, пагинация
//! или пустое состояние под ней, шапки карточки и формы.
//!
//! Обычные generic-функции, а не `#[component]`: тип записи выводится из
//! [`DataViewHandle`].

use super::pagination_controls::{range_label, PaginationControls};
use crate::shared::data::DataViewHandle;
use crate::shared::icons::icon;
use crate::shared::list_utils::selector_filter;
use contracts::domain::common::{AggregateRoot, RecordId};
use leptos::prelude::*;
use thaw::*;

/// Заголовок списка, поиск, фильтр по статусу/категории и кнопка создания
pub fn list_toolbar<T: AggregateRoot>(
    handle: DataViewHandle<T>,
    can_edit: bool,
    search_placeholder: &'static str,
) -> impl IntoView {
    let query = RwSignal::new(handle.with_untracked(|dv| dv.filter().query.clone()));
    Effect::new(move |_| handle.set_query(query.get()));

    let selector = Signal::derive(move || handle.with(|dv| dv.filter().selector));
    let on_selector = Callback::new(move |s| handle.set_selector(s));
    let active_filters = move || handle.with(|dv| dv.filter().active_count());

    view! {
        <div class="page__header">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">{T::list_name()}</h1>
                {can_edit.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle.open_create()
                    >
                        {icon("plus")}
                        {format!(" New {}", T::element_name().to_lowercase())}
                    </Button>
                })}
            </Flex>
            <div class="filter-panel">
                <div class="filter-panel__search">
                    {icon("search")}
                    <Input value=query placeholder=search_placeholder />
                </div>
                {selector_filter(selector, on_selector)}
                <Show when=move || { active_filters() > 0 }>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            query.set(String::new());
                            handle.reset_filters();
                        }
                    >
                        {icon("filter-x")}
                        {move || format!(" Reset ({})", active_filters())}
                    </Button>
                </Show>
            </div>
        </div>
    }
}

/// Пагинация под таблицей; при пустом результате фильтра вместо неё
/// выводится сообщение
pub fn list_footer<T: AggregateRoot>(handle: DataViewHandle<T>) -> impl IntoView {
    let total_pages = Signal::derive(move || handle.with(|dv| dv.total_pages()));
    let current_page = Signal::derive(move || handle.with(|dv| dv.paginator().current_page()));
    let label = Signal::derive(move || {
        handle.with(|dv| {
            let count = dv.filtered_count();
            range_label(dv.paginator().visible_range(count), count)
        })
    });
    let on_page_change = Callback::new(move |page| handle.jump_to_page(page));

    view! {
        <Show
            when=move || { total_pages.get() > 0 }
            fallback=|| view! {
                <div class="empty-state">
                    {format!("No {} match the current filters.", T::list_name().to_lowercase())}
                </div>
            }
        >
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                label=label
                on_page_change=on_page_change
            />
        </Show>
    }
}

/// Шапка карточки записи: назад к списку, редактирование, удаление
pub fn detail_header<T: AggregateRoot>(
    handle: DataViewHandle<T>,
    id: RecordId,
    title: String,
    can_edit: bool,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| handle.back_to_list()
                    >
                        {icon("arrow-left")}
                        {format!(" {}", T::list_name())}
                    </Button>
                    <h1 class="page__title">{title}</h1>
                </Space>
                {can_edit.then(|| view! {
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| handle.open_edit(id)
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| handle.delete(id)
                        >
                            {icon("delete")}
                            " Delete"
                        </Button>
                    </Space>
                })}
            </Flex>
        </div>
    }
}

/// Сообщение для карточки, запись которой уже удалена
pub fn missing_record<T: AggregateRoot>(handle: DataViewHandle<T>) -> impl IntoView {
    view! {
        <div class="empty-state">
            {format!("{} not found.", T::element_name())}
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| handle.back_to_list()>
                {icon("arrow-left")}
                " Back to list"
            </Button>
        </div>
    }
}

/// Заголовок формы с кнопками сохранения и отмены
pub fn form_header<T: AggregateRoot>(
    handle: DataViewHandle<T>,
    editing: bool,
    on_save: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let title = if editing {
        format!("Edit {}", T::element_name().to_lowercase())
    } else {
        format!("New {}", T::element_name().to_lowercase())
    };
    view! {
        <div class="page__header">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="page__title">{title}</h1>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save()>
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.cancel()>
                        {icon("close")}
                        " Cancel"
                    </Button>
                </Space>
            </Flex>
        </div>
    }
}

/// Ошибка проверки формы
pub fn form_error(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            }
        })
    }
}
