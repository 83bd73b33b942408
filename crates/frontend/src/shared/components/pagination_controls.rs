use crate::shared::icons::icon;
use leptos::prelude::*;

/// Подпись "Showing 11–12 of 12" для текущей страницы
pub fn range_label(range: Option<(usize, usize)>, total_count: usize) -> String {
    match range {
        Some((first, last)) => format!("Showing {}–{} of {}", first, last, total_count),
        None => format!("Showing 0 of {}", total_count),
    }
}

/// PaginationControls component - reusable pagination controls
///
/// Страницы нумеруются с 1. Кнопки на границах выключены.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// "Showing a–b of n"
    #[prop(into)]
    label: Signal<String>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">{move || label.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get())
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(Some((11, 12)), 12), "Showing 11–12 of 12");
        assert_eq!(range_label(None, 0), "Showing 0 of 0");
    }
}
