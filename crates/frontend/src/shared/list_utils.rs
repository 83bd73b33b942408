/// Универсальные утилиты для работы со списками (подсветка поиска, выпадающие списки статусов)
use contracts::domain::common::{Selector, SelectorValue};
use leptos::prelude::*;

/// Разбить текст на куски: `(фрагмент, совпал ли с запросом)`.
///
/// Сравнение без учёта регистра. Если нижний регистр меняет длину строки
/// в байтах, подсветка не делается.
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last = 0;
    while let Some(pos) = haystack[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > last {
            parts.push((text[last..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last = end;
    }
    if last < text.len() {
        parts.push((text[last..].to_string(), false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    match_segments(text, filter)
        .into_iter()
        .map(|(part, hit)| {
            if hit {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Выпадающий список фильтра: "All" и все значения перечисления
pub fn selector_filter<S: SelectorValue>(
    current: Signal<Selector<S>>,
    on_change: Callback<Selector<S>>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            on:change=move |ev| on_change.run(Selector::from_slug(&event_target_value(&ev)))
            prop:value=move || current.get().slug()
        >
            {Selector::<S>::options()
                .into_iter()
                .map(|option| {
                    view! {
                        <option value=option.slug() selected=move || current.get() == option>
                            {option.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Выпадающий список значения перечисления для формы
pub fn enum_select<S: SelectorValue>(value: RwSignal<S>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            on:change=move |ev| {
                if let Some(v) = S::from_slug(&event_target_value(&ev)) {
                    value.set(v);
                }
            }
            prop:value=move || value.get().slug()
        >
            {S::all()
                .iter()
                .copied()
                .map(|option| {
                    view! {
                        <option value=option.slug() selected=move || value.get() == option>
                            {option.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(parts: &[(String, bool)]) -> Vec<&str> {
        parts
            .iter()
            .filter(|(_, hit)| *hit)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    #[test]
    fn test_match_segments_case_insensitive() {
        let parts = match_segments("Rust in Production", "rust");
        assert_eq!(hits(&parts), vec!["Rust"]);
        let joined: String = parts.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "Rust in Production");
    }

    #[test]
    fn test_match_segments_multiple_hits() {
        let parts = match_segments("anna banana", "an");
        assert_eq!(hits(&parts).len(), 3);
    }

    #[test]
    fn test_match_segments_empty_filter() {
        let parts = match_segments("Career fair", "   ");
        assert_eq!(parts, vec![("Career fair".to_string(), false)]);
    }

    #[test]
    fn test_match_segments_no_match() {
        let parts = match_segments("Webinar", "meetup");
        assert_eq!(parts, vec![("Webinar".to_string(), false)]);
    }

    #[test]
    fn test_one_query_highlights_both_row_fields() {
        let needle = String::from("lis");
        let title = match_segments("Lisbon meetup", &needle);
        let location = match_segments("Lisbon", &needle);
        assert_eq!(hits(&title), vec!["Lis"]);
        assert_eq!(hits(&location), vec!["Lis"]);
        assert_eq!(needle, "lis");
    }
}
