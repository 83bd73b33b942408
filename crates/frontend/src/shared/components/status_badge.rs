use contracts::domain::common::SelectorValue;
use leptos::prelude::*;

/// Бейдж статуса или категории: CSS-модификатор берётся из slug значения
pub fn status_badge<S: SelectorValue>(value: S) -> impl IntoView {
    view! {
        <span class=format!("badge badge--{}", value.slug().replace('_', "-"))>
            {value.label()}
        </span>
    }
}
