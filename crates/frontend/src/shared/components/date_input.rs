use leptos::prelude::*;

/// Поле даты с нативным календарём браузера. Значение в формате `yyyy-mm-dd`.
#[component]
pub fn DateInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
