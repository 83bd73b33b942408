use leptos::prelude::*;

/// Подпись и поле формы; обязательные поля помечены звёздочкой
#[component]
pub fn FormField(label: &'static str, #[prop(optional)] required: bool, children: Children) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            {children()}
        </div>
    }
}
