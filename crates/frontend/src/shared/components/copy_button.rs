use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Значение с кнопкой копирования; после записи в буфер на пару секунд
/// показывается отметка "Copied"
#[component]
pub fn CopyValue(#[prop(into)] value: String) -> impl IntoView {
    let copied = RwSignal::new(false);
    let text = StoredValue::new(value.clone());

    let on_copy = move |_| {
        text.with_value(|t| {
            copy_to_clipboard_with_callback(t, move || {
                copied.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(2_000).await;
                    copied.try_set(false);
                });
            })
        });
    };

    view! {
        <span class="copy-value">
            <span class="copy-value__text">{value}</span>
            <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=on_copy>
                {icon("copy")}
            </Button>
            <Show when=move || copied.get()>
                <span class="copy-value__notice">"Copied"</span>
            </Show>
        </span>
    }
}
