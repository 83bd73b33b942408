//! Копирование текста в буфер обмена через Web Clipboard API.

use wasm_bindgen_futures::spawn_local;

/// Скопировать текст; `on_success` вызывается после записи в буфер.
///
/// Ошибку (нет API, нет разрешения) пользователь видит в `alert`.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("clipboard unavailable: no window");
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => {
                log::warn!("clipboard write failed: {:?}", e);
                let _ = window.alert_with_message("Could not copy to clipboard");
            }
        }
    });
}
