//! Содержимое вкладок
//!
//! - `registry` - маппинг вкладки на её View (единственный источник правды)

pub mod registry;

pub use registry::render_tab_content;
