//! Контракты образовательной платформы: записи дашбордов, ядро
//! представления данных (фильтр, пагинация, навигация), роли и конфигурация.
//!
//! Крейт не зависит от WASM и полностью тестируется нативно.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
