//! Общий шаблон дашборда: хранилище → фильтр → страница → навигация
//! (список / карточка / форма).

pub mod data_view;
pub mod filter;
pub mod paginator;
pub mod provider;
pub mod view_state;

pub use data_view::DataView;
pub use filter::{filter_records, FilterState};
pub use paginator::{paginate, Paginator};
pub use provider::{DataProvider, RecordStore};
pub use view_state::{FormMode, ViewQuery, ViewState};
