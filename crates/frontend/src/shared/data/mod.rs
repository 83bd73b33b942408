pub mod context;
pub mod mock;
pub mod view_handle;

pub use context::{use_data, DataContext};
pub use view_handle::DataViewHandle;
