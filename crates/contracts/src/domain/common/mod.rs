//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod form_fields;
pub mod selector;

// Re-exports
pub use aggregate_id::{AggregateId, IdGenerator, RecordId};
pub use aggregate_root::{AggregateRoot, Searchable};
pub use selector::{Selector, SelectorValue};
