use crate::domain::common::RecordId;
use thiserror::Error;

/// Ошибки операций над хранилищем и формами дашбордов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataViewError {
    /// Запись с таким ID отсутствует в хранилище
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// Поле формы не прошло проверку
    #[error("{0}")]
    Validation(String),
}

impl DataViewError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DataViewError::Validation(_))
    }
}
