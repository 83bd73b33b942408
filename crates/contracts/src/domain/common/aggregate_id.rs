use serde::{Deserialize, Serialize};
use std::fmt;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId: Clone + Copy + PartialEq + Eq + std::hash::Hash + fmt::Debug {
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Идентификатор записи в пределах одного хранилища
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AggregateId for RecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid record id: {}", e))
    }
}

/// Монотонный генератор идентификаторов.
///
/// Заводится после максимального существующего ID, поэтому новая запись
/// никогда не получает уже занятый идентификатор.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Генератор, продолжающий нумерацию после существующих ID
    pub fn seeded_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let last = ids.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> RecordId {
        self.last += 1;
        RecordId(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_string() {
        assert_eq!(RecordId::from_string("42"), Ok(RecordId(42)));
        assert_eq!(RecordId::from_string(" 7 "), Ok(RecordId(7)));
        assert!(RecordId::from_string("abc").is_err());
        assert!(RecordId::from_string("-1").is_err());
    }

    #[test]
    fn test_generator_continues_after_max() {
        let mut ids = IdGenerator::seeded_after([RecordId(3), RecordId(12), RecordId(5)]);
        assert_eq!(ids.next_id(), RecordId(13));
        assert_eq!(ids.next_id(), RecordId(14));
    }

    #[test]
    fn test_generator_never_repeats() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert_eq!(first, RecordId(1));
    }
}
