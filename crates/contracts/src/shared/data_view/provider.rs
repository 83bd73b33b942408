use crate::domain::common::{AggregateRoot, IdGenerator, RecordId};
use crate::shared::error::DataViewError;

/// Источник записей дашборда: `list/create/update/delete`.
///
/// Отделяет дашборд от происхождения данных; сейчас единственная
/// реализация: [`RecordStore`] в памяти.
pub trait DataProvider<T: AggregateRoot> {
    /// Все записи в порядке хранения
    fn list(&self) -> &[T];

    fn create(&mut self, form: &T::Form) -> Result<RecordId, DataViewError>;

    fn update(&mut self, id: RecordId, form: &T::Form) -> Result<(), DataViewError>;

    fn delete(&mut self, id: RecordId) -> Result<(), DataViewError>;

    /// Поиск по ID линейным проходом
    fn get(&self, id: RecordId) -> Option<&T> {
        self.list().iter().find(|r| r.id() == id)
    }

    fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }
}

/// Хранилище записей в памяти.
///
/// Порядок вектора = порядок отображения; новые записи добавляются в начало.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    ids: IdGenerator,
}

impl<T: AggregateRoot> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        let ids = IdGenerator::seeded_after(records.iter().map(|r| r.id()));
        Self { records, ids }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: AggregateRoot> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: AggregateRoot> DataProvider<T> for RecordStore<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn create(&mut self, form: &T::Form) -> Result<RecordId, DataViewError> {
        let id = self.ids.next_id();
        let record = T::create_from_form(id, form)?;
        self.records.insert(0, record);
        log::info!("{}: created record {}", T::full_name(), id);
        Ok(id)
    }

    fn update(&mut self, id: RecordId, form: &T::Form) -> Result<(), DataViewError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(DataViewError::NotFound(id))?;
        record.apply_form(form)?;
        log::info!("{}: updated record {}", T::full_name(), id);
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<(), DataViewError> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            return Err(DataViewError::NotFound(id));
        }
        log::info!("{}: deleted record {}", T::full_name(), id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_mentor::aggregate::{Mentor, MentorForm, MentorStatus};
    use chrono::NaiveDate;

    fn mentor(id: u64, name: &str) -> Mentor {
        Mentor {
            id: RecordId(id),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            expertise: "Data Science".into(),
            rating: 4.5,
            students_count: 8,
            status: MentorStatus::Active,
            joined_on: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        }
    }

    fn form(name: &str) -> MentorForm {
        MentorForm {
            name: name.into(),
            email: "new@example.com".into(),
            expertise: "Cloud".into(),
            status: MentorStatus::Active,
            joined_on: "2024-04-01".into(),
        }
    }

    #[test]
    fn test_create_prepends_with_unused_id() {
        let mut store = RecordStore::new(vec![mentor(3, "Ada"), mentor(8, "Bob")]);
        let first = store.create(&form("Cleo")).unwrap();
        let second = store.create(&form("Dan")).unwrap();

        assert_eq!(first, RecordId(9));
        assert_eq!(second, RecordId(10));
        assert_eq!(store.list()[0].name, "Dan");
        assert_eq!(store.list()[1].name, "Cleo");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_invalid_create_does_not_insert() {
        let mut store = RecordStore::new(vec![mentor(1, "Ada")]);
        let err = store.create(&form("  ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_preserves_unedited_fields() {
        let mut store = RecordStore::new(vec![mentor(1, "Ada"), mentor(2, "Bob")]);
        let mut edit = store.get(RecordId(2)).unwrap().to_form();
        edit.expertise = "Machine Learning".into();
        store.update(RecordId(2), &edit).unwrap();

        let updated = store.get(RecordId(2)).unwrap();
        assert_eq!(updated.id, RecordId(2));
        assert_eq!(updated.expertise, "Machine Learning");
        assert_eq!(updated.rating, 4.5);
        assert_eq!(updated.students_count, 8);
        assert_eq!(store.list()[1].name, "Bob");
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut store = RecordStore::new(vec![mentor(1, "Ada")]);
        assert_eq!(
            store.update(RecordId(5), &form("X")),
            Err(DataViewError::NotFound(RecordId(5)))
        );
        assert_eq!(store.delete(RecordId(5)), Err(DataViewError::NotFound(RecordId(5))));
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = RecordStore::new(vec![mentor(1, "Ada"), mentor(2, "Bob")]);
        store.delete(RecordId(1)).unwrap();
        assert!(!store.contains(RecordId(1)));
        assert_eq!(store.len(), 1);
    }
}
