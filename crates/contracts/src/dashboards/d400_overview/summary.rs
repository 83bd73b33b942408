//! Сводные показатели для вкладки Overview. Считаются по полному содержимому
//! хранилищ, без учёта фильтров списков.

use crate::domain::a003_event::aggregate::Event;
use crate::domain::a005_student::aggregate::Student;
use crate::domain::a006_mentor::aggregate::Mentor;
use crate::domain::common::SelectorValue;

/// Количество записей с данным статусом/категорией
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount<S> {
    pub value: S,
    pub count: usize,
}

/// Счётчики по всем значениям перечисления, в порядке `S::all()`.
/// Значения без записей тоже попадают в результат с нулём.
pub fn status_counts<T, S: SelectorValue>(
    records: &[T],
    key: impl Fn(&T) -> S,
) -> Vec<StatusCount<S>> {
    S::all()
        .iter()
        .map(|&value| StatusCount {
            value,
            count: records.iter().filter(|r| key(r) == value).count(),
        })
        .collect()
}

/// Средний прогресс по курсам, 0.0 для пустого списка
pub fn average_progress<'a>(students: impl IntoIterator<Item = &'a Student>) -> f64 {
    let (sum, n) = students
        .into_iter()
        .fold((0u64, 0u64), |(sum, n), s| (sum + u64::from(s.progress), n + 1));
    if n == 0 {
        return 0.0;
    }
    sum as f64 / n as f64
}

/// Заполненность мест по всем событиям: сумма регистраций к сумме мест
pub fn event_fill_rate(events: &[Event]) -> f64 {
    let capacity: u64 = events.iter().map(|e| u64::from(e.capacity)).sum();
    if capacity == 0 {
        return 0.0;
    }
    let registered: u64 = events
        .iter()
        .map(|e| u64::from(e.registered.min(e.capacity)))
        .sum();
    registered as f64 / capacity as f64 * 100.0
}

/// Студенты наставника с данным именем; пусто, если наставник не найден
pub fn students_of_mentor<'a>(
    mentors: &[Mentor],
    students: &'a [Student],
    mentor_name: &str,
) -> Vec<&'a Student> {
    let Some(mentor) = mentors.iter().find(|m| m.name == mentor_name) else {
        return Vec::new();
    };
    students
        .iter()
        .filter(|s| s.mentor_id == Some(mentor.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_event::aggregate::{EventCategory, EventStatus};
    use crate::domain::a005_student::aggregate::StudentStatus;
    use crate::domain::a006_mentor::aggregate::MentorStatus;
    use crate::domain::common::RecordId;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn student(id: u64, progress: u8, status: StudentStatus, mentor: Option<u64>) -> Student {
        Student {
            id: RecordId(id),
            name: format!("Student {}", id),
            email: format!("s{}@example.com", id),
            course: "Rust".into(),
            progress,
            status,
            mentor_id: mentor.map(RecordId),
            enrolled_on: date(),
        }
    }

    fn event(capacity: u32, registered: u32) -> Event {
        Event {
            id: RecordId(1),
            title: "Meetup".into(),
            location: "Online".into(),
            starts_on: date(),
            category: EventCategory::Meetup,
            capacity,
            registered,
            status: EventStatus::Upcoming,
        }
    }

    fn mentor(id: u64, name: &str) -> Mentor {
        Mentor {
            id: RecordId(id),
            name: name.into(),
            email: "m@example.com".into(),
            expertise: "Rust".into(),
            rating: 4.5,
            students_count: 0,
            status: MentorStatus::Active,
            joined_on: date(),
        }
    }

    #[test]
    fn test_status_counts_include_empty_values() {
        let students = vec![
            student(1, 10, StudentStatus::Active, None),
            student(2, 20, StudentStatus::Active, None),
            student(3, 100, StudentStatus::Graduated, None),
        ];
        let counts = status_counts(&students, |s| s.status);
        assert_eq!(counts.len(), StudentStatus::all().len());
        assert_eq!(counts[0], StatusCount { value: StudentStatus::Active, count: 2 });
        assert_eq!(counts[1].count, 0);
        assert_eq!(counts[2].count, 1);
    }

    #[test]
    fn test_average_progress() {
        let students = vec![
            student(1, 20, StudentStatus::Active, None),
            student(2, 70, StudentStatus::Active, None),
        ];
        assert_eq!(average_progress(&students), 45.0);
        assert_eq!(average_progress(&Vec::<Student>::new()), 0.0);
    }

    #[test]
    fn test_event_fill_rate_weighted_by_capacity() {
        let events = vec![event(10, 10), event(30, 0)];
        assert_eq!(event_fill_rate(&events), 25.0);
        assert_eq!(event_fill_rate(&[]), 0.0);
        assert_eq!(event_fill_rate(&[event(0, 0)]), 0.0);
    }

    #[test]
    fn test_students_of_mentor_by_name() {
        let mentors = vec![mentor(1, "Elena Morozova"), mentor(2, "Ivan Petrov")];
        let students = vec![
            student(1, 10, StudentStatus::Active, Some(1)),
            student(2, 10, StudentStatus::Active, Some(2)),
            student(3, 10, StudentStatus::Active, Some(1)),
            student(4, 10, StudentStatus::Active, None),
        ];
        let mine = students_of_mentor(&mentors, &students, "Elena Morozova");
        let ids: Vec<_> = mine.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![RecordId(1), RecordId(3)]);
        assert!(students_of_mentor(&mentors, &students, "Nobody").is_empty());
    }
}
