use crate::domain::common::{AggregateRoot, Selector};

/// Состояние фильтра списка: поисковая строка и статус/категория
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<S> {
    pub query: String,
    pub selector: Selector<S>,
}

impl<S> Default for FilterState<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            selector: Selector::All,
        }
    }
}

impl<S> FilterState<S> {
    /// Есть ли активные условия (для бейджа и кнопки сброса)
    pub fn active_count(&self) -> usize {
        let query = usize::from(!self.query.trim().is_empty());
        let selector = usize::from(!matches!(self.selector, Selector::All));
        query + selector
    }
}

/// Отфильтровать записи с сохранением исходного порядка.
///
/// Запись проходит, если поисковая строка входит (без учёта регистра) в
/// одно из её поисковых полей И статус/категория совпадает с выбранным.
pub fn filter_records<'a, T: AggregateRoot>(
    records: &'a [T],
    state: &FilterState<T::Selector>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| state.selector.matches(&r.selector()) && r.matches_filter(&state.query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_enquiry::aggregate::{Enquiry, EnquiryStatus};
    use crate::domain::common::{RecordId, Searchable};
    use chrono::NaiveDate;

    fn enquiry(id: u64, name: &str, subject: &str, status: EnquiryStatus) -> Enquiry {
        Enquiry {
            id: RecordId(id),
            name: name.into(),
            email: format!("user{}@example.com", id),
            subject: subject.into(),
            message: "Hi".into(),
            status,
            received_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn store() -> Vec<Enquiry> {
        vec![
            enquiry(1, "Sara Kim", "Refund request", EnquiryStatus::New),
            enquiry(2, "Tom Baker", "Certificate missing", EnquiryStatus::Resolved),
            enquiry(3, "Sarah Connor", "Mentor change", EnquiryStatus::New),
            enquiry(4, "Ivan Orlov", "Refund status", EnquiryStatus::InProgress),
        ]
    }

    fn ids(found: &[&Enquiry]) -> Vec<u64> {
        found.iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let records = store();
        let found = filter_records(&records, &FilterState::default());
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_matches_either_field() {
        let records = store();
        let state = FilterState {
            query: "refund".into(),
            selector: Selector::All,
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec![1, 4]);

        let state = FilterState {
            query: "SAR".into(),
            selector: Selector::All,
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec![1, 3]);
    }

    #[test]
    fn test_query_and_selector_combine() {
        let records = store();
        let state = FilterState {
            query: "refund".into(),
            selector: Selector::Only(EnquiryStatus::New),
        };
        assert_eq!(ids(&filter_records(&records, &state)), vec![1]);
    }

    #[test]
    fn test_every_result_satisfies_predicate() {
        let records = store();
        for query in ["", "a", "re", "xyz", "Baker"] {
            for selector in Selector::<EnquiryStatus>::options() {
                let state = FilterState {
                    query: query.to_string(),
                    selector,
                };
                let found = filter_records(&records, &state);
                for e in &found {
                    assert!(selector.matches(&e.status));
                    assert!(e.matches_filter(query));
                }
                let expected = records
                    .iter()
                    .filter(|e| selector.matches(&e.status) && e.matches_filter(query))
                    .count();
                assert_eq!(found.len(), expected);
            }
        }
    }

    #[test]
    fn test_active_count() {
        let mut state: FilterState<EnquiryStatus> = FilterState::default();
        assert_eq!(state.active_count(), 0);
        state.query = " x ".into();
        state.selector = Selector::Only(EnquiryStatus::Resolved);
        assert_eq!(state.active_count(), 2);
    }
}
