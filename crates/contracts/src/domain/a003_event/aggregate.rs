use crate::domain::common::form_fields::{format_date, required, required_date, required_u32};
use crate::domain::common::{AggregateRoot, RecordId, Searchable};
use crate::shared::error::DataViewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventCategory {
    #[default]
    Workshop,
    Webinar,
    Meetup,
    Conference,
}

crate::selector_value!(EventCategory {
    Workshop => ("workshop", "Workshop"),
    Webinar => ("webinar", "Webinar"),
    Meetup => ("meetup", "Meetup"),
    Conference => ("conference", "Conference"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

crate::selector_value!(EventStatus {
    Upcoming => ("upcoming", "Upcoming"),
    Ongoing => ("ongoing", "Ongoing"),
    Completed => ("completed", "Completed"),
    Cancelled => ("cancelled", "Cancelled"),
});

/// Мероприятие платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub location: String,
    pub starts_on: NaiveDate,
    pub category: EventCategory,
    pub capacity: u32,
    /// Не редактируется в форме, меняется только регистрациями
    pub registered: u32,
    pub status: EventStatus,
}

impl Event {
    /// Заполненность в процентах, 0 для мероприятий без мест
    pub fn fill_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.registered as f64 / self.capacity as f64 * 100.0).min(100.0)
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.location]
    }
}

impl AggregateRoot for Event {
    type Selector = EventCategory;
    type Form = EventForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn selector(&self) -> EventCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.clone(),
            location: self.location.clone(),
            starts_on: format_date(self.starts_on),
            category: self.category,
            capacity: self.capacity.to_string(),
            status: self.status,
        }
    }

    fn create_from_form(id: RecordId, form: &EventForm) -> Result<Self, DataViewError> {
        Ok(Event {
            id,
            title: required(&form.title, "Title")?,
            location: required(&form.location, "Location")?,
            starts_on: required_date(&form.starts_on, "Date")?,
            category: form.category,
            capacity: required_u32(&form.capacity, "Capacity")?,
            registered: 0,
            status: form.status,
        })
    }

    fn apply_form(&mut self, form: &EventForm) -> Result<(), DataViewError> {
        let title = required(&form.title, "Title")?;
        let location = required(&form.location, "Location")?;
        let starts_on = required_date(&form.starts_on, "Date")?;
        let capacity = required_u32(&form.capacity, "Capacity")?;

        self.title = title;
        self.location = location;
        self.starts_on = starts_on;
        self.category = form.category;
        self.capacity = capacity;
        self.status = form.status;
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "event"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventForm {
    pub title: String,
    pub location: String,
    pub starts_on: String,
    pub category: EventCategory,
    pub capacity: String,
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(capacity: u32, registered: u32) -> Event {
        Event {
            id: RecordId(1),
            title: "Rust meetup".into(),
            location: "Berlin".into(),
            starts_on: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            category: EventCategory::Meetup,
            capacity,
            registered,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(event(40, 10).fill_percent(), 25.0);
        assert_eq!(event(0, 0).fill_percent(), 0.0);
        assert_eq!(event(10, 12).fill_percent(), 100.0);
        assert_eq!(event(10, 12).seats_left(), 0);
    }

    #[test]
    fn test_edit_keeps_registrations() {
        let mut e = event(40, 17);
        let mut form = e.to_form();
        form.capacity = "60".into();
        form.title = "Rust meetup #2".into();
        e.apply_form(&form).unwrap();
        assert_eq!(e.capacity, 60);
        assert_eq!(e.registered, 17);
        assert_eq!(e.location, "Berlin");
    }

    #[test]
    fn test_new_event_starts_empty() {
        let form = EventForm {
            title: "Intro webinar".into(),
            location: "Online".into(),
            starts_on: "2024-10-05".into(),
            category: EventCategory::Webinar,
            capacity: "100".into(),
            status: EventStatus::Upcoming,
        };
        let e = Event::create_from_form(RecordId(3), &form).unwrap();
        assert_eq!(e.registered, 0);
        assert_eq!(e.selector(), EventCategory::Webinar);
    }
}
