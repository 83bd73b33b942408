use crate::domain::common::form_fields::{format_date, required, required_date};
use crate::domain::common::{AggregateRoot, RecordId, Searchable};
use crate::shared::error::DataViewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MentorStatus {
    #[default]
    Active,
    OnLeave,
    Inactive,
}

crate::selector_value!(MentorStatus {
    Active => ("active", "Active"),
    OnLeave => ("on_leave", "On leave"),
    Inactive => ("inactive", "Inactive"),
});

/// Ментор платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub expertise: String,
    /// Средняя оценка 0.0..=5.0, считается по отзывам
    pub rating: f32,
    pub students_count: u32,
    pub status: MentorStatus,
    pub joined_on: NaiveDate,
}

impl Searchable for Mentor {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.expertise]
    }
}

impl AggregateRoot for Mentor {
    type Selector = MentorStatus;
    type Form = MentorForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn selector(&self) -> MentorStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn to_form(&self) -> MentorForm {
        MentorForm {
            name: self.name.clone(),
            email: self.email.clone(),
            expertise: self.expertise.clone(),
            status: self.status,
            joined_on: format_date(self.joined_on),
        }
    }

    fn create_from_form(id: RecordId, form: &MentorForm) -> Result<Self, DataViewError> {
        Ok(Mentor {
            id,
            name: required(&form.name, "Name")?,
            email: required(&form.email, "Email")?,
            expertise: required(&form.expertise, "Expertise")?,
            rating: 0.0,
            students_count: 0,
            status: form.status,
            joined_on: required_date(&form.joined_on, "Joined on")?,
        })
    }

    fn apply_form(&mut self, form: &MentorForm) -> Result<(), DataViewError> {
        let name = required(&form.name, "Name")?;
        let email = required(&form.email, "Email")?;
        let expertise = required(&form.expertise, "Expertise")?;
        let joined_on = required_date(&form.joined_on, "Joined on")?;

        self.name = name;
        self.email = email;
        self.expertise = expertise;
        self.status = form.status;
        self.joined_on = joined_on;
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "mentor"
    }

    fn element_name() -> &'static str {
        "Mentor"
    }

    fn list_name() -> &'static str {
        "Mentors"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorForm {
    pub name: String,
    pub email: String,
    pub expertise: String,
    pub status: MentorStatus,
    pub joined_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> MentorForm {
        MentorForm {
            name: "Dana Whitfield".into(),
            email: "dana@example.com".into(),
            expertise: "Data engineering".into(),
            status: MentorStatus::Active,
            joined_on: "2023-09-01".into(),
        }
    }

    #[test]
    fn test_create_starts_without_stats() {
        let mentor = Mentor::create_from_form(RecordId(3), &form()).unwrap();
        assert_eq!(mentor.title(), "Dana Whitfield");
        assert_eq!(mentor.rating, 0.0);
        assert_eq!(mentor.students_count, 0);
    }

    #[test]
    fn test_required_fields() {
        let mut f = form();
        f.expertise = String::new();
        assert_eq!(
            Mentor::create_from_form(RecordId(1), &f),
            Err(DataViewError::Validation("Expertise is required".into()))
        );

        let mut f = form();
        f.joined_on = String::new();
        assert_eq!(
            Mentor::create_from_form(RecordId(1), &f),
            Err(DataViewError::Validation("Joined on is required".into()))
        );
    }

    #[test]
    fn test_edit_keeps_id_and_stats() {
        let mut mentor = Mentor::create_from_form(RecordId(3), &form()).unwrap();
        mentor.rating = 4.7;
        mentor.students_count = 12;

        let mut edit = mentor.to_form();
        edit.status = MentorStatus::OnLeave;
        edit.expertise = "  Machine learning ".into();
        mentor.apply_form(&edit).unwrap();

        assert_eq!(mentor.id, RecordId(3));
        assert_eq!(mentor.status, MentorStatus::OnLeave);
        assert_eq!(mentor.expertise, "Machine learning");
        assert_eq!(mentor.rating, 4.7);
        assert_eq!(mentor.students_count, 12);
    }

    #[test]
    fn test_invalid_edit_leaves_record() {
        let mut mentor = Mentor::create_from_form(RecordId(3), &form()).unwrap();
        let mut edit = mentor.to_form();
        edit.name = " ".into();
        edit.status = MentorStatus::Inactive;
        assert!(mentor.apply_form(&edit).is_err());
        assert_eq!(mentor.status, MentorStatus::Active);
        assert_eq!(mentor.name, "Dana Whitfield");
    }
}
