use crate::domain::common::form_fields::{format_date, required, required_date, required_u32};
use crate::domain::common::{AggregateRoot, RecordId, Searchable};
use crate::shared::error::DataViewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    Graduated,
}

crate::selector_value!(StudentStatus {
    Active => ("active", "Active"),
    Inactive => ("inactive", "Inactive"),
    Graduated => ("graduated", "Graduated"),
});

/// Студент платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub course: String,
    /// Прогресс по курсу, 0..=100
    pub progress: u8,
    pub status: StudentStatus,
    /// Закреплённый ментор, назначается вне формы
    pub mentor_id: Option<RecordId>,
    pub enrolled_on: NaiveDate,
}

fn progress_percent(value: &str) -> Result<u8, DataViewError> {
    let raw = required_u32(value, "Progress")?;
    if raw > 100 {
        return Err(DataViewError::Validation(
            "Progress must be between 0 and 100".into(),
        ));
    }
    Ok(raw as u8)
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

impl AggregateRoot for Student {
    type Selector = StudentStatus;
    type Form = StudentForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn selector(&self) -> StudentStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn to_form(&self) -> StudentForm {
        StudentForm {
            name: self.name.clone(),
            email: self.email.clone(),
            course: self.course.clone(),
            progress: self.progress.to_string(),
            status: self.status,
            enrolled_on: format_date(self.enrolled_on),
        }
    }

    fn create_from_form(id: RecordId, form: &StudentForm) -> Result<Self, DataViewError> {
        Ok(Student {
            id,
            name: required(&form.name, "Name")?,
            email: required(&form.email, "Email")?,
            course: required(&form.course, "Course")?,
            progress: progress_percent(&form.progress)?,
            status: form.status,
            mentor_id: None,
            enrolled_on: required_date(&form.enrolled_on, "Enrolled on")?,
        })
    }

    fn apply_form(&mut self, form: &StudentForm) -> Result<(), DataViewError> {
        let name = required(&form.name, "Name")?;
        let email = required(&form.email, "Email")?;
        let course = required(&form.course, "Course")?;
        let progress = progress_percent(&form.progress)?;
        let enrolled_on = required_date(&form.enrolled_on, "Enrolled on")?;

        self.name = name;
        self.email = email;
        self.course = course;
        self.progress = progress;
        self.status = form.status;
        self.enrolled_on = enrolled_on;
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "student"
    }

    fn element_name() -> &'static str {
        "Student"
    }

    fn list_name() -> &'static str {
        "Students"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub course: String,
    pub progress: String,
    pub status: StudentStatus,
    pub enrolled_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert_eq!(progress_percent("0"), Ok(0));
        assert_eq!(progress_percent("100"), Ok(100));
        assert!(progress_percent("101").is_err());
    }

    #[test]
    fn test_edit_keeps_mentor() {
        let mut student = Student {
            id: RecordId(5),
            name: "Omar Haddad".into(),
            email: "omar@example.com".into(),
            course: "Web Development".into(),
            progress: 40,
            status: StudentStatus::Active,
            mentor_id: Some(RecordId(2)),
            enrolled_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let mut form = student.to_form();
        form.progress = "55".into();
        student.apply_form(&form).unwrap();
        assert_eq!(student.progress, 55);
        assert_eq!(student.mentor_id, Some(RecordId(2)));
    }
}
