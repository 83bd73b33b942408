use crate::domain::common::form_fields::{format_date, required, required_date};
use crate::domain::common::{AggregateRoot, RecordId, Searchable};
use crate::shared::error::DataViewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EnquiryStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

crate::selector_value!(EnquiryStatus {
    New => ("new", "New"),
    InProgress => ("in_progress", "In progress"),
    Resolved => ("resolved", "Resolved"),
});

/// Обращение с формы обратной связи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: EnquiryStatus,
    pub received_on: NaiveDate,
}

impl Searchable for Enquiry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.subject]
    }
}

/// Минимальная проверка адреса, эквивалент `<input type="email">`
fn required_email(value: &str) -> Result<String, DataViewError> {
    let email = required(value, "Email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(DataViewError::Validation("Email must contain '@'".into())),
    }
}

impl AggregateRoot for Enquiry {
    type Selector = EnquiryStatus;
    type Form = EnquiryForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn selector(&self) -> EnquiryStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.subject
    }

    fn to_form(&self) -> EnquiryForm {
        EnquiryForm {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            status: self.status,
            received_on: format_date(self.received_on),
        }
    }

    fn create_from_form(id: RecordId, form: &EnquiryForm) -> Result<Self, DataViewError> {
        Ok(Enquiry {
            id,
            name: required(&form.name, "Name")?,
            email: required_email(&form.email)?,
            subject: required(&form.subject, "Subject")?,
            message: required(&form.message, "Message")?,
            status: form.status,
            received_on: required_date(&form.received_on, "Received on")?,
        })
    }

    fn apply_form(&mut self, form: &EnquiryForm) -> Result<(), DataViewError> {
        let updated = Self::create_from_form(self.id, form)?;
        *self = updated;
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "enquiry"
    }

    fn element_name() -> &'static str {
        "Enquiry"
    }

    fn list_name() -> &'static str {
        "Enquiries"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: EnquiryStatus,
    pub received_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EnquiryForm {
        EnquiryForm {
            name: "Liam Chen".into(),
            email: "liam@example.com".into(),
            subject: "Course refund".into(),
            message: "Hello, I would like to ask about a refund.".into(),
            status: EnquiryStatus::New,
            received_on: "2024-02-10".into(),
        }
    }

    #[test]
    fn test_create_valid() {
        let enquiry = Enquiry::create_from_form(RecordId(4), &form()).unwrap();
        assert_eq!(enquiry.title(), "Course refund");
        assert_eq!(enquiry.status, EnquiryStatus::New);
    }

    #[test]
    fn test_email_must_contain_at() {
        let mut f = form();
        f.email = "liam.example.com".into();
        assert!(Enquiry::create_from_form(RecordId(1), &f).is_err());
        f.email = "@example.com".into();
        assert!(Enquiry::create_from_form(RecordId(1), &f).is_err());
    }

    #[test]
    fn test_status_change_keeps_id() {
        let mut enquiry = Enquiry::create_from_form(RecordId(4), &form()).unwrap();
        let mut edit = enquiry.to_form();
        edit.status = EnquiryStatus::Resolved;
        enquiry.apply_form(&edit).unwrap();
        assert_eq!(enquiry.id, RecordId(4));
        assert_eq!(enquiry.status, EnquiryStatus::Resolved);
        assert_eq!(enquiry.email, "liam@example.com");
    }
}
