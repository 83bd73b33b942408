use crate::domain::common::form_fields::{format_date, required, required_date};
use crate::domain::common::{AggregateRoot, RecordId, Searchable};
use crate::shared::error::DataViewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NewsCategory {
    #[default]
    Announcement,
    Platform,
    Community,
    Careers,
}

crate::selector_value!(NewsCategory {
    Announcement => ("announcement", "Announcement"),
    Platform => ("platform", "Platform"),
    Community => ("community", "Community"),
    Careers => ("careers", "Careers"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NewsStatus {
    #[default]
    Draft,
    Published,
}

crate::selector_value!(NewsStatus {
    Draft => ("draft", "Draft"),
    Published => ("published", "Published"),
});

/// Новость платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: RecordId,
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub category: NewsCategory,
    pub status: NewsStatus,
    pub published_on: NaiveDate,
}

impl Searchable for NewsItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.headline, &self.summary]
    }
}

impl AggregateRoot for NewsItem {
    type Selector = NewsCategory;
    type Form = NewsForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn selector(&self) -> NewsCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.headline
    }

    fn to_form(&self) -> NewsForm {
        NewsForm {
            headline: self.headline.clone(),
            summary: self.summary.clone(),
            body: self.body.clone(),
            category: self.category,
            status: self.status,
            published_on: format_date(self.published_on),
        }
    }

    fn create_from_form(id: RecordId, form: &NewsForm) -> Result<Self, DataViewError> {
        Ok(NewsItem {
            id,
            headline: required(&form.headline, "Headline")?,
            summary: required(&form.summary, "Summary")?,
            body: required(&form.body, "Body")?,
            category: form.category,
            status: form.status,
            published_on: required_date(&form.published_on, "Publish date")?,
        })
    }

    fn apply_form(&mut self, form: &NewsForm) -> Result<(), DataViewError> {
        *self = Self::create_from_form(self.id, form)?;
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "news"
    }

    fn element_name() -> &'static str {
        "News item"
    }

    fn list_name() -> &'static str {
        "News"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsForm {
    pub headline: String,
    pub summary: String,
    pub body: String,
    pub category: NewsCategory,
    pub status: NewsStatus,
    pub published_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewsForm {
        NewsForm {
            headline: "Spring cohort opens".into(),
            summary: "Enrolment for the spring cohort is open".into(),
            body: "Sign up before March 1.".into(),
            category: NewsCategory::Announcement,
            status: NewsStatus::Draft,
            published_on: "2024-02-15".into(),
        }
    }

    #[test]
    fn test_create_valid() {
        let item = NewsItem::create_from_form(RecordId(2), &form()).unwrap();
        assert_eq!(item.title(), "Spring cohort opens");
        assert_eq!(item.published_on, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(item.selector(), NewsCategory::Announcement);
    }

    #[test]
    fn test_required_fields() {
        let mut f = form();
        f.body = "  ".into();
        assert_eq!(
            NewsItem::create_from_form(RecordId(1), &f),
            Err(DataViewError::Validation("Body is required".into()))
        );

        let mut f = form();
        f.published_on = "15.02.2024".into();
        let err = NewsItem::create_from_form(RecordId(1), &f).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_publish_keeps_id() {
        let mut item = NewsItem::create_from_form(RecordId(7), &form()).unwrap();
        let mut edit = item.to_form();
        edit.status = NewsStatus::Published;
        edit.category = NewsCategory::Careers;
        item.apply_form(&edit).unwrap();
        assert_eq!(item.id, RecordId(7));
        assert_eq!(item.status, NewsStatus::Published);
        assert_eq!(item.category, NewsCategory::Careers);
    }

    #[test]
    fn test_invalid_edit_leaves_record() {
        let mut item = NewsItem::create_from_form(RecordId(7), &form()).unwrap();
        let before = item.clone();
        let mut edit = item.to_form();
        edit.headline = String::new();
        assert!(item.apply_form(&edit).is_err());
        assert_eq!(item, before);
    }
}
