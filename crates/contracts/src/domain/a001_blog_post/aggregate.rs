use crate::domain::common::form_fields::{format_date, optional, required, required_date};
use crate::domain::common::{AggregateRoot, RecordId, Searchable};
use crate::shared::error::DataViewError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Длина анонса в символах
pub const EXCERPT_LEN: usize = 150;

/// Скорость чтения для расчёта времени чтения
pub const WORDS_PER_MINUTE: usize = 200;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

crate::selector_value!(PostStatus {
    Draft => ("draft", "Draft"),
    Published => ("published", "Published"),
    Archived => ("archived", "Archived"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BlogCategory {
    #[default]
    Programming,
    Design,
    Career,
    Learning,
}

crate::selector_value!(BlogCategory {
    Programming => ("programming", "Programming"),
    Design => ("design", "Design"),
    Career => ("career", "Career"),
    Learning => ("learning", "Learning"),
});

// ============================================================================
// Aggregate Root
// ============================================================================

/// Статья блога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub category: BlogCategory,
    pub content: String,
    /// Вычисляется из `content`
    pub excerpt: String,
    /// Вычисляется из `content`
    pub read_time_minutes: u32,
    pub status: PostStatus,
    pub cover_image_url: Option<String>,
    pub published_on: NaiveDate,
}

impl BlogPost {
    /// Пересчитать производные поля после изменения текста
    pub fn recompute_derived(&mut self) {
        self.excerpt = make_excerpt(&self.content);
        self.read_time_minutes = read_time_minutes(&self.content);
    }
}

/// Первые [`EXCERPT_LEN`] символов текста с многоточием, если текст длиннее
pub fn make_excerpt(content: &str) -> String {
    let content = content.trim();
    if content.chars().count() <= EXCERPT_LEN {
        return content.to_string();
    }
    let cut: String = content.chars().take(EXCERPT_LEN).collect();
    format!("{}...", cut.trim_end())
}

/// Минуты чтения, не меньше одной
pub fn read_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.author]
    }
}

impl AggregateRoot for BlogPost {
    type Selector = PostStatus;
    type Form = BlogPostForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn selector(&self) -> PostStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn to_form(&self) -> BlogPostForm {
        BlogPostForm {
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category,
            content: self.content.clone(),
            status: self.status,
            cover_image_url: self.cover_image_url.clone().unwrap_or_default(),
            published_on: format_date(self.published_on),
        }
    }

    fn create_from_form(id: RecordId, form: &BlogPostForm) -> Result<Self, DataViewError> {
        let mut post = BlogPost {
            id,
            title: required(&form.title, "Title")?,
            author: required(&form.author, "Author")?,
            category: form.category,
            content: required(&form.content, "Content")?,
            excerpt: String::new(),
            read_time_minutes: 0,
            status: form.status,
            cover_image_url: optional(&form.cover_image_url),
            published_on: required_date(&form.published_on, "Publish date")?,
        };
        post.recompute_derived();
        Ok(post)
    }

    fn apply_form(&mut self, form: &BlogPostForm) -> Result<(), DataViewError> {
        // Сначала проверяем все поля, чтобы не оставить запись наполовину изменённой
        let title = required(&form.title, "Title")?;
        let author = required(&form.author, "Author")?;
        let content = required(&form.content, "Content")?;
        let published_on = required_date(&form.published_on, "Publish date")?;

        self.title = title;
        self.author = author;
        self.category = form.category;
        self.content = content;
        self.status = form.status;
        self.cover_image_url = optional(&form.cover_image_url);
        self.published_on = published_on;
        self.recompute_derived();
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "blog_post"
    }

    fn element_name() -> &'static str {
        "Blog post"
    }

    fn list_name() -> &'static str {
        "Blog"
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Форма создания/редактирования статьи
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostForm {
    pub title: String,
    pub author: String,
    pub category: BlogCategory,
    pub content: String,
    pub status: PostStatus,
    pub cover_image_url: String,
    pub published_on: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BlogPostForm {
        BlogPostForm {
            title: "Ownership in practice".into(),
            author: "Anna Petrova".into(),
            category: BlogCategory::Programming,
            content: "word ".repeat(450),
            status: PostStatus::Draft,
            cover_image_url: String::new(),
            published_on: "2024-05-01".into(),
        }
    }

    #[test]
    fn test_create_computes_derived_fields() {
        let post = BlogPost::create_from_form(RecordId(1), &form()).unwrap();
        assert_eq!(post.read_time_minutes, 3);
        assert!(post.excerpt.ends_with("..."));
        assert_eq!(post.cover_image_url, None);
    }

    #[test]
    fn test_short_content_keeps_excerpt_whole() {
        assert_eq!(make_excerpt("  Short note. "), "Short note.");
        assert_eq!(read_time_minutes("Short note."), 1);
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let content = "ё".repeat(EXCERPT_LEN + 10);
        let excerpt = make_excerpt(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
    }

    #[test]
    fn test_apply_form_recomputes_and_keeps_id() {
        let mut post = BlogPost::create_from_form(RecordId(9), &form()).unwrap();
        let mut edit = post.to_form();
        edit.content = "Now much shorter.".into();
        edit.status = PostStatus::Published;
        post.apply_form(&edit).unwrap();

        assert_eq!(post.id, RecordId(9));
        assert_eq!(post.excerpt, "Now much shorter.");
        assert_eq!(post.read_time_minutes, 1);
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.author, "Anna Petrova");
    }

    #[test]
    fn test_invalid_form_leaves_record_untouched() {
        let mut post = BlogPost::create_from_form(RecordId(2), &form()).unwrap();
        let before = post.clone();
        let mut edit = post.to_form();
        edit.title = "Changed".into();
        edit.author = "  ".into();
        assert!(post.apply_form(&edit).unwrap_err().is_validation());
        assert_eq!(post, before);
    }
}
