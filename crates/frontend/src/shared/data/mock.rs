//! Детерминированные демо-данные для всех дашбордов.
//!
//! Сервера нет: каждый генератор строит одну и ту же последовательность
//! записей при каждом запуске, чтобы ссылки `?view=detail&id=..` оставались
//! рабочими после перезагрузки страницы.

use chrono::{Duration, NaiveDate};
use contracts::domain::a001_blog_post::aggregate::{BlogCategory, BlogPost, PostStatus};
use contracts::domain::a002_enquiry::aggregate::{Enquiry, EnquiryStatus};
use contracts::domain::a003_event::aggregate::{Event, EventCategory, EventStatus};
use contracts::domain::a004_news::aggregate::{NewsCategory, NewsItem, NewsStatus};
use contracts::domain::a005_student::aggregate::{Student, StudentStatus};
use contracts::domain::a006_mentor::aggregate::{Mentor, MentorStatus};
use contracts::domain::common::{RecordId, SelectorValue};

pub const BLOG_POSTS: usize = 14;
pub const ENQUIRIES: usize = 18;
pub const EVENTS: usize = 12;
pub const NEWS_ITEMS: usize = 10;
pub const STUDENTS: usize = 24;
pub const MENTORS: usize = 9;

const FIRST_NAMES: [&str; 12] = [
    "Alex", "Maria", "Ivan", "Sofia", "Daniel", "Olga", "Timur", "Anna", "Lucas", "Nina",
    "Pavel", "Emma",
];

const LAST_NAMES: [&str; 9] = [
    "Johnson", "Petrova", "Smirnov", "Garcia", "Kim", "Volkova", "Novak", "Chen", "Orlov",
];

const COURSES: [&str; 5] = [
    "Rust Fundamentals",
    "Web Development",
    "Data Science",
    "UI/UX Design",
    "Cloud Engineering",
];

const EXPERTISE: [&str; 5] = [
    "Systems programming",
    "Frontend engineering",
    "Machine learning",
    "Product design",
    "DevOps",
];

const CITIES: [&str; 6] = ["Online", "Berlin", "Tbilisi", "Lisbon", "Belgrade", "Almaty"];

const LOREM: &str = "Learning to build software is a long game. Every week brings a new \
    concept, a new tool and a new mistake to learn from. In this article we walk through \
    the practical steps that helped our students stay consistent: short daily sessions, \
    honest code review with mentors, small projects that ship, and a habit of writing \
    down what went wrong. None of it is glamorous, all of it compounds.";

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

fn day(offset: i64) -> NaiveDate {
    base_date() + Duration::days(offset)
}

/// Полное имя по индексу. Индекс 0 даёт демо-студента "Alex Johnson"
fn person_name(i: usize) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[i % FIRST_NAMES.len()],
        LAST_NAMES[(i + i / FIRST_NAMES.len()) % LAST_NAMES.len()]
    )
}

fn email_for(name: &str) -> String {
    format!("{}@eduplatform.dev", name.to_lowercase().replace(' ', "."))
}

fn id(i: usize) -> RecordId {
    RecordId::new(i as u64 + 1)
}

pub fn blog_posts() -> Vec<BlogPost> {
    const TITLES: [&str; 7] = [
        "Getting started with ownership",
        "Designing accessible forms",
        "From bootcamp to first job",
        "How to read documentation",
        "Async without tears",
        "Color theory for developers",
        "Preparing for a technical interview",
    ];
    (0..BLOG_POSTS)
        .map(|i| {
            let category = BlogCategory::all()[i % BlogCategory::all().len()];
            let status = match i % 5 {
                0 | 1 | 2 => PostStatus::Published,
                3 => PostStatus::Draft,
                _ => PostStatus::Archived,
            };
            let content = LOREM.repeat(1 + i % 4);
            let mut post = BlogPost {
                id: id(i),
                title: format!("{} #{}", TITLES[i % TITLES.len()], i / TITLES.len() + 1),
                author: person_name(i + 3),
                category,
                content,
                excerpt: String::new(),
                read_time_minutes: 0,
                status,
                cover_image_url: Some(format!("https://picsum.photos/seed/blog{}/640/360", i + 1)),
                published_on: day(-(i as i64) * 6),
            };
            post.recompute_derived();
            post
        })
        .collect()
}

pub fn enquiries() -> Vec<Enquiry> {
    const SUBJECTS: [&str; 6] = [
        "Question about course pricing",
        "Certificate not received",
        "Partnership proposal",
        "Cannot access lessons",
        "Mentor change request",
        "Refund request",
    ];
    (0..ENQUIRIES)
        .map(|i| {
            let name = person_name(i + 5);
            let status = match i % 3 {
                0 => EnquiryStatus::New,
                1 => EnquiryStatus::InProgress,
                _ => EnquiryStatus::Resolved,
            };
            Enquiry {
                id: id(i),
                email: email_for(&name),
                name,
                subject: SUBJECTS[i % SUBJECTS.len()].to_string(),
                message: format!(
                    "Hello! {} Could you please get back to me this week? Thanks.",
                    SUBJECTS[i % SUBJECTS.len()]
                ),
                status,
                received_on: day(-(i as i64) * 2),
            }
        })
        .collect()
}

pub fn events() -> Vec<Event> {
    const TITLES: [&str; 4] = [
        "Rust in production",
        "Portfolio review night",
        "Intro to machine learning",
        "Career fair",
    ];
    (0..EVENTS)
        .map(|i| {
            let category = EventCategory::all()[i % EventCategory::all().len()];
            let capacity = 20 + (i as u32 % 4) * 20;
            let registered = (capacity * (30 + (i as u32 * 17) % 70)) / 100;
            let status = match i {
                0..=6 => EventStatus::Upcoming,
                7 => EventStatus::Ongoing,
                10 => EventStatus::Cancelled,
                _ => EventStatus::Completed,
            };
            Event {
                id: id(i),
                title: format!("{} {}", TITLES[i % TITLES.len()], 2025 + (i / TITLES.len()) as u32 % 2),
                location: CITIES[i % CITIES.len()].to_string(),
                starts_on: day(7 * i as i64 - 30),
                category,
                capacity,
                registered,
                status,
            }
        })
        .collect()
}

pub fn news() -> Vec<NewsItem> {
    const HEADLINES: [&str; 5] = [
        "New Rust track launched",
        "Platform maintenance this weekend",
        "Community meetup recap",
        "Hiring partners program opens",
        "Mobile app beta available",
    ];
    (0..NEWS_ITEMS)
        .map(|i| {
            let category = NewsCategory::all()[i % NewsCategory::all().len()];
            NewsItem {
                id: id(i),
                headline: HEADLINES[i % HEADLINES.len()].to_string(),
                summary: format!("{} Read the full story for details.", HEADLINES[i % HEADLINES.len()]),
                body: LOREM.to_string(),
                category,
                status: if i % 4 == 3 { NewsStatus::Draft } else { NewsStatus::Published },
                published_on: day(-(i as i64) * 4),
            }
        })
        .collect()
}

pub fn students() -> Vec<Student> {
    (0..STUDENTS)
        .map(|i| {
            let name = person_name(i);
            let status = match i % 6 {
                4 => StudentStatus::Inactive,
                5 => StudentStatus::Graduated,
                _ => StudentStatus::Active,
            };
            let progress = if status == StudentStatus::Graduated {
                100
            } else {
                ((i * 37 + 12) % 96) as u8
            };
            Student {
                id: id(i),
                email: email_for(&name),
                name,
                course: COURSES[i % COURSES.len()].to_string(),
                progress,
                status,
                mentor_id: Some(id(i % MENTORS)),
                enrolled_on: day(-(i as i64) * 9 - 20),
            }
        })
        .collect()
}

pub fn mentors() -> Vec<Mentor> {
    (0..MENTORS)
        .map(|i| {
            let name = if i == 0 {
                "Elena Morozova".to_string()
            } else {
                person_name(i + 7)
            };
            let status = match i % 5 {
                3 => MentorStatus::OnLeave,
                4 => MentorStatus::Inactive,
                _ => MentorStatus::Active,
            };
            let students_count = students()
                .iter()
                .filter(|s| s.mentor_id == Some(id(i)))
                .count() as u32;
            Mentor {
                id: id(i),
                email: email_for(&name),
                name,
                expertise: EXPERTISE[i % EXPERTISE.len()].to_string(),
                rating: 4.0 + ((i * 3) % 10) as f32 / 10.0,
                students_count,
                status,
                joined_on: day(-(i as i64) * 45 - 120),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique(ids: impl Iterator<Item = RecordId>) -> usize {
        ids.collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_generators_sizes_and_unique_ids() {
        assert_eq!(unique(blog_posts().iter().map(|r| r.id)), BLOG_POSTS);
        assert_eq!(unique(enquiries().iter().map(|r| r.id)), ENQUIRIES);
        assert_eq!(unique(events().iter().map(|r| r.id)), EVENTS);
        assert_eq!(unique(news().iter().map(|r| r.id)), NEWS_ITEMS);
        assert_eq!(unique(students().iter().map(|r| r.id)), STUDENTS);
        assert_eq!(unique(mentors().iter().map(|r| r.id)), MENTORS);
    }

    #[test]
    fn test_generators_are_deterministic() {
        let a = events();
        let b = events();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.title, y.title);
            assert_eq!(x.starts_on, y.starts_on);
        }
    }

    #[test]
    fn test_demo_people_present() {
        assert_eq!(students()[0].name, "Alex Johnson");
        assert_eq!(mentors()[0].name, "Elena Morozova");
    }

    #[test]
    fn test_events_never_overbooked() {
        for e in events() {
            assert!(e.registered <= e.capacity, "{} overbooked", e.title);
        }
    }

    #[test]
    fn test_mentor_student_counts_match() {
        let total: u32 = mentors().iter().map(|m| m.students_count).sum();
        assert_eq!(total as usize, STUDENTS);
    }

    #[test]
    fn test_blog_derived_fields_filled() {
        for p in blog_posts() {
            assert!(!p.excerpt.is_empty());
            assert!(p.read_time_minutes >= 1);
        }
    }
}
