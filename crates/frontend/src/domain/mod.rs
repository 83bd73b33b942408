pub mod a001_blog_post;
pub mod a002_enquiry;
pub mod a003_event;
pub mod a004_news;
pub mod a005_student;
pub mod a006_mentor;
