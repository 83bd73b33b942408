pub mod summary;

pub use summary::{average_progress, event_fill_rate, status_counts, students_of_mentor, StatusCount};
