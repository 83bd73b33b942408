//! Разбор и проверка полей форм.
//!
//! Поля форм хранятся строками (как их отдаёт `<input>`), а в записи
//! попадают уже типизированными. Обязательность поля соответствует
//! атрибуту `required` в разметке.

use crate::shared::error::DataViewError;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Обязательное текстовое поле: пробелы по краям отбрасываются
pub fn required(value: &str, label: &str) -> Result<String, DataViewError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DataViewError::Validation(format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}

/// Необязательное текстовое поле: пустая строка превращается в `None`
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Обязательная дата в формате `YYYY-MM-DD` (значение `<input type="date">`)
pub fn required_date(value: &str, label: &str) -> Result<NaiveDate, DataViewError> {
    let raw = required(value, label)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|_| DataViewError::Validation(format!("{} must be a date (YYYY-MM-DD)", label)))
}

/// Обязательное неотрицательное целое
pub fn required_u32(value: &str, label: &str) -> Result<u32, DataViewError> {
    let raw = required(value, label)?;
    raw.parse::<u32>()
        .map_err(|_| DataViewError::Validation(format!("{} must be a whole number", label)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Intro  ", "Title"), Ok("Intro".to_string()));
        assert_eq!(
            required("   ", "Title"),
            Err(DataViewError::Validation("Title is required".into()))
        );
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(""), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }

    #[test]
    fn test_required_date() {
        assert_eq!(
            required_date("2024-03-15", "Date"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert!(required_date("15.03.2024", "Date").is_err());
        assert!(required_date("", "Date").is_err());
    }

    #[test]
    fn test_required_u32() {
        assert_eq!(required_u32("40", "Capacity"), Ok(40));
        assert!(required_u32("-3", "Capacity").is_err());
        assert!(required_u32("many", "Capacity").is_err());
    }
}
