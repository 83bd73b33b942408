//! Геометрия кругового индикатора прогресса (SVG `stroke-dasharray`)

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressArc {
    pub radius: f64,
    pub circumference: f64,
    /// Длина незакрашенной части окружности
    pub offset: f64,
    /// Процент после ограничения 0..=100
    pub percent: f64,
}

impl ProgressArc {
    pub fn from_percent(percent: f64, radius: f64) -> Self {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        let circumference = 2.0 * PI * radius;
        Self {
            radius,
            circumference,
            offset: circumference * (1.0 - percent / 100.0),
            percent,
        }
    }

    pub fn dasharray(&self) -> String {
        format!("{:.2} {:.2}", self.circumference, self.circumference)
    }

    pub fn dashoffset(&self) -> String {
        format!("{:.2}", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let empty = ProgressArc::from_percent(0.0, 10.0);
        assert!((empty.offset - empty.circumference).abs() < 1e-9);

        let full = ProgressArc::from_percent(100.0, 10.0);
        assert!(full.offset.abs() < 1e-9);
    }

    #[test]
    fn test_half_and_clamp() {
        let half = ProgressArc::from_percent(50.0, 1.0);
        assert!((half.offset - PI).abs() < 1e-9);

        assert_eq!(ProgressArc::from_percent(140.0, 5.0).percent, 100.0);
        assert_eq!(ProgressArc::from_percent(-3.0, 5.0).percent, 0.0);
        assert_eq!(ProgressArc::from_percent(f64::NAN, 5.0).percent, 0.0);
    }

    #[test]
    fn test_svg_strings() {
        let arc = ProgressArc::from_percent(75.0, 40.0);
        assert_eq!(arc.dasharray(), "251.33 251.33");
        assert_eq!(arc.dashoffset(), "62.83");
    }
}
