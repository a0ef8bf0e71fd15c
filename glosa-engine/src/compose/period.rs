//! Billing period — the "MARZO 2024" fragment of a description.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use glosa_core::errors::GlosaError;

/// Institutional month names, uppercase. The rendered description is a
/// legal snapshot, so these are fixed data rather than locale lookups
/// that could drift between environments.
const MONTH_NAMES: [&str; 12] = [
    "ENERO",
    "FEBRERO",
    "MARZO",
    "ABRIL",
    "MAYO",
    "JUNIO",
    "JULIO",
    "AGOSTO",
    "SEPTIEMBRE",
    "OCTUBRE",
    "NOVIEMBRE",
    "DICIEMBRE",
];

/// A billing period. Only the year and month ever matter to the core;
/// the backend expects a full date, so submission pins day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    first_day: NaiveDate,
}

impl BillingPeriod {
    /// Build from a year-month pair. Month must be 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, GlosaError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| GlosaError::InvalidPeriod {
                input: format!("{year:04}-{month:02}"),
            })
    }

    /// Build from a full date; the day component is ignored.
    pub fn from_date(date: NaiveDate) -> Self {
        // Day 1 of a month that already contains a valid date exists.
        let first_day =
            NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        Self { first_day }
    }

    /// Parse `YYYY-MM` or `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<Self, GlosaError> {
        let invalid = || GlosaError::InvalidPeriod {
            input: input.to_string(),
        };
        match input.len() {
            7 => {
                let (year, month) = input.split_once('-').ok_or_else(invalid)?;
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                Self::new(year, month).map_err(|_| invalid())
            }
            10 => NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(Self::from_date)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Uppercase label, e.g. `MARZO 2024`.
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            MONTH_NAMES[self.first_day.month0() as usize],
            self.first_day.year()
        )
    }

    /// The full date the backend stores (`YYYY-MM-01`).
    pub fn to_submission_date(&self) -> NaiveDate {
        self.first_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_month_space_year() {
        let p = BillingPeriod::new(2024, 3).unwrap();
        assert_eq!(p.label(), "MARZO 2024");
    }

    #[test]
    fn test_parse_year_month() {
        let p = BillingPeriod::parse("2024-12").unwrap();
        assert_eq!((p.year(), p.month()), (2024, 12));
        assert_eq!(p.label(), "DICIEMBRE 2024");
    }

    #[test]
    fn test_parse_full_date_ignores_day() {
        let p = BillingPeriod::parse("2023-07-19").unwrap();
        assert_eq!(p.label(), "JULIO 2023");
        assert_eq!(
            p.to_submission_date(),
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["2024", "2024-13", "03-2024", "2024/03", "2024-00", "abcd-ef"] {
            assert!(BillingPeriod::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_submission_date_pins_day_one() {
        let p = BillingPeriod::new(2025, 2).unwrap();
        assert_eq!(
            p.to_submission_date(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }
}
