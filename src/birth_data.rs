// 🎂 Birth Data - Value object + Validator
// Range checks run in a fixed order, first failure wins

use crate::error::{PatternError, PatternResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

// ============================================================================
// BIRTH DATA
// ============================================================================

/// A birth date with an optional time of day.
///
/// Fields are plain integers so that out-of-range values coming from a
/// route layer can be represented and rejected by [`validate`] with the
/// exact error messages callers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: i32,
    pub day: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<i32>,
}

impl BirthData {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        BirthData {
            year,
            month,
            day,
            hour: None,
            minute: None,
        }
    }

    pub fn with_time(mut self, hour: i32, minute: i32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        BirthData::new(date.year(), date.month() as i32, date.day() as i32)
    }

    pub fn from_naive_datetime(dt: NaiveDateTime) -> Self {
        BirthData::from_naive_date(dt.date()).with_time(dt.hour() as i32, dt.minute() as i32)
    }

    /// Run the validator against this value
    pub fn validate(&self) -> PatternResult<()> {
        validate(self)
    }
}

/// Renders as `m/d/yyyy`, the form used in generated summaries
impl fmt::Display for BirthData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`.
///
/// The date part is split numerically rather than through a calendar type so
/// that impossible dates like `1990-02-30` still reach [`validate`] and fail
/// with the day-in-month message.
impl FromStr for BirthData {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || PatternError::Unparseable(s.to_string());
        let trimmed = s.trim();

        let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
            Some((date, time)) => (date, Some(time)),
            None => (trimmed, None),
        };

        let fields: Vec<&str> = date_part.split('-').collect();
        if fields.len() != 3 {
            return Err(unparseable());
        }

        let year = fields[0].parse::<i32>().map_err(|_| unparseable())?;
        let month = fields[1].parse::<i32>().map_err(|_| unparseable())?;
        let day = fields[2].parse::<i32>().map_err(|_| unparseable())?;
        let birth = BirthData::new(year, month, day);

        match time_part {
            Some(time) => {
                let time = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| unparseable())?;
                Ok(birth.with_time(time.hour() as i32, time.minute() as i32))
            }
            None => Ok(birth),
        }
    }
}

// ============================================================================
// CALENDAR HELPERS
// ============================================================================

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validate a birth date.
///
/// Order: year, month, day range, day within month, hour, minute.
pub fn validate(birth: &BirthData) -> PatternResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&birth.year) {
        return Err(PatternError::InvalidYear(birth.year));
    }

    if !(1..=12).contains(&birth.month) {
        return Err(PatternError::InvalidMonth(birth.month));
    }

    if !(1..=31).contains(&birth.day) {
        return Err(PatternError::InvalidDay(birth.day));
    }

    let max_day = days_in_month(birth.year, birth.month);
    if birth.day > max_day {
        return Err(PatternError::DayExceedsMonth {
            day: birth.day,
            month: birth.month,
            days_in_month: max_day,
        });
    }

    if let Some(hour) = birth.hour {
        if !(0..=23).contains(&hour) {
            return Err(PatternError::InvalidHour(hour));
        }
    }

    if let Some(minute) = birth.minute {
        if !(0..=59).contains(&minute) {
            return Err(PatternError::InvalidMinute(minute));
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        assert!(validate(&BirthData::new(1990, 8, 11)).is_ok());
        assert!(validate(&BirthData::new(1990, 8, 11).with_time(23, 59)).is_ok());
    }

    #[test]
    fn test_year_out_of_range() {
        let err = validate(&BirthData::new(1800, 8, 15)).unwrap_err();
        assert!(err.to_string().contains("Invalid year"));

        let err = validate(&BirthData::new(2101, 1, 1)).unwrap_err();
        assert_eq!(err, PatternError::InvalidYear(2101));
    }

    #[test]
    fn test_first_failure_wins() {
        // Every field is bad; the year check runs first
        let birth = BirthData {
            year: 1000,
            month: 13,
            day: 40,
            hour: Some(30),
            minute: Some(70),
        };
        assert_eq!(validate(&birth), Err(PatternError::InvalidYear(1000)));

        let birth = BirthData { year: 1990, ..birth };
        assert_eq!(validate(&birth), Err(PatternError::InvalidMonth(13)));
    }

    #[test]
    fn test_day_range() {
        let err = validate(&BirthData::new(1990, 1, 0)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day: must be between 1 and 31");

        let err = validate(&BirthData::new(1990, 1, 32)).unwrap_err();
        assert_eq!(err, PatternError::InvalidDay(32));
    }

    #[test]
    fn test_day_exceeds_month() {
        let err = validate(&BirthData::new(1990, 2, 30)).unwrap_err();
        assert!(err.to_string().contains("exceeds days in month"));

        let err = validate(&BirthData::new(1990, 4, 31)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid day: 31 exceeds days in month 4 (30 days)"
        );
    }

    #[test]
    fn test_leap_years() {
        assert!(validate(&BirthData::new(2000, 2, 29)).is_ok());
        assert!(validate(&BirthData::new(1996, 2, 29)).is_ok());
        assert!(validate(&BirthData::new(1900, 2, 29)).is_err());
        assert!(validate(&BirthData::new(2100, 2, 29)).is_err());

        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn test_time_bounds() {
        let err = validate(&BirthData::new(1990, 8, 11).with_time(24, 0)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid hour: must be between 0 and 23");

        let err = validate(&BirthData::new(1990, 8, 11).with_time(12, 60)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid minute: must be between 0 and 59");
    }

    #[test]
    fn test_parse() {
        let birth: BirthData = "1990-08-11".parse().unwrap();
        assert_eq!(birth, BirthData::new(1990, 8, 11));

        let birth: BirthData = "1990-08-11T14:05".parse().unwrap();
        assert_eq!(birth.hour, Some(14));
        assert_eq!(birth.minute, Some(5));

        // Impossible dates parse, then fail validation
        let birth: BirthData = "1990-02-30".parse().unwrap();
        assert!(birth.validate().is_err());

        assert!("08/11/1990".parse::<BirthData>().is_err());
        assert!("1990-08-11T25:00".parse::<BirthData>().is_err());
    }

    #[test]
    fn test_display_and_json() {
        let birth = BirthData::new(1990, 7, 7);
        assert_eq!(birth.to_string(), "7/7/1990");

        let json = serde_json::to_value(birth).unwrap();
        assert_eq!(json, serde_json::json!({"year": 1990, "month": 7, "day": 7}));

        let back: BirthData = serde_json::from_str(r#"{"year":1990,"month":7,"day":7,"hour":6}"#).unwrap();
        assert_eq!(back.hour, Some(6));
        assert_eq!(back.minute, None);
    }

    #[test]
    fn test_from_chrono() {
        let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(BirthData::from_naive_date(date), BirthData::new(2000, 2, 29));

        let dt = date.and_hms_opt(6, 45, 0).unwrap();
        assert_eq!(
            BirthData::from_naive_datetime(dt),
            BirthData::new(2000, 2, 29).with_time(6, 45)
        );
    }
}
