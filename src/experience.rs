//! Employment duration text for the experience timeline.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::{ContentError, Result};

/// Whole calendar months between two dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElapsedDuration {
    pub total_months: u32,
}

impl ElapsedDuration {
    pub fn between(start: NaiveDate, now: NaiveDate) -> Self {
        Self {
            total_months: months_elapsed(start, now),
        }
    }

    pub fn years(self) -> u32 {
        self.total_months / 12
    }

    pub fn months(self) -> u32 {
        self.total_months % 12
    }
}

impl fmt::Display for ElapsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [(self.years(), "year"), (self.months(), "month")]
            .into_iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, unit)| pluralize(count, unit))
            .collect();

        if parts.is_empty() {
            f.write_str("0 months")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s")
    } else {
        format!("{count} {unit}")
    }
}

/// Months from `start` to `now`, one less when `now` hasn't reached the start
/// day-of-month yet. Never negative.
pub fn months_elapsed(start: NaiveDate, now: NaiveDate) -> u32 {
    let mut months = (i64::from(now.year()) - i64::from(start.year())) * 12
        + (i64::from(now.month()) - i64::from(start.month()));

    if now.day() < start.day() {
        months -= 1;
    }

    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}

const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, local date-times without an
/// offset, and RFC 3339 date-times.
pub fn parse_start_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            LOCAL_DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(value, format)
                    .ok()
                    .map(|parsed| parsed.date())
            })
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok())
        .or_else(|| parse_year_only(value))
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|parsed| parsed.date_naive())
        })
}

fn parse_year_only(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1)
}

/// Start date rendered like `Jan 5, 2024`.
pub fn format_start_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    start: NaiveDate,
}

impl ExperienceEntry {
    pub fn parse(join: &str) -> Result<Self> {
        parse_start_date(join)
            .map(|start| Self { start })
            .ok_or_else(|| ContentError::InvalidDate {
                value: join.to_string(),
            })
    }

    pub fn render(&self, now: NaiveDate) -> ExperienceDisplay {
        let elapsed = ElapsedDuration::between(self.start, now);

        ExperienceDisplay {
            joined: format_start_date(self.start),
            duration: elapsed.to_string(),
            total_months: elapsed.total_months,
        }
    }
}

/// Text for the joined-date, duration and total-months slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceDisplay {
    pub joined: String,
    pub duration: String,
    pub total_months: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn same_or_future_start_is_zero_months() {
        let now = date(2025, 6, 15);

        assert_eq!(months_elapsed(now, now), 0);
        assert_eq!(months_elapsed(date(2026, 1, 1), now), 0);
        assert_eq!(ElapsedDuration::between(date(2030, 1, 1), now).to_string(), "0 months");
    }

    #[test]
    fn fourteen_months_reads_one_year_two_months() {
        let elapsed = ElapsedDuration::between(date(2024, 4, 10), date(2025, 6, 15));

        assert_eq!(elapsed.total_months, 14);
        assert_eq!(elapsed.to_string(), "1 year 2 months");
    }

    #[test]
    fn exactly_one_month_is_singular() {
        let elapsed = ElapsedDuration::between(date(2025, 5, 15), date(2025, 6, 15));
        assert_eq!(elapsed.to_string(), "1 month");
    }

    #[test]
    fn earlier_day_of_month_subtracts_one_month() {
        assert_eq!(months_elapsed(date(2025, 5, 20), date(2025, 6, 19)), 0);
        assert_eq!(months_elapsed(date(2023, 1, 31), date(2025, 1, 30)), 23);
    }

    #[test]
    fn whole_years_omit_month_fragment() {
        let elapsed = ElapsedDuration::between(date(2022, 3, 1), date(2025, 3, 1));
        assert_eq!(elapsed.to_string(), "3 years");
    }

    #[test]
    fn parses_supported_date_shapes() {
        assert_eq!(parse_start_date("2024-01-05"), Some(date(2024, 1, 5)));
        assert_eq!(parse_start_date("2024-01"), Some(date(2024, 1, 1)));
        assert_eq!(
            parse_start_date("2024-01-05T09:30:00+00:00"),
            Some(date(2024, 1, 5))
        );
        assert_eq!(
            parse_start_date("2024-01-05T09:30:00"),
            Some(date(2024, 1, 5))
        );
        assert_eq!(
            parse_start_date("2024-01-05T09:30:00.250"),
            Some(date(2024, 1, 5))
        );
        assert_eq!(parse_start_date("2024-01-05T09:30"), Some(date(2024, 1, 5)));
        assert_eq!(parse_start_date("2024"), Some(date(2024, 1, 1)));
        assert_eq!(parse_start_date("24"), None);
        assert_eq!(parse_start_date("soon"), None);
        assert_eq!(parse_start_date(""), None);
    }

    #[test]
    fn unparseable_entry_is_rejected() {
        assert_eq!(
            ExperienceEntry::parse("not-a-date"),
            Err(ContentError::InvalidDate {
                value: "not-a-date".to_string()
            })
        );
    }

    #[test]
    fn render_fills_every_slot() {
        let entry = ExperienceEntry::parse("2024-01-05").expect("valid date");
        let display = entry.render(date(2025, 3, 10));

        assert_eq!(display.joined, "Jan 5, 2024");
        assert_eq!(display.duration, "1 year 2 months");
        assert_eq!(display.total_months, 14);
    }
}
