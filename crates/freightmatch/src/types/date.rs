use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{Date as TimeDate, Duration as TimeDuration, Month, format_description::FormatItem};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

fn iso_format() -> &'static [FormatItem<'static>] {
    FORMAT.get_or_init(|| {
        // Safe: constant format string
        time::format_description::parse("[year]-[month]-[day]")
            .unwrap_or_else(|_| unreachable!())
    })
}

///
/// Date
///
/// Calendar date stored as a signed day count since 1970-01-01. Day counts
/// compare and subtract cheaply, which is what ordering and range filters
/// need; calendar math is delegated to `time` at the edges.
///

#[derive(
    Clone, Copy, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    const fn epoch_date() -> TimeDate {
        // Safe: constant valid date
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => d,
            Err(_) => unreachable!(),
        }
    }

    /// Construct from a calendar date. `None` if the combination is not a
    /// valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        let date = TimeDate::from_calendar_date(year, month, day).ok()?;

        Some(Self::from_time(date))
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        TimeDate::parse(input, iso_format())
            .map(Self::from_time)
            .map_err(|_| ValidationError::MalformedDate {
                input: input.to_string(),
            })
    }

    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    #[must_use]
    pub const fn as_days(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn plus_days(self, days: i32) -> Self {
        Self(self.0 + days)
    }

    fn from_time(date: TimeDate) -> Self {
        let delta = date - Self::epoch_date();

        Self(delta.whole_days() as i32)
    }

    fn to_time(self) -> TimeDate {
        Self::epoch_date() + TimeDuration::days(i64::from(self.0))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_time().format(iso_format()) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "{}d", self.0),
        }
    }
}

impl Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = Date::parse("2022-01-01").unwrap();
        assert_eq!(date, Date::from_ymd(2022, 1, 1).unwrap());
        assert_eq!(date.to_string(), "2022-01-01");
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in ["2022-13-01", "2022-02-30", "not-a-date", "20220101", ""] {
            assert!(
                matches!(
                    Date::parse(input),
                    Err(ValidationError::MalformedDate { .. })
                ),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn day_counts_order_like_calendar_dates() {
        let early = Date::parse("2021-12-30").unwrap();
        let late = Date::parse("2022-01-02").unwrap();

        assert!(early < late);
        assert_eq!(late.as_days() - early.as_days(), 3);
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(Date::parse("1970-01-01").unwrap(), Date::EPOCH);
        assert_eq!(Date::EPOCH.as_days(), 0);
    }
}
