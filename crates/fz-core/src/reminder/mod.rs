//! Reminder trigger arithmetic.
//!
//! A reminder fires on a local calendar day at a fixed time of day. Day
//! offsets count from local midnight of "now", so a reminder set at 23:50
//! for one day later fires the next morning, not 24 hours later.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::container::DAY_MS;
use crate::error::ValidationError;

/// Wall-clock time a reminder fires at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub const DEFAULT: TimeOfDay = TimeOfDay { hour: 8, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::InvalidTimeOfDay { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM` (24-hour clock).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let unparsable = || ValidationError::UnparsableTimeOfDay(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(unparsable)?;
        let hour = h.trim().parse::<u32>().map_err(|_| unparsable())?;
        let minute = m.trim().parse::<u32>().map_err(|_| unparsable())?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    fn naive(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// How the user asked for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderRequest {
    /// `days` calendar days after today.
    InDays { days: i32, time: TimeOfDay },
    /// On an explicit local date.
    On { date: NaiveDate, time: TimeOfDay },
}

/// A request pinned to an absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedReminder {
    pub trigger_at_ms: i64,
    /// Whole days between today and the trigger day; stored on the row.
    pub reminder_days: i32,
}

impl ReminderRequest {
    pub fn in_days(days: i32) -> Self {
        ReminderRequest::InDays {
            days,
            time: TimeOfDay::DEFAULT,
        }
    }

    pub fn resolve(
        &self,
        now_ms: i64,
        offset: FixedOffset,
    ) -> Result<ResolvedReminder, ValidationError> {
        match *self {
            ReminderRequest::InDays { days, time } => Ok(ResolvedReminder {
                trigger_at_ms: trigger_at_ms(now_ms, offset, days, time)?,
                reminder_days: days,
            }),
            ReminderRequest::On { date, time } => {
                let days = days_until(now_ms, offset, date)?;
                let days = i32::try_from(days)
                    .map_err(|_| ValidationError::TimestampOutOfRange(now_ms))?;
                Ok(ResolvedReminder {
                    trigger_at_ms: trigger_at_ms(now_ms, offset, days, time)?,
                    reminder_days: days,
                })
            }
        }
    }
}

/// Local calendar date of `now_ms` in `offset`.
pub fn local_date(now_ms: i64, offset: FixedOffset) -> Result<NaiveDate, ValidationError> {
    DateTime::from_timestamp_millis(now_ms)
        .map(|utc| utc.with_timezone(&offset).date_naive())
        .ok_or(ValidationError::TimestampOutOfRange(now_ms))
}

/// Local midnight of `now_ms`, plus `days` calendar days, at `time`.
pub fn trigger_at_ms(
    now_ms: i64,
    offset: FixedOffset,
    days: i32,
    time: TimeOfDay,
) -> Result<i64, ValidationError> {
    if days < 0 {
        return Err(ValidationError::NegativeDays(days as i64));
    }

    let target_day = local_date(now_ms, offset)?
        .checked_add_days(Days::new(days as u64))
        .ok_or(ValidationError::TimestampOutOfRange(now_ms))?;

    target_day
        .and_time(time.naive())
        .and_local_timezone(offset)
        .single()
        .map(|dt| dt.timestamp_millis())
        .ok_or(ValidationError::TimestampOutOfRange(now_ms))
}

/// Whole days from today to `date`. Dates in the past are rejected.
pub fn days_until(now_ms: i64, offset: FixedOffset, date: NaiveDate) -> Result<i64, ValidationError> {
    let days = (date - local_date(now_ms, offset)?).num_days();
    if days < 0 {
        return Err(ValidationError::NegativeDays(days));
    }
    Ok(days)
}

/// Snoozing pushes a reminder a fixed number of 24h periods past now.
pub fn snooze_at_ms(now_ms: i64, days: i32) -> i64 {
    now_ms + days.max(0) as i64 * DAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn ms(offset: FixedOffset, s: &str) -> i64 {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
        offset.from_local_datetime(&naive).single().unwrap().timestamp_millis()
    }

    #[test]
    fn time_of_day_parses_and_validates() {
        assert_eq!(TimeOfDay::parse("07:30").unwrap(), TimeOfDay::new(7, 30).unwrap());
        assert_eq!(TimeOfDay::parse(" 8:5 ").unwrap().to_string(), "08:05");
        assert_eq!(
            TimeOfDay::parse("24:00"),
            Err(ValidationError::InvalidTimeOfDay { hour: 24, minute: 0 })
        );
        assert!(matches!(
            TimeOfDay::parse("noon"),
            Err(ValidationError::UnparsableTimeOfDay(_))
        ));
    }

    #[test]
    fn trigger_is_normalized_to_time_of_day() {
        let now = ms(utc(), "2024-03-10 23:50");
        let at = trigger_at_ms(now, utc(), 1, TimeOfDay::DEFAULT).unwrap();
        assert_eq!(at, ms(utc(), "2024-03-11 08:00"));

        let same_day = trigger_at_ms(now, utc(), 0, TimeOfDay::new(6, 15).unwrap()).unwrap();
        assert_eq!(same_day, ms(utc(), "2024-03-10 06:15"));
    }

    #[test]
    fn trigger_uses_local_calendar_day() {
        let plus9 = FixedOffset::east_opt(9 * 3600).unwrap();
        // 20:00 UTC on the 10th is already the 11th in UTC+9.
        let now = ms(utc(), "2024-03-10 20:00");
        let at = trigger_at_ms(now, plus9, 2, TimeOfDay::DEFAULT).unwrap();
        assert_eq!(at, ms(plus9, "2024-03-13 08:00"));
    }

    #[test]
    fn explicit_date_records_day_difference() {
        let now = ms(utc(), "2024-03-10 12:00");
        let request = ReminderRequest::On {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            time: TimeOfDay::new(18, 0).unwrap(),
        };
        let resolved = request.resolve(now, utc()).unwrap();
        assert_eq!(resolved.reminder_days, 5);
        assert_eq!(resolved.trigger_at_ms, ms(utc(), "2024-03-15 18:00"));
    }

    #[test]
    fn past_dates_and_negative_offsets_are_rejected() {
        let now = ms(utc(), "2024-03-10 12:00");
        let past = ReminderRequest::On {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            time: TimeOfDay::DEFAULT,
        };
        assert_eq!(past.resolve(now, utc()), Err(ValidationError::NegativeDays(-1)));
        assert_eq!(
            ReminderRequest::in_days(-3).resolve(now, utc()),
            Err(ValidationError::NegativeDays(-3))
        );
    }

    #[test]
    fn snooze_adds_whole_days() {
        assert_eq!(snooze_at_ms(1_000, 7), 1_000 + 7 * DAY_MS);
    }
}
