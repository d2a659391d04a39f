// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar windows for relative date comparisons.
//!
//! Every window is computed from an explicit reference instant ("now") in
//! that instant's own offset. Weeks start on Monday.
//!
//! | Comparison            | Window                                                 |
//! |-----------------------|--------------------------------------------------------|
//! | `date-{this,next,last}-year`  | Jan 1 00:00 through Dec 31 23:59:59.999999999  |
//! | `date-{this,next,last}-month` | 1st 00:00 through the instant before next 1st  |
//! | `date-{this,next,last}-week`  | Monday 00:00 through the instant before next Monday |
//! | `date-eq-day`         | the value's day-of-month in now's year and month       |
//! | `date-next-n-days`    | `[today, today + N + 1 days)`                          |
//! | `date-past-n-days`    | `[today - N days, today + 1 day)`                      |

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc,
};

use crate::filter::ComparisonKind;
use crate::value::{coerce_nonneg_int, Value};

/// A `[start, end]` instant window.
///
/// Calendar buckets include `end`; N-day windows exclude it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub end_exclusive: bool,
}

impl DateWindow {
    fn inclusive(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        DateWindow {
            start,
            end,
            end_exclusive: false,
        }
    }

    fn exclusive(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        DateWindow {
            start,
            end,
            end_exclusive: true,
        }
    }

    /// Returns true if `instant` falls inside the window.
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        let before_end = if self.end_exclusive {
            instant < self.end
        } else {
            instant <= self.end
        };
        instant >= self.start && before_end
    }
}

/// Resolves a relative date comparison to its window.
///
/// Returns `None` for comparisons that are not relative date kinds, or when
/// a calendar bucket around `now` falls outside the representable range.
/// Values never fail: `date-eq-day` falls back to day 1 and the N-day kinds
/// use the numeric coercion rule (so N defaults to 0). N-day windows that
/// run past the calendar range are clamped to its first or last instant.
pub fn resolve(
    kind: ComparisonKind,
    value: &Value,
    now: DateTime<FixedOffset>,
) -> Option<DateWindow> {
    let today = now.date_naive();
    let offset = *now.offset();

    match kind {
        ComparisonKind::DateThisYear => year_window(today.year(), offset),
        ComparisonKind::DateNextYear => year_window(today.year() + 1, offset),
        ComparisonKind::DateLastYear => year_window(today.year() - 1, offset),
        ComparisonKind::DateThisMonth => month_window(first_of_month(today)?, offset),
        ComparisonKind::DateNextMonth => {
            month_window(first_of_month(today)?.checked_add_months(Months::new(1))?, offset)
        }
        ComparisonKind::DateLastMonth => {
            month_window(first_of_month(today)?.checked_sub_months(Months::new(1))?, offset)
        }
        ComparisonKind::DateThisWeek => week_window(today, offset),
        ComparisonKind::DateNextWeek => {
            week_window(today.checked_add_signed(Duration::days(7))?, offset)
        }
        ComparisonKind::DateLastWeek => {
            week_window(today.checked_sub_signed(Duration::days(7))?, offset)
        }
        ComparisonKind::DateEqDay => {
            let day = parse_instant(value).map(|instant| instant.day()).unwrap_or(1);
            day_window(day, now)
        }
        ComparisonKind::DateNextNDays => {
            let n = coerce_nonneg_int(value);
            let end = add_days_saturating(today, n.saturating_add(1));
            Some(DateWindow::exclusive(
                midnight_saturating(today, offset),
                midnight_saturating(end, offset),
            ))
        }
        ComparisonKind::DatePastNDays => {
            let n = coerce_nonneg_int(value);
            let start = sub_days_saturating(today, n);
            let end = add_days_saturating(today, 1);
            Some(DateWindow::exclusive(
                midnight_saturating(start, offset),
                midnight_saturating(end, offset),
            ))
        }
        _ => None,
    }
}

/// The whole of day `day` of now's current year and month.
///
/// Only the day-of-month is taken from the caller; year and month always
/// come from `now`. Days past the end of the month roll into the next one.
pub fn day_window(day: u32, now: DateTime<FixedOffset>) -> Option<DateWindow> {
    let offset = *now.offset();
    let first = first_of_month(now.date_naive())?;
    let date = first.checked_add_signed(Duration::days(i64::from(day.max(1)) - 1))?;
    let next = date.succ_opt()?;
    Some(DateWindow::inclusive(
        midnight(date, offset)?,
        just_before(midnight(next, offset)?)?,
    ))
}

/// Parses a value as an RFC3339 timestamp.
pub fn parse_instant(value: &Value) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.to_wire_string().trim()).ok()
}

fn year_window(year: i32, offset: FixedOffset) -> Option<DateWindow> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let next = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
    Some(DateWindow::inclusive(
        midnight(start, offset)?,
        just_before(midnight(next, offset)?)?,
    ))
}

fn month_window(first: NaiveDate, offset: FixedOffset) -> Option<DateWindow> {
    let next = first.checked_add_months(Months::new(1))?;
    Some(DateWindow::inclusive(
        midnight(first, offset)?,
        just_before(midnight(next, offset)?)?,
    ))
}

fn week_window(anchor: NaiveDate, offset: FixedOffset) -> Option<DateWindow> {
    let days_since_monday = i64::from(anchor.weekday().num_days_from_monday());
    let monday = anchor.checked_sub_signed(Duration::days(days_since_monday))?;
    let next_monday = monday.checked_add_signed(Duration::days(7))?;
    Some(DateWindow::inclusive(
        midnight(monday, offset)?,
        just_before(midnight(next_monday, offset)?)?,
    ))
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// 00:00:00 local time on `date` in the given offset, or `None` when that
/// instant is outside the representable range.
fn midnight(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let local = NaiveDateTime::new(date, NaiveTime::MIN);
    let utc = local.checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
    Some(DateTime::from_naive_utc_and_offset(utc, offset))
}

/// Like [`midnight`], clamped to the first or last representable instant.
fn midnight_saturating(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    midnight(date, offset).unwrap_or_else(|| {
        let bound = if date.year() < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        bound.with_timezone(&offset)
    })
}

fn add_days_saturating(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(NaiveDate::MAX)
}

fn sub_days_saturating(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_sub_signed(delta))
        .unwrap_or(NaiveDate::MIN)
}

fn just_before(instant: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    instant.checked_sub_signed(Duration::nanoseconds(1))
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
