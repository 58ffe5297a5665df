use chrono::{Datelike, Duration, NaiveDate};

use crate::limits::MAX_ADVANCE_DAYS;
use crate::model::WeekWindow;

/// Compute the Monday-anchored week the calendar view should display.
///
/// On a weekday the window starts at this week's Monday. On a weekend it
/// jumps forward to next Monday, and `weekday_mark` carries the jump so the
/// caller can mark the skipped days.
pub fn week_window(today: NaiveDate) -> WeekWindow {
    let dow = i64::from(today.weekday().num_days_from_monday());
    if dow < 5 {
        WeekWindow {
            start_day: today - Duration::days(dow),
            start_day_offset: -dow,
            weekday_mark: 0,
            date_diff: 4 - dow,
        }
    } else {
        let shift = 7 - dow;
        WeekWindow {
            start_day: today + Duration::days(shift),
            start_day_offset: shift,
            weekday_mark: shift,
            date_diff: 11 - dow,
        }
    }
}

/// Inclusive `[min, max]` date bounds for the booking date picker.
pub fn booking_date_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(MAX_ADVANCE_DAYS))
}
