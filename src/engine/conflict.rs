use ulid::Ulid;

use crate::limits::{MAX_HOUR, MIN_HOUR};
use crate::model::{DayState, Hours, Room, TimeRange};

use super::SchedulerError;

/// Validate raw submitted times into a well-formed half-open range.
pub(crate) fn validate_times(start: Hours, finish: Hours) -> Result<TimeRange, SchedulerError> {
    if !start.is_finite() || !finish.is_finite() {
        return Err(SchedulerError::InvalidTimes("times must be numeric"));
    }
    if start >= finish {
        return Err(SchedulerError::InvalidTimes("start must be before finish"));
    }
    if start < MIN_HOUR || finish > MAX_HOUR {
        return Err(SchedulerError::InvalidTimes("outside bookable hours"));
    }
    Ok(TimeRange::new(start, finish))
}

/// First existing booking on this room/date whose half-open interval
/// intersects `range`. One general predicate covers partial overlap,
/// containment, and envelopment; touching intervals do not conflict, so
/// back-to-back bookings are legal.
pub fn find_conflict(day: &DayState, room: Room, range: &TimeRange) -> Option<Ulid> {
    first_conflict(day, room, range, None)
}

/// True while the owner's booking count for this date, across all rooms,
/// is strictly under `cap`.
pub fn under_daily_quota(day: &DayState, owner: &str, cap: u32) -> bool {
    owner_booking_count(day, owner, None) < cap
}

/// Booking validation: quota first, so its message wins when both rules
/// would reject. `exclude` skips one booking id — a booking being moved
/// never blocks itself.
pub(crate) fn check_booking(
    day: &DayState,
    room: Room,
    owner: &str,
    range: &TimeRange,
    cap: u32,
    exclude: Option<Ulid>,
) -> Result<(), SchedulerError> {
    if owner_booking_count(day, owner, exclude) >= cap {
        return Err(SchedulerError::QuotaExceeded(cap));
    }
    if let Some(id) = first_conflict(day, room, range, exclude) {
        return Err(SchedulerError::Conflict(id));
    }
    Ok(())
}

fn owner_booking_count(day: &DayState, owner: &str, exclude: Option<Ulid>) -> u32 {
    day.bookings
        .iter()
        .filter(|b| b.owner == owner && Some(b.id) != exclude)
        .count() as u32
}

fn first_conflict(
    day: &DayState,
    room: Room,
    range: &TimeRange,
    exclude: Option<Ulid>,
) -> Option<Ulid> {
    day.overlapping(range)
        .find(|b| b.room == room && Some(b.id) != exclude)
        .map(|b| b.id)
}
