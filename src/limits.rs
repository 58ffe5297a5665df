//! Fixed deployment constants for the scheduling core.

use crate::model::Hours;

/// Maximum bookings a single user may hold on one date, across all rooms.
pub const DAILY_BOOKING_QUOTA: u32 = 2;

/// Discretization step for display slots, in hours (30 minutes).
pub const SLOT_STEP_HOURS: Hours = 0.5;

/// Earliest bookable hour-of-day.
pub const MIN_HOUR: Hours = 0.0;

/// Latest bookable hour-of-day (exclusive interval end bound).
pub const MAX_HOUR: Hours = 24.0;

/// How far ahead the date picker lets a booking be placed, in days.
pub const MAX_ADVANCE_DAYS: i64 = 14;
