use crate::engine::SchedulerError;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: bookings accepted.
pub const RESERVATIONS_TOTAL: &str = "studyroom_reservations_total";

/// Counter: booking attempts rejected. Labels: reason.
pub const RESERVATIONS_REJECTED_TOTAL: &str = "studyroom_reservations_rejected_total";

/// Counter: bookings cancelled by their owner.
pub const CANCELLATIONS_TOTAL: &str = "studyroom_cancellations_total";

/// Counter: bookings moved to a new room/date/time.
pub const UPDATES_TOTAL: &str = "studyroom_updates_total";

/// Counter: read-only availability pre-checks.
pub const AVAILABILITY_CHECKS_TOTAL: &str = "studyroom_availability_checks_total";

/// Map a rejection to a short label for metrics.
pub fn rejection_label(err: &SchedulerError) -> &'static str {
    match err {
        SchedulerError::InvalidTimes(_) => "invalid_times",
        SchedulerError::QuotaExceeded(_) => "quota_exceeded",
        SchedulerError::Conflict(_) => "conflict",
        SchedulerError::NotFound(_) => "not_found",
        SchedulerError::NotOwner(_) => "not_owner",
        SchedulerError::UnknownRoom(_) => "unknown_room",
    }
}
