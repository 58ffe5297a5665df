mod conflict;
mod error;
mod mutations;
mod occupancy;
mod queries;
mod slots;
mod store;
mod week;

pub use conflict::{find_conflict, under_daily_quota};
pub use error::SchedulerError;
pub use occupancy::{day_occupancy, day_room_load};
pub use slots::{Slots, expand_slots};
pub use store::{BookingFilter, Cmp};
pub use week::{booking_date_window, week_window};

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use parking_lot::RwLock;
use ulid::Ulid;

use crate::limits;
use crate::model::{DayState, Hours, Room};

pub type SharedDayState = Arc<RwLock<DayState>>;

/// Map the wire form of a room (`"1A"`, ...) to the enum, for entry points
/// working with request strings.
pub fn parse_room(s: &str) -> Result<Room, SchedulerError> {
    Room::parse(s).ok_or_else(|| SchedulerError::UnknownRoom(s.to_string()))
}

/// Runtime knobs for the scheduler, defaulting to the fixed deployment
/// constants in `limits`.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Max bookings one user may hold per date, across all rooms.
    pub daily_quota: u32,
    /// Display slot step in hours.
    pub slot_step: Hours,
    /// Re-run quota and overlap validation when a booking is moved.
    /// Switching this off writes the new values as-is.
    pub revalidate_on_update: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            daily_quota: limits::DAILY_BOOKING_QUOTA,
            slot_step: limits::SLOT_STEP_HOURS,
            revalidate_on_update: true,
        }
    }
}

/// Booking table sharded by calendar date.
///
/// Quota (owner x date) and overlap (room x date) both live inside one date,
/// so a single day write lock covers an entire validate-then-insert. That is
/// the atomicity contract backing `reserve`: racing requests for the same
/// slot serialize on the shard lock and exactly one wins.
pub struct Scheduler {
    days: DashMap<NaiveDate, SharedDayState>,
    /// Reverse lookup: booking id → date shard.
    index: DashMap<Ulid, NaiveDate>,
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            days: DashMap::new(),
            index: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn day(&self, date: NaiveDate) -> Option<SharedDayState> {
        self.days.get(&date).map(|e| e.value().clone())
    }

    pub(super) fn day_or_create(&self, date: NaiveDate) -> SharedDayState {
        self.days
            .entry(date)
            .or_insert_with(|| Arc::new(RwLock::new(DayState::new(date))))
            .clone()
    }

    /// Lookup booking id → date shard.
    pub(super) fn resolve_booking(
        &self,
        id: Ulid,
    ) -> Result<(NaiveDate, SharedDayState), SchedulerError> {
        let date = self
            .index
            .get(&id)
            .map(|e| *e.value())
            .ok_or(SchedulerError::NotFound(id))?;
        let day = self.day(date).ok_or(SchedulerError::NotFound(id))?;
        Ok((date, day))
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
