use chrono::NaiveDate;
use tracing::{debug, info};
use ulid::Ulid;

use crate::model::{Booking, Hours, Room};
use crate::observability;

use super::conflict::{check_booking, validate_times};
use super::{Scheduler, SchedulerError};

impl Scheduler {
    /// Availability pre-check: would this booking be accepted right now?
    ///
    /// Read-only, so the answer can go stale before a reserve lands. Callers
    /// that need the guarantee use `reserve`, which re-checks under the
    /// shard's write lock.
    pub fn check(
        &self,
        owner: &str,
        room: Room,
        date: NaiveDate,
        start: Hours,
        finish: Hours,
    ) -> Result<(), SchedulerError> {
        metrics::counter!(observability::AVAILABILITY_CHECKS_TOTAL).increment(1);
        let range = validate_times(start, finish)?;
        let Some(day) = self.day(date) else {
            return Ok(());
        };
        let guard = day.read();
        check_booking(&guard, room, owner, &range, self.config.daily_quota, None)
    }

    /// Validate and insert atomically. Quota-then-overlap runs under the
    /// date shard's write lock, so two racing reserves for the same slot
    /// serialize and exactly one wins.
    pub fn reserve(
        &self,
        owner: &str,
        room: Room,
        date: NaiveDate,
        start: Hours,
        finish: Hours,
    ) -> Result<Ulid, SchedulerError> {
        let range = match validate_times(start, finish) {
            Ok(range) => range,
            Err(e) => {
                note_rejection(&e);
                return Err(e);
            }
        };
        let day = self.day_or_create(date);
        let mut guard = day.write();
        if let Err(e) = check_booking(&guard, room, owner, &range, self.config.daily_quota, None) {
            note_rejection(&e);
            return Err(e);
        }
        let id = Ulid::new();
        guard.insert_booking(Booking {
            id,
            owner: owner.to_string(),
            room,
            date,
            times: range,
        });
        self.index.insert(id, date);
        drop(guard);

        metrics::counter!(observability::RESERVATIONS_TOTAL).increment(1);
        info!(%id, room = room.as_str(), %date, start, finish, "booking reserved");
        Ok(id)
    }

    /// Remove a booking. Only its owner may cancel.
    pub fn cancel(&self, id: Ulid, owner: &str) -> Result<(), SchedulerError> {
        let (_, day) = self.resolve_booking(id)?;
        let mut guard = day.write();
        // Re-check under the lock: the booking may have moved or gone.
        let Some(existing) = guard.booking(id) else {
            return Err(SchedulerError::NotFound(id));
        };
        if existing.owner != owner {
            return Err(SchedulerError::NotOwner(id));
        }
        guard.remove_booking(id);
        drop(guard);
        self.index.remove(&id);

        metrics::counter!(observability::CANCELLATIONS_TOTAL).increment(1);
        info!(%id, "booking cancelled");
        Ok(())
    }

    /// Move a booking to a new room/date/time.
    ///
    /// With `revalidate_on_update` set the move passes quota and overlap
    /// checks first, and the booking never blocks itself; with it unset the
    /// new values are written unchecked.
    pub fn update(
        &self,
        id: Ulid,
        room: Room,
        date: NaiveDate,
        start: Hours,
        finish: Hours,
    ) -> Result<(), SchedulerError> {
        let range = validate_times(start, finish)?;
        let (old_date, old_day) = self.resolve_booking(id)?;
        let new_day = self.day_or_create(date);

        // Lock shards in calendar order so concurrent cross-date moves
        // cannot deadlock.
        let (mut old_guard, mut new_guard) = if old_date == date {
            (old_day.write(), None)
        } else if old_date < date {
            let old = old_day.write();
            let new = new_day.write();
            (old, Some(new))
        } else {
            let new = new_day.write();
            let old = old_day.write();
            (old, Some(new))
        };

        let Some(existing) = old_guard.booking(id).cloned() else {
            return Err(SchedulerError::NotFound(id));
        };

        if self.config.revalidate_on_update {
            let target = new_guard.as_deref().unwrap_or(&old_guard);
            if let Err(e) = check_booking(
                target,
                room,
                &existing.owner,
                &range,
                self.config.daily_quota,
                Some(id),
            ) {
                note_rejection(&e);
                return Err(e);
            }
        }

        old_guard.remove_booking(id);
        let moved = Booking {
            id,
            owner: existing.owner,
            room,
            date,
            times: range,
        };
        match new_guard.as_mut() {
            Some(guard) => guard.insert_booking(moved),
            None => old_guard.insert_booking(moved),
        }
        if old_date != date {
            self.index.insert(id, date);
        }

        metrics::counter!(observability::UPDATES_TOTAL).increment(1);
        info!(%id, room = room.as_str(), %date, start, finish, "booking updated");
        Ok(())
    }
}

fn note_rejection(err: &SchedulerError) {
    metrics::counter!(
        observability::RESERVATIONS_REJECTED_TOTAL,
        "reason" => observability::rejection_label(err)
    )
    .increment(1);
    debug!(%err, "booking rejected");
}
